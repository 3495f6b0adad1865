pub mod consulta;
pub mod error;
pub mod medico;
pub mod paciente;
