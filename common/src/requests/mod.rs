//! Request payloads for the create and update endpoints.
//!
//! Every field is optional at the wire level so that a missing value is
//! reported as a field error instead of a JSON decoding failure. Create
//! payloads mark their fields `required`; update payloads apply the same rules
//! only to the fields that are present.

pub mod consulta;
pub mod medico;
pub mod paciente;

pub use consulta::{CreateConsulta, NewConsulta, UpdateConsulta};
pub use medico::{CreateMedico, NewMedico, UpdateMedico};
pub use paciente::{CreatePaciente, NewPaciente, UpdatePaciente};
