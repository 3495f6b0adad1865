//! Pages of the application, one sub-module per resource plus the dashboard.

pub mod consultas;
pub mod dashboard;
pub mod medicos;
pub mod pacientes;
