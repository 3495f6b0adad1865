use serde::{Deserialize, Serialize};

/// A doctor as stored and returned by `/medicos`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Medico {
    pub id: String,
    pub nome: String,
    pub email: String,
    /// Regional medical council registration number.
    pub crm: String,
    pub especialidade: String,
}
