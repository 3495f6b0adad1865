use crate::model::medico::Medico;
use crate::model::paciente::Paciente;
use serde::{Deserialize, Serialize};

/// An appointment row, as returned by create and update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Consulta {
    pub id: String,
    /// RFC 3339 date-time in UTC with millisecond precision.
    pub data: String,
    pub medico_id: String,
    pub paciente_id: String,
}

/// An appointment with its doctor and patient embedded, as returned by the
/// list and get-by-id endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsultaWithRelations {
    pub id: String,
    pub data: String,
    pub medico_id: String,
    pub paciente_id: String,
    pub medico: Medico,
    pub paciente: Paciente,
}

impl ConsultaWithRelations {
    /// Drops the embedded relations.
    pub fn to_consulta(&self) -> Consulta {
        Consulta {
            id: self.id.clone(),
            data: self.data.clone(),
            medico_id: self.medico_id.clone(),
            paciente_id: self.paciente_id.clone(),
        }
    }
}
