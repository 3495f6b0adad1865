use crate::datetime::normalize_rfc3339;
use crate::validation::{
    validate_datetime, validate_medico_id, validate_paciente_id, validate_payload, FieldErrors,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body of `POST /consultas`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateConsulta {
    #[validate(
        required(message = "Data e hora inválidas."),
        custom = "validate_datetime"
    )]
    pub data: Option<String>,
    #[validate(
        required(message = "O médico é obrigatório."),
        custom = "validate_medico_id"
    )]
    pub medico_id: Option<String>,
    #[validate(
        required(message = "O paciente é obrigatório."),
        custom = "validate_paciente_id"
    )]
    pub paciente_id: Option<String>,
}

/// An appointment that passed validation; `data` is normalized to UTC.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewConsulta {
    pub data: String,
    pub medico_id: String,
    pub paciente_id: String,
}

impl CreateConsulta {
    pub fn validated(self) -> Result<NewConsulta, FieldErrors> {
        validate_payload(&self)?;
        Ok(NewConsulta {
            data: self.data.as_deref().map(normalize_rfc3339).unwrap_or_default(),
            medico_id: self.medico_id.unwrap_or_default(),
            paciente_id: self.paciente_id.unwrap_or_default(),
        })
    }
}

/// Body of `PUT /consultas/{id}`. Absent fields keep their stored value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateConsulta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom = "validate_datetime")]
    pub data: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom = "validate_medico_id")]
    pub medico_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom = "validate_paciente_id")]
    pub paciente_id: Option<String>,
}

impl UpdateConsulta {
    pub fn validated(self) -> Result<UpdateConsulta, FieldErrors> {
        validate_payload(&self)?;
        Ok(UpdateConsulta {
            data: self.data.as_deref().map(normalize_rfc3339),
            ..self
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_the_appointment_time_to_utc() {
        let payload = CreateConsulta {
            data: Some("2025-10-05T11:30:00-03:00".into()),
            medico_id: Some("m1".into()),
            paciente_id: Some("p1".into()),
        };
        let consulta = payload.validated().unwrap();
        assert_eq!(consulta.data, "2025-10-05T14:30:00.000Z");
    }

    #[test]
    fn missing_references_use_their_own_messages() {
        let payload: CreateConsulta = serde_json::from_value(serde_json::json!({
            "data": "2025-10-05T14:30:00.000Z"
        }))
        .unwrap();
        let errors = payload.validated().unwrap_err();
        assert_eq!(errors["medicoId"], vec!["O médico é obrigatório."]);
        assert_eq!(errors["pacienteId"], vec!["O paciente é obrigatório."]);
    }

    #[test]
    fn rejects_unparseable_dates_and_malformed_ids() {
        let payload = CreateConsulta {
            data: Some("05/10/2025 14:30".into()),
            medico_id: Some("has spaces".into()),
            paciente_id: Some("p1".into()),
        };
        let errors = payload.validated().unwrap_err();
        assert_eq!(errors["data"], vec!["Data e hora inválidas."]);
        assert_eq!(errors["medicoId"], vec!["Identificador de médico inválido."]);
        assert!(!errors.contains_key("pacienteId"));
    }

    #[test]
    fn update_normalizes_supplied_date_only() {
        let update = UpdateConsulta {
            data: Some("2025-10-06T10:00:00Z".into()),
            ..Default::default()
        }
        .validated()
        .unwrap();
        assert_eq!(update.data.as_deref(), Some("2025-10-06T10:00:00.000Z"));
        assert!(update.medico_id.is_none());
    }
}
