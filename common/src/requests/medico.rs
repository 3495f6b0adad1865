use crate::validation::{validate_email_address, validate_payload, FieldErrors};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body of `POST /medicos`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct CreateMedico {
    #[validate(
        required(message = "O nome deve ter no mínimo 3 caracteres."),
        length(min = 3, message = "O nome deve ter no mínimo 3 caracteres.")
    )]
    pub nome: Option<String>,
    #[validate(
        required(message = "Formato de email inválido."),
        custom = "validate_email_address"
    )]
    pub email: Option<String>,
    #[validate(
        required(message = "O CRM deve ter 6 caracteres."),
        length(equal = 6, message = "O CRM deve ter 6 caracteres.")
    )]
    pub crm: Option<String>,
    #[validate(
        required(message = "A especialidade é obrigatória."),
        length(min = 1, message = "A especialidade é obrigatória.")
    )]
    pub especialidade: Option<String>,
}

/// A doctor that passed validation and is ready to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMedico {
    pub nome: String,
    pub email: String,
    pub crm: String,
    pub especialidade: String,
}

impl CreateMedico {
    pub fn validated(self) -> Result<NewMedico, FieldErrors> {
        validate_payload(&self)?;
        Ok(NewMedico {
            nome: self.nome.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            crm: self.crm.unwrap_or_default(),
            especialidade: self.especialidade.unwrap_or_default(),
        })
    }
}

/// Body of `PUT /medicos/{id}`. Absent fields keep their stored value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct UpdateMedico {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 3, message = "O nome deve ter no mínimo 3 caracteres."))]
    pub nome: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom = "validate_email_address")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(equal = 6, message = "O CRM deve ter 6 caracteres."))]
    pub crm: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "A especialidade é obrigatória."))]
    pub especialidade: Option<String>,
}

impl UpdateMedico {
    pub fn validated(self) -> Result<UpdateMedico, FieldErrors> {
        validate_payload(&self)?;
        Ok(self)
    }
}
