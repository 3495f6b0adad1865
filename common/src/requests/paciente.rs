use crate::validation::{validate_birth_date, validate_email_address, validate_payload, FieldErrors};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body of `POST /pacientes`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaciente {
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
        required(message = "O CPF deve ter 11 caracteres."),
        length(equal = 11, message = "O CPF deve ter 11 caracteres.")
    )]
    pub cpf: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom = "validate_birth_date")]
    pub data_nascimento: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "O telefone não pode ser vazio."))]
    pub telefone: Option<String>,
}

/// A patient that passed validation and is ready to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPaciente {
    pub nome: String,
    pub email: String,
    pub cpf: String,
    pub data_nascimento: Option<String>,
    pub telefone: Option<String>,
}

impl CreatePaciente {
    pub fn validated(self) -> Result<NewPaciente, FieldErrors> {
        validate_payload(&self)?;
        Ok(NewPaciente {
            nome: self.nome.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            cpf: self.cpf.unwrap_or_default(),
            data_nascimento: self.data_nascimento,
            telefone: self.telefone,
        })
    }
}

/// Body of `PUT /pacientes/{id}`. Absent fields keep their stored value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePaciente {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 3, message = "O nome deve ter no mínimo 3 caracteres."))]
    pub nome: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom = "validate_email_address")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(equal = 11, message = "O CPF deve ter 11 caracteres."))]
    pub cpf: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom = "validate_birth_date")]
    pub data_nascimento: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "O telefone não pode ser vazio."))]
    pub telefone: Option<String>,
}

impl UpdatePaciente {
    pub fn validated(self) -> Result<UpdatePaciente, FieldErrors> {
        validate_payload(&self)?;
        Ok(self)
    }
}
