use crate::validation::FieldErrors;
use serde::{Deserialize, Serialize};

/// JSON body of every non-2xx API response.
///
/// `errors` is present only for validation failures and maps each offending
/// field (camelCase, as on the wire) to its messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<FieldErrors>,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            errors: None,
        }
    }

    pub fn validation(errors: FieldErrors) -> Self {
        Self {
            message: "Erro de validação".to_string(),
            errors: Some(errors),
        }
    }
}
