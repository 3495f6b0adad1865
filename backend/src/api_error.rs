//! Translation of validation and persistence failures into HTTP responses.

use crate::db::DbError;
use actix_web::error::JsonPayloadError;
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, ResponseError};
use common::model::error::ErrorBody;
use common::validation::FieldErrors;
use log::error;
use serde::de::DeserializeOwned;
use serde_json::Value;
use serde_path_to_error::Segment;
use thiserror::Error;

const INTERNAL_MESSAGE: &str = "Erro interno do servidor";
const WRONG_TYPE_MESSAGE: &str = "Tipo de valor inválido.";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Erro de validação")]
    Validation(FieldErrors),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    /// The detail is logged and never sent to the client.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            ApiError::Validation(errors) => ErrorBody::validation(errors.clone()),
            ApiError::NotFound(message) | ApiError::Conflict(message) => {
                ErrorBody::new(message.clone())
            }
            ApiError::Internal(detail) => {
                error!("{}", detail);
                ErrorBody::new(INTERNAL_MESSAGE)
            }
        };
        HttpResponse::build(self.status_code()).json(body)
    }
}

/// What a foreign-key violation means for a given resource.
pub enum ForeignKeyPolicy {
    /// The row being written points at a medico/paciente that does not exist (404).
    MissingReference(&'static str),
    /// The row being deleted is still referenced by an appointment (409).
    StillReferenced(&'static str),
}

/// Per-resource wording used when classifying [`DbError`]s.
pub struct ResourceMessages {
    pub not_found: &'static str,
    pub conflict: &'static str,
    pub foreign_key: ForeignKeyPolicy,
}

impl ResourceMessages {
    pub fn classify(&self, err: DbError) -> ApiError {
        match err {
            DbError::NotFound => ApiError::NotFound(self.not_found.to_string()),
            DbError::UniqueViolation(_) => ApiError::Conflict(self.conflict.to_string()),
            DbError::ForeignKeyViolation(_) => match self.foreign_key {
                ForeignKeyPolicy::MissingReference(message) => {
                    ApiError::NotFound(message.to_string())
                }
                ForeignKeyPolicy::StillReferenced(message) => {
                    ApiError::Conflict(message.to_string())
                }
            },
            other => ApiError::Internal(other.to_string()),
        }
    }
}

/// Malformed or wrongly typed JSON bodies share the validation response shape.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let mut errors = FieldErrors::new();
    errors.insert("body".to_string(), vec![err.to_string()]);
    ApiError::Validation(errors).into()
}

/// Decodes a parsed JSON body into a request payload.
///
/// A value of the wrong type is reported under the top-level field it was
/// sent in (`crm`, `medicoId`, ...). Anything without a field, such as an
/// array sent as the body, is keyed `body`.
pub fn decode_payload<T: DeserializeOwned>(body: Value) -> Result<T, ApiError> {
    serde_path_to_error::deserialize(body).map_err(|err| {
        let field = match err.path().iter().next() {
            Some(Segment::Map { key }) => key.clone(),
            _ => "body".to_string(),
        };
        let mut errors = FieldErrors::new();
        errors.insert(field, vec![WRONG_TYPE_MESSAGE.to_string()]);
        ApiError::Validation(errors)
    })
}
