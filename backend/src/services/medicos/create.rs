use super::MESSAGES;
use crate::api_error::{decode_payload, ApiError};
use crate::services::run_blocking;
use crate::state::ClinicState;
use actix_web::{web, HttpResponse};
use common::requests::CreateMedico;
use serde_json::Value;

/// Stores a new doctor: `201` with the record, `400` on field errors, `409`
/// when the email or CRM belongs to another doctor.
pub async fn process(
    state: web::Data<ClinicState>,
    body: web::Json<Value>,
) -> Result<HttpResponse, ApiError> {
    let new = decode_payload::<CreateMedico>(body.into_inner())?
        .validated()
        .map_err(ApiError::Validation)?;
    let service = state.medicos.clone();
    let medico = run_blocking(move || service.create(new))
        .await
        .map_err(|e| MESSAGES.classify(e))?;
    Ok(HttpResponse::Created().json(medico))
}
