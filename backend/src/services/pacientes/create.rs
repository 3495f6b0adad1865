use super::MESSAGES;
use crate::api_error::{decode_payload, ApiError};
use crate::services::run_blocking;
use crate::state::ClinicState;
use actix_web::{web, HttpResponse};
use common::requests::CreatePaciente;
use serde_json::Value;

/// Stores a new patient: `201` with the record, `400` on field errors, `409`
/// when the email or CPF belongs to another patient.
pub async fn process(
    state: web::Data<ClinicState>,
    body: web::Json<Value>,
) -> Result<HttpResponse, ApiError> {
    let new = decode_payload::<CreatePaciente>(body.into_inner())?
        .validated()
        .map_err(ApiError::Validation)?;
    let service = state.pacientes.clone();
    let paciente = run_blocking(move || service.create(new))
        .await
        .map_err(|e| MESSAGES.classify(e))?;
    Ok(HttpResponse::Created().json(paciente))
}
