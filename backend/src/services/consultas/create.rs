use super::MESSAGES;
use crate::api_error::{decode_payload, ApiError};
use crate::services::run_blocking;
use crate::state::ClinicState;
use actix_web::{web, HttpResponse};
use common::requests::CreateConsulta;
use serde_json::Value;

/// Stores a new appointment. `201` with the bare `Consulta`; `404` when the
/// doctor or patient does not exist.
pub async fn process(
    state: web::Data<ClinicState>,
    body: web::Json<Value>,
) -> Result<HttpResponse, ApiError> {
    let new = decode_payload::<CreateConsulta>(body.into_inner())?
        .validated()
        .map_err(ApiError::Validation)?;
    let service = state.consultas.clone();
    let consulta = run_blocking(move || service.create(new))
        .await
        .map_err(|e| MESSAGES.classify(e))?;
    Ok(HttpResponse::Created().json(consulta))
}
