//! `GET /pacientes/{id}`: a single patient.

use super::MESSAGES;
use crate::api_error::ApiError;
use crate::services::run_blocking;
use crate::state::ClinicState;
use actix_web::{web, HttpResponse};

/// # Returns
/// - `200 OK` with the `Paciente`.
/// - `404 Not Found` when no patient has this id.
pub async fn process(
    state: web::Data<ClinicState>,
    id: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let service = state.pacientes.clone();
    let id = id.into_inner();
    match run_blocking(move || service.find_one(&id))
        .await
        .map_err(|e| MESSAGES.classify(e))?
    {
        Some(paciente) => Ok(HttpResponse::Ok().json(paciente)),
        None => Err(ApiError::NotFound(MESSAGES.not_found.to_string())),
    }
}
