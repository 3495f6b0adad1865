//! `GET /medicos/{id}`: a single doctor.

use super::MESSAGES;
use crate::api_error::ApiError;
use crate::services::run_blocking;
use crate::state::ClinicState;
use actix_web::{web, HttpResponse};

/// # Returns
/// - `200 OK` with the `Medico`.
/// - `404 Not Found` when no doctor has this id.
pub async fn process(
    state: web::Data<ClinicState>,
    id: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let service = state.medicos.clone();
    let id = id.into_inner();
    match run_blocking(move || service.find_one(&id))
        .await
        .map_err(|e| MESSAGES.classify(e))?
    {
        Some(medico) => Ok(HttpResponse::Ok().json(medico)),
        None => Err(ApiError::NotFound(MESSAGES.not_found.to_string())),
    }
}
