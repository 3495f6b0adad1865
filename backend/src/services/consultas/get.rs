//! `GET /consultas/{id}`: a single appointment.

use super::MESSAGES;
use crate::api_error::ApiError;
use crate::services::run_blocking;
use crate::state::ClinicState;
use actix_web::{web, HttpResponse};

/// # Returns
/// - `200 OK` with the `ConsultaWithRelations` (doctor and patient embedded).
/// - `404 Not Found` when no appointment has this id.
pub async fn process(
    state: web::Data<ClinicState>,
    id: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let service = state.consultas.clone();
    let id = id.into_inner();
    match run_blocking(move || service.find_one(&id))
        .await
        .map_err(|e| MESSAGES.classify(e))?
    {
        Some(consulta) => Ok(HttpResponse::Ok().json(consulta)),
        None => Err(ApiError::NotFound(MESSAGES.not_found.to_string())),
    }
}
