use super::MESSAGES;
use crate::api_error::ApiError;
use crate::services::run_blocking;
use crate::state::ClinicState;
use actix_web::{web, HttpResponse};

/// # Returns
/// - `204 No Content` once the row is gone.
/// - `404 Not Found` when no appointment has this id.
pub async fn process(
    state: web::Data<ClinicState>,
    id: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let service = state.consultas.clone();
    let id = id.into_inner();
    run_blocking(move || service.delete(&id))
        .await
        .map_err(|e| MESSAGES.classify(e))?;
    Ok(HttpResponse::NoContent().finish())
}
