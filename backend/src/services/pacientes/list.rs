use super::MESSAGES;
use crate::api_error::ApiError;
use crate::services::run_blocking;
use crate::state::ClinicState;
use actix_web::{web, HttpResponse};

/// Every patient, `200 OK`.
pub async fn process(state: web::Data<ClinicState>) -> Result<HttpResponse, ApiError> {
    let service = state.pacientes.clone();
    let pacientes = run_blocking(move || service.find_all())
        .await
        .map_err(|e| MESSAGES.classify(e))?;
    Ok(HttpResponse::Ok().json(pacientes))
}
