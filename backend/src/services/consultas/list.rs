use super::MESSAGES;
use crate::api_error::ApiError;
use crate::services::run_blocking;
use crate::state::ClinicState;
use actix_web::{web, HttpResponse};

/// Every appointment with doctor and patient embedded, earliest first.
pub async fn process(state: web::Data<ClinicState>) -> Result<HttpResponse, ApiError> {
    let service = state.consultas.clone();
    let consultas = run_blocking(move || service.find_all())
        .await
        .map_err(|e| MESSAGES.classify(e))?;
    Ok(HttpResponse::Ok().json(consultas))
}
