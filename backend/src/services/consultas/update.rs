//! `PUT /consultas/{id}`: partial update of an appointment.
//!
//! Only the fields present in the body are checked and written; absent
//! fields keep their stored value. The row is re-read after the write so
//! the response carries the full appointment.

use super::MESSAGES;
use crate::api_error::{decode_payload, ApiError};
use crate::services::run_blocking;
use crate::state::ClinicState;
use actix_web::{web, HttpResponse};
use common::requests::UpdateConsulta;
use serde_json::Value;

/// # Returns
/// - `200 OK` with the updated `Consulta`.
/// - `400 Bad Request` with field errors for a wrong-typed or invalid field.
/// - `404 Not Found` when the appointment, or the doctor or patient it
///   now points at, does not exist.
pub async fn process(
    state: web::Data<ClinicState>,
    id: web::Path<String>,
    body: web::Json<Value>,
) -> Result<HttpResponse, ApiError> {
    let changes = decode_payload::<UpdateConsulta>(body.into_inner())?
        .validated()
        .map_err(ApiError::Validation)?;
    let service = state.consultas.clone();
    let id = id.into_inner();
    let consulta = run_blocking(move || service.update(&id, changes))
        .await
        .map_err(|e| MESSAGES.classify(e))?;
    Ok(HttpResponse::Ok().json(consulta))
}
