//! `PUT /medicos/{id}`: partial update of a doctor.
//!
//! Only the fields present in the body are checked and written; absent
//! fields keep their stored value. The row is re-read after the write so
//! the response carries the full doctor.

use super::MESSAGES;
use crate::api_error::{decode_payload, ApiError};
use crate::services::run_blocking;
use crate::state::ClinicState;
use actix_web::{web, HttpResponse};
use common::requests::UpdateMedico;
use serde_json::Value;

/// # Returns
/// - `200 OK` with the updated `Medico`.
/// - `400 Bad Request` with field errors for a wrong-typed or invalid field.
/// - `404 Not Found` when no doctor has this id.
/// - `409 Conflict` when the email or CRM belongs to another doctor.
pub async fn process(
    state: web::Data<ClinicState>,
    id: web::Path<String>,
    body: web::Json<Value>,
) -> Result<HttpResponse, ApiError> {
    let changes = decode_payload::<UpdateMedico>(body.into_inner())?
        .validated()
        .map_err(ApiError::Validation)?;
    let service = state.medicos.clone();
    let id = id.into_inner();
    let medico = run_blocking(move || service.update(&id, changes))
        .await
        .map_err(|e| MESSAGES.classify(e))?;
    Ok(HttpResponse::Ok().json(medico))
}
