//! # Doctors (`/medicos`)
//!
//! ## Sub-modules:
//! - `service`: `MedicoService`, the SQLite operations.
//! - `create`, `list`, `get`, `update`, `delete`: one handler per route.

mod create;
mod delete;
mod get;
mod list;
pub mod service;
mod update;

use crate::api_error::{ForeignKeyPolicy, ResourceMessages};
use actix_web::web::{delete, get, post, put, scope};
use actix_web::Scope;

const API_PATH: &str = "/medicos";

pub(crate) const MESSAGES: ResourceMessages = ResourceMessages {
    not_found: "Médico não encontrado.",
    conflict: "Conflito: O email ou CRM fornecido já está em uso.",
    foreign_key: ForeignKeyPolicy::StillReferenced(
        "Não é possível excluir: o médico possui consultas vinculadas.",
    ),
};

/// Configures and returns the Actix `Scope` for doctor routes.
///
/// # Registered Routes:
///
/// *   **`GET /medicos`**: every doctor, `200`.
/// *   **`POST /medicos`**: validates a `CreateMedico`, `201` with the stored
///     record, `400` on field errors, `409` when email or CRM is taken.
/// *   **`GET /medicos/{id}`**: `200` or `404`.
/// *   **`PUT /medicos/{id}`**: partial update, `200`, `400`, `404` or `409`.
/// *   **`DELETE /medicos/{id}`**: `204`, `404`, or `409` while appointments
///     still reference the doctor.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(list::process))
        .route("", post().to(create::process))
        .route("/{id}", get().to(get::process))
        .route("/{id}", put().to(update::process))
        .route("/{id}", delete().to(delete::process))
}
