//! # REST resources
//!
//! Each sub-module owns one resource: its service object (the only code that
//! talks to SQLite) and one handler file per operation, wired together by a
//! `configure_routes` function built from `scope` + `route`.
//!
//! - `medicos`: `/medicos`
//! - `pacientes`: `/pacientes`
//! - `consultas`: `/consultas`, with medico and paciente embedded on read

pub mod consultas;
pub mod medicos;
pub mod pacientes;

#[cfg(test)]
pub(crate) mod test_support;

use crate::api_error::json_error_handler;
use crate::db::DbError;
use actix_web::{web, HttpResponse, Responder};

/// Registers every API route on the application.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(medicos::configure_routes())
        .service(pacientes::configure_routes())
        .service(consultas::configure_routes())
        .route("/health", web::get().to(health));
}

/// JSON extractor settings: body size limit and the 400 error shape.
pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(json_error_handler)
}

async fn health() -> impl Responder {
    HttpResponse::Ok().body("API is running!")
}

/// Runs a synchronous service call on actix's blocking thread pool.
pub(crate) async fn run_blocking<F, T>(f: F) -> Result<T, DbError>
where
    F: FnOnce() -> Result<T, DbError> + Send + 'static,
    T: Send + 'static,
{
    web::block(f)
        .await
        .map_err(|e| DbError::Blocking(e.to_string()))?
}
