//! # Patients (`/pacientes`)
//!
//! Same layout as `medicos`: `service` holds the SQLite operations and each
//! route has its own handler file.

mod create;
mod delete;
mod get;
mod list;
pub mod service;
mod update;

use crate::api_error::{ForeignKeyPolicy, ResourceMessages};
use actix_web::web::{delete, get, post, put, scope};
use actix_web::Scope;

const API_PATH: &str = "/pacientes";

pub(crate) const MESSAGES: ResourceMessages = ResourceMessages {
    not_found: "Paciente não encontrado.",
    conflict: "Conflito: O email ou CPF fornecido já está em uso.",
    foreign_key: ForeignKeyPolicy::StillReferenced(
        "Não é possível excluir: o paciente possui consultas vinculadas.",
    ),
};

/// Configures and returns the Actix `Scope` for patient routes.
///
/// Status codes mirror `/medicos`, with CPF taking the place of CRM in the
/// uniqueness check.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(list::process))
        .route("", post().to(create::process))
        .route("/{id}", get().to(get::process))
        .route("/{id}", put().to(update::process))
        .route("/{id}", delete().to(delete::process))
}

#[cfg(test)]
mod tests {
    use crate::services::test_support::{ana, bruno, state, test_app};
    use actix_web::http::StatusCode;
    use actix_web::test;
    use common::model::error::ErrorBody;
    use common::model::paciente::Paciente;
    use serde_json::json;

    #[actix_web::test]
    async fn short_name_is_a_validation_error() {
        let state = state();
        let app = test_app!(state);

        let req = test::TestRequest::post()
            .uri("/pacientes")
            .set_json(json!({ "nome": "Jo", "email": "a@b.com", "cpf": "12345678901" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: ErrorBody = test::read_body_json(resp).await;
        let errors = body.errors.unwrap();
        assert_eq!(errors["nome"], vec!["O nome deve ter no mínimo 3 caracteres."]);

        let req = test::TestRequest::get().uri("/pacientes").to_request();
        let all: Vec<Paciente> = test::call_and_read_body_json(&app, req).await;
        assert!(all.is_empty());
    }

    #[actix_web::test]
    async fn create_keeps_optional_fields() {
        let state = state();
        let app = test_app!(state);

        let req = test::TestRequest::post().uri("/pacientes").set_json(ana()).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let created: Paciente = test::read_body_json(resp).await;
        assert_eq!(created.data_nascimento.as_deref(), Some("1990-05-17"));
        assert_eq!(created.telefone, None);

        let req = test::TestRequest::get()
            .uri(&format!("/pacientes/{}", created.id))
            .to_request();
        let raw: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(raw["dataNascimento"], "1990-05-17");
        assert!(raw.get("telefone").is_none());
    }

    #[actix_web::test]
    async fn duplicate_email_or_cpf_conflicts() {
        let state = state();
        let app = test_app!(state);

        let req = test::TestRequest::post().uri("/pacientes").set_json(ana()).to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);

        let mut same_cpf = bruno();
        same_cpf["cpf"] = json!("12345678901");
        let req = test::TestRequest::post().uri("/pacientes").set_json(same_cpf).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CONFLICT);
        let body: ErrorBody = test::read_body_json(resp).await;
        assert!(body.message.contains("CPF"));

        let mut same_email = bruno();
        same_email["email"] = json!("ana@example.com");
        let req = test::TestRequest::post().uri("/pacientes").set_json(same_email).to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CONFLICT);
    }

    #[actix_web::test]
    async fn partial_update_and_delete() {
        let state = state();
        let app = test_app!(state);

        let req = test::TestRequest::post().uri("/pacientes").set_json(bruno()).to_request();
        let created: Paciente = test::call_and_read_body_json(&app, req).await;

        let req = test::TestRequest::put()
            .uri(&format!("/pacientes/{}", created.id))
            .set_json(json!({ "telefone": "+55 11 99999-0000" }))
            .to_request();
        let updated: Paciente = test::call_and_read_body_json(&app, req).await;
        assert_eq!(updated.telefone.as_deref(), Some("+55 11 99999-0000"));
        assert_eq!(updated.nome, "Bruno Souza");
        assert_eq!(updated.cpf, "10987654321");

        let req = test::TestRequest::put()
            .uri(&format!("/pacientes/{}", created.id))
            .set_json(json!({ "cpf": "123" }))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);

        let req = test::TestRequest::delete()
            .uri(&format!("/pacientes/{}", created.id))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NO_CONTENT);

        let req = test::TestRequest::delete()
            .uri(&format!("/pacientes/{}", created.id))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn unknown_ids_are_not_found() {
        let state = state();
        let app = test_app!(state);

        let req = test::TestRequest::get().uri("/pacientes/ghost").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: ErrorBody = test::read_body_json(resp).await;
        assert_eq!(body.message, "Paciente não encontrado.");

        let req = test::TestRequest::put()
            .uri("/pacientes/ghost")
            .set_json(json!({}))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
    }
}
