//! # Appointments (`/consultas`)
//!
//! Reads (`GET /consultas`, `GET /consultas/{id}`) return
//! `ConsultaWithRelations` with the doctor and patient embedded; writes return
//! the bare `Consulta`. A reference to a missing doctor or patient is a `404`.

mod create;
mod delete;
mod get;
mod list;
pub mod service;
mod update;

use crate::api_error::{ForeignKeyPolicy, ResourceMessages};
use actix_web::web::{delete, get, post, put, scope};
use actix_web::Scope;

const API_PATH: &str = "/consultas";

pub(crate) const MESSAGES: ResourceMessages = ResourceMessages {
    not_found: "Consulta não encontrada.",
    conflict: "Conflito: consulta já cadastrada.",
    foreign_key: ForeignKeyPolicy::MissingReference(
        "Médico ou paciente informado não foi encontrado.",
    ),
};

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
    use crate::services::test_support::{ana, bruno, house, post_json, state, test_app, wilson};
    use actix_web::http::StatusCode;
    use actix_web::test;
    use common::model::consulta::{Consulta, ConsultaWithRelations};
    use common::model::error::ErrorBody;
    use common::model::medico::Medico;
    use common::model::paciente::Paciente;
    use serde_json::json;

    #[actix_web::test]
    async fn appointment_lists_embed_doctor_and_patient() {
        let state = state();
        let app = test_app!(state);
        let medico: Medico = post_json!(app, "/medicos", house());
        let paciente: Paciente = post_json!(app, "/pacientes", ana());

        let req = test::TestRequest::post()
            .uri("/consultas")
            .set_json(json!({
                "data": "2025-10-05T14:30:00.000Z",
                "medicoId": medico.id,
                "pacienteId": paciente.id
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let created: Consulta = test::read_body_json(resp).await;
        assert_eq!(created.data, "2025-10-05T14:30:00.000Z");

        let req = test::TestRequest::get().uri("/consultas").to_request();
        let all: Vec<ConsultaWithRelations> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].medico, medico);
        assert_eq!(all[0].paciente, paciente);

        let req = test::TestRequest::get()
            .uri(&format!("/consultas/{}", created.id))
            .to_request();
        let one: ConsultaWithRelations = test::call_and_read_body_json(&app, req).await;
        assert_eq!(one.to_consulta(), created);
        assert_eq!(one.medico.nome, "Dr. House");
    }

    #[actix_web::test]
    async fn missing_patient_reference_is_not_found() {
        let state = state();
        let app = test_app!(state);
        let medico: Medico = post_json!(app, "/medicos", house());

        let req = test::TestRequest::post()
            .uri("/consultas")
            .set_json(json!({
                "data": "2025-10-05T14:30:00.000Z",
                "medicoId": medico.id,
                "pacienteId": "nonexistent"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: ErrorBody = test::read_body_json(resp).await;
        assert_eq!(body.message, "Médico ou paciente informado não foi encontrado.");

        let req = test::TestRequest::get().uri("/consultas").to_request();
        let all: Vec<ConsultaWithRelations> = test::call_and_read_body_json(&app, req).await;
        assert!(all.is_empty());
    }

    #[actix_web::test]
    async fn invalid_date_is_a_validation_error() {
        let state = state();
        let app = test_app!(state);

        let req = test::TestRequest::post()
            .uri("/consultas")
            .set_json(json!({ "data": "amanhã às 10h", "medicoId": "m1" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let errors = test::read_body_json::<ErrorBody, _>(resp).await.errors.unwrap();
        assert_eq!(errors["data"], vec!["Data e hora inválidas."]);
        assert_eq!(errors["pacienteId"], vec!["O paciente é obrigatório."]);
    }

    #[actix_web::test]
    async fn update_changes_only_supplied_fields_and_checks_references() {
        let state = state();
        let app = test_app!(state);
        let house: Medico = post_json!(app, "/medicos", house());
        let wilson: Medico = post_json!(app, "/medicos", wilson());
        let ana: Paciente = post_json!(app, "/pacientes", ana());
        let created: Consulta = post_json!(
            app,
            "/consultas",
            json!({
                "data": "2025-10-05T14:30:00.000Z",
                "medicoId": house.id,
                "pacienteId": ana.id
            }),
        );

        let req = test::TestRequest::put()
            .uri(&format!("/consultas/{}", created.id))
            .set_json(json!({ "data": "2025-10-06T10:00:00Z", "medicoId": wilson.id }))
            .to_request();
        let updated: Consulta = test::call_and_read_body_json(&app, req).await;
        assert_eq!(updated.data, "2025-10-06T10:00:00.000Z");
        assert_eq!(updated.medico_id, wilson.id);
        assert_eq!(updated.paciente_id, ana.id);

        let req = test::TestRequest::put()
            .uri(&format!("/consultas/{}", created.id))
            .set_json(json!({ "pacienteId": "ghost" }))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);

        let req = test::TestRequest::put()
            .uri("/consultas/ghost")
            .set_json(json!({ "data": "2025-10-06T10:00:00Z" }))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);

        let req = test::TestRequest::delete().uri("/consultas/ghost").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: ErrorBody = test::read_body_json(resp).await;
        assert_eq!(body.message, "Consulta não encontrada.");
    }

    #[actix_web::test]
    async fn deleting_an_appointment_keeps_its_doctor_and_patient() {
        let state = state();
        let app = test_app!(state);
        let medico: Medico = post_json!(app, "/medicos", house());
        let paciente: Paciente = post_json!(app, "/pacientes", bruno());
        let consulta: Consulta = post_json!(
            app,
            "/consultas",
            json!({
                "data": "2025-10-05T14:30:00.000Z",
                "medicoId": medico.id,
                "pacienteId": paciente.id
            }),
        );

        let req = test::TestRequest::delete()
            .uri(&format!("/consultas/{}", consulta.id))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NO_CONTENT);

        let req = test::TestRequest::get().uri("/consultas").to_request();
        let all: Vec<ConsultaWithRelations> = test::call_and_read_body_json(&app, req).await;
        assert!(all.is_empty());

        let req = test::TestRequest::get().uri("/medicos").to_request();
        let medicos: Vec<Medico> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(medicos, vec![medico]);

        let req = test::TestRequest::get().uri("/pacientes").to_request();
        let pacientes: Vec<Paciente> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(pacientes, vec![paciente]);

        let req = test::TestRequest::get()
            .uri(&format!("/consultas/{}", consulta.id))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn referenced_doctor_cannot_be_deleted() {
        let state = state();
        let app = test_app!(state);
        let medico: Medico = post_json!(app, "/medicos", house());
        let paciente: Paciente = post_json!(app, "/pacientes", ana());
        let _consulta: Consulta = post_json!(
            app,
            "/consultas",
            json!({
                "data": "2025-10-05T14:30:00.000Z",
                "medicoId": medico.id,
                "pacienteId": paciente.id
            }),
        );

        let req = test::TestRequest::delete()
            .uri(&format!("/medicos/{}", medico.id))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CONFLICT);

        let req = test::TestRequest::delete()
            .uri(&format!("/pacientes/{}", paciente.id))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CONFLICT);

        let req = test::TestRequest::get().uri("/health").to_request();
        let body = test::call_and_read_body(&app, req).await;
        assert_eq!(body, "API is running!");
    }
}
