use crate::db::Database;
use crate::state::ClinicState;
use actix_web::web;
use serde_json::{json, Value};

pub fn state() -> web::Data<ClinicState> {
    web::Data::new(ClinicState::new(Database::open_in_memory().unwrap()))
}

/// Initializes the full API against `state`.
macro_rules! test_app {
    ($state:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data($state.clone())
                .app_data(crate::services::json_config(1024 * 1024))
                .configure(crate::services::configure),
        )
        .await
    };
}

/// POSTs `$body` to `$uri` and decodes the JSON answer.
macro_rules! post_json {
    ($app:expr, $uri:expr, $body:expr $(,)?) => {
        actix_web::test::call_and_read_body_json(
            &$app,
            actix_web::test::TestRequest::post()
                .uri($uri)
                .set_json($body)
                .to_request(),
        )
        .await
    };
}

pub(crate) use post_json;
pub(crate) use test_app;

pub fn house() -> Value {
    json!({
        "nome": "Dr. House",
        "email": "house@example.com",
        "crm": "123456",
        "especialidade": "Infectologia"
    })
}

pub fn wilson() -> Value {
    json!({
        "nome": "Dr. Wilson",
        "email": "wilson@example.com",
        "crm": "654321",
        "especialidade": "Oncologia"
    })
}

pub fn ana() -> Value {
    json!({
        "nome": "Ana Silva",
        "email": "ana@example.com",
        "cpf": "12345678901",
        "dataNascimento": "1990-05-17"
    })
}

pub fn bruno() -> Value {
    json!({
        "nome": "Bruno Souza",
        "email": "bruno@example.com",
        "cpf": "10987654321"
    })
}
