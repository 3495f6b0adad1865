//! Thin `gloo-net` wrappers around the REST API.
//!
//! Every call resolves to `Result<_, ApiFailure>`; the error keeps the decoded
//! `ErrorBody` when the server sent one so forms can show per-field messages.

use common::model::error::ErrorBody;
use common::validation::FieldErrors;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;

pub enum ApiFailure {
    Network(gloo_net::Error),
    Status(u16, Option<ErrorBody>),
}

impl ApiFailure {
    /// Field errors from a `400` response, if any.
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            ApiFailure::Status(_, Some(body)) => body.errors.as_ref(),
            _ => None,
        }
    }
}

impl fmt::Display for ApiFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiFailure::Network(err) => write!(f, "falha de rede: {}", err),
            ApiFailure::Status(status, Some(body)) => write!(f, "{} ({})", body.message, status),
            ApiFailure::Status(status, None) => write!(f, "resposta inesperada ({})", status),
        }
    }
}

impl From<gloo_net::Error> for ApiFailure {
    fn from(err: gloo_net::Error) -> Self {
        ApiFailure::Network(err)
    }
}

async fn check(response: Response) -> Result<Response, ApiFailure> {
    if response.ok() {
        Ok(response)
    } else {
        let status = response.status();
        Err(ApiFailure::Status(status, response.json::<ErrorBody>().await.ok()))
    }
}

pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiFailure> {
    let response = check(Request::get(path).send().await?).await?;
    Ok(response.json::<T>().await?)
}

pub async fn post_json<B, T>(path: &str, body: &B) -> Result<T, ApiFailure>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let response = check(Request::post(path).json(body)?.send().await?).await?;
    Ok(response.json::<T>().await?)
}

pub async fn put_json<B, T>(path: &str, body: &B) -> Result<T, ApiFailure>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let response = check(Request::put(path).json(body)?.send().await?).await?;
    Ok(response.json::<T>().await?)
}

pub async fn delete(path: &str) -> Result<(), ApiFailure> {
    check(Request::delete(path).send().await?).await?;
    Ok(())
}
