use std::convert::Infallible;

use axum::{
    body::{Body, Bytes},
    extract::{FromRequest, FromRequestParts, Query, Request},
    http::{header, request::Parts, StatusCode},
    response::{IntoResponse, Response},
};
use serde::{de::DeserializeOwned, Serialize};

use crate::core::error::AppError;

/// Typed JSON body extractor.
///
/// The body is decoded whatever `Content-Type` says. Unreadable bodies,
/// syntax errors and wrong field types all become `ReadJsonFailure`.
pub struct AppJson<T>(pub T);

impl<T, S> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request<Body>, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| AppError::ReadJsonFailure(rejection.body_text()))?;

        decode_json(&body).map(Self)
    }
}

/// Decode a JSON body, mapping any serde error to `ReadJsonFailure`
pub fn decode_json<T: DeserializeOwned>(body: &[u8]) -> Result<T, AppError> {
    serde_json::from_slice(body).map_err(|e| AppError::ReadJsonFailure(e.to_string()))
}

/// Raw query-string pairs in request order.
///
/// Lookups return the first value of a repeated key. A query string that
/// cannot be parsed is treated as empty, so a required parameter then reads
/// as unset rather than producing axum's 400.
#[derive(Debug, Default)]
pub struct AppQuery(pub Vec<(String, String)>);

impl AppQuery {
    pub fn first(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

impl<S> FromRequestParts<S> for AppQuery
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let pairs = match Query::<Vec<(String, String)>>::from_request_parts(parts, state).await {
            Ok(Query(pairs)) => pairs,
            Err(rejection) => {
                tracing::debug!("Ignoring unparsable query string: {}", rejection);
                Vec::new()
            }
        };

        Ok(Self(pairs))
    }
}

/// Serialize `value` into a 200 `application/json` response.
///
/// Serialization is done up front so a failure is reported as
/// `WriteJsonFailure` rather than axum's generic 500.
pub fn json_ok<T: Serialize>(value: &T) -> Result<Response, AppError> {
    let body = serde_json::to_vec(value).map_err(AppError::WriteJsonFailure)?;

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
        .into_response())
}
