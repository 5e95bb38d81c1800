//! Custom axum extractors for the portfolio service
//!
//! Axum's own `Json<T>` and `Query<T>` answer bad input with plain-text
//! bodies; these wrappers keep every rejection in the shared
//! `{"error": ...}` shape.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        FromRequest, FromRequestParts, Query, Request,
    },
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;

use crate::Error;

/// Message returned when a JSON body cannot be decoded
pub const INVALID_BODY_MESSAGE: &str = "Invalid request body";

/// Message returned when a body exceeds the configured limit
pub const BODY_TOO_LARGE_MESSAGE: &str = "Request body too large";

/// Message returned when query parameters cannot be decoded
pub const INVALID_QUERY_MESSAGE: &str = "Invalid query string";

/// JSON body extractor with uniform rejections
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

/// Rejection type for `JsonBody`: 413 for oversized bodies, 400 otherwise
#[derive(Debug)]
pub struct JsonBodyRejection(JsonRejection);

impl IntoResponse for JsonBodyRejection {
    fn into_response(self) -> Response {
        tracing::debug!(rejection = %self.0.body_text(), "Rejected JSON body");
        let error = if self.0.status() == StatusCode::PAYLOAD_TOO_LARGE {
            Error::PayloadTooLarge(BODY_TOO_LARGE_MESSAGE.to_string())
        } else {
            Error::Validation(INVALID_BODY_MESSAGE.to_string())
        };
        error.into_response()
    }
}

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = JsonBodyRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(JsonBodyRejection)?;
        Ok(JsonBody(value))
    }
}

/// Query string extractor with uniform rejections
#[derive(Debug)]
pub struct QueryParams<T>(pub T);

/// Rejection type for `QueryParams`: always a 400 validation error
#[derive(Debug)]
pub struct QueryParamsRejection(QueryRejection);

impl IntoResponse for QueryParamsRejection {
    fn into_response(self) -> Response {
        tracing::debug!(rejection = %self.0.body_text(), "Rejected query string");
        Error::Validation(INVALID_QUERY_MESSAGE.to_string()).into_response()
    }
}

impl<T, S> FromRequestParts<S> for QueryParams<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = QueryParamsRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(QueryParamsRejection)?;
        Ok(QueryParams(value))
    }
}
