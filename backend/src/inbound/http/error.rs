//! HTTP adapter mapping for domain errors.
//!
//! Purpose: keep the domain error type HTTP-agnostic while giving every
//! failure one fixed status code and JSON body shape.

use actix_web::http::StatusCode;
use serde_json::{Map, Value, json};

use crate::domain::{Error, ErrorCode};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

/// Message returned in place of any internal error message.
pub const REDACTED_MESSAGE: &str = "Internal server error";

/// Fixed status policy for error codes.
pub fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::Unauthorized => StatusCode::UNAUTHORIZED,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn redact_if_internal(error: &Error) -> Error {
    if matches!(error.code(), ErrorCode::InternalError) {
        Error::internal(REDACTED_MESSAGE)
    } else {
        error.clone()
    }
}

/// Render the client-facing body for an error.
///
/// Internal errors lose their message and details; everything else keeps
/// its details so clients can tell which field was rejected.
pub fn error_body(error: &Error) -> Value {
    let visible = redact_if_internal(error);
    let mut body = Map::new();
    body.insert("error".to_owned(), json!(visible.message()));
    body.insert("code".to_owned(), json!(visible.code().as_str()));
    if let Some(details) = visible.details() {
        body.insert("details".to_owned(), details.clone());
    }
    Value::Object(body)
}

#[cfg(test)]
mod tests;
