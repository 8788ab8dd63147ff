//! Fixed-shape response envelope produced by request handlers.
//!
//! An envelope is a status code plus a JSON body. Handlers return envelopes
//! instead of framework responses so they can be driven and asserted
//! without an HTTP server; [`HttpEnvelope::into_response`] is the only place
//! that touches Actix.

use actix_web::HttpResponse;
use actix_web::http::StatusCode;
use serde_json::Value;

use crate::domain::Error;

use super::error::{error_body, status_for};

#[derive(Debug, Clone, PartialEq)]
pub struct HttpEnvelope {
    status: StatusCode,
    body: Value,
}

impl HttpEnvelope {
    /// Successful envelope carrying `body`.
    pub fn ok(body: Value) -> Self {
        Self {
            status: StatusCode::OK,
            body,
        }
    }

    /// Error envelope whose status and body follow the fixed policy table.
    pub fn from_error(error: &Error) -> Self {
        Self {
            status: status_for(error.code()),
            body: error_body(error),
        }
    }

    /// Numeric status code, e.g. `401`.
    pub fn status_code(&self) -> u16 {
        self.status.as_u16()
    }

    pub fn body(&self) -> &Value {
        &self.body
    }

    /// Convert into an Actix response with a JSON body.
    pub fn into_response(self) -> HttpResponse {
        HttpResponse::build(self.status).json(self.body)
    }
}

impl From<Error> for HttpEnvelope {
    fn from(value: Error) -> Self {
        Self::from_error(&value)
    }
}
