//! OpenAPI schema definitions for error payloads.
//!
//! Error bodies are rendered by hand in [`super::error::error_body`], so the
//! wire shape is registered here as a wrapper that mirrors it.

use utoipa::ToSchema;

/// OpenAPI schema for the error body returned by every failing endpoint.
#[derive(ToSchema)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorBodySchema {
    /// Human-readable message. Internal failures always read
    /// `Internal server error`.
    #[schema(example = "missing required field: email")]
    error: String,
    /// Stable machine-readable error code.
    #[schema(example = "invalid_request")]
    code: String,
    /// Supplementary details such as the rejected field.
    #[schema(value_type = Option<Object>)]
    details: Option<serde_json::Value>,
}
