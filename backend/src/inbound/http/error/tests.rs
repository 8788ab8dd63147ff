//! Tests for HTTP error mapping.

use super::*;
use rstest::{fixture, rstest};
use serde_json::json;

#[fixture]
fn internal_error_case() -> Error {
    Error::internal("account lookup connection failed: refused")
        .with_details(json!({ "stage": "account_lookup" }))
}

#[fixture]
fn invalid_request_case() -> Error {
    Error::invalid_request("missing required field: email")
        .with_details(json!({ "field": "email", "code": "missing_field" }))
}

#[rstest]
#[case(ErrorCode::InvalidRequest, StatusCode::BAD_REQUEST)]
#[case(ErrorCode::Unauthorized, StatusCode::UNAUTHORIZED)]
#[case(ErrorCode::InternalError, StatusCode::INTERNAL_SERVER_ERROR)]
fn status_code_matches_error_code(#[case] code: ErrorCode, #[case] status: StatusCode) {
    assert_eq!(status_for(code), status);
}

#[rstest]
fn internal_errors_are_redacted(internal_error_case: Error) {
    let body = error_body(&internal_error_case);

    assert_eq!(
        body,
        json!({ "error": REDACTED_MESSAGE, "code": "internal_error" })
    );
}

#[rstest]
fn client_errors_keep_details(invalid_request_case: Error) {
    let body = error_body(&invalid_request_case);

    assert_eq!(
        body,
        json!({
            "error": "missing required field: email",
            "code": "invalid_request",
            "details": { "field": "email", "code": "missing_field" }
        })
    );
}

#[rstest]
fn details_are_omitted_when_absent() {
    let body = error_body(&Error::unauthorized("invalid credentials"));

    assert_eq!(
        body,
        json!({ "error": "invalid credentials", "code": "unauthorized" })
    );
}
