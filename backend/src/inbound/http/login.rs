//! Login request handling.
//!
//! ```text
//! POST /api/v1/login {"email":"tony@email.com","password":"123"}
//! ```
//!
//! [`LoginController`] owns the whole request pipeline: required fields,
//! email syntax, delegation to the [`LoginService`] port, and the mapping of
//! every outcome onto an [`HttpEnvelope`]. The Actix route is a thin shim
//! around it.

use std::sync::Arc;

use actix_web::{HttpResponse, post, web};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::error;
use utoipa::ToSchema;

use crate::domain::ports::{AuthenticationError, EmailValidator, EmailValidatorError, LoginService};
use crate::domain::{
    AccessToken, AuthenticationOutcome, Error, ErrorCode, LoginCredentials, LoginValidationError,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::envelope::HttpEnvelope;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, invalid_field_error, malformed_body_error, missing_field_error,
};

const EMAIL_FIELD: FieldName = FieldName::new("email");
const PASSWORD_FIELD: FieldName = FieldName::new("password");

/// Login request body for `POST /api/v1/login`.
///
/// Both fields are optional at the wire level so a missing field is reported
/// as a validation error rather than an extractor failure.
#[derive(Debug, Default, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[schema(example = "tony@email.com")]
    pub email: Option<String>,
    #[schema(example = "123")]
    pub password: Option<String>,
}

impl LoginRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
            password: Some(password.into()),
        }
    }
}

impl LoginRequest {
    /// Read a request from a raw JSON body.
    ///
    /// An empty body reads as `{}` and a non-object body has no fields.
    /// `null`, `false`, `0` and `""` count as absent; any other non-string
    /// value is kept as its JSON text so it still reaches the format check.
    pub fn from_json_body(body: &[u8]) -> ApiResult<Self> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }
        let value: Value = serde_json::from_slice(body).map_err(|_| malformed_body_error())?;
        Ok(Self {
            email: truthy_text(value.get("email")),
            password: truthy_text(value.get("password")),
        })
    }
}

fn truthy_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::Null | Value::Bool(false) => None,
        Value::Number(number) if number.as_f64() == Some(0.0) => None,
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}

impl TryFrom<LoginRequest> for LoginCredentials {
    type Error = LoginValidationError;

    fn try_from(value: LoginRequest) -> Result<Self, Self::Error> {
        Self::try_from_parts(
            value.email.as_deref().unwrap_or_default(),
            value.password.as_deref().unwrap_or_default(),
        )
    }
}

/// Success body for `POST /api/v1/login`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    #[schema(value_type = String, example = "9f86d081884c7d659a2feaa0c55ad015a3bf4f1b2b0b822cd15d6c15b0f00a08")]
    pub access_token: AccessToken,
}

fn map_login_validation_error(err: &LoginValidationError) -> Error {
    match err {
        LoginValidationError::MissingEmail => missing_field_error(EMAIL_FIELD),
        LoginValidationError::MissingPassword => missing_field_error(PASSWORD_FIELD),
    }
}

fn map_email_validator_error(err: &EmailValidatorError) -> Error {
    Error::internal(format!("email validation failed: {err}")).with_details(json!({
        "stage": err.stage(),
        "cause": err.to_string(),
    }))
}

fn map_authentication_error(err: &AuthenticationError) -> Error {
    Error::internal(format!("authentication failed: {err}")).with_details(json!({
        "stage": err.stage(),
        "cause": err.to_string(),
    }))
}

fn serialize_response(response: &LoginResponse) -> ApiResult<Value> {
    serde_json::to_value(response)
        .map_err(|err| Error::internal(format!("failed to serialize response: {err}")))
}

/// Stateless login request handler.
///
/// Cloning is cheap; all collaborators sit behind `Arc`.
#[derive(Clone)]
pub struct LoginController {
    email_validator: Arc<dyn EmailValidator>,
    authentication: Arc<dyn LoginService>,
}

impl LoginController {
    pub fn new(
        email_validator: Arc<dyn EmailValidator>,
        authentication: Arc<dyn LoginService>,
    ) -> Self {
        Self {
            email_validator,
            authentication,
        }
    }

    /// Handle a login request and produce its envelope.
    ///
    /// Never fails: collaborator errors become a redacted 500 envelope and
    /// their diagnostic content is logged here.
    pub async fn handle(&self, request: LoginRequest) -> HttpEnvelope {
        let result = self
            .try_handle(request)
            .await
            .and_then(|body| serialize_response(&body));
        match result {
            Ok(body) => HttpEnvelope::ok(body),
            Err(err) => {
                if err.code() == ErrorCode::InternalError {
                    error!(error = %err, details = ?err.details(), "login failed");
                }
                HttpEnvelope::from(err)
            }
        }
    }

    /// Handle a raw JSON body, reporting unparseable input as a 400 envelope.
    pub async fn handle_json(&self, body: &[u8]) -> HttpEnvelope {
        match LoginRequest::from_json_body(body) {
            Ok(request) => self.handle(request).await,
            Err(err) => HttpEnvelope::from(err),
        }
    }

    async fn try_handle(&self, request: LoginRequest) -> ApiResult<LoginResponse> {
        let credentials = LoginCredentials::try_from(request)
            .map_err(|err| map_login_validation_error(&err))?;

        let email_is_valid = self
            .email_validator
            .is_valid(credentials.email())
            .map_err(|err| map_email_validator_error(&err))?;
        if !email_is_valid {
            return Err(invalid_field_error(EMAIL_FIELD));
        }

        let outcome = self
            .authentication
            .authenticate(&credentials)
            .await
            .map_err(|err| map_authentication_error(&err))?;
        match outcome {
            AuthenticationOutcome::Authenticated(access_token) => Ok(LoginResponse { access_token }),
            AuthenticationOutcome::NotAuthenticated => {
                Err(Error::unauthorized("invalid credentials"))
            }
        }
    }
}

impl From<&HttpState> for LoginController {
    fn from(state: &HttpState) -> Self {
        Self::new(state.email_validator.clone(), state.login.clone())
    }
}

/// Authenticate a user by email and password and return an access token.
///
/// The status code and body are exactly those of the handler's envelope.
#[utoipa::path(
    post,
    path = "/api/v1/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login success", body = LoginResponse),
        (status = 400, description = "Missing or invalid field", body = crate::inbound::http::schemas::ErrorBodySchema),
        (status = 401, description = "Invalid credentials", body = crate::inbound::http::schemas::ErrorBodySchema),
        (status = 500, description = "Internal server error", body = crate::inbound::http::schemas::ErrorBodySchema)
    ),
    tags = ["auth"],
    operation_id = "login"
)]
#[post("/login")]
pub async fn login_handler(state: web::Data<HttpState>, body: web::Bytes) -> HttpResponse {
    LoginController::from(state.get_ref())
        .handle_json(&body)
        .await
        .into_response()
}
