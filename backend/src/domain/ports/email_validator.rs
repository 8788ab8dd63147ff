//! Driven port for checking email address syntax.

use super::define_port_error;

define_port_error! {
    /// Errors raised when the validator cannot reach a verdict.
    pub enum EmailValidatorError in stage "email_validation" {
        /// Validator is in an unusable state.
        Unavailable { message: String } => "email validator unavailable: {message}",
    }
}

/// Syntactic email check. Deliverability is out of scope.
#[cfg_attr(test, mockall::automock)]
pub trait EmailValidator: Send + Sync {
    /// Return whether `email` is a syntactically valid address.
    fn is_valid(&self, email: &str) -> Result<bool, EmailValidatorError>;
}
