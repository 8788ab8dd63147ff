//! Regex-backed email syntax validator.

use std::sync::OnceLock;

use regex::Regex;

use crate::domain::ports::{EmailValidator, EmailValidatorError};

/// Longest address accepted, per the SMTP path limit.
pub const EMAIL_MAX_LEN: usize = 254;

// Local part per RFC 5322 atext plus dots; domain labels of up to 63
// characters with at least one dot.
const EMAIL_PATTERN: &str = r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)+$";

static EMAIL_RE: OnceLock<Result<Regex, regex::Error>> = OnceLock::new();

fn email_regex() -> Result<&'static Regex, EmailValidatorError> {
    EMAIL_RE
        .get_or_init(|| Regex::new(EMAIL_PATTERN))
        .as_ref()
        .map_err(|err| EmailValidatorError::unavailable(format!("email pattern invalid: {err}")))
}

#[derive(Debug, Default, Clone, Copy)]
pub struct RegexEmailValidator;

impl EmailValidator for RegexEmailValidator {
    fn is_valid(&self, email: &str) -> Result<bool, EmailValidatorError> {
        if email.len() > EMAIL_MAX_LEN {
            return Ok(false);
        }
        Ok(email_regex()?.is_match(email))
    }
}
