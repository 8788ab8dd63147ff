//! Input validation adapters.

mod regex_email_validator;

pub use regex_email_validator::RegexEmailValidator;
