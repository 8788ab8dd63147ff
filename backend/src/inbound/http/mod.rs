//! HTTP inbound adapter exposing REST endpoints.

pub mod envelope;
pub mod error;
pub mod login;
pub mod schemas;
pub mod state;
pub mod validation;

pub use error::ApiResult;
