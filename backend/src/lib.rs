//! Login backend library modules.

pub mod config;
pub mod doc;
pub mod domain;
pub mod inbound;
pub mod outbound;
pub mod seeding;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
