//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! This module follows the hexagonal architecture pattern, providing concrete
//! implementations of domain port traits:
//!
//! - **persistence**: in-memory account store
//! - **crypto**: bcrypt password hashing and opaque token issuance
//! - **validation**: regex-based email syntax checks
//!
//! Adapters are thin translators that convert between domain types and
//! infrastructure-specific representations. They contain no business logic.

pub mod crypto;
pub mod persistence;
pub mod validation;
