//! Account persistence adapters.
//!
//! Only an in-memory store ships today. It implements both the read-side
//! [`AccountLookup`](crate::domain::ports::AccountLookup) port and the
//! write-side [`AccountStore`](crate::domain::ports::AccountStore) port so a
//! single instance can be seeded at startup and queried per request.

mod in_memory_account_repository;

pub use in_memory_account_repository::InMemoryAccountRepository;
