//! Outbound adapters implementing domain ports.

pub mod auth_api;
pub mod memory_store;

pub use auth_api::{ApiBaseUrl, AuthApiSetupError, HttpAuthApi};
pub use memory_store::MemorySessionStore;
