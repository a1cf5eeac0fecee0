//! Domain ports defining the edges of the hexagon.
//!
//! Ports describe how the domain expects to interact with driven adapters:
//! the external authentication API and the client-local session cache. Each
//! trait exposes strongly typed errors so adapters map their failures into
//! predictable variants.

mod auth_api;
mod session_store;

#[cfg(test)]
pub use auth_api::MockAuthApi;
pub use auth_api::{AuthApi, AuthApiError, LOGIN_FAILED_FALLBACK};
#[cfg(test)]
pub use session_store::MockSessionStore;
pub use session_store::{SessionStore, SessionStoreError};
