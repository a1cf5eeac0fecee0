//! Driven port for the client-local session cache.
//!
//! Implementations hold plain string entries keyed by name. The production
//! adapter is the encrypted cookie session; tests use an in-memory map so
//! session behaviour is deterministic without a browser.

use thiserror::Error;

/// Errors surfaced by session store adapters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionStoreError {
    /// The stored entry could not be read back as a string.
    #[error("session entry `{key}` is unreadable: {message}")]
    Unreadable { key: String, message: String },
    /// The entry could not be written.
    #[error("failed to write session entry `{key}`: {message}")]
    Write { key: String, message: String },
}

impl SessionStoreError {
    /// Helper for read failures.
    pub fn unreadable(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Unreadable {
            key: key.into(),
            message: message.into(),
        }
    }

    /// Helper for write failures.
    pub fn write(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Write {
            key: key.into(),
            message: message.into(),
        }
    }
}

/// Synchronous string key/value storage owned by one client.
#[cfg_attr(test, mockall::automock)]
pub trait SessionStore {
    /// Read the entry stored under `key`.
    fn read(&self, key: &str) -> Result<Option<String>, SessionStoreError>;

    /// Store `value` under `key`, replacing any previous entry.
    fn write(&self, key: &str, value: String) -> Result<(), SessionStoreError>;

    /// Remove the entry stored under `key`; absent keys are ignored.
    fn remove(&self, key: &str);
}
