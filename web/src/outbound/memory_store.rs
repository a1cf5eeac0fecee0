//! In-memory session store.
//!
//! Stands in for the browser when exercising session behaviour without
//! cookies. Interior mutability mirrors the cookie session, which is also
//! mutated through a shared handle.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::domain::ports::{SessionStore, SessionStoreError};

/// Session store backed by a `HashMap`.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemorySessionStore {
    /// Seed an entry directly, bypassing the repository.
    pub fn insert(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
    }

    /// Raw entry lookup.
    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    /// Whether no entries are stored.
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl SessionStore for MemorySessionStore {
    fn read(&self, key: &str) -> Result<Option<String>, SessionStoreError> {
        Ok(self.get(key))
    }

    fn write(&self, key: &str, value: String) -> Result<(), SessionStoreError> {
        self.entries.borrow_mut().insert(key.to_owned(), value);
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}
