//! Cookie session adapter.
//!
//! Exposes the Actix session as a [`SessionStore`] so handlers work with the
//! domain repository instead of framework-specific calls. The cookie session
//! is encrypted and lives entirely on the client, which makes it the
//! server-side rendition of browser-local storage.

use actix_session::Session;
use actix_web::{FromRequest, HttpRequest, dev::Payload};
use futures_util::future::LocalBoxFuture;

use crate::domain::SessionRepository;
use crate::domain::ports::{SessionStore, SessionStoreError};

/// Newtype wrapper that exposes the session as a domain store.
#[derive(Clone)]
pub struct SessionContext(Session);

impl SessionContext {
    /// Construct a new wrapper from the underlying Actix session.
    pub fn new(session: Session) -> Self {
        Self(session)
    }

    /// Repository over this session.
    pub fn repository(&self) -> SessionRepository<'_, Self> {
        SessionRepository::new(self)
    }
}

impl SessionStore for SessionContext {
    fn read(&self, key: &str) -> Result<Option<String>, SessionStoreError> {
        self.0
            .get::<String>(key)
            .map_err(|error| SessionStoreError::unreadable(key, error.to_string()))
    }

    fn write(&self, key: &str, value: String) -> Result<(), SessionStoreError> {
        self.0
            .insert(key, value)
            .map_err(|error| SessionStoreError::write(key, error.to_string()))
    }

    fn remove(&self, key: &str) {
        self.0.remove(key);
    }
}

impl FromRequest for SessionContext {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let fut = Session::from_request(req, payload);
        Box::pin(async move { fut.await.map(SessionContext::new) })
    }
}
