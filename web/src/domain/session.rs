//! Cached client session and the repository guarding its storage.
//!
//! The session is two string entries in a client-local store: the bearer
//! token and the serialised user record. Reads never fail loudly; they decode
//! into [`SessionDecode`] so callers branch on an explicit outcome instead of
//! intercepting errors.

use thiserror::Error;
use tracing::warn;

use super::ports::{SessionStore, SessionStoreError};
use super::{Error, LoginResponse, User};

/// Store key holding the bearer token.
pub const TOKEN_KEY: &str = "token";
/// Store key holding the serialised user record.
pub const USER_KEY: &str = "user";

/// Bearer token paired with the user it was issued for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    token: String,
    user: User,
}

impl Session {
    /// Build a session from a login response.
    ///
    /// Returns `None` when the response carries no token, mirroring the rule
    /// that nothing is cached unless a credential was issued.
    pub fn from_login(response: LoginResponse) -> Option<Self> {
        if response.token.is_empty() {
            return None;
        }
        Some(Self {
            token: response.token,
            user: response.user,
        })
    }

    /// Opaque bearer token.
    pub fn token(&self) -> &str {
        self.token.as_str()
    }

    /// Cached user record.
    pub fn user(&self) -> &User {
        &self.user
    }
}

/// Reasons a stored session could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionDecodeError {
    /// The store refused to hand back an entry.
    #[error(transparent)]
    Store(#[from] SessionStoreError),
    /// The user entry is not a valid user record.
    #[error("cached user record is malformed: {message}")]
    MalformedUser { message: String },
}

/// Outcome of reading the cached session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionDecode {
    /// Both entries are present and valid.
    Active(Session),
    /// At least one entry is absent.
    Missing,
    /// An entry is present but unusable.
    Corrupt(SessionDecodeError),
}

impl SessionDecode {
    /// Collapse the outcome into the session, treating failures as logged out.
    pub fn into_session(self) -> Option<Session> {
        match self {
            Self::Active(session) => Some(session),
            Self::Missing | Self::Corrupt(_) => None,
        }
    }
}

/// Repository over an injected [`SessionStore`].
///
/// # Examples
/// ```
/// use devsync_web::domain::{SessionDecode, SessionRepository};
/// use devsync_web::outbound::MemorySessionStore;
///
/// let store = MemorySessionStore::default();
/// let repository = SessionRepository::new(&store);
/// assert_eq!(repository.load(), SessionDecode::Missing);
/// ```
pub struct SessionRepository<'a, S: SessionStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: SessionStore + ?Sized> SessionRepository<'a, S> {
    /// Wrap a store.
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Persist the token and user entries.
    pub fn save(&self, session: &Session) -> Result<(), Error> {
        let user = serde_json::to_string(&session.user)
            .map_err(|error| Error::internal(format!("failed to serialise user: {error}")))?;
        self.store
            .write(TOKEN_KEY, session.token.clone())
            .and_then(|()| self.store.write(USER_KEY, user))
            .map_err(|error| Error::internal(format!("failed to persist session: {error}")))
    }

    /// Read and decode the cached session.
    pub fn load(&self) -> SessionDecode {
        let token = match self.store.read(TOKEN_KEY) {
            Ok(token) => token,
            Err(error) => return corrupt(error.into()),
        };
        let user = match self.store.read(USER_KEY) {
            Ok(user) => user,
            Err(error) => return corrupt(error.into()),
        };

        let (Some(token), Some(user)) = (token, user) else {
            return SessionDecode::Missing;
        };

        match serde_json::from_str::<User>(&user) {
            Ok(user) => SessionDecode::Active(Session { token, user }),
            Err(error) => corrupt(SessionDecodeError::MalformedUser {
                message: error.to_string(),
            }),
        }
    }

    /// Remove both entries.
    pub fn clear(&self) {
        self.store.remove(TOKEN_KEY);
        self.store.remove(USER_KEY);
    }
}

fn corrupt(error: SessionDecodeError) -> SessionDecode {
    warn!(%error, "discarding unreadable cached session");
    SessionDecode::Corrupt(error)
}
