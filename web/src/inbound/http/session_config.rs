//! Session cookie settings read from the environment.
//!
//! Debug builds warn and fall back when a toggle is missing or malformed;
//! release builds refuse to start instead.

use std::path::PathBuf;

use actix_session::SessionMiddleware;
use actix_session::config::{CookieContentSecurity, PersistentSession};
use actix_session::storage::CookieSessionStore;
use actix_web::cookie::time::Duration;
use actix_web::cookie::{Key, SameSite};
use mockable::Env;
use tracing::warn;
use zeroize::Zeroize;

/// Name of the cookie carrying the cached session.
pub const SESSION_COOKIE_NAME: &str = "session";
/// Lifetime of the session cookie; the cache itself never expires entries.
pub const SESSION_COOKIE_TTL_DAYS: i64 = 30;

const KEY_FILE_ENV: &str = "SESSION_KEY_FILE";
const COOKIE_SECURE_ENV: &str = "SESSION_COOKIE_SECURE";
const SAMESITE_ENV: &str = "SESSION_SAMESITE";
const ALLOW_EPHEMERAL_ENV: &str = "SESSION_ALLOW_EPHEMERAL";

const SESSION_KEY_DEFAULT_PATH: &str = "/var/run/secrets/session_key";
const SESSION_KEY_MIN_LEN: usize = 64;
// `Key::derive_from` panics below this length.
const SESSION_KEY_DERIVE_MIN_LEN: usize = 32;

const BOOL_EXPECTED: &str = "1|0|true|false|yes|no|y|n";
const SAMESITE_EXPECTED: &str = "Strict|Lax|None";

/// How strictly the session toggles are validated.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BuildMode {
    /// Missing or malformed toggles fall back to defaults with a warning.
    Debug,
    /// Every toggle must be present and valid.
    Release,
}

impl BuildMode {
    /// Pick the mode matching `cfg!(debug_assertions)`.
    #[must_use]
    pub fn from_debug_assertions() -> Self {
        if cfg!(debug_assertions) {
            Self::Debug
        } else {
            Self::Release
        }
    }
}

/// Resolved cookie settings.
#[derive(Clone)]
pub struct SessionSettings {
    /// Signing and encryption key for cookie sessions.
    pub key: Key,
    /// Whether session cookies are marked `Secure`.
    pub cookie_secure: bool,
    /// `SameSite` policy for session cookies.
    pub same_site: SameSite,
}

impl SessionSettings {
    /// Private, HTTP-only cookie session that persists for
    /// [`SESSION_COOKIE_TTL_DAYS`].
    pub fn middleware(&self) -> SessionMiddleware<CookieSessionStore> {
        let lifecycle =
            PersistentSession::default().session_ttl(Duration::days(SESSION_COOKIE_TTL_DAYS));
        SessionMiddleware::builder(CookieSessionStore::default(), self.key.clone())
            .cookie_name(SESSION_COOKIE_NAME.to_owned())
            .cookie_path("/".to_owned())
            .cookie_http_only(true)
            .cookie_secure(self.cookie_secure)
            .cookie_same_site(self.same_site)
            .cookie_content_security(CookieContentSecurity::Private)
            .session_lifecycle(lifecycle)
            .build()
    }
}

/// Reasons the session settings were rejected.
#[derive(thiserror::Error, Debug)]
pub enum SessionConfigError {
    /// A toggle is not set.
    #[error("{name} is not set")]
    MissingEnv { name: &'static str },
    /// A toggle holds a value outside its accepted set.
    #[error("{name}='{value}' is not one of {expected}")]
    InvalidEnv {
        name: &'static str,
        value: String,
        expected: &'static str,
    },
    /// The key file could not be read.
    #[error("cannot read session key {path}: {source}")]
    KeyRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The key file holds fewer bytes than a release key needs.
    #[error("session key {path} has {length} bytes; at least {min_len} are required")]
    KeyTooShort {
        path: PathBuf,
        length: usize,
        min_len: usize,
    },
    /// `SameSite=None` was requested for a cookie that is not `Secure`.
    #[error("SESSION_SAMESITE=None needs SESSION_COOKIE_SECURE=1")]
    InsecureSameSiteNone,
    /// Ephemeral keys were requested in a release build.
    #[error("SESSION_ALLOW_EPHEMERAL is only honoured in debug builds")]
    EphemeralNotAllowed,
}

/// Resolve the session settings from `env` under `mode`.
///
/// # Examples
///
/// ```rust
/// use devsync_web::inbound::http::session_config::{BuildMode, session_settings_from_env};
/// use mockable::MockEnv;
///
/// let mut env = MockEnv::new();
/// env.expect_string().returning(|_| None);
///
/// let settings = session_settings_from_env(&env, BuildMode::Debug).unwrap();
/// assert!(settings.cookie_secure);
/// ```
pub fn session_settings_from_env<E: Env>(
    env: &E,
    mode: BuildMode,
) -> Result<SessionSettings, SessionConfigError> {
    let reader = EnvReader { env, mode };

    let cookie_secure = reader.toggle(COOKIE_SECURE_ENV, true, BOOL_EXPECTED, parse_bool)?;
    let default_same_site = match mode {
        BuildMode::Debug => SameSite::Lax,
        BuildMode::Release => SameSite::Strict,
    };
    let same_site = reader.toggle(
        SAMESITE_ENV,
        default_same_site,
        SAMESITE_EXPECTED,
        parse_same_site,
    )?;
    if same_site == SameSite::None && !cookie_secure {
        reader.lenient((), SessionConfigError::InsecureSameSiteNone)?;
    }

    let allow_ephemeral = reader.toggle(ALLOW_EPHEMERAL_ENV, false, BOOL_EXPECTED, parse_bool)?;
    if allow_ephemeral && mode == BuildMode::Release {
        return Err(SessionConfigError::EphemeralNotAllowed);
    }

    Ok(SessionSettings {
        key: reader.key()?,
        cookie_secure,
        same_site,
    })
}

/// Environment lookups bound to one build mode.
struct EnvReader<'a, E> {
    env: &'a E,
    mode: BuildMode,
}

impl<E: Env> EnvReader<'_, E> {
    /// Debug builds log `error` and carry on with `fallback`.
    fn lenient<T>(&self, fallback: T, error: SessionConfigError) -> Result<T, SessionConfigError> {
        match self.mode {
            BuildMode::Debug => {
                warn!(%error, "falling back to the default session setting");
                Ok(fallback)
            }
            BuildMode::Release => Err(error),
        }
    }

    fn toggle<T>(
        &self,
        name: &'static str,
        fallback: T,
        expected: &'static str,
        parse: fn(&str) -> Option<T>,
    ) -> Result<T, SessionConfigError> {
        let Some(value) = self.env.string(name) else {
            return self.lenient(fallback, SessionConfigError::MissingEnv { name });
        };
        match parse(&value) {
            Some(parsed) => Ok(parsed),
            None => self.lenient(
                fallback,
                SessionConfigError::InvalidEnv {
                    name,
                    value,
                    expected,
                },
            ),
        }
    }

    fn key(&self) -> Result<Key, SessionConfigError> {
        let path = self
            .env
            .string(KEY_FILE_ENV)
            .map_or_else(|| PathBuf::from(SESSION_KEY_DEFAULT_PATH), PathBuf::from);

        let mut bytes = match std::fs::read(&path) {
            Ok(bytes) => bytes,
            Err(source) => {
                return self
                    .lenient((), SessionConfigError::KeyRead { path, source })
                    .map(|()| Key::generate());
            }
        };

        let length = bytes.len();
        let key = if length >= SESSION_KEY_MIN_LEN {
            Ok(Key::derive_from(&bytes))
        } else if self.mode == BuildMode::Release {
            Err(SessionConfigError::KeyTooShort {
                path,
                length,
                min_len: SESSION_KEY_MIN_LEN,
            })
        } else if length >= SESSION_KEY_DERIVE_MIN_LEN {
            Ok(Key::derive_from(&bytes))
        } else {
            warn!(path = %path.display(), length, "session key too short; using a temporary key");
            Ok(Key::generate())
        };
        bytes.zeroize();
        key
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "y" => Some(true),
        "0" | "false" | "no" | "n" => Some(false),
        _ => None,
    }
}

fn parse_same_site(value: &str) -> Option<SameSite> {
    match value.to_ascii_lowercase().as_str() {
        "strict" => Some(SameSite::Strict),
        "lax" => Some(SameSite::Lax),
        "none" => Some(SameSite::None),
        _ => None,
    }
}
