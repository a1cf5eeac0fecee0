//! Driven port for the external authentication API.
//!
//! The application never issues credentials itself; it forwards the
//! development login form to the backend and caches what comes back.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{DevLoginRequest, LoginResponse};

/// Message shown when the backend does not explain a failure.
pub const LOGIN_FAILED_FALLBACK: &str = "Login failed";

/// Errors surfaced by authentication API adapters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthApiError {
    /// The backend answered with a non-success status.
    #[error("authentication API rejected the request with status {status}")]
    Rejected {
        status: u16,
        /// Value of the backend's `error` field, when present.
        message: Option<String>,
    },
    /// The request never produced a response.
    #[error("authentication API transport failed: {message}")]
    Transport { message: String },
    /// A success response carried an unexpected body.
    #[error("authentication API response could not be decoded: {message}")]
    Decode { message: String },
}

impl AuthApiError {
    /// Helper for non-success statuses.
    pub fn rejected(status: u16, message: Option<String>) -> Self {
        Self::Rejected { status, message }
    }

    /// Helper for transport failures.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Helper for decode failures.
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Message suitable for showing next to the login form.
    ///
    /// # Examples
    /// ```
    /// use devsync_web::domain::ports::AuthApiError;
    ///
    /// let err = AuthApiError::rejected(401, Some("Invalid user".into()));
    /// assert_eq!(err.user_message(), "Invalid user");
    /// assert_eq!(AuthApiError::transport("refused").user_message(), "Login failed");
    /// ```
    pub fn user_message(&self) -> &str {
        match self {
            Self::Rejected {
                message: Some(message),
                ..
            } if !message.is_empty() => message.as_str(),
            _ => LOGIN_FAILED_FALLBACK,
        }
    }
}

/// Outbound calls to the authentication API.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Exchange a development username/email pair for a session credential.
    async fn dev_login(&self, request: &DevLoginRequest) -> Result<LoginResponse, AuthApiError>;
}
