//! Development login use case.
//!
//! Validates the form, performs the single authentication API call and caches
//! the resulting session. Failures are terminal for the submission: nothing is
//! retried and the caller re-renders the form.

use std::sync::Arc;

use tracing::{info, warn};

use super::ports::{AuthApi, SessionStore};
use super::{DevLoginFieldErrors, DevLoginForm, DevLoginRequest, Error, Session, SessionRepository};

/// Path the browser is sent to after a successful login.
pub const DASHBOARD_PATH: &str = "/dashboard";
/// Path of the login view.
pub const LOGIN_PATH: &str = "/login";

/// Result of a development login submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DevLoginOutcome {
    /// The session was cached; navigate to the dashboard.
    SignedIn(Session),
    /// The form failed validation; no request was sent.
    Invalid(DevLoginFieldErrors),
    /// The authentication API refused or failed; show the message inline.
    Failed(String),
    /// The API answered without a token; nothing changes.
    NoToken,
}

/// Development login service over an injected authentication API.
#[derive(Clone)]
pub struct DevLoginService {
    api: Arc<dyn AuthApi>,
}

impl DevLoginService {
    /// Build the service.
    pub fn new(api: Arc<dyn AuthApi>) -> Self {
        Self { api }
    }

    /// Handle one form submission, caching the session in `store` on success.
    ///
    /// # Errors
    /// Returns [`Error`] only when the session cannot be written to the store.
    pub async fn submit<S>(&self, form: &DevLoginForm, store: &S) -> Result<DevLoginOutcome, Error>
    where
        S: SessionStore + ?Sized,
    {
        let request = match DevLoginRequest::try_from_form(form) {
            Ok(request) => request,
            Err(errors) => return Ok(DevLoginOutcome::Invalid(errors)),
        };

        let response = match self.api.dev_login(&request).await {
            Ok(response) => response,
            Err(error) => {
                warn!(%error, username = request.username(), "development login failed");
                return Ok(DevLoginOutcome::Failed(error.user_message().to_owned()));
            }
        };

        let Some(session) = Session::from_login(response) else {
            warn!(username = request.username(), "login response carried no token");
            return Ok(DevLoginOutcome::NoToken);
        };

        SessionRepository::new(store).save(&session)?;
        info!(user_id = session.user().id, "development login succeeded");
        Ok(DevLoginOutcome::SignedIn(session))
    }
}
