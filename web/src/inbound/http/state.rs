//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only depend
//! on the domain service and the compiled views.

use std::sync::Arc;

use crate::domain::DevLoginService;
use crate::inbound::http::views::Views;

/// Dependency bundle for page handlers.
#[derive(Clone)]
pub struct HttpState {
    pub login: DevLoginService,
    pub views: Arc<Views>,
    /// Full-page redirect target that starts GitHub OAuth.
    pub github_login_url: String,
    /// Whether the development login form is offered.
    pub dev_login_enabled: bool,
}

impl HttpState {
    /// Construct state from its parts.
    pub fn new(
        login: DevLoginService,
        views: Arc<Views>,
        github_login_url: impl Into<String>,
        dev_login_enabled: bool,
    ) -> Self {
        Self {
            login,
            views,
            github_login_url: github_login_url.into(),
            dev_login_enabled,
        }
    }
}
