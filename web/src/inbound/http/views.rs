//! Server-rendered pages.
//!
//! Templates are compiled into the binary and parsed once at start-up.
//! Autoescaping is on for every `.html` template, so user-supplied values
//! such as usernames are always escaped.

use serde::Serialize;
use tera::{Context, Tera};

use crate::domain::{DevLoginFieldErrors, Error, User};

const BASE_TEMPLATE: &str = "base.html";
const LOGIN_TEMPLATE: &str = "login.html";
const DASHBOARD_TEMPLATE: &str = "dashboard.html";
const UNKNOWN_JOIN_DATE: &str = "Unknown";

/// Data rendered by the login page.
#[derive(Debug, Clone, Default, Serialize)]
pub struct LoginView {
    pub github_login_url: String,
    pub dev_login_enabled: bool,
    pub show_dev_login: bool,
    /// Values echoed back into the form after a failed submission.
    pub username: String,
    pub email: String,
    /// Banner message from the authentication API.
    pub error: Option<String>,
    pub field_errors: DevLoginFieldErrors,
}

/// Data rendered by the dashboard page.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub username: String,
    pub email: Option<String>,
    pub avatar_url: Option<String>,
    /// Join date as `M/D/YYYY`, or `Unknown`.
    pub joined: String,
}

impl From<&User> for DashboardView {
    fn from(user: &User) -> Self {
        Self {
            username: user.username.clone(),
            email: user.email().map(str::to_owned),
            avatar_url: user.avatar_url().map(str::to_owned),
            joined: user
                .joined_on()
                .unwrap_or_else(|| UNKNOWN_JOIN_DATE.to_owned()),
        }
    }
}

/// Compiled page templates.
pub struct Views {
    tera: Tera,
}

impl Views {
    /// Parse the embedded templates.
    ///
    /// # Errors
    /// Returns the template error when any template fails to parse.
    pub fn new() -> Result<Self, tera::Error> {
        let mut tera = Tera::default();
        tera.add_raw_templates(vec![
            (BASE_TEMPLATE, include_str!("../../../templates/base.html")),
            (LOGIN_TEMPLATE, include_str!("../../../templates/login.html")),
            (
                DASHBOARD_TEMPLATE,
                include_str!("../../../templates/dashboard.html"),
            ),
        ])?;
        Ok(Self { tera })
    }

    /// Render the login page.
    pub fn render_login(&self, view: &LoginView) -> Result<String, Error> {
        self.render(LOGIN_TEMPLATE, view)
    }

    /// Render the dashboard page.
    pub fn render_dashboard(&self, view: &DashboardView) -> Result<String, Error> {
        self.render(DASHBOARD_TEMPLATE, view)
    }

    fn render<T: Serialize>(&self, template: &str, view: &T) -> Result<String, Error> {
        let context = Context::from_serialize(view).map_err(|error| {
            Error::internal(format!("failed to build {template} context: {error}"))
        })?;
        self.tera
            .render(template, &context)
            .map_err(|error| Error::internal(format!("failed to render {template}: {error}")))
    }
}
