//! Login page handlers.
//!
//! ```text
//! GET /login
//! GET /login?dev=show
//! POST /login/dev  username=ada&email=ada%40example.com
//! ```

use actix_web::{HttpResponse, get, post, web};
use serde::Deserialize;

use crate::domain::{DASHBOARD_PATH, DevLoginForm, DevLoginOutcome, Error};
use crate::inbound::http::ApiResult;
use crate::inbound::http::cache_control::{html_page, see_other};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::views::LoginView;

const SHOW_DEV_LOGIN: &str = "show";

/// Query string accepted by `GET /login`.
#[derive(Debug, Default, Deserialize)]
pub struct LoginQuery {
    /// `show` expands the development login form.
    pub dev: Option<String>,
}

impl LoginQuery {
    fn shows_dev_login(&self) -> bool {
        self.dev.as_deref() == Some(SHOW_DEV_LOGIN)
    }
}

fn base_view(state: &HttpState) -> LoginView {
    LoginView {
        github_login_url: state.github_login_url.clone(),
        dev_login_enabled: state.dev_login_enabled,
        ..LoginView::default()
    }
}

/// Render the login page.
#[get("/login")]
pub async fn login_page(
    state: web::Data<HttpState>,
    query: web::Query<LoginQuery>,
) -> ApiResult<HttpResponse> {
    let view = LoginView {
        show_dev_login: state.dev_login_enabled && query.shows_dev_login(),
        ..base_view(&state)
    };
    Ok(html_page(state.views.render_login(&view)?))
}

/// Submit the development login form.
///
/// Success caches the session and redirects to the dashboard; every other
/// outcome re-renders the expanded form.
#[post("/login/dev")]
pub async fn dev_login(
    state: web::Data<HttpState>,
    session: SessionContext,
    form: web::Form<DevLoginForm>,
) -> ApiResult<HttpResponse> {
    if !state.dev_login_enabled {
        return Err(Error::not_found("development login is disabled"));
    }

    let form = form.into_inner();
    let outcome = state.login.submit(&form, &session).await?;
    let mut view = LoginView {
        show_dev_login: true,
        username: form.username,
        email: form.email,
        ..base_view(&state)
    };
    match outcome {
        DevLoginOutcome::SignedIn(_) => return Ok(see_other(DASHBOARD_PATH)),
        DevLoginOutcome::Invalid(errors) => view.field_errors = errors,
        DevLoginOutcome::Failed(message) => view.error = Some(message),
        DevLoginOutcome::NoToken => {}
    }
    Ok(html_page(state.views.render_login(&view)?))
}
