//! Dashboard and logout handlers.
//!
//! ```text
//! GET /dashboard
//! POST /logout
//! ```

use actix_web::{HttpResponse, get, post, web};
use tracing::info;

use crate::domain::LOGIN_PATH;
use crate::inbound::http::ApiResult;
use crate::inbound::http::cache_control::{html_page, see_other};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::views::DashboardView;

/// Render the dashboard for the cached user, or send the browser to login.
///
/// A missing or corrupt session is treated the same way: no user content is
/// rendered and the response redirects to `/login`.
#[get("/dashboard")]
pub async fn dashboard(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<HttpResponse> {
    let Some(cached) = session.repository().load().into_session() else {
        return Ok(see_other(LOGIN_PATH));
    };
    let view = DashboardView::from(cached.user());
    Ok(html_page(state.views.render_dashboard(&view)?))
}

/// Drop the cached session and return to login.
#[post("/logout")]
pub async fn logout(session: SessionContext) -> HttpResponse {
    session.repository().clear();
    info!("session cleared");
    see_other(LOGIN_PATH)
}
