//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use actix_session::SessionMiddleware;
use actix_session::storage::CookieSessionStore;
use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::info;

use crate::inbound::http::dashboard::{dashboard, logout};
use crate::inbound::http::health::{HealthState, live, ready};
use crate::inbound::http::login::{dev_login, login_page};
use crate::inbound::http::state::HttpState;
use crate::middleware::{RouteGateLayer, Trace};

/// Assemble the application: pages behind the session cookie and the route
/// gate, health checks alongside.
///
/// `session` is injected so tests can supply an insecure cookie middleware.
pub fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
    session: SessionMiddleware<CookieSessionStore>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(session)
        .wrap(RouteGateLayer::default())
        .wrap(Trace)
        .service(login_page)
        .service(dev_login)
        .service(dashboard)
        .service(logout)
        .service(ready)
        .service(live)
}

/// Construct an Actix HTTP server.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let ServerConfig {
        session,
        http_state,
        bind_addr,
    } = config;
    let http_state = web::Data::new(http_state);

    let server = HttpServer::new(move || {
        build_app(
            server_health_state.clone(),
            http_state.clone(),
            session.middleware(),
        )
    })
    .bind(bind_addr)?
    .run();

    info!(%bind_addr, "listening");
    health_state.mark_ready();
    Ok(server)
}
