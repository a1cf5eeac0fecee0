//! Web front entry-point: loads settings, wires the authentication API
//! adapter and serves the pages.

use std::sync::Arc;

use actix_web::web;
use color_eyre::eyre::{Context, Result, eyre};
use mockable::DefaultEnv;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use devsync_web::domain::DevLoginService;
use devsync_web::inbound::http::health::HealthState;
use devsync_web::inbound::http::session_config::{BuildMode, session_settings_from_env};
use devsync_web::inbound::http::state::HttpState;
use devsync_web::inbound::http::views::Views;
use devsync_web::outbound::{ApiBaseUrl, HttpAuthApi};
use devsync_web::server::{ServerConfig, create_server};
use devsync_web::settings::WebSettings;

#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = WebSettings::load_from_iter(std::env::args_os())
        .map_err(|error| eyre!("failed to load settings: {error}"))?;
    let session = session_settings_from_env(&DefaultEnv::new(), BuildMode::from_debug_assertions())
        .wrap_err("invalid session cookie configuration")?;

    let base = ApiBaseUrl::parse(settings.api_url())?;
    let api = HttpAuthApi::new(base.clone(), settings.request_timeout())?;
    let views = Views::new().wrap_err("failed to parse page templates")?;
    let http_state = HttpState::new(
        DevLoginService::new(Arc::new(api)),
        Arc::new(views),
        base.github_login_url().to_string(),
        settings.dev_login_enabled(),
    );
    info!(
        api_url = settings.api_url(),
        dev_login = settings.dev_login_enabled(),
        "starting devsync web"
    );

    let health_state = web::Data::new(HealthState::new());
    let config = ServerConfig::new(session, http_state, settings.bind_addr());
    let server = create_server(health_state, config)?;
    server.await?;
    Ok(())
}
