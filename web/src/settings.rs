//! Application settings loaded via OrthoConfig.
//!
//! Values come from CLI flags and `DEVSYNC_*` environment variables. Every
//! field is optional; accessors apply the defaults.

use std::net::SocketAddr;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

/// Base URL of the authentication API when none is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:8080/api/v1";
const DEFAULT_BIND_ADDR: SocketAddr =
    SocketAddr::new(std::net::IpAddr::V4(std::net::Ipv4Addr::UNSPECIFIED), 3000);

/// Runtime settings for the web front.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "DEVSYNC")]
pub struct WebSettings {
    /// Base URL of the authentication API, including any version prefix.
    pub api_url: Option<String>,
    /// Socket address the HTTP server binds to.
    pub bind_addr: Option<SocketAddr>,
    /// Offer the development login form.
    pub dev_login: Option<bool>,
    /// Timeout for calls to the authentication API, in seconds.
    pub request_timeout_secs: Option<u64>,
}

impl WebSettings {
    /// Configured API base URL, falling back to the local default.
    pub fn api_url(&self) -> &str {
        self.api_url.as_deref().unwrap_or(DEFAULT_API_URL)
    }

    /// Configured bind address, falling back to `0.0.0.0:3000`.
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr.unwrap_or(DEFAULT_BIND_ADDR)
    }

    /// Whether the development login is offered. Defaults to debug builds only.
    pub fn dev_login_enabled(&self) -> bool {
        self.dev_login.unwrap_or(cfg!(debug_assertions))
    }

    /// Outbound request timeout; `None` leaves requests unbounded.
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }
}
