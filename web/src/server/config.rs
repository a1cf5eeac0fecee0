//! HTTP server configuration object.

use std::net::SocketAddr;

use crate::inbound::http::session_config::SessionSettings;
use crate::inbound::http::state::HttpState;

/// Everything needed to build the HTTP server.
pub struct ServerConfig {
    pub(crate) session: SessionSettings,
    pub(crate) http_state: HttpState,
    pub(crate) bind_addr: SocketAddr,
}

impl ServerConfig {
    /// Construct a server configuration.
    #[must_use]
    pub fn new(session: SessionSettings, http_state: HttpState, bind_addr: SocketAddr) -> Self {
        Self {
            session,
            http_state,
            bind_addr,
        }
    }
}
