//! DevSync web front: login and dashboard pages over an external
//! authentication API.

pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod server;
pub mod settings;

pub use domain::TraceId;
pub use middleware::Trace;
