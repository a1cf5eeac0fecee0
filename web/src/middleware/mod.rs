//! Request middleware.
//!
//! Purpose: define middleware components for request lifecycle concerns such
//! as tracing and the route gate.

pub mod route_gate;
pub mod trace;

pub use route_gate::RouteGateLayer;
pub use trace::Trace;
