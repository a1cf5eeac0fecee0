//! Domain primitives and use cases.
//!
//! Purpose: define the records exchanged with the authentication API, the
//! cached session and its repository, the development login use case and the
//! route gate policy. Nothing here knows about Actix or reqwest.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure payload.
//! - User / LoginResponse / ErrorResponse: authentication API records.
//! - Session / SessionRepository / SessionDecode: the client-local cache.
//! - DevLoginForm / DevLoginRequest / DevLoginService: development login.
//! - RouteGate / GateDecision: route filter policy.
//! - TraceId: request-scoped correlation identifier.

pub mod dev_login;
pub mod dev_login_service;
pub mod error;
pub mod ports;
pub mod route_gate;
pub mod session;
pub mod trace_id;
pub mod user;

pub use self::dev_login::{DevLoginFieldErrors, DevLoginForm, DevLoginRequest};
pub use self::dev_login_service::{DASHBOARD_PATH, DevLoginOutcome, DevLoginService, LOGIN_PATH};
pub use self::error::{Error, ErrorCode};
pub use self::route_gate::{GateDecision, RouteGate};
pub use self::session::{Session, SessionDecode, SessionDecodeError, SessionRepository};
pub use self::trace_id::TraceId;
pub use self::user::{ErrorResponse, LoginResponse, User};
