//! HTTP inbound adapter serving the login and dashboard pages.

pub mod cache_control;
pub mod dashboard;
pub mod error;
pub mod health;
pub mod login;
pub mod session;
pub mod session_config;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod views;

pub use error::ApiResult;
