//! Reqwest-backed authentication API adapter.
//!
//! This adapter owns transport details only: endpoint resolution, request
//! serialisation, status mapping and JSON decoding into domain records.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use tracing::debug;

use crate::domain::ports::{AuthApi, AuthApiError};
use crate::domain::{DevLoginRequest, ErrorResponse, LoginResponse};

const DEFAULT_USER_AGENT: &str = "devsync-web/0.1";
const DEV_LOGIN_PATH: &str = "auth/dev-login";
const GITHUB_LOGIN_PATH: &str = "auth/github";

/// Errors raised while building the adapter.
#[derive(Debug, thiserror::Error)]
pub enum AuthApiSetupError {
    /// The configured base URL is not a valid absolute URL.
    #[error("invalid authentication API URL `{url}`: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    /// The base URL cannot carry paths (for example `mailto:`).
    #[error("authentication API URL `{url}` cannot be used as a base")]
    NotABase { url: String },
    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Base URL of the authentication API with a guaranteed trailing slash so
/// relative joins keep any path prefix such as `/api/v1`.
///
/// # Examples
/// ```
/// use devsync_web::outbound::ApiBaseUrl;
///
/// let base = ApiBaseUrl::parse("http://localhost:8080/api/v1").unwrap();
/// assert_eq!(
///     base.github_login_url().as_str(),
///     "http://localhost:8080/api/v1/auth/github"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiBaseUrl(Url);

impl ApiBaseUrl {
    /// Parse and normalise a base URL.
    pub fn parse(raw: &str) -> Result<Self, AuthApiSetupError> {
        let mut url = Url::parse(raw).map_err(|source| AuthApiSetupError::InvalidUrl {
            url: raw.to_owned(),
            source,
        })?;
        if url.cannot_be_a_base() {
            return Err(AuthApiSetupError::NotABase {
                url: raw.to_owned(),
            });
        }
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        Ok(Self(url))
    }

    fn endpoint(&self, path: &str) -> Url {
        match self.0.join(path) {
            Ok(url) => url,
            // Constant relative paths always join onto a base URL.
            Err(_) => self.0.clone(),
        }
    }

    /// Full-page redirect target that starts GitHub OAuth.
    pub fn github_login_url(&self) -> Url {
        self.endpoint(GITHUB_LOGIN_PATH)
    }

    /// Development login endpoint.
    pub fn dev_login_url(&self) -> Url {
        self.endpoint(DEV_LOGIN_PATH)
    }
}

/// Authentication API adapter performing JSON requests against one base URL.
pub struct HttpAuthApi {
    client: Client,
    base: ApiBaseUrl,
}

impl HttpAuthApi {
    /// Build an adapter. `timeout` of `None` leaves requests unbounded.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(base: ApiBaseUrl, timeout: Option<Duration>) -> Result<Self, AuthApiSetupError> {
        let mut builder = Client::builder().user_agent(DEFAULT_USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            base,
        })
    }
}

#[async_trait]
impl AuthApi for HttpAuthApi {
    async fn dev_login(&self, request: &DevLoginRequest) -> Result<LoginResponse, AuthApiError> {
        let url = self.base.dev_login_url();
        debug!(%url, "posting development login");
        let response = self
            .client
            .post(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .json(request)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }

        serde_json::from_slice(body.as_ref()).map_err(|error| {
            AuthApiError::decode(format!("invalid login response payload: {error}"))
        })
    }
}

fn map_transport_error(error: reqwest::Error) -> AuthApiError {
    if error.is_timeout() {
        AuthApiError::transport(format!("request timed out: {error}"))
    } else {
        AuthApiError::transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> AuthApiError {
    let message = serde_json::from_slice::<ErrorResponse>(body)
        .ok()
        .map(|payload| payload.error);
    AuthApiError::rejected(status.as_u16(), message)
}

#[cfg(test)]
mod tests {
    //! Regression coverage for non-network helpers.

    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("http://localhost:8080/api/v1", "http://localhost:8080/api/v1/auth/dev-login")]
    #[case("http://localhost:8080/api/v1/", "http://localhost:8080/api/v1/auth/dev-login")]
    #[case("https://auth.example.com", "https://auth.example.com/auth/dev-login")]
    fn joins_endpoints_under_base_path(#[case] base: &str, #[case] expected: &str) {
        let base = ApiBaseUrl::parse(base).expect("valid base");
        assert_eq!(base.dev_login_url().as_str(), expected);
    }

    #[rstest]
    #[case("not a url")]
    #[case("/api/v1")]
    fn rejects_relative_or_garbage_urls(#[case] raw: &str) {
        assert!(matches!(
            ApiBaseUrl::parse(raw),
            Err(AuthApiSetupError::InvalidUrl { .. })
        ));
    }

    #[rstest]
    fn rejects_non_base_urls() {
        assert!(matches!(
            ApiBaseUrl::parse("mailto:ops@example.com"),
            Err(AuthApiSetupError::NotABase { .. })
        ));
    }

    #[rstest]
    #[case(StatusCode::UNAUTHORIZED, br#"{"error":"Invalid user"}"#.as_slice(), Some("Invalid user"))]
    #[case(StatusCode::BAD_REQUEST, br#"{"error":""}"#.as_slice(), Some(""))]
    #[case(StatusCode::INTERNAL_SERVER_ERROR, b"<html>oops</html>".as_slice(), None)]
    #[case(StatusCode::BAD_GATEWAY, b"".as_slice(), None)]
    fn maps_statuses_with_backend_reason(
        #[case] status: StatusCode,
        #[case] body: &[u8],
        #[case] expected: Option<&str>,
    ) {
        let error = map_status_error(status, body);
        assert_eq!(
            error,
            AuthApiError::rejected(status.as_u16(), expected.map(str::to_owned))
        );
    }
}
