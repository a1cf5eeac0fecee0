//! Identity records exchanged with the authentication API.
//!
//! The client never mutates these records; it only displays or caches the copy
//! it received at login.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Identity record issued by the authentication API.
///
/// ## Invariants
/// - Unknown fields are ignored; the backend embeds relationship arrays the
///   client never reads.
/// - `github_id`, `email`, `name`, `avatar_url` and the timestamps default when
///   absent because the OAuth completion response omits some of them.
///
/// # Examples
/// ```
/// use devsync_web::domain::User;
///
/// let user: User = serde_json::from_str(r#"{"id":7,"username":"ada"}"#).unwrap();
/// assert_eq!(user.username, "ada");
/// assert!(user.avatar_url().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Numeric identifier assigned by the backend.
    pub id: u64,
    /// Identity id issued by GitHub; zero for development accounts.
    #[serde(default)]
    pub github_id: i64,
    /// Login handle.
    pub username: String,
    /// Contact email, possibly empty.
    #[serde(default)]
    pub email: String,
    /// Display name, possibly empty.
    #[serde(default)]
    pub name: String,
    /// Avatar image URL, possibly empty.
    #[serde(default)]
    pub avatar_url: String,
    /// Account creation time.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Last update time.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl User {
    /// Avatar URL when one was provided.
    pub fn avatar_url(&self) -> Option<&str> {
        non_empty(&self.avatar_url)
    }

    /// Email when one was provided.
    pub fn email(&self) -> Option<&str> {
        non_empty(&self.email)
    }

    /// Account creation date formatted as `M/D/YYYY`.
    pub fn joined_on(&self) -> Option<String> {
        self.created_at
            .map(|created| created.format("%-m/%-d/%Y").to_string())
    }
}

fn non_empty(value: &str) -> Option<&str> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Successful login payload: a bearer token and the authenticated user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Opaque bearer token; empty when the backend issued none.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub token: String,
    /// Authenticated user.
    pub user: User,
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Failure payload returned by the authentication API on non-2xx statuses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable reason.
    pub error: String,
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    const BACKEND_USER: &str = r#"{
        "id": 12,
        "github_id": 0,
        "username": "ada",
        "email": "ada@example.com",
        "name": "",
        "avatar_url": "",
        "created_at": "2024-03-05T10:11:12.123456Z",
        "updated_at": "2024-03-05T10:11:12.123456Z",
        "projects": [],
        "tasks": null
    }"#;

    #[rstest]
    fn decodes_backend_user_ignoring_relationships() {
        let user: User = serde_json::from_str(BACKEND_USER).expect("decode user");
        assert_eq!(user.id, 12);
        assert_eq!(user.email(), Some("ada@example.com"));
        assert_eq!(user.avatar_url(), None);
        assert_eq!(user.joined_on().as_deref(), Some("3/5/2024"));
    }

    #[rstest]
    fn oauth_shaped_user_decodes_without_timestamps() {
        let user: User = serde_json::from_str(
            r#"{"id":3,"username":"octo","email":"","name":"Octo","avatar_url":"https://a/b.png"}"#,
        )
        .expect("decode user");
        assert_eq!(user.github_id, 0);
        assert!(user.email().is_none());
        assert_eq!(user.avatar_url(), Some("https://a/b.png"));
        assert!(user.joined_on().is_none());
    }

    #[rstest]
    #[case(r#"{"username":"ada"}"#)]
    #[case(r#"{"id":"seven","username":"ada"}"#)]
    #[case(r#"{"id":1,"username":"ada","created_at":"yesterday"}"#)]
    fn rejects_malformed_users(#[case] raw: &str) {
        assert!(serde_json::from_str::<User>(raw).is_err());
    }

    #[rstest]
    #[case::missing(r#"{"user":{"id":1,"username":"ada"}}"#)]
    #[case::null(r#"{"token":null,"user":{"id":1,"username":"ada"}}"#)]
    #[case::empty(r#"{"token":"","user":{"id":1,"username":"ada"}}"#)]
    fn login_response_reads_absent_tokens_as_empty(#[case] raw: &str) {
        let response: LoginResponse = serde_json::from_str(raw).expect("decode");
        assert!(response.token.is_empty());
        assert_eq!(response.user.username, "ada");
    }

    #[rstest]
    fn login_response_requires_a_user() {
        assert!(serde_json::from_str::<LoginResponse>(r#"{"token":"tok"}"#).is_err());
    }
}
