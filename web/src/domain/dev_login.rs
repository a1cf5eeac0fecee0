//! Development login form and its validation.
//!
//! Keep inbound payload parsing outside the use case by exposing a
//! constructor that validates raw form strings before anything talks to the
//! authentication API.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Message shown when the username field is empty.
pub const USERNAME_REQUIRED: &str = "Username is required";
/// Message shown when the email field is not a valid address.
pub const EMAIL_INVALID: &str = "Invalid email address";

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        // Leading dots and `..` runs are rejected separately; the regex crate
        // has no look-around.
        let pattern = r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$";
        Regex::new(pattern)
            .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

fn is_valid_email(email: &str) -> bool {
    !email.starts_with('.') && !email.contains("..") && email_regex().is_match(email)
}

/// Raw form submission as posted by the browser.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DevLoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
}

/// Per-field validation messages; at least one is set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DevLoginFieldErrors {
    pub username: Option<&'static str>,
    pub email: Option<&'static str>,
}

impl DevLoginFieldErrors {
    fn is_empty(&self) -> bool {
        self.username.is_none() && self.email.is_none()
    }
}

/// Validated development login payload sent to `POST /auth/dev-login`.
///
/// ## Invariants
/// - `username` is non-empty. Whitespace is kept as typed.
/// - `email` is syntactically valid.
///
/// # Examples
/// ```
/// use devsync_web::domain::{DevLoginForm, DevLoginRequest};
///
/// let form = DevLoginForm { username: "ada".into(), email: "ada@example.com".into() };
/// let request = DevLoginRequest::try_from_form(&form).unwrap();
/// assert_eq!(request.username(), "ada");
///
/// let bad = DevLoginForm { username: String::new(), email: "nope".into() };
/// let errors = DevLoginRequest::try_from_form(&bad).unwrap_err();
/// assert!(errors.username.is_some() && errors.email.is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DevLoginRequest {
    username: String,
    email: String,
}

impl DevLoginRequest {
    /// Validate every field and collect all failures.
    pub fn try_from_form(form: &DevLoginForm) -> Result<Self, DevLoginFieldErrors> {
        let errors = DevLoginFieldErrors {
            username: form.username.is_empty().then_some(USERNAME_REQUIRED),
            email: (!is_valid_email(&form.email)).then_some(EMAIL_INVALID),
        };
        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(Self {
            username: form.username.clone(),
            email: form.email.clone(),
        })
    }

    /// Username exactly as submitted.
    pub fn username(&self) -> &str {
        self.username.as_str()
    }

    /// Email exactly as submitted.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }
}
