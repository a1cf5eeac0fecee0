//! Route gate policy.
//!
//! Decides which requests the gate looks at and which of those target a
//! protected area. The decision never blocks: protected pages check the cached
//! session themselves after the gate has forwarded the request.

/// First path segments the gate never inspects.
pub const EXCLUDED_PREFIXES: [&str; 4] = ["api", "static", "favicon.ico", "health"];
/// Path prefixes intended to require a session.
pub const PROTECTED_PREFIXES: [&str; 2] = ["/dashboard", "/projects"];

/// Per-request gate decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    /// Path is excluded from the gate entirely.
    Bypass,
    /// Path is forwarded; `protected` records whether it is a guarded area.
    Forward { protected: bool },
}

/// Matcher over the exclusion list and the protected prefixes.
///
/// # Examples
/// ```
/// use devsync_web::domain::{GateDecision, RouteGate};
///
/// let gate = RouteGate::default();
/// assert_eq!(gate.decide("/api/users"), GateDecision::Bypass);
/// assert_eq!(gate.decide("/dashboard"), GateDecision::Forward { protected: true });
/// assert_eq!(gate.decide("/login"), GateDecision::Forward { protected: false });
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteGate {
    excluded: Vec<String>,
    protected: Vec<String>,
}

impl Default for RouteGate {
    fn default() -> Self {
        Self::new(EXCLUDED_PREFIXES, PROTECTED_PREFIXES)
    }
}

impl RouteGate {
    /// Build a gate from exclusion prefixes (matched after the leading `/`)
    /// and protected path prefixes.
    pub fn new<E, P>(excluded: E, protected: P) -> Self
    where
        E: IntoIterator,
        E::Item: Into<String>,
        P: IntoIterator,
        P::Item: Into<String>,
    {
        Self {
            excluded: excluded.into_iter().map(Into::into).collect(),
            protected: protected.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether the gate applies to `path` at all.
    pub fn applies_to(&self, path: &str) -> bool {
        let rest = path.strip_prefix('/').unwrap_or(path);
        !self
            .excluded
            .iter()
            .any(|prefix| rest.starts_with(prefix.as_str()))
    }

    /// Whether `path` falls under a protected prefix.
    pub fn is_protected(&self, path: &str) -> bool {
        self.protected
            .iter()
            .any(|prefix| path.starts_with(prefix.as_str()))
    }

    /// Decide what happens to a request for `path`.
    pub fn decide(&self, path: &str) -> GateDecision {
        if !self.applies_to(path) {
            return GateDecision::Bypass;
        }
        // TODO: check the cached session before forwarding protected paths;
        // until then the dashboard handler is the only guard.
        GateDecision::Forward {
            protected: self.is_protected(path),
        }
    }
}
