//! Current-user context supplied by the host shell.
//!
//! The host passes the ambient display name in explicitly at registry
//! construction; a missing name resolves to [`UNKNOWN_USER`] rather than
//! an error.

/// Fallback shown when the host supplies no display name.
pub const UNKNOWN_USER: &str = "unknown user";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserContext {
    display_name: Option<String>,
}

impl UserContext {
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            display_name: Some(display_name.into()),
        }
    }

    /// A context for hosts that cannot resolve the current user.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// The display name, or [`UNKNOWN_USER`] when none was supplied.
    pub fn resolved_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(UNKNOWN_USER)
    }
}
