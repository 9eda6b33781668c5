//! Current-user identity
//!
//! Authorship of catalog entries is tracked by username; mutation and
//! removal are gated on it.

/// Fallback identity when no username is available
pub const UNKNOWN_USER: &str = "unknown";

/// Get the current username from the environment
///
/// Checks `USER`, then `USERNAME`, falling back to [`UNKNOWN_USER`].
#[must_use]
pub fn current_username() -> String {
    std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| UNKNOWN_USER.to_string())
}
