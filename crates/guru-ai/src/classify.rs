//! Best-effort mapping of opaque failure signals to user-facing categories.
//!
//! The provider's error texts are not a contract. Only the three categories
//! are; the markers below may change with the provider.

use std::sync::OnceLock;

use regex::Regex;

/// What the user is told when a turn fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// No API key could be found.
    CredentialMissing,
    /// The service rejected the API key.
    Auth,
    /// Network, service or payload failure unrelated to the key.
    Transport,
}

fn auth_markers() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"(?i)\b(401|403)\b|api[ _-]?key|unauthenticated|unauthorized|permission[ _]denied",
        )
        .expect("auth marker pattern is valid")
    })
}

/// Classify a failure message.
///
/// Anything that does not look like an authentication problem is a
/// transport failure.
pub fn classify_failure(signal: &str) -> FailureKind {
    if auth_markers().is_match(signal) {
        FailureKind::Auth
    } else {
        FailureKind::Transport
    }
}
