use std::fmt;
use std::sync::Arc;

use tracing::debug;

use super::source::{ProcessEnv, ValueSource};

/// A resolved API key. `Debug` never prints the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential([REDACTED])")
    }
}

/// Resolves the credential from an ordered list of variable names.
///
/// Resolution happens on every call, so a key exported after start-up is
/// picked up by the next session.
#[derive(Clone)]
pub struct CredentialResolver {
    candidates: Vec<String>,
    source: Arc<dyn ValueSource>,
}

impl fmt::Debug for CredentialResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialResolver")
            .field("candidates", &self.candidates)
            .finish_non_exhaustive()
    }
}

impl CredentialResolver {
    pub fn new(candidates: Vec<String>, source: Arc<dyn ValueSource>) -> Self {
        Self { candidates, source }
    }

    /// Resolver over the process environment.
    pub fn from_env(candidates: Vec<String>) -> Self {
        Self::new(candidates, Arc::new(ProcessEnv))
    }

    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    /// First usable value among the candidates, in order.
    pub fn resolve(&self) -> Option<Credential> {
        for name in &self.candidates {
            let Some(raw) = self.source.read(name) else {
                continue;
            };
            match normalize(&raw) {
                Some(token) => {
                    debug!(source = %name, "credential resolved");
                    return Some(Credential(token));
                }
                None => debug!(source = %name, "credential candidate is blank, skipping"),
            }
        }
        debug!(candidates = self.candidates.len(), "no credential found");
        None
    }

    pub fn is_available(&self) -> bool {
        self.resolve().is_some()
    }
}

/// Trims whitespace and one pair of matching surrounding quotes.
///
/// Bundlers that inline an unset variable produce the literal text
/// `undefined` or `null`; those count as absent.
fn normalize(raw: &str) -> Option<String> {
    let mut value = raw.trim();
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            value = value[1..value.len() - 1].trim();
            break;
        }
    }
    if value.is_empty() || value == "undefined" || value == "null" {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credential::MapSource;

    fn resolver(candidates: &[&str], pairs: &[(&str, &str)]) -> CredentialResolver {
        CredentialResolver::new(
            candidates.iter().map(|s| s.to_string()).collect(),
            Arc::new(MapSource::from_pairs(pairs.iter().copied())),
        )
    }

    #[test]
    fn first_candidate_wins() {
        let r = resolver(&["A", "B"], &[("A", "key-a"), ("B", "key-b")]);
        assert_eq!(r.resolve(), Some(Credential::new("key-a")));
    }

    #[test]
    fn falls_through_missing_and_blank_candidates() {
        let r = resolver(&["A", "B", "C"], &[("B", "   "), ("C", "key-c")]);
        assert_eq!(r.resolve().unwrap().expose(), "key-c");
    }

    #[test]
    fn trims_whitespace_and_quotes() {
        let r = resolver(&["A"], &[("A", "  \"abc123\"  ")]);
        assert_eq!(r.resolve().unwrap().expose(), "abc123");

        let r = resolver(&["A"], &[("A", "'xyz'")]);
        assert_eq!(r.resolve().unwrap().expose(), "xyz");
    }

    #[test]
    fn mismatched_quotes_are_kept() {
        let r = resolver(&["A"], &[("A", "\"abc'")]);
        assert_eq!(r.resolve().unwrap().expose(), "\"abc'");
    }

    #[test]
    fn empty_quotes_count_as_absent() {
        let r = resolver(&["A", "B"], &[("A", "\"\""), ("B", "real")]);
        assert_eq!(r.resolve().unwrap().expose(), "real");
    }

    #[test]
    fn inlined_undefined_counts_as_absent() {
        let r = resolver(&["A", "B"], &[("A", "undefined"), ("B", "null")]);
        assert_eq!(r.resolve(), None);
        assert!(!r.is_available());
    }

    #[test]
    fn no_candidates_means_unavailable() {
        let r = resolver(&[], &[("A", "x")]);
        assert!(!r.is_available());
    }

    #[test]
    fn availability_matches_resolution() {
        let r = resolver(&["A"], &[("A", "k")]);
        assert!(r.is_available());
    }

    #[test]
    fn debug_output_redacts_secret() {
        let c = Credential::new("super-secret");
        let printed = format!("{c:?}");
        assert!(!printed.contains("super-secret"));
        assert!(printed.contains("REDACTED"));
    }
}
