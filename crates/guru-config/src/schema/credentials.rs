//! Credential discovery settings.

use serde::{Deserialize, Serialize};

/// Environment variable names probed for the API key, in order.
///
/// Bundler- and hosting-specific spellings come first, plain names last.
pub const DEFAULT_CREDENTIAL_CANDIDATES: &[&str] = &[
    "VAIT_API_KEY",
    "VITE_GEMINI_API_KEY",
    "NEXT_PUBLIC_GEMINI_API_KEY",
    "REACT_APP_GEMINI_API_KEY",
    "GEMINI_API_KEY",
    "GOOGLE_API_KEY",
    "API_KEY",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CredentialsConfig {
    pub candidates: Vec<String>,
}

impl Default for CredentialsConfig {
    fn default() -> Self {
        Self {
            candidates: DEFAULT_CREDENTIAL_CANDIDATES
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}
