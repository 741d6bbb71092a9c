//! Configuration schema types for Grammar Guru.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod chat;
mod credentials;
mod model;
mod storage;
mod system;

pub use chat::*;
pub use credentials::*;
pub use model::*;
pub use storage::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GuruConfig {
    pub model: ModelConfig,
    pub credentials: CredentialsConfig,
    pub storage: StorageConfig,
    pub chat: ChatConfig,
    pub logging: LoggingConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_model_settings() {
        let config = GuruConfig::default();
        assert_eq!(config.model.name, "gemini-2.5-flash");
        assert_eq!(config.model.temperature, 0.7);
        assert_eq!(config.model.max_output_tokens, 2048);
        assert_eq!(config.model.request_timeout_secs, 120);
        assert!(config.model.system_instruction.contains("Grammar Guru"));
    }

    #[test]
    fn default_credential_candidates_end_with_plain_names() {
        let config = GuruConfig::default();
        let candidates = &config.credentials.candidates;
        assert_eq!(candidates.first().map(String::as_str), Some("VAIT_API_KEY"));
        assert_eq!(candidates.last().map(String::as_str), Some("API_KEY"));
        assert!(candidates.iter().any(|c| c == "GEMINI_API_KEY"));
    }

    #[test]
    fn default_storage_and_chat() {
        let config = GuruConfig::default();
        assert_eq!(config.storage.history_key, "grammar-guru-chat-history");
        assert!(config.storage.data_dir.is_none());
        assert!(config.chat.confirm_reset);
        assert!(!config.chat.greeting.is_empty());
    }

    #[test]
    fn default_logging_is_quiet() {
        assert_eq!(GuruConfig::default().logging.level, "guru=warn");
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config: GuruConfig = toml::from_str(
            r#"
[model]
temperature = 0.2

[chat]
confirm_reset = false
"#,
        )
        .unwrap();
        assert_eq!(config.model.temperature, 0.2);
        assert_eq!(config.model.name, "gemini-2.5-flash");
        assert!(!config.chat.confirm_reset);
        assert_eq!(config.storage.history_key, "grammar-guru-chat-history");
    }

    #[test]
    fn default_config_round_trips_through_toml() {
        let config = GuruConfig::default();
        let text = toml::to_string(&config).unwrap();
        let parsed: GuruConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed.model.name, config.model.name);
        assert_eq!(parsed.credentials.candidates, config.credentials.candidates);
        assert_eq!(parsed.chat.greeting, config.chat.greeting);
    }
}
