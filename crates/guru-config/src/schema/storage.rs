//! Chat history persistence settings.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Slot key under which the conversation is stored.
pub const DEFAULT_HISTORY_KEY: &str = "grammar-guru-chat-history";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub history_key: String,
    /// Overrides the platform history directory when set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            history_key: DEFAULT_HISTORY_KEY.into(),
            data_dir: None,
        }
    }
}
