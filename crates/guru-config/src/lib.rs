//! Grammar Guru configuration system.
//!
//! Provides the TOML configuration file, its validation, and discovery of
//! the model-service credential from the environment. All config sections
//! use sensible defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use guru_config::{load_config, CredentialResolver};
//!
//! let config = load_config().expect("failed to load config");
//! let resolver = CredentialResolver::from_env(config.credentials.candidates.clone());
//! println!("credential available: {}", resolver.is_available());
//! ```

pub mod credential;
pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use credential::{Credential, CredentialResolver, MapSource, ProcessEnv, ValueSource};
pub use schema::{GuruConfig, CONFIG_SCHEMA_VERSION};

use guru_common::ConfigError;
use std::path::Path;
use tracing::warn;

/// Load config from the platform default path, creating it if missing.
///
/// Sections with out-of-range values are replaced by their defaults and
/// reported once as a warning; only unreadable or unparsable files fail.
pub fn load_config() -> Result<GuruConfig, ConfigError> {
    Ok(checked(toml_loader::load_default()?))
}

/// Load config from an explicit path (the `--config` override).
pub fn load_config_from(path: &Path) -> Result<GuruConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }
    Ok(checked(toml_loader::load_from_path(path)?))
}

fn checked(mut config: GuruConfig) -> GuruConfig {
    if let Err(e) = validation::repair(&mut config) {
        warn!("{e}; using defaults for the affected sections");
    }
    config
}
