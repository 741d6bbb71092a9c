//! Reading `config.toml`, writing the template on first run.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use guru_common::ConfigError;
use tracing::info;

use crate::schema::GuruConfig;

use super::template::default_config_toml;

/// Parse a TOML file into a config. Missing fields take serde defaults;
/// values are not range-checked here.
pub fn load_from_path(path: &Path) -> Result<GuruConfig, ConfigError> {
    let content = fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;
    let config = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("{}: {e}", path.display())))?;
    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load `<config_dir>/config.toml`, writing the documented template there
/// when no file exists yet.
pub fn load_default() -> Result<GuruConfig, ConfigError> {
    let path = guru_platform::config_file()?;
    match fs::metadata(&path) {
        Ok(_) => load_from_path(&path),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            create_default_config(&path)?;
            Ok(GuruConfig::default())
        }
        Err(e) => Err(ConfigError::ParseError(format!(
            "cannot access {}: {e}",
            path.display()
        ))),
    }
}

/// Write the template to `path`, creating parent directories.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    let write = || -> std::io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, default_config_toml())
    };
    write().map_err(|e| {
        ConfigError::ParseError(format!("failed to write {}: {e}", path.display()))
    })?;
    info!("wrote default config to {}", path.display());
    Ok(())
}
