use std::path::PathBuf;

use guru_common::PlatformError;

pub(super) const APP_NAME: &str = "guru";

/// Returns the platform-specific configuration directory.
///
/// - macOS: `~/Library/Application Support/guru`
/// - Linux: `$XDG_CONFIG_HOME/guru` (defaults to `~/.config/guru`)
/// - Windows: `%APPDATA%\guru`
pub fn config_dir() -> Result<PathBuf, PlatformError> {
    Ok(dirs::config_dir()
        .ok_or_else(|| PlatformError::PathError("could not determine config directory".into()))?
        .join(APP_NAME))
}

/// Returns the platform-specific data directory.
///
/// - macOS: `~/Library/Application Support/guru`
/// - Linux: `$XDG_DATA_HOME/guru` (defaults to `~/.local/share/guru`)
/// - Windows: `%APPDATA%\guru`
pub fn data_dir() -> Result<PathBuf, PlatformError> {
    Ok(dirs::data_dir()
        .ok_or_else(|| PlatformError::PathError("could not determine data directory".into()))?
        .join(APP_NAME))
}

/// Returns the path to the main configuration file.
pub fn config_file() -> Result<PathBuf, PlatformError> {
    Ok(config_dir()?.join("config.toml"))
}

/// Directory holding the persisted key-value slots (`data_dir()/history`).
pub fn history_dir() -> Result<PathBuf, PlatformError> {
    Ok(data_dir()?.join("history"))
}
