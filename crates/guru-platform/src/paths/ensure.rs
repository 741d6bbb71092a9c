use std::fs;

use guru_common::PlatformError;

use super::resolve::{config_dir, data_dir, history_dir};

/// Creates the config, data and history directories if missing.
pub fn ensure_dirs() -> Result<(), PlatformError> {
    fs::create_dir_all(config_dir()?).map_err(|e| PlatformError::PathError(e.to_string()))?;
    fs::create_dir_all(data_dir()?).map_err(|e| PlatformError::PathError(e.to_string()))?;
    fs::create_dir_all(history_dir()?).map_err(|e| PlatformError::PathError(e.to_string()))?;
    Ok(())
}
