use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use guru_common::PlatformError;
use tracing::debug;

use super::{validate_key, KeyValueStore};

/// Stores each slot as `<dir>/<key>.json`.
///
/// Writes go to a hidden temp file which is synced and then renamed over the
/// target, so a crash mid-write never leaves a truncated slot behind.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Store rooted at the platform history directory.
    pub fn open_default() -> Result<Self, PlatformError> {
        Ok(Self::new(crate::paths::history_dir()?))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn slot_path(&self, key: &str) -> Result<PathBuf, PlatformError> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{key}.json")))
    }

    fn temp_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!(".{key}.json.tmp"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, PlatformError> {
        let path = self.slot_path(key)?;
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(PlatformError::StorageError(format!(
                "failed to read {}: {e}",
                path.display()
            ))),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PlatformError> {
        let path = self.slot_path(key)?;
        fs::create_dir_all(&self.dir).map_err(|e| {
            PlatformError::StorageError(format!(
                "failed to create {}: {e}",
                self.dir.display()
            ))
        })?;

        let tmp_path = self.temp_path(key);
        let write = || -> std::io::Result<()> {
            let mut tmp = File::create(&tmp_path)?;
            tmp.write_all(value.as_bytes())?;
            tmp.sync_all()?;
            drop(tmp);
            fs::rename(&tmp_path, &path)
        };
        write().map_err(|e| {
            let _ = fs::remove_file(&tmp_path);
            PlatformError::StorageError(format!("failed to write {}: {e}", path.display()))
        })?;

        debug!(key, bytes = value.len(), "slot written");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), PlatformError> {
        let path = self.slot_path(key)?;
        match fs::remove_file(&path) {
            Ok(()) => {
                debug!(key, "slot removed");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(PlatformError::StorageError(format!(
                "failed to remove {}: {e}",
                path.display()
            ))),
        }
    }
}
