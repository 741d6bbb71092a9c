pub mod paths;
pub mod storage;

pub use paths::{config_dir, config_file, data_dir, ensure_dirs, history_dir};
pub use storage::{FileStore, KeyValueStore, MemoryStore};
