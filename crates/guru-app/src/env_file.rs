//! `.env` loading. Values already present in the process environment win.

use std::path::PathBuf;

/// Load environment variables from the first `.env` file found (KEY=VALUE lines).
pub fn load_dotenv() {
    let mut candidates = vec![PathBuf::from(".env")];
    if let Ok(dir) = guru_platform::config_dir() {
        candidates.push(dir.join(".env"));
    }

    for path in &candidates {
        if let Ok(contents) = std::fs::read_to_string(path) {
            for (key, value) in parse(&contents) {
                if std::env::var_os(&key).is_none() {
                    std::env::set_var(key, value);
                }
            }
            return;
        }
    }
}

/// Parse `.env` contents into key/value pairs, skipping blanks and comments.
pub fn parse(contents: &str) -> Vec<(String, String)> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| {
            let line = line.strip_prefix("export ").unwrap_or(line);
            let (key, value) = line.split_once('=')?;
            let key = key.trim();
            if key.is_empty() {
                return None;
            }
            let value = value.trim().trim_matches('"').trim_matches('\'');
            Some((key.to_string(), value.to_string()))
        })
        .collect()
}
