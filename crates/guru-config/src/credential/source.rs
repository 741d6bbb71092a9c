//! Where configuration values are read from.

use std::collections::HashMap;

/// Read access to named configuration values.
///
/// A source that cannot provide a name (unset, unreadable, not UTF-8) answers
/// `None`; it never fails.
pub trait ValueSource: Send + Sync {
    fn read(&self, name: &str) -> Option<String>;
}

/// The process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl ValueSource for ProcessEnv {
    fn read(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

/// A fixed set of values, for embedding hosts and tests.
#[derive(Debug, Clone, Default)]
pub struct MapSource {
    values: HashMap<String, String>,
}

impl MapSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }
}

impl ValueSource for MapSource {
    fn read(&self, name: &str) -> Option<String> {
        self.values.get(name).cloned()
    }
}
