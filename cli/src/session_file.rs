//! JSON file standing in for browser `localStorage`.
//!
//! The file holds a flat string map (`{"token": "...", "role": "..."}`).
//! Clearing deletes the file. I/O problems are logged and treated as an empty
//! store, matching how the browser ignores storage failures.

#[cfg(test)]
#[path = "session_file_test.rs"]
mod session_file_test;

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::PathBuf;

use storefront::KeyValueStore;

pub const DEFAULT_SESSION_FILE: &str = ".flashmart-session.json";

#[derive(Clone, Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[cfg(test)]
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    fn read(&self) -> BTreeMap<String, String> {
        match std::fs::read_to_string(&self.path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                tracing::warn!(path = %self.path.display(), error = %e, "ignoring malformed session file");
                BTreeMap::new()
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "failed to read session file");
                BTreeMap::new()
            }
        }
    }

    fn write(&self, items: &BTreeMap<String, String>) {
        let result = serde_json::to_string_pretty(items)
            .map_err(std::io::Error::other)
            .and_then(|raw| std::fs::write(&self.path, raw));
        if let Err(e) = result {
            tracing::warn!(path = %self.path.display(), error = %e, "failed to write session file");
        }
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.read().remove(key)
    }

    fn set(&self, key: &str, value: &str) {
        let mut items = self.read();
        items.insert(key.to_owned(), value.to_owned());
        self.write(&items);
    }

    fn clear(&self) {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "failed to remove session file");
            }
        }
    }
}
