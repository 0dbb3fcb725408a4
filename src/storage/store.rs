//! Key-value state persistence.
//!
//! All durable state lives in a single JSON object file
//! (`~/.restbell/state.json`), one entry per key. Reads are total: any
//! failure (missing file, missing key, malformed value) yields the caller's
//! fallback. Writes report failure so callers can warn instead of losing
//! data silently.

use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::config::Paths;
use crate::error::RestbellError;

/// Persisted key for the selected rest duration in seconds.
pub const KEY_REST_SECONDS: &str = "rest_sec";
/// Persisted key for the total number of sets.
pub const KEY_TOTAL_SETS: &str = "total_sets";
/// Persisted key for the current set number.
pub const KEY_CURRENT_SET: &str = "current_set";
/// Persisted key for the supplement reminder list.
pub const KEY_REMINDERS: &str = "supps";

/// JSON key-value store over a single state file.
pub struct StateStore {
    /// Path to the state file.
    state_file: PathBuf,
}

impl StateStore {
    /// Create a store over the default state file, ensuring the data
    /// directory exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory cannot be created.
    pub fn new() -> Result<Self, RestbellError> {
        let paths = Paths::default();
        paths.ensure_dirs()?;

        Ok(Self {
            state_file: paths.state_file,
        })
    }

    /// Create a store over a specific file (for testing).
    #[must_use]
    pub const fn with_file(state_file: PathBuf) -> Self {
        Self { state_file }
    }

    /// Read the value stored under `key`, or `fallback` on any failure.
    ///
    /// Absent file, absent key, unreadable file and type mismatch all
    /// resolve to the fallback; this method never fails.
    #[must_use]
    pub fn get<T: DeserializeOwned>(&self, key: &str, fallback: T) -> T {
        self.read_map()
            .remove(key)
            .and_then(|value| serde_json::from_value(value).ok())
            .unwrap_or(fallback)
    }

    /// Write `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be serialized or the state
    /// file cannot be written.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), RestbellError> {
        let mut map = self.read_map();
        map.insert(key.to_string(), serde_json::to_value(value)?);

        let contents = serde_json::to_string_pretty(&Value::Object(map))?;
        std::fs::write(&self.state_file, contents).map_err(RestbellError::Io)?;
        Ok(())
    }

    /// Load the state file as a JSON object, empty on any failure.
    fn read_map(&self) -> Map<String, Value> {
        std::fs::read_to_string(&self.state_file)
            .ok()
            .and_then(|contents| serde_json::from_str::<Value>(&contents).ok())
            .and_then(|value| match value {
                Value::Object(map) => Some(map),
                _ => None,
            })
            .unwrap_or_default()
    }
}
