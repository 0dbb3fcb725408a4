//! Path resolution for restbell configuration and data files.
//!
//! All restbell data is stored in `~/.restbell/`:
//! - `config.yaml` - Main configuration file
//! - `state.json` - Persisted timer settings and the reminder list

use std::path::PathBuf;

use crate::error::RestbellError;

/// Paths to restbell configuration and data files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.restbell/`
    pub root: PathBuf,
    /// Config file: `~/.restbell/config.yaml`
    pub config_file: PathBuf,
    /// State file: `~/.restbell/state.json`
    pub state_file: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, RestbellError> {
        let home = std::env::var("HOME").map_err(|_| {
            RestbellError::Config("Could not determine home directory".to_string())
        })?;

        let root = PathBuf::from(home).join(".restbell");

        Ok(Self {
            config_file: root.join("config.yaml"),
            state_file: root.join("state.json"),
            root,
        })
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            state_file: root.join("state.json"),
            root,
        }
    }

    /// Ensure the root directory exists, creating it if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn ensure_dirs(&self) -> Result<(), RestbellError> {
        if !self.root.exists() {
            std::fs::create_dir_all(&self.root).map_err(|e| {
                RestbellError::Config(format!(
                    "Failed to create directory {:?}: {}",
                    self.root, e
                ))
            })?;
        }
        Ok(())
    }
}

impl Default for Paths {
    fn default() -> Self {
        Self::new().unwrap_or_else(|_| {
            // Fallback to current directory if home cannot be determined
            Self::with_root(PathBuf::from(".restbell"))
        })
    }
}
