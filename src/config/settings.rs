//! Configuration settings for restbell.
//!
//! Settings are loaded from `~/.restbell/config.yaml`.

use serde::{Deserialize, Serialize};

use crate::cli::args::OutputFormat;
use crate::config::Paths;
use crate::error::RestbellError;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// General settings.
    pub general: GeneralConfig,
    /// Rest timer settings.
    pub timer: TimerConfig,
    /// Supplement reminder settings.
    pub reminders: ReminderConfig,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Default output format.
    #[serde(default = "default_output_format")]
    pub default_output: OutputFormat,
}

/// Rest timer settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TimerConfig {
    /// Rest duration used before the user has picked one, in seconds.
    #[serde(default = "default_rest_seconds")]
    pub default_rest_seconds: u32,
    /// Total sets used before the user has adjusted them.
    #[serde(default = "default_total_sets")]
    pub default_total_sets: u32,
    /// Show desktop notifications when a rest ends or a reminder fires.
    #[serde(default = "default_true")]
    pub notifications: bool,
    /// Play the beep when a rest ends or a reminder fires.
    #[serde(default = "default_true")]
    pub notification_sound: bool,
}

/// Supplement reminder settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReminderConfig {
    /// How often the reminder poll runs, in seconds.
    #[serde(default = "default_poll_interval")]
    pub poll_interval_seconds: u64,
}

// Default value functions for serde
const fn default_output_format() -> OutputFormat {
    OutputFormat::Pretty
}

const fn default_rest_seconds() -> u32 {
    90
}

const fn default_total_sets() -> u32 {
    4
}

const fn default_true() -> bool {
    true
}

const fn default_poll_interval() -> u64 {
    30
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_output: default_output_format(),
        }
    }
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            default_rest_seconds: default_rest_seconds(),
            default_total_sets: default_total_sets(),
            notifications: default_true(),
            notification_sound: default_true(),
        }
    }
}

impl Default for ReminderConfig {
    fn default() -> Self {
        Self {
            poll_interval_seconds: default_poll_interval(),
        }
    }
}

impl Config {
    /// Load configuration from the default path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self, RestbellError> {
        let paths = Paths::new()?;
        Self::load_from_path(&paths.config_file)
    }

    /// Load configuration from a specific path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load_from_path(path: &std::path::Path) -> Result<Self, RestbellError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            RestbellError::Config(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;

        serde_yaml::from_str(&contents).map_err(|e| {
            RestbellError::Config(format!(
                "Failed to parse config file {}: {e}",
                path.display()
            ))
        })
    }

    /// Save configuration to the default path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be written.
    pub fn save(&self) -> Result<(), RestbellError> {
        let paths = Paths::new()?;
        paths.ensure_dirs()?;
        self.save_to_path(&paths.config_file)
    }

    /// Save configuration to a specific path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be written.
    pub fn save_to_path(&self, path: &std::path::Path) -> Result<(), RestbellError> {
        let contents = serde_yaml::to_string(self)
            .map_err(|e| RestbellError::Config(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, contents).map_err(|e| {
            RestbellError::Config(format!(
                "Failed to write config file {}: {e}",
                path.display()
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.general.default_output, OutputFormat::Pretty);
        assert_eq!(config.timer.default_rest_seconds, 90);
        assert_eq!(config.timer.default_total_sets, 4);
        assert!(config.timer.notifications);
        assert!(config.timer.notification_sound);
        assert_eq!(config.reminders.poll_interval_seconds, 30);
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let config = Config::load_from_path(&config_path).unwrap();

        // Should return defaults when file doesn't exist
        assert_eq!(config.timer.default_rest_seconds, 90);
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let mut config = Config::default();
        config.timer.default_rest_seconds = 120;
        config.reminders.poll_interval_seconds = 10;

        config.save_to_path(&config_path).unwrap();

        let loaded = Config::load_from_path(&config_path).unwrap();

        assert_eq!(loaded.timer.default_rest_seconds, 120);
        assert_eq!(loaded.reminders.poll_interval_seconds, 10);
    }

    #[test]
    fn test_partial_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        // Write a partial config (only some fields)
        let partial_yaml = r"
timer:
  notification_sound: false
";
        std::fs::write(&config_path, partial_yaml).unwrap();

        let config = Config::load_from_path(&config_path).unwrap();

        // Custom value should be loaded
        assert!(!config.timer.notification_sound);
        // Defaults should be used for missing fields
        assert!(config.timer.notifications);
        assert_eq!(config.timer.default_rest_seconds, 90);
        assert_eq!(config.general.default_output, OutputFormat::Pretty);
    }
}
