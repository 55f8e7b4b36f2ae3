use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Configuration validation errors
#[derive(Debug, Clone)]
pub struct ConfigValidationError {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Result of config validation
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    pub errors: Vec<ConfigValidationError>,
    pub warnings: Vec<ConfigValidationError>,
}

impl ValidationResult {
    /// Returns true if there are no errors (warnings are OK)
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Add an error
    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Add a warning
    pub fn add_warning(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Get a user-friendly message summarizing all errors
    pub fn error_summary(&self) -> String {
        if self.errors.is_empty() {
            return String::new();
        }
        self.errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Application configuration directory; token and credentials live here.
    pub config_dir: PathBuf,

    /// Calendar to render events from.
    #[serde(default = "default_calendar_id")]
    pub calendar_id: String,

    /// Number of week rows in the grid.
    #[serde(default = "default_weeks")]
    pub weeks: usize,

    /// Upper bound on fetched events.
    #[serde(default = "default_max_results")]
    pub max_results: usize,

    /// Conky palette slot used for emphasis (`${colorN}`).
    #[serde(default = "default_accent_color")]
    pub accent_color: u8,
}

fn default_calendar_id() -> String {
    "primary".to_string()
}

fn default_weeks() -> usize {
    14
}

fn default_max_results() -> usize {
    10
}

fn default_accent_color() -> u8 {
    1
}

impl Default for Config {
    fn default() -> Self {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("gcalbar");

        Self {
            config_dir,
            calendar_id: default_calendar_id(),
            weeks: default_weeks(),
            max_results: default_max_results(),
            accent_color: default_accent_color(),
        }
    }
}

impl Config {
    /// Load configuration from file, creating default if it doesn't exist
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            let config = Self::default();
            config.save()?;
            return Ok(config);
        }

        let contents =
            std::fs::read_to_string(&config_path).context("Failed to read config file")?;

        let config: Config = toml::from_str(&contents).context("Failed to parse config file")?;

        Ok(config)
    }

    /// Load configuration and validate it
    ///
    /// Returns the config along with any validation warnings.
    /// Returns an error if validation fails with critical errors.
    pub fn load_validated() -> Result<(Self, ValidationResult)> {
        let config = Self::load()?;
        let validation = config.validate();

        if !validation.is_valid() {
            anyhow::bail!(
                "Configuration validation failed: {}",
                validation.error_summary()
            );
        }

        for warning in &validation.warnings {
            tracing::warn!("Config warning: {}", warning);
        }

        Ok((config, validation))
    }

    /// Validate the configuration
    pub fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::default();

        if self.weeks == 0 {
            result.add_error("weeks", "Grid needs at least one week row");
        } else if self.weeks > 52 {
            result.add_warning("weeks", "Grid is taller than a year (>52 weeks)");
        }

        if self.max_results == 0 {
            result.add_error("max_results", "Event fetch limit must be greater than 0");
        } else if self.max_results > 250 {
            result.add_error(
                "max_results",
                "Event fetch limit exceeds the API maximum of 250",
            );
        }

        if self.calendar_id.is_empty() {
            result.add_error("calendar_id", "Calendar id must not be empty");
        }

        if !self.credentials_path().exists() {
            result.add_warning(
                "config_dir",
                format!(
                    "No credentials.json at {} - authentication will fail",
                    self.credentials_path().display()
                ),
            );
        }

        result
    }

    /// Path of the persisted OAuth token.
    pub fn token_path(&self) -> PathBuf {
        self.config_dir.join("token.json")
    }

    /// Path of the downloaded OAuth client credentials.
    pub fn credentials_path(&self) -> PathBuf {
        self.config_dir.join("credentials.json")
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        std::fs::write(&config_path, contents).context("Failed to write config file")?;

        Ok(())
    }

    /// Get the path to the configuration file
    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to get config directory")?
            .join("gcalbar");

        Ok(config_dir.join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
    use super::*;

    #[test]
    fn test_valid_default_config() {
        let config = Config::default();
        let result = config.validate();
        assert!(
            result.is_valid(),
            "Default config should be valid: {:?}",
            result.errors
        );
    }

    #[test]
    fn test_zero_weeks_is_error() {
        let mut config = Config::default();
        config.weeks = 0;
        let result = config.validate();
        assert!(!result.is_valid());
        assert!(result.errors.iter().any(|e| e.field == "weeks"));
    }

    #[test]
    fn test_oversized_grid_is_warning() {
        let mut config = Config::default();
        config.weeks = 60;
        let result = config.validate();
        assert!(result.is_valid());
        assert!(result.warnings.iter().any(|w| w.field == "weeks"));
    }

    #[test]
    fn test_max_results_bounds() {
        let mut config = Config::default();
        config.max_results = 251;
        assert!(!config.validate().is_valid());
        config.max_results = 0;
        assert!(!config.validate().is_valid());
        config.max_results = 10;
        assert!(config.validate().is_valid());
    }

    #[test]
    fn test_paths_hang_off_config_dir() {
        let mut config = Config::default();
        config.config_dir = PathBuf::from("/tmp/gcalbar-test");
        assert_eq!(config.token_path(), PathBuf::from("/tmp/gcalbar-test/token.json"));
        assert_eq!(
            config.credentials_path(),
            PathBuf::from("/tmp/gcalbar-test/credentials.json")
        );
    }

    #[test]
    fn test_toml_roundtrip_with_defaults() {
        let parsed: Config = toml::from_str("config_dir = \"/tmp/gcalbar\"").unwrap();
        assert_eq!(parsed.calendar_id, "primary");
        assert_eq!(parsed.weeks, 14);
        assert_eq!(parsed.max_results, 10);
        assert_eq!(parsed.accent_color, 1);

        let serialized = toml::to_string_pretty(&parsed).unwrap();
        let reparsed: Config = toml::from_str(&serialized).unwrap();
        assert_eq!(reparsed.weeks, parsed.weeks);
    }

    #[test]
    fn test_validation_result_error_summary() {
        let mut result = ValidationResult::default();
        result.add_error("field1", "error1");
        result.add_error("field2", "error2");
        let summary = result.error_summary();
        assert!(summary.contains("field1"));
        assert!(summary.contains("field2"));
    }
}
