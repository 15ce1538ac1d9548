//! User configuration for spice_tracker
//!
//! Supports loading config from:
//! - Environment variables
//! - ~/.config/spice-tracker/config.toml (or an explicit `--config` path)
//!
//! Command-line flags are applied on top by the caller.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME, MAX_BAR_CELLS, MIN_BAR_CELLS};
use crate::error::{ConfigError, ConfigResult};
use crate::inventory::ThresholdPolicy;

/// Overrides the log level
pub const ENV_LOG_LEVEL: &str = "SPICE_TRACKER_LOG";

/// Overrides the log directory
pub const ENV_LOG_DIR: &str = "SPICE_TRACKER_LOG_DIR";

const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub thresholds: ThresholdConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
pub struct DisplayConfig {
    /// Gauge width in terminal cells; fits the terminal when unset
    pub bar_width: Option<u16>,
}

#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
pub struct ThresholdConfig {
    /// Policy for invalid threshold edits
    pub policy: Option<ThresholdPolicy>,
}

#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Filter directive, e.g. "info" or "spice_tracker=debug"
    pub level: Option<String>,
    /// Directory for the log file
    pub directory: Option<PathBuf>,
}

impl AppConfig {
    /// Load config from all sources, with priority:
    /// 1. Environment variables (highest)
    /// 2. Config file (`explicit` if given, else the user config path)
    ///
    /// A missing default file is fine; a missing explicit file is not.
    pub fn load(explicit: Option<&Path>) -> ConfigResult<Self> {
        let mut config = AppConfig::default();

        match explicit {
            Some(path) => config.merge(Self::from_file(path)?),
            None => {
                if let Some(path) = Self::user_config_path().filter(|p| p.exists()) {
                    config.merge(Self::from_file(&path)?);
                }
            }
        }

        config.apply_env(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Parses a single config file
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: AppConfig = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.check_ranges(path)?;
        debug!(path = %path.display(), "loaded config file");
        Ok(config)
    }

    /// Holds file values to the same bounds the command line enforces
    fn check_ranges(&self, path: &Path) -> ConfigResult<()> {
        match self.display.bar_width {
            Some(value) if !(MIN_BAR_CELLS..=MAX_BAR_CELLS).contains(&usize::from(value)) => {
                Err(ConfigError::BarWidthOutOfRange {
                    path: path.to_path_buf(),
                    value,
                    min: MIN_BAR_CELLS,
                    max: MAX_BAR_CELLS,
                })
            }
            _ => Ok(()),
        }
    }

    /// Get the user config file path
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Merge another config into this one (other takes priority)
    pub fn merge(&mut self, other: AppConfig) {
        if other.display.bar_width.is_some() {
            self.display.bar_width = other.display.bar_width;
        }
        if other.thresholds.policy.is_some() {
            self.thresholds.policy = other.thresholds.policy;
        }
        if other.logging.level.is_some() {
            self.logging.level = other.logging.level;
        }
        if other.logging.directory.is_some() {
            self.logging.directory = other.logging.directory;
        }
    }

    /// Applies environment overrides through `lookup`
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup(ENV_LOG_LEVEL).filter(|v| !v.is_empty()) {
            self.logging.level = Some(level);
        }
        if let Some(dir) = lookup(ENV_LOG_DIR).filter(|v| !v.is_empty()) {
            self.logging.directory = Some(PathBuf::from(dir));
        }
    }

    pub fn bar_width(&self) -> Option<usize> {
        self.display.bar_width.map(usize::from)
    }

    pub fn threshold_policy(&self) -> ThresholdPolicy {
        self.thresholds.policy.unwrap_or_default()
    }

    pub fn log_level(&self) -> &str {
        self.logging.level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL)
    }

    pub fn log_dir(&self) -> Option<&Path> {
        self.logging.directory.as_deref()
    }

    /// Writes an example config to `path` unless one already exists
    pub fn init_config_at(path: &Path) -> ConfigResult<()> {
        let write_err = |source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(write_err)?;
        }
        if !path.exists() {
            std::fs::write(path, EXAMPLE_CONFIG).map_err(write_err)?;
        }
        Ok(())
    }

    /// Initialize the user config directory and create an example config
    pub fn init_user_config() -> ConfigResult<PathBuf> {
        let path = Self::user_config_path().ok_or(ConfigError::NoConfigDir)?;
        Self::init_config_at(&path)?;
        Ok(path)
    }
}

const EXAMPLE_CONFIG: &str = r#"# Spice Tracker configuration

[display]
# Gauge width in terminal cells, 10 to 500 (default: fit the terminal)
# bar_width = 40

[thresholds]
# "accept-and-flag" stores out-of-range thresholds and shows a warning,
# "reject-invalid" keeps the previous value
# policy = "accept-and-flag"

[logging]
# level = "info"
# directory = "/tmp/spice-tracker"
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.bar_width(), None);
        assert_eq!(config.threshold_policy(), ThresholdPolicy::AcceptAndFlag);
        assert_eq!(config.log_level(), "info");
        assert!(config.log_dir().is_none());
    }

    #[test]
    fn test_toml_parsing() {
        let toml_str = r#"
[display]
bar_width = 32

[thresholds]
policy = "reject-invalid"

[logging]
level = "debug"
directory = "/var/log/spice"
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.bar_width(), Some(32));
        assert_eq!(config.threshold_policy(), ThresholdPolicy::RejectInvalid);
        assert_eq!(config.log_level(), "debug");
        assert_eq!(config.log_dir(), Some(Path::new("/var/log/spice")));
    }

    #[test]
    fn test_partial_sections() {
        let config: AppConfig = toml::from_str("[display]\nbar_width = 20\n").unwrap();
        assert_eq!(config.bar_width(), Some(20));
        assert_eq!(config.threshold_policy(), ThresholdPolicy::AcceptAndFlag);
    }

    #[test]
    fn test_bar_width_range_checked() {
        let path = Path::new("config.toml");
        for value in [0u16, 9, 501] {
            let mut config = AppConfig::default();
            config.display.bar_width = Some(value);
            assert!(matches!(
                config.check_ranges(path),
                Err(ConfigError::BarWidthOutOfRange { value: v, .. }) if v == value
            ));
        }
        for value in [10u16, 40, 500] {
            let mut config = AppConfig::default();
            config.display.bar_width = Some(value);
            assert!(config.check_ranges(path).is_ok());
        }
    }

    #[test]
    fn test_unknown_policy_rejected() {
        let result: Result<AppConfig, _> = toml::from_str("[thresholds]\npolicy = \"maybe\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_merge_prefers_other() {
        let mut base: AppConfig = toml::from_str("[display]\nbar_width = 20\n[logging]\nlevel = \"warn\"\n").unwrap();
        let other: AppConfig = toml::from_str("[logging]\nlevel = \"trace\"\n").unwrap();
        base.merge(other);
        assert_eq!(base.bar_width(), Some(20));
        assert_eq!(base.log_level(), "trace");
    }

    #[test]
    fn test_env_overrides() {
        let mut config = AppConfig::default();
        config.apply_env(|key| match key {
            ENV_LOG_LEVEL => Some("debug".to_string()),
            ENV_LOG_DIR => Some(String::new()),
            _ => None,
        });
        assert_eq!(config.log_level(), "debug");
        assert!(config.log_dir().is_none());
    }

    #[test]
    fn test_example_config_parses() {
        let config: AppConfig = toml::from_str(EXAMPLE_CONFIG).unwrap();
        assert_eq!(config, AppConfig::default());
    }
}
