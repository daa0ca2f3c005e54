//! Configuration for the streaks backdrop.
//!
//! Settings live in `config.toml` under the platform config directory and
//! are read once at startup. Every key is optional; missing keys take their
//! default values.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use streaks_core::{ColorTheme, GridSpec, Insets, RebuildPolicy, Timing};

const CONFIG_FILE_NAME: &str = "config.toml";

/// Errors from reading or writing the configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("could not serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Layout invalidation settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TriggerConfig {
    /// Quiet time after the last resize before rebuilding.
    pub debounce_ms: u64,
    pub policy: RebuildPolicy,
}

impl Default for TriggerConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 100,
            policy: RebuildPolicy::default(),
        }
    }
}

/// Text shown on the centered content card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    /// Draw the card at all. Without it the whole screen is streaks.
    pub enabled: bool,
    pub title: String,
    pub tagline: String,
    pub contact_user: String,
    pub contact_domain: String,
}

impl ContentConfig {
    /// Contact address, or `None` if either half is blank.
    pub fn contact(&self) -> Option<String> {
        let user = self.contact_user.trim();
        let domain = self.contact_domain.trim();
        if user.is_empty() || domain.is_empty() {
            return None;
        }
        Some(format!("{user}@{domain}"))
    }
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            title: "streaks".to_string(),
            tagline: "a quiet field of turning arrows".to_string(),
            contact_user: String::new(),
            contact_domain: String::new(),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub color_theme: ColorTheme,
    /// Fixed seed for layout and flip randomness. Random when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Log filter, e.g. `info` or `streaks_field=debug`.
    pub log_level: String,
    pub grid: GridSpec,
    /// Per-edge growth of the exclusion zone around the content card.
    pub exclusion: Insets,
    pub animation: Timing,
    pub trigger: TriggerConfig,
    pub content: ContentConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            color_theme: ColorTheme::default(),
            seed: None,
            log_level: "info".to_string(),
            grid: GridSpec::default(),
            exclusion: Insets::default(),
            animation: Timing::default(),
            trigger: TriggerConfig::default(),
            content: ContentConfig::default(),
        }
    }
}

impl Config {
    /// Platform directories for this application.
    pub fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("com", "am2rican5", "streaks")
    }

    /// Path of the config file, if the platform has a config directory.
    pub fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Directory for log files.
    pub fn log_dir() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.data_local_dir().join("logs"))
    }

    /// Load the config file, falling back to defaults on any problem.
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            warn!("event=config_load status=default reason=no_config_dir");
            return Self::default();
        };
        if !path.exists() {
            info!(
                "event=config_load status=default reason=missing path={}",
                path.display()
            );
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(config) => {
                info!("event=config_load status=ok path={}", path.display());
                config
            }
            Err(err) => {
                warn!(
                    "event=config_load status=default path={} error={}",
                    path.display(),
                    err
                );
                Self::default()
            }
        }
    }

    /// Read and parse the config file at `path`.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Parse config from TOML text.
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Serialize config as TOML text.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Write the config to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_toml()?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_round_trips_through_toml() {
        let config = Config::default();
        let text = config.to_toml().unwrap();
        assert_eq!(Config::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_empty_file_is_default() {
        assert_eq!(Config::from_toml("").unwrap(), Config::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config = Config::from_toml(
            r#"
color_theme = "magenta"
seed = 42

[grid]
cell_width = 90.0
cell_height = 115.0
vertical_bias = -20.0

[exclusion]
top = 30.0

[trigger]
policy = "always"
"#,
        )
        .unwrap();

        assert_eq!(config.color_theme, ColorTheme::Magenta);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.grid.cell_width, 90.0);
        assert_eq!(config.grid.vertical_bias, -20.0);
        assert_eq!(config.grid.jitter, GridSpec::default().jitter);
        assert_eq!(config.exclusion.top, 30.0);
        assert_eq!(config.exclusion.left, Insets::default().left);
        assert_eq!(config.trigger.policy, RebuildPolicy::Always);
        assert_eq!(config.trigger.debounce_ms, 100);
        assert_eq!(config.animation, Timing::default());
    }

    #[test]
    fn test_invalid_file_reports_parse_error() {
        let err = Config::from_toml("grid = 3").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_save_and_load_from_path() {
        let dir = std::env::temp_dir().join(format!("streaks-config-test-{}", std::process::id()));
        let path = dir.join("nested").join(CONFIG_FILE_NAME);

        let mut config = Config::default();
        config.seed = Some(7);
        config.content.contact_user = "someone".to_string();
        config.save_to(&path).unwrap();

        assert_eq!(Config::load_from(&path).unwrap(), config);
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_contact_requires_both_halves() {
        let mut content = ContentConfig::default();
        assert_eq!(content.contact(), None);

        content.contact_user = "christine".to_string();
        assert_eq!(content.contact(), None);

        content.contact_domain = " example.com ".to_string();
        assert_eq!(content.contact(), Some("christine@example.com".to_string()));
    }
}
