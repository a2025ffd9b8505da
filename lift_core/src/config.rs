//! Configuration file support for Lift.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/lift/config.toml`.
//! Everything here is presentation tuning; no core behavior depends on it.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub stats: StatsConfig,
}

/// Display configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Label shown next to weights (display only, no unit conversion)
    #[serde(default = "default_weight_unit")]
    pub weight_unit: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            weight_unit: default_weight_unit(),
        }
    }
}

/// Statistics view configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StatsConfig {
    /// How many entries the most-frequent-exercises ranking shows
    #[serde(default = "default_top_exercises")]
    pub top_exercises: usize,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            top_exercises: default_top_exercises(),
        }
    }
}

// Default value functions
fn default_weight_unit() -> String {
    "lbs".into()
}

fn default_top_exercises() -> usize {
    5
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::info!(
                "No config file found at {:?}, using defaults",
                config_path
            );
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        let base = dirs::config_dir().unwrap_or_else(|| {
            let home = std::env::var("HOME")
                .expect("HOME environment variable not set");
            PathBuf::from(home).join(".config")
        });
        base.join("lift").join("config.toml")
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.display.weight_unit, "lbs");
        assert_eq!(config.stats.top_exercises, 5);
    }

    #[test]
    fn test_config_roundtrip() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(config.display.weight_unit, parsed.display.weight_unit);
        assert_eq!(config.stats.top_exercises, parsed.stats.top_exercises);
    }

    #[test]
    fn test_partial_config() {
        let toml_str = r#"
[display]
weight_unit = "kg"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.display.weight_unit, "kg");
        assert_eq!(config.stats.top_exercises, 5); // default
    }

    #[test]
    fn test_save_and_load_from_path() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");

        let mut config = Config::default();
        config.stats.top_exercises = 3;
        config.save_to(&config_path).unwrap();

        let loaded = Config::load_from(&config_path).unwrap();
        assert_eq!(loaded.stats.top_exercises, 3);
    }
}
