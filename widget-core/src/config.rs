use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path, path::PathBuf};

use crate::provider::openweather::DEFAULT_BASE_URL;

pub const DEFAULT_CITY: &str = "New York";

pub const API_KEY_ENV: &str = "OPENWEATHER_API_KEY";
pub const DEFAULT_CITY_ENV: &str = "WEATHER_WIDGET_DEFAULT_CITY";

/// Where air-quality readings come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AirQualityMode {
    /// Zeroed reading, no request made.
    #[default]
    Placeholder,
    /// Query the air pollution endpoint with the city's coordinates.
    Live,
}

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// api_key = "..."
/// default_city = "New York"
/// air_quality = "placeholder"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_key: Option<String>,
    pub base_url: String,
    /// City looked up on startup.
    pub default_city: String,
    pub air_quality: AirQualityMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            default_city: DEFAULT_CITY.to_string(),
            air_quality: AirQualityMode::default(),
        }
    }
}

impl Config {
    /// Load config from disk and apply environment overrides.
    pub fn load() -> Result<Self> {
        let mut cfg = Self::load_from(&Self::config_file_path()?)?;
        cfg.apply_overrides(|key| std::env::var(key).ok());
        Ok(cfg)
    }

    /// Load config from `path`, or return an empty default if it doesn't exist yet.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_file_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "weather-widget", "weather-widget")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Override file values with whatever `lookup` returns for the known variables.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup(API_KEY_ENV).filter(|v| !v.trim().is_empty()) {
            self.api_key = Some(key.trim().to_string());
        }
        if let Some(city) = lookup(DEFAULT_CITY_ENV).filter(|v| !v.trim().is_empty()) {
            self.default_city = city.trim().to_string();
        }
    }

    pub fn require_api_key(&self) -> Result<&str> {
        self.api_key.as_deref().filter(|k| !k.is_empty()).ok_or_else(|| {
            anyhow!(
                "No API key configured.\n\
                 Hint: run `weather-widget configure` or set {API_KEY_ENV}."
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn defaults_match_widget_behaviour() {
        let cfg = Config::default();
        assert_eq!(cfg.default_city, "New York");
        assert_eq!(cfg.base_url, DEFAULT_BASE_URL);
        assert_eq!(cfg.air_quality, AirQualityMode::Placeholder);
        assert!(cfg.api_key.is_none());
    }

    #[test]
    fn require_api_key_errors_when_not_set() {
        let cfg = Config::default();
        let err = cfg.require_api_key().unwrap_err();

        let msg = err.to_string();
        assert!(msg.contains("No API key configured"));
        assert!(msg.contains("Hint: run `weather-widget configure`"));
    }

    #[test]
    fn empty_api_key_counts_as_missing() {
        let cfg = Config { api_key: Some(String::new()), ..Config::default() };
        assert!(cfg.require_api_key().is_err());
    }

    #[test]
    fn overrides_replace_file_values() {
        let mut cfg = Config { api_key: Some("FILE_KEY".into()), ..Config::default() };
        let env: HashMap<&str, &str> =
            HashMap::from([(API_KEY_ENV, " ENV_KEY "), (DEFAULT_CITY_ENV, "Paris")]);

        cfg.apply_overrides(|k| env.get(k).map(|v| v.to_string()));

        assert_eq!(cfg.require_api_key().unwrap(), "ENV_KEY");
        assert_eq!(cfg.default_city, "Paris");
    }

    #[test]
    fn blank_overrides_are_ignored() {
        let mut cfg = Config { api_key: Some("FILE_KEY".into()), ..Config::default() };

        cfg.apply_overrides(|_| Some("  ".to_string()));

        assert_eq!(cfg.require_api_key().unwrap(), "FILE_KEY");
        assert_eq!(cfg.default_city, DEFAULT_CITY);
    }

    #[test]
    fn missing_file_yields_default() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = Config::load_from(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let cfg = Config {
            api_key: Some("KEY".into()),
            default_city: "Tokyo".into(),
            air_quality: AirQualityMode::Live,
            ..Config::default()
        };
        cfg.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, cfg);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "air_quality = \"live\"\n").unwrap();

        let cfg = Config::load_from(&path).unwrap();
        assert_eq!(cfg.air_quality, AirQualityMode::Live);
        assert_eq!(cfg.default_city, DEFAULT_CITY);
    }
}
