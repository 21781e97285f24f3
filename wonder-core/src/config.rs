use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

pub const ENV_API_KEY: &str = "WEATHER_API_KEY";
pub const ENV_API_HOST: &str = "WEATHER_API_HOST";
pub const ENV_BASE_URL: &str = "WEATHER_API_BASE_URL";
pub const ENV_CITIES: &str = "WONDER_CITIES";

/// Provider credentials and resource locations.
///
/// Values come from the config file and are overridden by environment
/// variables. None of them are required here; a missing key or base URL shows
/// up later as a failed fetch.
///
/// Example TOML:
/// ```toml
/// api_key = "..."
/// api_host = "weatherapi-com.p.rapidapi.com"
/// base_url = "https://weatherapi-com.p.rapidapi.com"
/// cities = "https://example.org/cities.json"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    /// Sent as the provider credential header.
    pub api_key: Option<String>,

    /// Sent as the provider routing header.
    pub api_host: Option<String>,

    /// Prefix for `/current.json` and `/forecast.json`.
    pub base_url: Option<String>,

    /// URL or file path of the city directory.
    pub cities: Option<String>,
}

impl Config {
    /// Load config from disk, then apply environment overrides.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        let mut cfg = Self::load_from(&path)?;
        cfg.apply_env(|name| std::env::var(name).ok());
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

    /// Save config to the platform config directory.
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_file_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    /// Save config to `path`, creating parent directories as needed.
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
        let dirs = ProjectDirs::from("dev", "weather-wonder", "wonder")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Override fields with any non-empty values found by `lookup`.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let fields = [
            (ENV_API_KEY, &mut self.api_key),
            (ENV_API_HOST, &mut self.api_host),
            (ENV_BASE_URL, &mut self.base_url),
            (ENV_CITIES, &mut self.cities),
        ];

        for (name, field) in fields {
            if let Some(value) = lookup(name).filter(|v| !v.is_empty()) {
                *field = Some(value);
            }
        }
    }

    pub fn api_key(&self) -> &str {
        self.api_key.as_deref().unwrap_or_default()
    }

    pub fn api_host(&self) -> &str {
        self.api_host.as_deref().unwrap_or_default()
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or_default()
    }

    pub fn is_provider_configured(&self) -> bool {
        self.api_key.is_some() && self.api_host.is_some() && self.base_url.is_some()
    }
}
