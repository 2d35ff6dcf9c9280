use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

use crate::error::WeatherError;

/// Environment variable consulted when no `--key` flag is given.
pub const API_KEY_ENV: &str = "WEATHERAPI_KEY";

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// api_key = "..."
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// WeatherAPI.com credential. Never embedded in source.
    pub api_key: Option<String>,
}

impl Config {
    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "skypixel", "skypixel")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Resolve the API key: `--key` flag, then environment, then config file.
    pub fn resolve_api_key(&self, flag: Option<String>) -> Result<String, WeatherError> {
        let env = std::env::var(API_KEY_ENV).ok().filter(|v| !v.is_empty());
        let config_path = Self::config_file_path()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|_| "the config file".to_string());

        resolve_from(flag, env, self.api_key.as_deref(), config_path)
    }
}

fn resolve_from(
    flag: Option<String>,
    env: Option<String>,
    file: Option<&str>,
    config_path: String,
) -> Result<String, WeatherError> {
    flag.or(env)
        .or_else(|| file.map(str::to_owned))
        .ok_or(WeatherError::MissingApiKey { config_path })
}
