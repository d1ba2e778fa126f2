use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Persisted defaults for the monitor.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    /// Dashboard refresh interval in milliseconds
    #[serde(default)]
    pub refresh_interval_ms: Option<u64>,
    /// Default observation feed file; stdin when unset
    #[serde(default)]
    pub feed_path: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            return Ok(Config::default());
        }

        let data = fs::read(&config_path)
            .with_context(|| format!("Failed to read config file: {:?}", config_path))?;

        if data.is_empty() {
            return Ok(Config::default());
        }

        // A corrupt or outdated file falls back to defaults
        Ok(serde_json::from_slice(&data).unwrap_or_default())
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::get_config_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }

        let data = serde_json::to_vec_pretty(self).with_context(|| "Failed to serialize config")?;

        fs::write(&config_path, data)
            .with_context(|| format!("Failed to write config file: {:?}", config_path))?;

        Ok(())
    }

    fn get_config_path() -> Result<PathBuf> {
        let config_dir =
            dirs::config_dir().with_context(|| "Could not determine config directory")?;

        Ok(config_dir.join("netlens").join("config.json"))
    }

    pub fn set_refresh_interval(&mut self, interval_ms: u64) {
        self.refresh_interval_ms = Some(interval_ms);
    }

    pub fn get_refresh_interval(&self) -> Option<u64> {
        self.refresh_interval_ms
    }

    pub fn set_feed_path(&mut self, path: String) {
        self.feed_path = Some(path);
    }

    pub fn get_feed_path(&self) -> Option<&String> {
        self.feed_path.as_ref()
    }
}
