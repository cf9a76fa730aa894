// Configuration management for the ChatApp CLI
//
// Cross-platform config stored in:
// - macOS: ~/Library/Application Support/chatapp/config.json
// - Linux: ~/.config/chatapp/config.json
// - Windows: %APPDATA%\chatapp\config.json

use anyhow::{Context, Result};
use chatapp_core::SenderProfile;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Sender details used when the command line leaves them out
    pub sender: SenderConfig,

    /// Default tracing filter when RUST_LOG is unset
    pub log_level: String,

    /// Start the shell with the five sample messages
    pub seed_sample_messages: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SenderConfig {
    pub name: String,
    pub surname: String,
    pub phone: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sender: SenderConfig::default(),
            log_level: "warn".to_string(),
            seed_sample_messages: false,
        }
    }
}

impl SenderConfig {
    /// Merge command-line overrides over the configured values
    pub fn profile(
        &self,
        name: Option<String>,
        surname: Option<String>,
        phone: Option<String>,
    ) -> SenderProfile {
        SenderProfile::new(
            name.unwrap_or_else(|| self.name.clone()),
            surname.unwrap_or_else(|| self.surname.clone()),
            phone.unwrap_or_else(|| self.phone.clone()),
        )
    }
}

impl Config {
    /// Get the config directory path (cross-platform)
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join("chatapp");

        std::fs::create_dir_all(&config_dir).context("Failed to create config directory")?;

        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Load config from the default location, creating it if missing
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file()?)
    }

    /// Load config from `path`, or write and return defaults if absent
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = std::fs::read_to_string(path).context("Failed to read config file")?;
            let config: Config =
                serde_json::from_str(&contents).context("Failed to parse config file")?;
            Ok(config)
        } else {
            let config = Config::default();
            config.save_to(path)?;
            Ok(config)
        }
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path, contents).context("Failed to write config file")?;
        Ok(())
    }

    /// Set a config value by key (does not save)
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "sender.name" => self.sender.name = value.to_string(),
            "sender.surname" => self.sender.surname = value.to_string(),
            "sender.phone" => self.sender.phone = value.to_string(),
            "log_level" => self.log_level = value.to_string(),
            "seed_sample_messages" => {
                self.seed_sample_messages = value.parse().context("Invalid boolean value")?;
            }
            _ => anyhow::bail!("Unknown config key: {}", key),
        }
        Ok(())
    }

    /// Get a config value
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "sender.name" => Some(self.sender.name.clone()),
            "sender.surname" => Some(self.sender.surname.clone()),
            "sender.phone" => Some(self.sender.phone.clone()),
            "log_level" => Some(self.log_level.clone()),
            "seed_sample_messages" => Some(self.seed_sample_messages.to_string()),
            _ => None,
        }
    }

    /// List all config values
    pub fn list(&self) -> Vec<(String, String)> {
        [
            "sender.name",
            "sender.surname",
            "sender.phone",
            "log_level",
            "seed_sample_messages",
        ]
        .into_iter()
        .filter_map(|key| self.get(key).map(|value| (key.to_string(), value)))
        .collect()
    }
}
