use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;
use tracing::info;

use atlasq_wiki::WikiConfig;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot find home directory")]
    NoHomeDir,

    #[error(
        "Config file not found at: {0}. Please run 'atlasq init' to create it, \
         or use the built-in defaults with 'atlasq ask'."
    )]
    NotFound(PathBuf),

    #[error("Config file already exists at: {0}. Please edit it directly.")]
    AlreadyExists(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config file: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Default, Deserialize, Serialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub wiki: WikiConfig,
}

impl Config {
    /// Read `~/atlasq/config.json`.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_dir()?.join("config.json");

        if !config_path.exists() {
            return Err(ConfigError::NotFound(config_path));
        }

        let content = std::fs::read_to_string(&config_path)?;
        let config: Self = serde_json::from_str(&content)?;

        info!("Loaded config from {}", config_path.display());
        Ok(config)
    }

    /// Read the config file if present, otherwise fall back to defaults.
    pub fn load_or_default() -> Result<Self, ConfigError> {
        match Self::load() {
            Err(ConfigError::NotFound(_)) => Ok(Self::default()),
            other => other,
        }
    }

    fn config_dir() -> Result<PathBuf, ConfigError> {
        Ok(dirs::home_dir()
            .ok_or(ConfigError::NoHomeDir)?
            .join("atlasq"))
    }

    pub fn ensure_config_dir() -> Result<PathBuf, ConfigError> {
        let config_dir = Self::config_dir()?;
        std::fs::create_dir_all(&config_dir)?;
        Ok(config_dir)
    }

    /// Write the config template. Refuses to overwrite an existing file.
    pub fn create_config() -> Result<(), ConfigError> {
        let config_dir = Self::ensure_config_dir()?;
        let config_path = config_dir.join("config.json");

        if config_path.exists() {
            return Err(ConfigError::AlreadyExists(config_path));
        }

        let config_template = r#"{
  "wiki": {
    "api_url": "https://en.wikipedia.org/w/api.php",
    "timeout": 10,
    "user_agent": "Mozilla/5.0 (compatible; atlasq/0.1)"
  }
}
"#;

        std::fs::write(&config_path, config_template)?;

        println!("Created config file at: {}", config_path.display());
        println!();
        println!("Configuration options:");
        println!("   - wiki.api_url: MediaWiki API endpoint (switch language wikis here)");
        println!("   - wiki.timeout: HTTP timeout in seconds");
        println!("   - wiki.user_agent: User-Agent header sent to the API");
        println!();
        Ok(())
    }
}
