//! Configuration file support

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Default channel capacity in bits per symbol
    pub default_channel_rate: Option<f64>,

    /// Default output format ("text", "json" or "csv")
    pub default_output: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_channel_rate: None,
            default_output: Some("text".to_string()),
        }
    }
}

/// Load configuration from file or defaults
pub fn load_config(path: Option<&PathBuf>) -> Result<Config> {
    let config_path = if let Some(p) = path {
        p.clone()
    } else {
        // Try default locations
        if let Some(home) = dirs::home_dir() {
            let dotfile = home.join(".hufflab").join("config.toml");
            if dotfile.exists() {
                dotfile
            } else {
                let xdg = home.join(".config").join("hufflab").join("config.toml");
                if xdg.exists() {
                    xdg
                } else {
                    // Return default config if no file found
                    return Ok(Config::default());
                }
            }
        } else {
            return Ok(Config::default());
        }
    };

    if config_path.exists() {
        let contents = fs::read_to_string(&config_path)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    } else {
        Ok(Config::default())
    }
}

/// Save configuration to file
#[allow(dead_code)]
pub fn save_config(config: &Config, path: &Path) -> Result<()> {
    let contents = toml::to_string_pretty(config)?;

    // Create parent directories if needed
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, contents)?;
    Ok(())
}
