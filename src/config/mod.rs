//! Configuration module
//!
//! Handles loading and saving of tilg.toml configuration files.
//! Defines Config, Output, and Display types.

mod types;

pub use types::{Config, Display, Output};

use crate::error::{Result, TilgError};
use std::fs;
use std::path::Path;

/// Config file looked up in the working directory
pub const DEFAULT_PATH: &str = "tilg.toml";

/// Load configuration from a TOML file
pub fn load(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(|e| {
        TilgError::Config(format!(
            "Cannot read config from '{}': {}. Run 'tilg config init' to create one.",
            path.display(),
            e
        ))
    })?;

    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Load an explicit config, or `tilg.toml` if present, or the defaults
pub fn load_or_default(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => load(path),
        None => {
            let default_path = Path::new(DEFAULT_PATH);
            if default_path.exists() {
                load(default_path)
            } else {
                log::debug!("No {} found, using default configuration", DEFAULT_PATH);
                Ok(Config::default())
            }
        }
    }
}

/// Save configuration to a TOML file
pub fn save(config: &Config, path: &Path) -> Result<()> {
    let toml = toml::to_string_pretty(config)
        .map_err(|e| TilgError::Config(format!("Failed to serialize config: {}", e)))?;

    // Create parent directories if needed
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, toml)?;
    Ok(())
}
