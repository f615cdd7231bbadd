pub mod init;
mod schema;

pub use init::run_init_wizard;
pub use schema::{AnimationConfig, Config};

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::scoring::{validate_rules, validate_scoring};

/// Get the config directory path (~/.config/hot-dice/)
pub fn get_config_dir() -> PathBuf {
    let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
    home.join(".config").join("hot-dice")
}

/// Get the default config file path (~/.config/hot-dice/config.yaml)
pub fn get_config_path() -> PathBuf {
    get_config_dir().join("config.yaml")
}

/// Load configuration from a YAML file
///
/// # Arguments
///
/// * `path` - Optional path to config file. If None, uses the default path and
///   falls back to built-in defaults when that file does not exist.
///
/// # Errors
///
/// Returns an error if:
/// - An explicitly given config file does not exist
/// - The config file cannot be read
/// - The YAML cannot be parsed
pub fn load_config(path: Option<PathBuf>) -> Result<Config> {
    match path {
        Some(explicit) => {
            if !explicit.exists() {
                anyhow::bail!("Config file not found at {}", explicit.display());
            }
            read_config(&explicit)
        }
        None => {
            let default_path = get_config_path();
            if default_path.exists() {
                read_config(&default_path)
            } else {
                tracing::debug!(path = %default_path.display(), "no config file, using defaults");
                Ok(Config::default())
            }
        }
    }
}

fn read_config(path: &Path) -> Result<Config> {
    let config_content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file at {}", path.display()))?;

    let config: Config = serde_saphyr::from_str(&config_content)
        .with_context(|| format!("Failed to parse config: invalid YAML in {}", path.display()))?;

    tracing::debug!(path = %path.display(), "loaded config");
    Ok(config)
}

/// Validate the whole configuration, collecting every error.
pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if let Err(e) = validate_rules(&config.rules) {
        errors.extend(e);
    }
    if let Err(e) = validate_scoring(&config.scoring) {
        errors.extend(e);
    }

    let frames = config.animation.frames;
    if !(1..=100).contains(&frames) {
        errors.push(format!("animation.frames: {} is outside 1-100", frames));
    }
    match config.animation.interval() {
        Ok(interval) if interval > Duration::from_secs(1) => {
            errors.push(format!(
                "animation.frame_interval: '{}' is longer than 1s",
                config.animation.frame_interval
            ));
        }
        Ok(interval) if interval.is_zero() => {
            errors.push("animation.frame_interval: must be longer than 0".to_string());
        }
        Ok(_) => {}
        Err(e) => errors.push(format!("animation.frame_interval: {:#}", e)),
    }

    if let Some(name) = &config.player_name {
        if name.trim().is_empty() {
            errors.push("player_name: must not be blank".to_string());
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
