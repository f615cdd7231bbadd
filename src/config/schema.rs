use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::scoring::{RulesConfig, ScoringConfig};

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub rules: RulesConfig,
    pub scoring: ScoringConfig,
    pub animation: AnimationConfig,
    /// Name shown for the human player in the TUI
    pub player_name: Option<String>,
}

impl Config {
    pub fn player_name(&self) -> &str {
        self.player_name.as_deref().unwrap_or("You")
    }
}

/// Cosmetic roll animation. The roll itself is decided once, after the last frame.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct AnimationConfig {
    /// Number of intermediate frames shown per roll
    pub frames: u32,

    /// Delay between frames, as a humantime duration (e.g. "100ms")
    pub frame_interval: String,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            frames: 10,
            frame_interval: "100ms".to_string(),
        }
    }
}

impl AnimationConfig {
    pub fn interval(&self) -> Result<Duration> {
        humantime::parse_duration(self.frame_interval.trim())
            .with_context(|| format!("invalid frame_interval '{}'", self.frame_interval))
    }
}
