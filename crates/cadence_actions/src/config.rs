//! Scheduler configuration (TOML)
//!
//! ```toml
//! time_scale = 0.5   # slow motion
//! block_all = false  # start paused when true
//! capacity = 64      # storage to reserve up front
//! ```

use crate::error::{validate_time_scale, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Initial scheduler settings
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct SchedulerConfig {
    /// Multiplier applied to every frame delta
    #[serde(default = "default_time_scale")]
    pub time_scale: f32,
    /// Start with every action held
    #[serde(default)]
    pub block_all: bool,
    /// Number of actions to reserve storage for
    #[serde(default)]
    pub capacity: usize,
}

fn default_time_scale() -> f32 {
    1.0
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            time_scale: default_time_scale(),
            block_all: false,
            capacity: 0,
        }
    }
}

impl SchedulerConfig {
    /// Parse and validate configuration text
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: SchedulerConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        validate_time_scale(self.time_scale)
    }
}
