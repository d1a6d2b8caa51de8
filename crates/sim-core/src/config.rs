//! Simulation Configuration
//!
//! All run parameters in one immutable struct, loadable from a TOML file
//! and threaded through the driver as a resource. Defaults reproduce the
//! standard run: a 1920x1080 arena recorded for one minute at 60 fps.

use bevy_ecs::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::error::SimError;

/// Complete simulation configuration.
#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Arena and frame width in pixels
    pub width: u32,
    /// Arena and frame height in pixels
    pub height: u32,
    /// Frames per second of the output stream
    pub fps: u32,
    /// Recorded duration in seconds
    pub duration_secs: u32,
    /// People seeded at startup
    pub initial_people: usize,
    /// Food points seeded at startup (at least 1)
    pub initial_food: usize,
    /// Shelters seeded at startup (at least 1)
    pub initial_shelter: usize,
    /// Random seed for reproducible runs
    pub seed: u64,
    /// Frames between stats history samples (0 disables sampling)
    pub stats_interval: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
            fps: 60,
            duration_secs: 60,
            initial_people: 10,
            initial_food: 55,
            initial_shelter: 55,
            seed: 42,
            stats_interval: 60,
        }
    }
}

impl SimConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Parses configuration from a TOML string. Missing keys fall back to
    /// their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::Toml)
    }

    pub fn total_frames(&self) -> u64 {
        u64::from(self.fps) * u64::from(self.duration_secs)
    }

    pub fn arena_width(&self) -> f32 {
        self.width as f32
    }

    pub fn arena_height(&self) -> f32 {
        self.height as f32
    }

    /// Reject arena or timing parameters a run cannot work with.
    pub fn validate_arena(&self) -> Result<(), SimError> {
        for (value, name) in [
            (self.width, "width"),
            (self.height, "height"),
            (self.fps, "fps"),
            (self.duration_secs, "duration_secs"),
        ] {
            if value == 0 {
                return Err(SimError::InvalidConfig {
                    reason: format!("{name} must be positive"),
                });
            }
        }
        Ok(())
    }

    /// Full validation for seeded runs. Food and shelter are never
    /// depleted, so non-empty seeding keeps the seek behaviors defined for
    /// the simulation's whole lifetime.
    pub fn validate(&self) -> Result<(), SimError> {
        self.validate_arena()?;
        if self.initial_food == 0 {
            return Err(SimError::InvalidConfig {
                reason: "initial_food must be at least 1".to_string(),
            });
        }
        if self.initial_shelter == 0 {
            return Err(SimError::InvalidConfig {
                reason: "initial_shelter must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

/// Errors that can occur during configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file: {0}")]
    Io(std::io::Error),
    #[error("could not parse config file: {0}")]
    Toml(toml::de::Error),
}
