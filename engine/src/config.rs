//! Movement Configuration
//!
//! Tunable movement constants with JSON loading. Defaults match the
//! built-in constants in [`crate::player::movement_controller`]; a host can
//! ship a config file to retune feel without recompiling.
//!
//! # Example
//!
//! ```ignore
//! use walkabout_engine::config::MovementConfig;
//!
//! let config = MovementConfig::from_json_str(r#"{ "base_speed": 4.0 }"#)?;
//! let controller = MovementController::with_config(config);
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::player::movement_controller::{
    BASE_SPEED, CAPSULE_RADIUS, GROUND_CHECK_DISTANCE, SCROLL_DAMPING_RATE, SCROLL_LIMIT,
    SCROLL_SCALE, SPRINT_MULTIPLIER, VELOCITY_DAMPING_RATE,
};

/// Tunable constants for the movement controller.
///
/// Unspecified fields in a config file fall back to the built-in defaults,
/// so a file overriding a single value stays a one-liner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementConfig {
    /// Walk speed in units per second
    pub base_speed: f32,
    /// Speed multiplier while sprint is held
    pub sprint_multiplier: f32,
    /// Exponential damping rate for velocity smoothing (1/s)
    pub damping_rate: f32,
    /// Exponential decay rate for the scroll accumulator (1/s)
    pub scroll_damping_rate: f32,
    /// Raw wheel units to accumulator units
    pub scroll_scale: f32,
    /// Symmetric clamp bound on the scroll accumulator
    pub scroll_limit: f32,
    /// Collision radius around the viewpoint
    pub capsule_radius: f32,
    /// Maximum downward hit distance that still counts as grounded
    pub ground_check_distance: f32,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            base_speed: BASE_SPEED,
            sprint_multiplier: SPRINT_MULTIPLIER,
            damping_rate: VELOCITY_DAMPING_RATE,
            scroll_damping_rate: SCROLL_DAMPING_RATE,
            scroll_scale: SCROLL_SCALE,
            scroll_limit: SCROLL_LIMIT,
            capsule_radius: CAPSULE_RADIUS,
            ground_check_distance: GROUND_CHECK_DISTANCE,
        }
    }
}

impl MovementConfig {
    /// Parse and validate a config from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config from a JSON file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Check that every tunable is in its legal range.
    ///
    /// All fields must be strictly positive finite numbers; the sprint
    /// multiplier must additionally be at least 1.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_positive("base_speed", self.base_speed)?;
        require_positive("sprint_multiplier", self.sprint_multiplier)?;
        require_positive("damping_rate", self.damping_rate)?;
        require_positive("scroll_damping_rate", self.scroll_damping_rate)?;
        require_positive("scroll_scale", self.scroll_scale)?;
        require_positive("scroll_limit", self.scroll_limit)?;
        require_positive("capsule_radius", self.capsule_radius)?;
        require_positive("ground_check_distance", self.ground_check_distance)?;

        if self.sprint_multiplier < 1.0 {
            return Err(ConfigError::InvalidValue {
                field: "sprint_multiplier",
                value: self.sprint_multiplier,
            });
        }
        Ok(())
    }
}

fn require_positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue { field, value })
    }
}

// ============================================================================
// ERROR TYPE
// ============================================================================

/// Errors that can occur while loading a movement config.
#[derive(Debug)]
pub enum ConfigError {
    /// Standard I/O error.
    IoError(std::io::Error),
    /// JSON deserialization error.
    JsonError(serde_json::Error),
    /// A field is outside its legal range.
    InvalidValue { field: &'static str, value: f32 },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {e}"),
            ConfigError::JsonError(e) => write!(f, "JSON error: {e}"),
            ConfigError::InvalidValue { field, value } => {
                write!(f, "invalid value for {field}: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::IoError(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::JsonError(e)
    }
}
