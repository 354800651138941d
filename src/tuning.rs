//! Data-driven game balance
//!
//! Every physics and layout constant the simulation reads lives here so a
//! host can override individual values from JSON without recompiling.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Tunable simulation parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Added to the player's velocity every tick
    pub gravity: f32,
    /// Velocity assigned on activation
    pub jump_impulse: f32,

    /// Fixed gap between the top and bottom member of a pair
    pub gap: f32,
    pub pipe_speed: f32,
    pub pipe_width: f32,
    pub pipe_spacing: f32,
    pub pipe_count: usize,

    pub margin_top: f32,
    pub margin_bottom: f32,
    pub ground_height: f32,

    pub pass_margin: f32,

    pub player_half_width: f32,
    pub player_half_height: f32,
    pub player_x_fraction: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            jump_impulse: JUMP_IMPULSE,

            gap: GAP,
            pipe_speed: PIPE_SPEED,
            pipe_width: PIPE_WIDTH,
            pipe_spacing: PIPE_SPACING,
            pipe_count: PIPE_COUNT,

            margin_top: MARGIN_TOP,
            margin_bottom: MARGIN_BOTTOM,
            ground_height: GROUND_HEIGHT,

            pass_margin: PASS_MARGIN,

            player_half_width: PLAYER_HALF_WIDTH,
            player_half_height: PLAYER_HALF_HEIGHT,
            player_x_fraction: PLAYER_X_FRACTION,
        }
    }
}

impl Tuning {
    /// Parse tuning from JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load tuning from a JSON file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// Check values that would make the simulation meaningless
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("gap", self.gap),
            ("pipe_speed", self.pipe_speed),
            ("pipe_width", self.pipe_width),
            ("pipe_spacing", self.pipe_spacing),
            ("player_half_width", self.player_half_width),
            ("player_half_height", self.player_half_height),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidTuning { field, value });
            }
        }

        let non_negative = [
            ("margin_top", self.margin_top),
            ("margin_bottom", self.margin_bottom),
            ("ground_height", self.ground_height),
            ("pass_margin", self.pass_margin),
        ];
        for (field, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidTuning { field, value });
            }
        }

        if !self.gravity.is_finite() {
            return Err(ConfigError::InvalidTuning {
                field: "gravity",
                value: self.gravity,
            });
        }
        if !self.jump_impulse.is_finite() {
            return Err(ConfigError::InvalidTuning {
                field: "jump_impulse",
                value: self.jump_impulse,
            });
        }
        if !(0.0..=1.0).contains(&self.player_x_fraction) {
            return Err(ConfigError::InvalidTuning {
                field: "player_x_fraction",
                value: self.player_x_fraction,
            });
        }
        if self.pipe_count == 0 || self.pipe_count > MAX_PIPE_COUNT {
            return Err(ConfigError::InvalidTuning {
                field: "pipe_count",
                value: self.pipe_count as f32,
            });
        }

        Ok(())
    }

    /// Smallest viewport height that leaves a non-empty spawn range
    pub fn min_viewport_height(&self) -> f32 {
        self.margin_top + self.gap + self.margin_bottom + self.ground_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(Tuning::default().validate().is_ok());
        assert_eq!(Tuning::default().min_viewport_height(), 520.0);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "gap": 180.0, "pipe_count": 4 }"#).unwrap();
        assert_eq!(tuning.gap, 180.0);
        assert_eq!(tuning.pipe_count, 4);
        assert_eq!(tuning.gravity, GRAVITY);
        assert_eq!(tuning.pipe_width, PIPE_WIDTH);
    }

    #[test]
    fn test_rejects_bad_values() {
        let err = Tuning::from_json(r#"{ "pipe_speed": 0.0 }"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidTuning {
                field: "pipe_speed",
                ..
            }
        ));

        let err = Tuning::from_json(r#"{ "pipe_count": 0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidTuning { field: "pipe_count", .. }));

        let err = Tuning::from_json(r#"{ "pipe_count": 1000000000000 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidTuning { field: "pipe_count", .. }));
        assert!(Tuning::from_json(r#"{ "pipe_count": 64 }"#).is_ok());

        assert!(matches!(
            Tuning::from_json("{ not json"),
            Err(ConfigError::Parse(_))
        ));
    }
}
