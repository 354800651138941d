//! Configuration errors
//!
//! The simulation itself is infallible; everything that can go wrong happens
//! while loading or validating configuration, before the first tick.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("viewport height {height} too small, obstacles need at least {required}")]
    ViewportTooSmall { height: f32, required: f32 },

    #[error("viewport width {0} must be positive")]
    InvalidWidth(f32),

    #[error("tuning value `{field}` is invalid: {value}")]
    InvalidTuning { field: &'static str, value: f32 },

    #[error("invalid value `{value}` for argument `{flag}`")]
    InvalidArgument { flag: String, value: String },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
}
