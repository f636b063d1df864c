//! Scheduler error types
//!
//! The tick path never fails: disappeared targets, invalid groups, and
//! zero durations all degrade to "the action quietly stops". Errors only
//! come from configuring a scheduler.

use thiserror::Error;

/// Scheduler configuration errors
#[derive(Error, Debug)]
pub enum SchedulerError {
    /// Time scale is negative, NaN, or infinite
    #[error("Invalid time scale {0}: must be finite and non-negative")]
    InvalidTimeScale(f32),

    /// Failed to read a configuration file
    #[error("Failed to read scheduler config: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration text is not valid TOML for `SchedulerConfig`
    #[error("Failed to parse scheduler config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Configuration could not be written as TOML
    #[error("Failed to serialize scheduler config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),
}

/// Result type for scheduler operations
pub type Result<T> = std::result::Result<T, SchedulerError>;

/// Check that `scale` can multiply frame deltas
pub(crate) fn validate_time_scale(scale: f32) -> Result<()> {
    if scale.is_finite() && scale >= 0.0 {
        Ok(())
    } else {
        Err(SchedulerError::InvalidTimeScale(scale))
    }
}
