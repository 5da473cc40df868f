//! Counter tuning and JSON loading for config and calibration files

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::{FeedbackAdvisor, StageClassifier, TransitionConfirmer};
use crate::types::{Calibration, ConfigReason};
use crate::{
    HYSTERESIS_MARGIN_DEG, MIN_REP_DURATION_SECS, OVER_CURL_LIMIT_DEG, OVER_EXTENSION_LIMIT_DEG,
    PRAISE_WINDOW_SECS, SETTLED_VELOCITY, STALL_TOLERANCE_DEG, STALL_VELOCITY, STATE_HOLD_TIME_SECS,
};

/// Tunables for the whole pipeline; missing fields take the defaults
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CounterConfig {
    /// Degrees around each threshold before the classifier flips
    pub hysteresis_margin: f64,
    /// Seconds a candidate stage must persist
    pub state_hold_time: f64,
    /// Velocity a candidate must fall below to commit
    pub settled_velocity: f64,
    /// Shortest counted rep (seconds)
    pub min_rep_duration: f64,
    /// Velocity below which the limb is stalled
    pub stall_velocity: f64,
    /// Degrees of slack before a stall is corrected
    pub stall_tolerance: f64,
    pub over_extension_limit: f64,
    pub over_curl_limit: f64,
    /// Seconds a compliment stays up
    pub praise_window: f64,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            hysteresis_margin: HYSTERESIS_MARGIN_DEG,
            state_hold_time: STATE_HOLD_TIME_SECS,
            settled_velocity: SETTLED_VELOCITY,
            min_rep_duration: MIN_REP_DURATION_SECS,
            stall_velocity: STALL_VELOCITY,
            stall_tolerance: STALL_TOLERANCE_DEG,
            over_extension_limit: OVER_EXTENSION_LIMIT_DEG,
            over_curl_limit: OVER_CURL_LIMIT_DEG,
            praise_window: PRAISE_WINDOW_SECS,
        }
    }
}

impl CounterConfig {
    /// Every value finite and non-negative, safety limits ordered
    pub fn validate(&self) -> Result<(), ConfigReason> {
        let values = [
            self.hysteresis_margin,
            self.state_hold_time,
            self.settled_velocity,
            self.min_rep_duration,
            self.stall_velocity,
            self.stall_tolerance,
            self.over_extension_limit,
            self.over_curl_limit,
            self.praise_window,
        ];
        if values.iter().any(|v| !v.is_finite() || *v < 0.0) {
            return Err(ConfigReason::R403_CONFIG_INVALID_VALUE);
        }
        if self.over_curl_limit >= self.over_extension_limit {
            return Err(ConfigReason::R403_CONFIG_INVALID_VALUE);
        }
        Ok(())
    }

    pub fn classifier(&self) -> StageClassifier {
        StageClassifier::new(self.hysteresis_margin)
    }

    pub fn confirmer(&self) -> TransitionConfirmer {
        TransitionConfirmer::new(self.state_hold_time, self.settled_velocity)
    }

    pub fn advisor(&self) -> FeedbackAdvisor {
        FeedbackAdvisor {
            over_extension_limit: self.over_extension_limit,
            over_curl_limit: self.over_curl_limit,
            stall_velocity: self.stall_velocity,
            stall_tolerance: self.stall_tolerance,
            praise_window: self.praise_window,
        }
    }
}

/// Load and validate a counter config from a JSON file
pub fn load_config(path: impl AsRef<Path>) -> Result<CounterConfig, ConfigReason> {
    let config: CounterConfig = read_json(path.as_ref())?;
    config.validate()?;
    Ok(config)
}

/// Load and validate a calibration from a JSON file
pub fn load_calibration(path: impl AsRef<Path>) -> Result<Calibration, ConfigReason> {
    let calibration: Calibration = read_json(path.as_ref())?;
    calibration.validate()?;
    Ok(calibration)
}

fn read_json<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<T, ConfigReason> {
    let json = std::fs::read_to_string(path).map_err(|_| ConfigReason::R401_CONFIG_READ_ERROR)?;

    serde_json::from_str(&json).map_err(|_| ConfigReason::R402_CONFIG_PARSE_ERROR)
}

// =============================================================================
// TESTS
// =============================================================================
