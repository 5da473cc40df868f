//! Calibration thresholds for one limb/exercise

use serde::{Deserialize, Serialize};

use crate::types::ConfigReason;

/// Angle bounds for full contraction and full extension (degrees)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Calibration {
    pub contracted_threshold: f64,
    pub extended_threshold: f64,
}

impl Calibration {
    pub fn new(contracted_threshold: f64, extended_threshold: f64) -> Self {
        Self {
            contracted_threshold,
            extended_threshold,
        }
    }

    /// Thresholds must be finite and strictly ordered
    pub fn validate(&self) -> Result<(), ConfigReason> {
        if !self.contracted_threshold.is_finite() || !self.extended_threshold.is_finite() {
            return Err(ConfigReason::R405_CALIBRATION_NOT_FINITE);
        }
        if self.contracted_threshold >= self.extended_threshold {
            return Err(ConfigReason::R404_CALIBRATION_INVERTED);
        }
        Ok(())
    }

    /// Width of the usable range
    pub fn range(&self) -> f64 {
        self.extended_threshold - self.contracted_threshold
    }
}

// =============================================================================
// TESTS
// =============================================================================
