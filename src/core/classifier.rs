//! Stage classifier: angle → target stage with asymmetric hysteresis
//!
//! Hard bounds:
//! - angle ≤ contracted − m → UP
//! - angle ≥ extended + m → DOWN
//!
//! Between them the current stage decides:
//! - UP stays UP below contracted + m, else MOVING_DOWN
//! - DOWN stays DOWN above extended − m, else MOVING_UP
//! - MOVING_UP / MOVING_DOWN coast until a hard bound is crossed

use crate::types::{ArmStage, Calibration};
use crate::HYSTERESIS_MARGIN_DEG;

/// Pure classifier, parameterised by the hysteresis margin
#[derive(Debug, Clone, Copy)]
pub struct StageClassifier {
    margin: f64,
}

impl Default for StageClassifier {
    fn default() -> Self {
        Self::new(HYSTERESIS_MARGIN_DEG)
    }
}

impl StageClassifier {
    pub fn new(margin: f64) -> Self {
        Self { margin }
    }

    pub fn margin(&self) -> f64 {
        self.margin
    }

    /// Target stage for `angle` given the committed `current` stage
    ///
    /// Advisory only; the confirmer decides whether it is applied.
    pub fn target_stage(&self, angle: f64, calibration: &Calibration, current: ArmStage) -> ArmStage {
        let contracted = calibration.contracted_threshold;
        let extended = calibration.extended_threshold;
        let m = self.margin;

        if angle <= contracted - m {
            return ArmStage::Up;
        }
        if angle >= extended + m {
            return ArmStage::Down;
        }

        match current {
            ArmStage::Up => {
                if angle < contracted + m {
                    ArmStage::Up
                } else {
                    ArmStage::MovingDown
                }
            }
            ArmStage::Down => {
                if angle > extended - m {
                    ArmStage::Down
                } else {
                    ArmStage::MovingUp
                }
            }
            // Hard bounds already handled above
            ArmStage::MovingUp | ArmStage::MovingDown => current,
        }
    }
}

/// Classify with the default margin
pub fn target_stage(angle: f64, calibration: &Calibration, current: ArmStage) -> ArmStage {
    StageClassifier::default().target_stage(angle, calibration, current)
}

// =============================================================================
// TESTS
// =============================================================================
