//! Input records fed to a session

use serde::{Deserialize, Serialize};

use crate::types::Limb;

/// One joint-angle measurement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AngleSample {
    pub limb: Limb,
    /// Monotonic timestamp (seconds)
    pub at: f64,
    /// Joint angle (degrees)
    pub angle: f64,
}

impl AngleSample {
    pub fn new(limb: Limb, at: f64, angle: f64) -> Self {
        Self { limb, at, angle }
    }
}

/// A parsed line of the text input format
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputLine {
    Sample(AngleSample),
    Reset(Limb),
    /// Blank line or comment
    Skip,
}
