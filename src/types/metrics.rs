//! Per-limb metrics consumed by the caller

use serde::{Deserialize, Serialize};

use crate::types::{ArmStage, Feedback};

/// Live metrics for one limb, updated in place on every sample
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LimbMetrics {
    /// Latest raw angle (degrees)
    pub angle: f64,
    /// Committed stage
    pub stage: ArmStage,
    /// Counted reps, never decreases
    pub rep_count: u32,
    /// Duration of the most recently counted rep (seconds, 0 = none)
    pub rep_time: f64,
    /// Fastest counted rep (seconds, 0 = none)
    pub min_rep_time: f64,
    /// Elapsed time of the in-progress rep while UP (seconds)
    pub curr_rep_time: f64,
    /// Origin the next rep is measured from (seconds)
    pub last_down_time: f64,
    /// Current advisory message
    pub feedback: Feedback,
}

impl LimbMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Has at least one rep been counted?
    pub fn has_reps(&self) -> bool {
        self.rep_count > 0
    }

    /// Fastest rep, `None` before the first counted rep
    pub fn best_rep_time(&self) -> Option<f64> {
        self.has_reps().then_some(self.min_rep_time)
    }

    /// Format for parseable output (no colors)
    pub fn to_parseable_string(&self) -> String {
        format!(
            "reps={} | stage={} | angle={:.1} | rep_time={:.2}s | best={:.2}s | feedback={}",
            self.rep_count,
            self.stage,
            self.angle,
            self.rep_time,
            self.min_rep_time,
            self.feedback
        )
    }
}

// =============================================================================
// TESTS
// =============================================================================
