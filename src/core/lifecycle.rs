//! Rep lifecycle: decides on committed transitions whether a rep completed
//!
//! Cases, checked in order (first match wins):
//! - prev UP → MOVING_DOWN/DOWN closes a cycle measured from `last_down_time`.
//!   Long enough: counted. Too fast: discarded, origin kept.
//! - → DOWN marks the start of the next cycle.
//! - → UP with no start recorded yet starts timing without crediting a rep.

use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::types::{ArmStage, Compliment, LimbMetrics, RepOutcome};
use crate::MIN_REP_DURATION_SECS;

/// Per-limb rep timing state
#[derive(Debug, Clone)]
pub struct RepLifecycle {
    min_rep_duration: f64,
    rep_start_time: Option<f64>,
    last_rep_completed_time: Option<f64>,
    active_compliment: Option<Compliment>,
}

impl Default for RepLifecycle {
    fn default() -> Self {
        Self::new(MIN_REP_DURATION_SECS)
    }
}

impl RepLifecycle {
    pub fn new(min_rep_duration: f64) -> Self {
        Self {
            min_rep_duration,
            rep_start_time: None,
            last_rep_completed_time: None,
            active_compliment: None,
        }
    }

    /// Handle a committed `prev → new` transition at `now`
    pub fn on_transition<R: Rng + ?Sized>(
        &mut self,
        prev: ArmStage,
        new: ArmStage,
        now: f64,
        metrics: &mut LimbMetrics,
        rng: &mut R,
    ) -> Option<RepOutcome> {
        if prev == ArmStage::Up {
            if matches!(new, ArmStage::MovingDown | ArmStage::Down) {
                return Some(self.close_cycle(now, metrics, rng));
            }
        } else if new == ArmStage::Down {
            self.rep_start_time = Some(now);
        } else if new == ArmStage::Up && self.rep_start_time.is_none() {
            self.rep_start_time = Some(now);
        }
        None
    }

    fn close_cycle<R: Rng + ?Sized>(&mut self, now: f64, metrics: &mut LimbMetrics, rng: &mut R) -> RepOutcome {
        let rep_time = now - metrics.last_down_time;

        if rep_time >= self.min_rep_duration {
            return self.count_rep(rep_time, now, metrics, rng);
        }

        // Too fast or unmeasurable (NaN): origin stays put for the next attempt
        debug!("rep discarded: {:.3}s < {:.3}s", rep_time, self.min_rep_duration);
        RepOutcome::Discarded { rep_time }
    }

    fn count_rep<R: Rng + ?Sized>(
        &mut self,
        rep_time: f64,
        now: f64,
        metrics: &mut LimbMetrics,
        rng: &mut R,
    ) -> RepOutcome {
        metrics.rep_count += 1;
        metrics.rep_time = rep_time;
        metrics.min_rep_time = if metrics.min_rep_time == 0.0 {
            rep_time
        } else {
            metrics.min_rep_time.min(rep_time)
        };
        metrics.last_down_time = now;
        metrics.curr_rep_time = 0.0;

        self.last_rep_completed_time = Some(now);
        self.active_compliment = Compliment::ALL.choose(rng).copied();

        debug!("rep {} counted in {:.3}s", metrics.rep_count, rep_time);
        RepOutcome::Counted {
            rep_count: metrics.rep_count,
            rep_time,
        }
    }

    /// Refresh the live rep timer while the limb is UP
    pub fn update_live_timer(&self, now: f64, metrics: &mut LimbMetrics) {
        if metrics.stage != ArmStage::Up {
            return;
        }
        if let Some(start) = self.rep_start_time {
            metrics.curr_rep_time = now - start;
        }
    }

    /// Compliment to show at `now`, if still inside `window` seconds of the last rep
    pub fn praise(&self, now: f64, window: f64) -> Option<Compliment> {
        let completed = self.last_rep_completed_time?;
        if now - completed < window {
            self.active_compliment
        } else {
            None
        }
    }

    pub fn rep_start_time(&self) -> Option<f64> {
        self.rep_start_time
    }

    pub fn last_rep_completed_time(&self) -> Option<f64> {
        self.last_rep_completed_time
    }

    pub fn active_compliment(&self) -> Option<Compliment> {
        self.active_compliment
    }

    /// Forget the in-progress rep start (limb reset)
    pub fn clear_rep_start(&mut self) {
        self.rep_start_time = None;
    }
}

// =============================================================================
// TESTS
// =============================================================================
