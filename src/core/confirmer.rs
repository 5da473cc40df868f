//! Transition confirmer: debounces the classifier before a stage is committed
//!
//! A target different from the committed stage must be seen as the same
//! candidate for at least the hold time, and the limb must have settled
//! (velocity below the settle threshold), before the change is applied.
//! A different candidate restarts the hold window.

use crate::types::ArmStage;
use crate::{SETTLED_VELOCITY, STATE_HOLD_TIME_SECS};

/// Candidate stage under observation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingTransition {
    pub stage: ArmStage,
    /// When the candidate was first seen (seconds)
    pub since: f64,
}

/// Result of feeding one classification into the confirmer
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Confirmation {
    /// Target equals the committed stage; any candidate was dropped
    Held,
    /// Same candidate, hold time not reached
    Accumulating { elapsed: f64 },
    /// Hold time reached but velocity too high
    AwaitingSettle { elapsed: f64 },
    /// New candidate, window started now
    Restarted,
    /// Commit the candidate
    Commit(ArmStage),
}

/// Per-limb debounce state
#[derive(Debug, Clone)]
pub struct TransitionConfirmer {
    pending: Option<PendingTransition>,
    hold_time: f64,
    settled_velocity: f64,
}

impl Default for TransitionConfirmer {
    fn default() -> Self {
        Self::new(STATE_HOLD_TIME_SECS, SETTLED_VELOCITY)
    }
}

impl TransitionConfirmer {
    pub fn new(hold_time: f64, settled_velocity: f64) -> Self {
        Self {
            pending: None,
            hold_time,
            settled_velocity,
        }
    }

    /// Evaluate `target` against the committed `current` stage
    pub fn evaluate(&mut self, current: ArmStage, target: ArmStage, velocity: f64, now: f64) -> Confirmation {
        if target == current {
            self.pending = None;
            return Confirmation::Held;
        }

        match self.pending {
            Some(pending) if pending.stage == target => {
                let elapsed = now - pending.since;
                // Comparisons with NaN are false: a NaN elapsed or velocity cannot commit
                let held = elapsed >= self.hold_time;
                if held && velocity < self.settled_velocity {
                    self.pending = None;
                    Confirmation::Commit(target)
                } else if held {
                    Confirmation::AwaitingSettle { elapsed }
                } else {
                    Confirmation::Accumulating { elapsed }
                }
            }
            _ => {
                self.pending = Some(PendingTransition {
                    stage: target,
                    since: now,
                });
                Confirmation::Restarted
            }
        }
    }

    pub fn pending(&self) -> Option<PendingTransition> {
        self.pending
    }

    /// Drop any candidate (limb reset)
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

// =============================================================================
// TESTS
// =============================================================================
