//! Stability buffer: last N raw angles per limb and a velocity estimate
//!
//! Velocity is the mean per-step change over the last 3 sampling intervals:
//! `|newest - sample_4_ago| / 3`. It is undefined until 4 samples exist.

use std::collections::VecDeque;

use crate::{ANGLE_BUFFER_CAPACITY, MIN_SAMPLES_FOR_VELOCITY, VELOCITY_SPAN};

/// Rolling window of recent angles
#[derive(Debug, Clone)]
pub struct StabilityBuffer {
    samples: VecDeque<f64>,
}

impl StabilityBuffer {
    pub fn new() -> Self {
        Self {
            samples: VecDeque::with_capacity(ANGLE_BUFFER_CAPACITY),
        }
    }

    /// Push an angle, evicting the oldest on overflow, and return the velocity
    pub fn push(&mut self, angle: f64) -> Option<f64> {
        if self.samples.len() == ANGLE_BUFFER_CAPACITY {
            self.samples.pop_front();
        }
        self.samples.push_back(angle);
        self.velocity()
    }

    /// Velocity over the last 3 intervals, `None` below 4 samples
    pub fn velocity(&self) -> Option<f64> {
        let len = self.samples.len();
        if len < MIN_SAMPLES_FOR_VELOCITY {
            return None;
        }
        let newest = self.samples[len - 1];
        let earlier = self.samples[len - MIN_SAMPLES_FOR_VELOCITY];
        Some((newest - earlier).abs() / VELOCITY_SPAN as f64)
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Oldest-first view of the buffered angles
    pub fn samples(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().copied()
    }

    /// Drop all samples (limb reset)
    pub fn clear(&mut self) {
        self.samples.clear();
    }
}

impl Default for StabilityBuffer {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// TESTS
// =============================================================================
