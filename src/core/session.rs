//! Session: owns a counter plus the metrics and history it updates

use chrono::{DateTime, Utc};
use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::core::{CounterConfig, RepCounter};
use crate::types::{
    AngleSample, Calibration, IssueCounters, Limb, LimbMetrics, PerLimb, SampleOutput,
    SessionHistory,
};

/// Per-limb line of a session summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LimbSummary {
    pub rep_count: u32,
    /// Fastest counted rep, `None` before the first
    pub best_rep_time: Option<f64>,
    /// Most recent counted rep
    pub last_rep_time: Option<f64>,
    pub issues: IssueCounters,
}

/// End-of-run summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub started_at: DateTime<Utc>,
    pub samples: u64,
    pub limbs: PerLimb<LimbSummary>,
}

impl SessionSummary {
    pub fn total_reps(&self) -> u32 {
        self.limbs.left.rep_count + self.limbs.right.rep_count
    }
}

/// A counting session
#[derive(Debug)]
pub struct Session<R: Rng = StdRng> {
    counter: RepCounter<R>,
    metrics: PerLimb<LimbMetrics>,
    history: SessionHistory,
    started_at: DateTime<Utc>,
    samples: u64,
}

impl Session<StdRng> {
    pub fn new(calibration: Calibration, config: CounterConfig) -> Self {
        Self::from_counter(RepCounter::new(calibration, config))
    }

    pub fn with_seed(calibration: Calibration, config: CounterConfig, seed: u64) -> Self {
        Self::from_counter(RepCounter::with_seed(calibration, config, seed))
    }
}

impl<R: Rng> Session<R> {
    pub fn from_counter(counter: RepCounter<R>) -> Self {
        Self {
            counter,
            metrics: PerLimb::default(),
            history: SessionHistory::new(),
            started_at: Utc::now(),
            samples: 0,
        }
    }

    /// Feed one sample
    pub fn ingest(&mut self, sample: AngleSample) -> SampleOutput {
        self.samples += 1;
        let limb = sample.limb;
        self.counter.process_rep(
            limb,
            sample.angle,
            &mut self.metrics[limb],
            sample.at,
            &mut self.history,
        )
    }

    /// Reset transient detection state for `limb`
    pub fn reset_limb(&mut self, limb: Limb) {
        self.counter.reset_arm(limb);
    }

    pub fn metrics(&self, limb: Limb) -> &LimbMetrics {
        &self.metrics[limb]
    }

    pub fn history(&self) -> &SessionHistory {
        &self.history
    }

    pub fn counter(&self) -> &RepCounter<R> {
        &self.counter
    }

    pub fn counter_mut(&mut self) -> &mut RepCounter<R> {
        &mut self.counter
    }

    pub fn samples(&self) -> u64 {
        self.samples
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            started_at: self.started_at,
            samples: self.samples,
            limbs: PerLimb::from_fn(|limb| {
                let metrics = &self.metrics[limb];
                LimbSummary {
                    rep_count: metrics.rep_count,
                    best_rep_time: metrics.best_rep_time(),
                    last_rep_time: metrics.has_reps().then_some(metrics.rep_time),
                    issues: self.history.counters[limb],
                }
            }),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
