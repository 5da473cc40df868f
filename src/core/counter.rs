//! RepCounter: the per-sample entry point
//!
//! Each call runs one limb's sample through:
//! buffer → classifier → confirmer → (on commit) lifecycle → live timer → feedback.
//! Limbs are fully independent. Nothing here reads a clock or blocks.

use log::{debug, trace};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::core::{
    AdviceInput, Confirmation, CounterConfig, FeedbackAdvisor, RepLifecycle, StabilityBuffer,
    StageClassifier, TransitionConfirmer,
};
use crate::types::{
    Calibration, Feedback, Limb, LimbMetrics, PerLimb, ReasonCode, RepOutcome, SampleOutput,
    SessionHistory, Transition,
};

/// Transient detection state for one limb
#[derive(Debug, Clone)]
pub struct LimbTracker {
    pub calibration: Calibration,
    pub buffer: StabilityBuffer,
    pub confirmer: TransitionConfirmer,
    pub lifecycle: RepLifecycle,
}

impl LimbTracker {
    fn new(calibration: Calibration, config: &CounterConfig) -> Self {
        Self {
            calibration,
            buffer: StabilityBuffer::new(),
            confirmer: config.confirmer(),
            lifecycle: RepLifecycle::new(config.min_rep_duration),
        }
    }

    /// Clear buffer, pending candidate and rep start; counters are untouched
    fn reset(&mut self) {
        self.buffer.clear();
        self.confirmer.cancel();
        self.lifecycle.clear_rep_start();
    }
}

/// Rep counter for every tracked limb
#[derive(Debug)]
pub struct RepCounter<R: Rng = StdRng> {
    config: CounterConfig,
    classifier: StageClassifier,
    advisor: FeedbackAdvisor,
    trackers: PerLimb<LimbTracker>,
    rng: R,
}

impl RepCounter<StdRng> {
    /// Same calibration on every limb, compliments seeded from entropy
    pub fn new(calibration: Calibration, config: CounterConfig) -> Self {
        Self::with_rng(PerLimb::splat(calibration), config, StdRng::from_entropy())
    }

    /// Deterministic compliment selection
    pub fn with_seed(calibration: Calibration, config: CounterConfig, seed: u64) -> Self {
        Self::with_rng(PerLimb::splat(calibration), config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RepCounter<R> {
    /// Per-limb calibrations with an injected random source
    pub fn with_rng(calibrations: PerLimb<Calibration>, config: CounterConfig, rng: R) -> Self {
        Self {
            classifier: config.classifier(),
            advisor: config.advisor(),
            trackers: PerLimb::from_fn(|limb| LimbTracker::new(calibrations[limb], &config)),
            config,
            rng,
        }
    }

    pub fn config(&self) -> &CounterConfig {
        &self.config
    }

    pub fn tracker(&self, limb: Limb) -> &LimbTracker {
        &self.trackers[limb]
    }

    pub fn calibration(&self, limb: Limb) -> Calibration {
        self.trackers[limb].calibration
    }

    /// Process one sample and apply the raised issue to `history`
    pub fn process_rep(
        &mut self,
        limb: Limb,
        angle: f64,
        metrics: &mut LimbMetrics,
        now: f64,
        history: &mut SessionHistory,
    ) -> SampleOutput {
        let output = self.process(limb, angle, now, metrics);
        if let Some(issue) = output.issue {
            history.record(limb, issue);
        }
        output
    }

    /// Process one sample; the returned output carries the history delta
    pub fn process(&mut self, limb: Limb, angle: f64, now: f64, metrics: &mut LimbMetrics) -> SampleOutput {
        metrics.angle = angle;

        let mut output = SampleOutput {
            limb,
            at: now,
            angle,
            velocity: None,
            stage: metrics.stage,
            rep_count: metrics.rep_count,
            transition: None,
            rep: None,
            feedback: None,
            issue: None,
            reason: ReasonCode::R001_INSUFFICIENT_HISTORY,
        };

        if !angle.is_finite() {
            // Never buffered; an infinite angle still trips the safety limits
            output.reason = ReasonCode::R001_SAMPLE_NOT_FINITE;
            if let Some(issue) = self.advisor.safety_issue(angle) {
                metrics.feedback = Feedback::Issue(issue);
                output.feedback = Some(metrics.feedback);
                output.issue = Some(issue);
            }
            return output;
        }

        let tracker = &mut self.trackers[limb];
        let velocity = match tracker.buffer.push(angle) {
            Some(velocity) => velocity,
            None => return output,
        };
        output.velocity = Some(velocity);

        let prev = metrics.stage;
        let target = self.classifier.target_stage(angle, &tracker.calibration, prev);

        output.reason = match tracker.confirmer.evaluate(prev, target, velocity, now) {
            Confirmation::Held => ReasonCode::R002_STAGE_HELD,
            Confirmation::Accumulating { .. } => ReasonCode::R003_HOLD_ACCUMULATING,
            Confirmation::AwaitingSettle { .. } => ReasonCode::R003_AWAITING_SETTLE,
            Confirmation::Restarted => {
                trace!("{} candidate {} at {:.3}s", limb, target, now);
                ReasonCode::R003_CANDIDATE_RESTARTED
            }
            Confirmation::Commit(next) => {
                metrics.stage = next;
                debug!("{} {} -> {} at {:.3}s", limb, prev, next, now);
                output.transition = Some(Transition { from: prev, to: next });
                output.rep = tracker.lifecycle.on_transition(prev, next, now, metrics, &mut self.rng);
                match output.rep {
                    Some(RepOutcome::Counted { .. }) => ReasonCode::R005_REP_COUNTED,
                    Some(RepOutcome::Discarded { .. }) => ReasonCode::R005_REP_DISCARDED,
                    None => ReasonCode::R004_TRANSITION_COMMITTED,
                }
            }
        };

        tracker.lifecycle.update_live_timer(now, metrics);

        let lifecycle = &tracker.lifecycle;
        let feedback = self.advisor.advise(&AdviceInput {
            angle,
            velocity,
            stage: metrics.stage,
            calibration: &tracker.calibration,
            since_last_rep: lifecycle.last_rep_completed_time().map(|at| now - at),
            compliment: lifecycle.active_compliment(),
        });
        metrics.feedback = feedback;

        output.stage = metrics.stage;
        output.rep_count = metrics.rep_count;
        output.feedback = Some(feedback);
        output.issue = feedback.issue();
        output
    }

    /// Clear transient detection state for `limb`; rep counts and timing stats are kept
    pub fn reset_arm(&mut self, limb: Limb) {
        debug!("{} reset", limb);
        self.trackers[limb].reset();
    }

    /// Swap `limb`'s thresholds and reset it
    pub fn recalibrate(&mut self, limb: Limb, calibration: Calibration) {
        self.trackers[limb].calibration = calibration;
        self.reset_arm(limb);
    }
}

// =============================================================================
// TESTS
// =============================================================================
