//! Integration tests for form feedback and the session history

use pretty_assertions::assert_eq;
use repcount::core::{CounterConfig, RepCounter};
use repcount::types::{
    ArmStage, Calibration, Compliment, Feedback, FormIssue, Limb, LimbMetrics, ReasonCode,
    SampleOutput, SessionHistory,
};

const DT: f64 = 0.02;

struct Rig {
    counter: RepCounter,
    metrics: LimbMetrics,
    history: SessionHistory,
    index: u32,
}

impl Rig {
    fn new(seed: u64) -> Self {
        Self {
            counter: RepCounter::with_seed(Calibration::new(40.0, 160.0), CounterConfig::default(), seed),
            metrics: LimbMetrics::new(),
            history: SessionHistory::new(),
            index: 0,
        }
    }

    fn feed(&mut self, angle: f64) -> SampleOutput {
        let now = self.index as f64 * DT;
        self.index += 1;
        self.counter
            .process_rep(Limb::Left, angle, &mut self.metrics, now, &mut self.history)
    }

    fn hold(&mut self, angle: f64, secs: f64) -> Vec<SampleOutput> {
        let samples = (secs / DT).round() as usize;
        (0..samples).map(|_| self.feed(angle)).collect()
    }

    fn feed_until_commit(&mut self, angle: f64) -> SampleOutput {
        for _ in 0..200 {
            let output = self.feed(angle);
            if output.transition.is_some() {
                return output;
            }
        }
        panic!("no transition committed while holding {}", angle);
    }

    fn count(&self, issue: FormIssue) -> u64 {
        self.history.count(Limb::Left, issue)
    }

    /// Settle, curl, settle, extend: returns the counting output
    fn rep(&mut self) -> SampleOutput {
        self.hold(170.0, 0.2);
        self.feed_until_commit(30.0);
        self.hold(30.0, 0.3);
        self.feed_until_commit(170.0)
    }
}

// =============================================================================
// SAFETY LIMITS
// =============================================================================

#[test]
fn test_over_extension_counted_after_buffer_fills() {
    let mut counter =
        RepCounter::with_seed(Calibration::new(40.0, 160.0), CounterConfig::default(), 3);
    let mut metrics = LimbMetrics::new();
    let mut history = SessionHistory::new();

    let outputs: Vec<SampleOutput> = (0..6)
        .map(|i| counter.process_rep(Limb::Left, 179.0, &mut metrics, i as f64 * 0.05, &mut history))
        .collect();

    for output in &outputs[..3] {
        assert_eq!(output.reason, ReasonCode::R001_INSUFFICIENT_HISTORY);
        assert_eq!(output.feedback, None);
    }
    for output in &outputs[3..] {
        assert_eq!(output.feedback, Some(Feedback::Issue(FormIssue::OverExtending)));
    }
    assert_eq!(history.count(Limb::Left, FormIssue::OverExtending), 3);
    assert_eq!(history.feedback_count(Limb::Left), 3);
    assert_eq!(metrics.feedback.message(), "Over Extending");
}

#[test]
fn test_over_curl_wins_while_committing() {
    let mut rig = Rig::new(3);
    rig.hold(170.0, 0.1);

    let outputs = rig.hold(1.0, 0.4);
    assert!(outputs.iter().any(|o| o.stage == ArmStage::Up));
    assert!(outputs
        .iter()
        .all(|o| o.feedback == Some(Feedback::Issue(FormIssue::OverCurling))));
    assert_eq!(rig.count(FormIssue::OverCurling), outputs.len() as u64);
}

#[test]
fn test_issues_are_tallied_per_limb() {
    let mut counter =
        RepCounter::with_seed(Calibration::new(40.0, 160.0), CounterConfig::default(), 3);
    let mut left = LimbMetrics::new();
    let mut right = LimbMetrics::new();
    let mut history = SessionHistory::new();

    for i in 0..8 {
        let now = i as f64 * 0.05;
        counter.process_rep(Limb::Right, 179.5, &mut right, now, &mut history);
        counter.process_rep(Limb::Left, 170.0, &mut left, now, &mut history);
    }

    assert_eq!(history.count(Limb::Right, FormIssue::OverExtending), 5);
    assert_eq!(history.feedback_count(Limb::Left), 0);
    assert_eq!(left.feedback, Feedback::MaintainForm);
}

// =============================================================================
// STALL CORRECTION
// =============================================================================

#[test]
fn test_stall_short_of_contraction_says_curl_higher() {
    let mut rig = Rig::new(3);
    rig.hold(170.0, 0.2);

    let committed = rig.feed_until_commit(55.0);
    assert_eq!(committed.stage, ArmStage::MovingUp);
    assert_eq!(committed.feedback, Some(Feedback::Issue(FormIssue::CurlHigher)));
    let before = rig.count(FormIssue::CurlHigher);

    let held = rig.hold(55.0, 0.1);
    assert!(held
        .iter()
        .all(|o| o.feedback == Some(Feedback::Issue(FormIssue::CurlHigher))));
    assert_eq!(rig.count(FormIssue::CurlHigher), before + held.len() as u64);
}

#[test]
fn test_stall_short_of_extension_says_extend_fully() {
    let mut rig = Rig::new(3);
    rig.hold(170.0, 0.2);
    rig.feed_until_commit(30.0);
    rig.hold(30.0, 0.2);

    let committed = rig.feed_until_commit(120.0);
    assert_eq!(committed.stage, ArmStage::MovingDown);
    assert_eq!(committed.feedback, Some(Feedback::Issue(FormIssue::ExtendFully)));
    assert!(rig.count(FormIssue::ExtendFully) >= 1);
}

#[test]
fn test_moving_limb_is_not_stalled() {
    let mut rig = Rig::new(3);
    rig.hold(170.0, 0.2);

    // Steady 3°/sample descent: velocity 3.0, well above the stall threshold
    let outputs: Vec<SampleOutput> = (0..20).map(|i| rig.feed(150.0 - 3.0 * i as f64)).collect();
    assert!(outputs[3..].iter().all(|o| o.feedback == Some(Feedback::MaintainForm)));
    assert_eq!(rig.count(FormIssue::CurlHigher), 0);
}

#[test]
fn test_stall_within_tolerance_is_accepted() {
    let mut rig = Rig::new(3);
    rig.hold(170.0, 0.2);
    rig.feed_until_commit(30.0);

    // 44° is within 10° of the contracted threshold and inside the UP band
    let outputs = rig.hold(44.0, 0.3);
    assert!(outputs.iter().all(|o| o.stage == ArmStage::Up));
    assert!(outputs.iter().all(|o| o.feedback == Some(Feedback::MaintainForm)));
}

// =============================================================================
// PRAISE
// =============================================================================

#[test]
fn test_praise_follows_counted_rep_for_window() {
    let mut rig = Rig::new(5);
    let counted = rig.rep();
    assert!(counted.counted_rep());

    let praise = counted.feedback.expect("evaluated sample");
    assert!(praise.is_praise());
    assert!(Compliment::ALL.iter().any(|c| c.phrase() == praise.message()));

    let within = rig.hold(170.0, 1.9);
    assert!(within.iter().all(|o| o.feedback == Some(praise)));

    let after = rig.hold(170.0, 0.2);
    assert_eq!(after.last().and_then(|o| o.feedback), Some(Feedback::MaintainForm));
}

#[test]
fn test_safety_overrides_praise() {
    let mut rig = Rig::new(5);
    rig.rep();

    let output = rig.feed(179.0);
    assert_eq!(output.feedback, Some(Feedback::Issue(FormIssue::OverExtending)));
}

#[test]
fn test_same_seed_same_compliments() {
    let phrases = |seed| {
        let mut rig = Rig::new(seed);
        (0..3)
            .map(|_| rig.rep().feedback.map(|f| f.message()))
            .collect::<Vec<_>>()
    };
    assert_eq!(phrases(99), phrases(99));
}

#[test]
fn test_discarded_rep_earns_no_praise() {
    let mut rig = Rig::new(5);
    rig.hold(170.0, 0.08);
    rig.feed_until_commit(30.0);
    let output = rig.feed_until_commit(170.0);

    assert_eq!(output.reason, ReasonCode::R005_REP_DISCARDED);
    assert_eq!(output.feedback, Some(Feedback::MaintainForm));
}
