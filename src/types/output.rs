//! Output structures for each processed sample

use colored::Colorize;
use serde::{Deserialize, Serialize};

use crate::types::{ArmStage, Feedback, FormIssue, Limb, ReasonCode};

/// A committed stage change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    pub from: ArmStage,
    pub to: ArmStage,
}

/// What happened to a closing rep cycle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum RepOutcome {
    /// Cycle was long enough and was counted
    Counted { rep_count: u32, rep_time: f64 },
    /// Cycle was shorter than the minimum rep duration
    Discarded { rep_time: f64 },
}

impl RepOutcome {
    pub fn is_counted(&self) -> bool {
        matches!(self, RepOutcome::Counted { .. })
    }

    pub fn rep_time(&self) -> f64 {
        match self {
            RepOutcome::Counted { rep_time, .. } | RepOutcome::Discarded { rep_time } => *rep_time,
        }
    }
}

/// Output structure for each sample
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleOutput {
    /// Which limb
    pub limb: Limb,
    /// Caller-supplied timestamp (seconds)
    pub at: f64,
    /// Raw angle (degrees)
    pub angle: f64,
    /// Velocity estimate, `None` while buffering
    pub velocity: Option<f64>,
    /// Committed stage after this sample
    pub stage: ArmStage,
    /// Reps counted so far
    pub rep_count: u32,
    /// Stage change committed on this sample
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transition: Option<Transition>,
    /// Rep cycle closed on this sample
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rep: Option<RepOutcome>,
    /// Feedback shown, `None` if the sample was skipped
    pub feedback: Option<Feedback>,
    /// Issue to add to the session history
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue: Option<FormIssue>,
    /// Why the sample produced this output
    pub reason: ReasonCode,
}

impl SampleOutput {
    /// Did this sample count a rep?
    pub fn counted_rep(&self) -> bool {
        self.rep.map(|rep| rep.is_counted()).unwrap_or(false)
    }

    /// Format for terminal display (with colors)
    pub fn to_terminal_string(&self) -> String {
        let line = format!(
            "{} {:<5} t={:>7.3}s angle={:>6.1} | stage={:<11} | reps={} | {}",
            self.stage.glyph(),
            self.limb,
            self.at,
            self.angle,
            self.stage,
            self.rep_count,
            self.feedback_text()
        );
        let line = line.color(self.stage.color());
        match (self.rep, self.issue) {
            (Some(RepOutcome::Counted { .. }), _) => line.bold().to_string(),
            (_, Some(issue)) if issue.is_safety() => line.red().bold().to_string(),
            _ => line.to_string(),
        }
    }

    /// Format for parseable output (no colors)
    pub fn to_parseable_string(&self) -> String {
        format!(
            "limb={} | t={:.3} | angle={:.1} | stage={} | reps={} | feedback={} | reason={}",
            self.limb,
            self.at,
            self.angle,
            self.stage,
            self.rep_count,
            self.feedback_text(),
            self.reason.code()
        )
    }

    /// Velocity and reason suffix for verbose output
    pub fn to_verbose_suffix(&self) -> String {
        let velocity = self
            .velocity
            .map(|v| format!("{:.2}", v))
            .unwrap_or_else(|| "-".to_string());
        format!("velocity={} | {}", velocity, self.reason)
    }

    fn feedback_text(&self) -> &'static str {
        self.feedback.map(|f| f.message()).unwrap_or("-")
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn output() -> SampleOutput {
        SampleOutput {
            limb: Limb::Right,
            at: 1.5,
            angle: 168.3,
            velocity: Some(0.0),
            stage: ArmStage::Down,
            rep_count: 2,
            transition: Some(Transition { from: ArmStage::Up, to: ArmStage::Down }),
            rep: Some(RepOutcome::Counted { rep_count: 2, rep_time: 0.9 }),
            feedback: Some(Feedback::MaintainForm),
            issue: None,
            reason: ReasonCode::R005_REP_COUNTED,
        }
    }

    #[test]
    fn test_counted_rep() {
        let mut out = output();
        assert!(out.counted_rep());
        out.rep = Some(RepOutcome::Discarded { rep_time: 0.3 });
        assert!(!out.counted_rep());
        assert_eq!(out.rep.map(|r| r.rep_time()), Some(0.3));
        out.rep = None;
        assert!(!out.counted_rep());
    }

    #[test]
    fn test_parseable_string() {
        assert_eq!(
            output().to_parseable_string(),
            "limb=RIGHT | t=1.500 | angle=168.3 | stage=DOWN | reps=2 | feedback=Maintain Form | reason=R005_REP_COUNTED"
        );
    }

    #[test]
    fn test_skipped_sample_renders_placeholders() {
        let mut out = output();
        out.velocity = None;
        out.feedback = None;
        assert!(out.to_parseable_string().contains("feedback=-"));
        assert!(out.to_verbose_suffix().starts_with("velocity=- |"));
    }
}
