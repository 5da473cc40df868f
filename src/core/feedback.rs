//! Feedback advisor: per-sample form advice, first match wins
//!
//! 1. Safety limits (always checked)
//! 2. Stall correction (only when the limb has stopped moving)
//! 3. Praise inside the window after a rep, otherwise "Maintain Form"

use crate::types::{ArmStage, Calibration, Compliment, Feedback, FormIssue};
use crate::{
    OVER_CURL_LIMIT_DEG, OVER_EXTENSION_LIMIT_DEG, PRAISE_WINDOW_SECS, STALL_TOLERANCE_DEG,
    STALL_VELOCITY,
};

/// Thresholds the advisor works from
#[derive(Debug, Clone, Copy)]
pub struct FeedbackAdvisor {
    pub over_extension_limit: f64,
    pub over_curl_limit: f64,
    pub stall_velocity: f64,
    pub stall_tolerance: f64,
    pub praise_window: f64,
}

impl Default for FeedbackAdvisor {
    fn default() -> Self {
        Self {
            over_extension_limit: OVER_EXTENSION_LIMIT_DEG,
            over_curl_limit: OVER_CURL_LIMIT_DEG,
            stall_velocity: STALL_VELOCITY,
            stall_tolerance: STALL_TOLERANCE_DEG,
            praise_window: PRAISE_WINDOW_SECS,
        }
    }
}

/// Everything the advisor looks at for one sample
#[derive(Debug, Clone, Copy)]
pub struct AdviceInput<'a> {
    pub angle: f64,
    pub velocity: f64,
    pub stage: ArmStage,
    pub calibration: &'a Calibration,
    /// Seconds since the last counted rep, `None` before the first
    pub since_last_rep: Option<f64>,
    pub compliment: Option<Compliment>,
}

impl FeedbackAdvisor {
    pub fn advise(&self, input: &AdviceInput<'_>) -> Feedback {
        if let Some(issue) = self.safety_issue(input.angle) {
            return Feedback::Issue(issue);
        }
        if let Some(issue) = self.stall_issue(input) {
            return Feedback::Issue(issue);
        }

        match (input.since_last_rep, input.compliment) {
            (Some(elapsed), Some(compliment)) if elapsed < self.praise_window => {
                Feedback::Praise(compliment)
            }
            _ => Feedback::MaintainForm,
        }
    }

    /// Safety limit crossed by `angle`, if any
    pub fn safety_issue(&self, angle: f64) -> Option<FormIssue> {
        if angle > self.over_extension_limit {
            Some(FormIssue::OverExtending)
        } else if angle < self.over_curl_limit {
            Some(FormIssue::OverCurling)
        } else {
            None
        }
    }

    fn stall_issue(&self, input: &AdviceInput<'_>) -> Option<FormIssue> {
        if input.velocity >= self.stall_velocity {
            return None;
        }
        let cal = input.calibration;
        if input.stage.is_contracting() {
            (input.angle > cal.contracted_threshold + self.stall_tolerance).then_some(FormIssue::CurlHigher)
        } else {
            (input.angle < cal.extended_threshold - self.stall_tolerance).then_some(FormIssue::ExtendFully)
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn cal() -> Calibration {
        Calibration::new(40.0, 160.0)
    }

    fn input(angle: f64, velocity: f64, stage: ArmStage, cal: &Calibration) -> AdviceInput<'_> {
        AdviceInput {
            angle,
            velocity,
            stage,
            calibration: cal,
            since_last_rep: None,
            compliment: None,
        }
    }

    #[test]
    fn test_safety_wins_regardless_of_motion() {
        let advisor = FeedbackAdvisor::default();
        let cal = cal();
        for stage in [ArmStage::Up, ArmStage::Down, ArmStage::MovingUp, ArmStage::MovingDown] {
            assert_eq!(
                advisor.advise(&input(179.0, 40.0, stage, &cal)),
                Feedback::Issue(FormIssue::OverExtending)
            );
            assert_eq!(
                advisor.advise(&input(1.0, 0.0, stage, &cal)),
                Feedback::Issue(FormIssue::OverCurling)
            );
        }
    }

    #[test]
    fn test_safety_limits_are_exclusive() {
        let advisor = FeedbackAdvisor::default();
        let cal = cal();
        assert_ne!(
            advisor.advise(&input(178.0, 5.0, ArmStage::Down, &cal)),
            Feedback::Issue(FormIssue::OverExtending)
        );
        assert_ne!(
            advisor.advise(&input(2.0, 5.0, ArmStage::Up, &cal)),
            Feedback::Issue(FormIssue::OverCurling)
        );
    }

    #[test]
    fn test_stall_short_of_contraction() {
        let advisor = FeedbackAdvisor::default();
        let cal = cal();
        assert_eq!(
            advisor.advise(&input(55.0, 0.0, ArmStage::MovingUp, &cal)),
            Feedback::Issue(FormIssue::CurlHigher)
        );
        // Within tolerance
        assert_eq!(
            advisor.advise(&input(50.0, 0.0, ArmStage::Up, &cal)),
            Feedback::MaintainForm
        );
    }

    #[test]
    fn test_stall_short_of_extension() {
        let advisor = FeedbackAdvisor::default();
        let cal = cal();
        assert_eq!(
            advisor.advise(&input(120.0, 0.2, ArmStage::MovingDown, &cal)),
            Feedback::Issue(FormIssue::ExtendFully)
        );
        assert_eq!(
            advisor.advise(&input(150.0, 0.2, ArmStage::Down, &cal)),
            Feedback::MaintainForm
        );
    }

    #[test]
    fn test_no_correction_while_moving() {
        let advisor = FeedbackAdvisor::default();
        let cal = cal();
        assert_eq!(
            advisor.advise(&input(100.0, 0.5, ArmStage::MovingUp, &cal)),
            Feedback::MaintainForm
        );
    }

    #[test]
    fn test_praise_inside_window() {
        let advisor = FeedbackAdvisor::default();
        let cal = cal();
        let mut sample = input(100.0, 8.0, ArmStage::MovingDown, &cal);
        sample.compliment = Some(Compliment::NicePace);

        sample.since_last_rep = Some(1.99);
        assert_eq!(advisor.advise(&sample), Feedback::Praise(Compliment::NicePace));

        sample.since_last_rep = Some(2.0);
        assert_eq!(advisor.advise(&sample), Feedback::MaintainForm);
    }

    #[test]
    fn test_correction_beats_praise() {
        let advisor = FeedbackAdvisor::default();
        let cal = cal();
        let mut sample = input(60.0, 0.0, ArmStage::Up, &cal);
        sample.compliment = Some(Compliment::SolidRep);
        sample.since_last_rep = Some(0.1);
        assert_eq!(advisor.advise(&sample), Feedback::Issue(FormIssue::CurlHigher));
    }
}
