//! Feedback messages, compliments and the form issues they count

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Positive reinforcement phrases shown after a counted rep
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Compliment {
    LookingStrong,
    GreatControl,
    PerfectForm,
    KeepPushing,
    SolidRep,
    NicePace,
}

impl Compliment {
    /// The fixed phrase set compliments are drawn from
    pub const ALL: [Compliment; 6] = [
        Compliment::LookingStrong,
        Compliment::GreatControl,
        Compliment::PerfectForm,
        Compliment::KeepPushing,
        Compliment::SolidRep,
        Compliment::NicePace,
    ];

    pub fn phrase(&self) -> &'static str {
        match self {
            Compliment::LookingStrong => "Looking Strong!",
            Compliment::GreatControl => "Great Control!",
            Compliment::PerfectForm => "Perfect Form!",
            Compliment::KeepPushing => "Keep Pushing!",
            Compliment::SolidRep => "Solid Rep!",
            Compliment::NicePace => "Nice Pace!",
        }
    }
}

/// Form problems that are tallied in the session history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormIssue {
    /// Angle past the over-extension safety limit
    OverExtending,
    /// Angle past the over-curl safety limit
    OverCurling,
    /// Stalled short of full contraction
    CurlHigher,
    /// Stalled short of full extension
    ExtendFully,
}

impl FormIssue {
    pub const ALL: [FormIssue; 4] = [
        FormIssue::OverExtending,
        FormIssue::OverCurling,
        FormIssue::CurlHigher,
        FormIssue::ExtendFully,
    ];

    /// Safety issues override every other feedback
    pub fn is_safety(&self) -> bool {
        matches!(self, FormIssue::OverExtending | FormIssue::OverCurling)
    }
}

/// The advisory string shown for a limb
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Feedback {
    /// Raised a form issue this sample
    Issue(FormIssue),
    /// Inside the praise window after a counted rep
    Praise(Compliment),
    /// Nothing to say
    #[default]
    MaintainForm,
}

impl Feedback {
    pub fn message(&self) -> &'static str {
        match self {
            Feedback::Issue(FormIssue::OverExtending) => "Over Extending",
            Feedback::Issue(FormIssue::OverCurling) => "Over Curling",
            Feedback::Issue(FormIssue::CurlHigher) => "Curl Higher",
            Feedback::Issue(FormIssue::ExtendFully) => "Extend Fully",
            Feedback::Praise(compliment) => compliment.phrase(),
            Feedback::MaintainForm => "Maintain Form",
        }
    }

    /// The issue this feedback counts toward, if any
    pub fn issue(&self) -> Option<FormIssue> {
        match self {
            Feedback::Issue(issue) => Some(*issue),
            _ => None,
        }
    }

    pub fn is_praise(&self) -> bool {
        matches!(self, Feedback::Praise(_))
    }
}

impl std::fmt::Display for Feedback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl FromStr for Feedback {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let issues = FormIssue::ALL.into_iter().map(Feedback::Issue);
        let praise = Compliment::ALL.into_iter().map(Feedback::Praise);
        issues
            .chain(praise)
            .chain(std::iter::once(Feedback::MaintainForm))
            .find(|feedback| feedback.message() == s)
            .ok_or_else(|| format!("unknown feedback message: {:?}", s))
    }
}

impl TryFrom<String> for Feedback {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Feedback> for String {
    fn from(feedback: Feedback) -> Self {
        feedback.message().to_string()
    }
}

// =============================================================================
// TESTS
// =============================================================================
