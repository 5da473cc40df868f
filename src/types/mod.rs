//! Core types for RepCount

mod calibration;
mod feedback;
mod history;
mod limb;
mod metrics;
mod output;
mod reason;
mod sample;
mod stage;

pub use calibration::Calibration;
pub use feedback::{Compliment, Feedback, FormIssue};
pub use history::{IssueCounters, SessionHistory};
pub use limb::{Limb, PerLimb};
pub use metrics::LimbMetrics;
pub use output::{RepOutcome, SampleOutput, Transition};
pub use reason::{ConfigReason, InputReason, ReasonCode};
pub use sample::{AngleSample, InputLine};
pub use stage::ArmStage;
