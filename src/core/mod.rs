//! Core modules for RepCount

pub mod buffer;
pub mod classifier;
pub mod config;
pub mod confirmer;
pub mod counter;
pub mod feedback;
pub mod lifecycle;
pub mod sample_parser;
pub mod session;

pub use buffer::StabilityBuffer;
pub use classifier::{target_stage, StageClassifier};
pub use config::{load_calibration, load_config, CounterConfig};
pub use confirmer::{Confirmation, PendingTransition, TransitionConfirmer};
pub use counter::{LimbTracker, RepCounter};
pub use feedback::{AdviceInput, FeedbackAdvisor};
pub use lifecycle::RepLifecycle;
pub use sample_parser::SampleParser;
pub use session::{LimbSummary, Session, SessionSummary};
