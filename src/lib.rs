//! RepCount: turns per-frame joint angles into counted repetitions
//!
//! One sample per limb per tracking frame flows through
//! buffer → classifier → confirmer → lifecycle, with the feedback
//! advisor running on the same sample. All timestamps come from the caller.

pub mod core;
pub mod types;

// =============================================================================
// CLASSIFICATION [C]
// =============================================================================

/// Hysteresis margin around the calibration thresholds (degrees)
pub const HYSTERESIS_MARGIN_DEG: f64 = 5.0;

/// How long a candidate stage must persist before it is committed (seconds)
pub const STATE_HOLD_TIME_SECS: f64 = 0.15;

/// Velocity below which a candidate is considered settled (degrees per sample)
pub const SETTLED_VELOCITY: f64 = 15.0;

// =============================================================================
// STABILITY BUFFER [C]
// =============================================================================

/// Number of raw angle samples kept per limb
pub const ANGLE_BUFFER_CAPACITY: usize = 8;

/// Samples required before velocity is defined
pub const MIN_SAMPLES_FOR_VELOCITY: usize = 4;

/// Sampling intervals spanned by the velocity estimate
pub const VELOCITY_SPAN: usize = MIN_SAMPLES_FOR_VELOCITY - 1;

// =============================================================================
// REP LIFECYCLE [C]
// =============================================================================

/// Shortest cycle that still counts as a rep (seconds)
pub const MIN_REP_DURATION_SECS: f64 = 0.6;

// =============================================================================
// FEEDBACK [C]
// =============================================================================

/// Above this angle the limb is over-extended (degrees)
pub const OVER_EXTENSION_LIMIT_DEG: f64 = 178.0;

/// Below this angle the limb is over-curled (degrees)
pub const OVER_CURL_LIMIT_DEG: f64 = 2.0;

/// Velocity below which the limb counts as stalled
pub const STALL_VELOCITY: f64 = 0.5;

/// Slack past a calibration threshold before a stall is corrected (degrees)
pub const STALL_TOLERANCE_DEG: f64 = 10.0;

/// How long a compliment stays up after a counted rep (seconds)
pub const PRAISE_WINDOW_SECS: f64 = 2.0;

// =============================================================================
// VERSION
// =============================================================================

pub const VERSION: &str = "0.1.0";
