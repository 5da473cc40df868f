//! Reason codes for per-sample outcomes and setup failures

use serde::{Deserialize, Serialize};

/// Why a sample produced the output it did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[allow(non_camel_case_types)]
pub enum ReasonCode {
    // =========================================================================
    // R001: Skipped samples
    // =========================================================================
    /// Fewer than 4 samples buffered, velocity undefined
    R001_INSUFFICIENT_HISTORY,
    /// Angle was NaN or infinite
    R001_SAMPLE_NOT_FINITE,

    // =========================================================================
    // R002: No change requested
    // =========================================================================
    /// Classifier agrees with the committed stage
    R002_STAGE_HELD,

    // =========================================================================
    // R003: Pending candidate
    // =========================================================================
    /// Candidate seen before, hold time not yet reached
    R003_HOLD_ACCUMULATING,
    /// Hold time reached but the limb is still moving fast
    R003_AWAITING_SETTLE,
    /// New candidate, hold window started from this sample
    R003_CANDIDATE_RESTARTED,

    // =========================================================================
    // R004: Committed transitions
    // =========================================================================
    /// Stage changed without closing a rep
    R004_TRANSITION_COMMITTED,

    // =========================================================================
    // R005: Rep lifecycle
    // =========================================================================
    /// Cycle closed and counted
    R005_REP_COUNTED,
    /// Cycle closed faster than the minimum rep duration
    R005_REP_DISCARDED,
}

impl ReasonCode {
    /// Get the code string (for logging)
    pub fn code(&self) -> &'static str {
        match self {
            Self::R001_INSUFFICIENT_HISTORY => "R001_INSUFFICIENT_HISTORY",
            Self::R001_SAMPLE_NOT_FINITE => "R001_SAMPLE_NOT_FINITE",
            Self::R002_STAGE_HELD => "R002_STAGE_HELD",
            Self::R003_HOLD_ACCUMULATING => "R003_HOLD_ACCUMULATING",
            Self::R003_AWAITING_SETTLE => "R003_AWAITING_SETTLE",
            Self::R003_CANDIDATE_RESTARTED => "R003_CANDIDATE_RESTARTED",
            Self::R004_TRANSITION_COMMITTED => "R004_TRANSITION_COMMITTED",
            Self::R005_REP_COUNTED => "R005_REP_COUNTED",
            Self::R005_REP_DISCARDED => "R005_REP_DISCARDED",
        }
    }

    /// Get human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            Self::R001_INSUFFICIENT_HISTORY => "Buffering samples",
            Self::R001_SAMPLE_NOT_FINITE => "Angle not finite, sample ignored",
            Self::R002_STAGE_HELD => "Stage unchanged",
            Self::R003_HOLD_ACCUMULATING => "Candidate holding",
            Self::R003_AWAITING_SETTLE => "Candidate waiting for limb to settle",
            Self::R003_CANDIDATE_RESTARTED => "New candidate stage",
            Self::R004_TRANSITION_COMMITTED => "Stage transition committed",
            Self::R005_REP_COUNTED => "Rep counted",
            Self::R005_REP_DISCARDED => "Rep too fast, discarded",
        }
    }

    /// Did this sample skip classification entirely?
    pub fn is_skip(&self) -> bool {
        matches!(
            self,
            Self::R001_INSUFFICIENT_HISTORY | Self::R001_SAMPLE_NOT_FINITE
        )
    }
}

impl std::fmt::Display for ReasonCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code(), self.description())
    }
}

/// Reasons configuration or calibration could not be loaded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[allow(non_camel_case_types)]
pub enum ConfigReason {
    /// File could not be read
    R401_CONFIG_READ_ERROR,
    /// File is not valid JSON for the expected shape
    R402_CONFIG_PARSE_ERROR,
    /// A tuning value is negative, non-finite or inconsistent
    R403_CONFIG_INVALID_VALUE,
    /// Contracted threshold is not below the extended threshold
    R404_CALIBRATION_INVERTED,
    /// A calibration threshold is NaN or infinite
    R405_CALIBRATION_NOT_FINITE,
}

impl ConfigReason {
    pub fn code(&self) -> &'static str {
        match self {
            Self::R401_CONFIG_READ_ERROR => "R401_CONFIG_READ_ERROR",
            Self::R402_CONFIG_PARSE_ERROR => "R402_CONFIG_PARSE_ERROR",
            Self::R403_CONFIG_INVALID_VALUE => "R403_CONFIG_INVALID_VALUE",
            Self::R404_CALIBRATION_INVERTED => "R404_CALIBRATION_INVERTED",
            Self::R405_CALIBRATION_NOT_FINITE => "R405_CALIBRATION_NOT_FINITE",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::R401_CONFIG_READ_ERROR => "Could not read file",
            Self::R402_CONFIG_PARSE_ERROR => "Could not parse JSON",
            Self::R403_CONFIG_INVALID_VALUE => "Invalid tuning value",
            Self::R404_CALIBRATION_INVERTED => "Contracted threshold must be below extended threshold",
            Self::R405_CALIBRATION_NOT_FINITE => "Calibration threshold is not finite",
        }
    }
}

impl std::fmt::Display for ConfigReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code(), self.description())
    }
}

/// Reasons an input line could not be parsed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[allow(non_camel_case_types)]
pub enum InputReason {
    /// Line does not match `<limb> <time> <angle>` or `reset <limb>`
    R501_INPUT_MALFORMED,
    /// Limb is not L/LEFT/R/RIGHT
    R502_INPUT_UNKNOWN_LIMB,
    /// Time or angle is not a number
    R503_INPUT_NOT_NUMERIC,
}

impl InputReason {
    pub fn code(&self) -> &'static str {
        match self {
            Self::R501_INPUT_MALFORMED => "R501_INPUT_MALFORMED",
            Self::R502_INPUT_UNKNOWN_LIMB => "R502_INPUT_UNKNOWN_LIMB",
            Self::R503_INPUT_NOT_NUMERIC => "R503_INPUT_NOT_NUMERIC",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::R501_INPUT_MALFORMED => "Expected '<limb> <time> <angle>' or 'reset <limb>'",
            Self::R502_INPUT_UNKNOWN_LIMB => "Unknown limb",
            Self::R503_INPUT_NOT_NUMERIC => "Time or angle is not a number",
        }
    }
}

impl std::fmt::Display for InputReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code(), self.description())
    }
}
