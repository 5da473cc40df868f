//! Arm stage definitions

use colored::Color;
use serde::{Deserialize, Serialize};

/// The four discrete stages a tracked limb can be in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ArmStage {
    /// Fully contracted, at or past the contracted threshold
    Up,
    /// Fully extended, at or past the extended threshold
    #[default]
    Down,
    /// Left DOWN, heading for contraction
    MovingUp,
    /// Left UP, heading for extension
    MovingDown,
}

impl ArmStage {
    /// UP or MOVING_UP
    pub fn is_contracting(&self) -> bool {
        matches!(self, ArmStage::Up | ArmStage::MovingUp)
    }

    /// DOWN or MOVING_DOWN
    pub fn is_extending(&self) -> bool {
        matches!(self, ArmStage::Down | ArmStage::MovingDown)
    }

    /// Terminal color for this stage
    pub fn color(&self) -> Color {
        match self {
            ArmStage::Up => Color::Green,
            ArmStage::Down => Color::Cyan,
            ArmStage::MovingUp => Color::Yellow,
            ArmStage::MovingDown => Color::Magenta,
        }
    }

    /// Arrow glyph for compact display
    pub fn glyph(&self) -> &'static str {
        match self {
            ArmStage::Up => "▲",
            ArmStage::Down => "▼",
            ArmStage::MovingUp => "↑",
            ArmStage::MovingDown => "↓",
        }
    }
}

impl std::fmt::Display for ArmStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ArmStage::Up => "UP",
            ArmStage::Down => "DOWN",
            ArmStage::MovingUp => "MOVING_UP",
            ArmStage::MovingDown => "MOVING_DOWN",
        };
        f.pad(name)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_stage_is_down() {
        assert_eq!(ArmStage::default(), ArmStage::Down);
    }

    #[test]
    fn test_phase_groups_partition_stages() {
        for stage in [ArmStage::Up, ArmStage::Down, ArmStage::MovingUp, ArmStage::MovingDown] {
            assert_ne!(stage.is_contracting(), stage.is_extending(), "{}", stage);
        }
    }

    #[test]
    fn test_serde_uses_screaming_case() {
        let json = serde_json::to_string(&ArmStage::MovingDown).unwrap();
        assert_eq!(json, "\"MOVING_DOWN\"");
        assert_eq!(ArmStage::MovingDown.to_string(), "MOVING_DOWN");
    }
}
