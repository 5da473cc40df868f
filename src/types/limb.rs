//! Limb identifiers and fixed per-limb storage

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use crate::types::InputReason;

/// A tracked limb
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Limb {
    Left,
    Right,
}

impl Limb {
    /// Every limb, in display order
    pub const ALL: [Limb; 2] = [Limb::Left, Limb::Right];
}

impl std::fmt::Display for Limb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Limb::Left => "LEFT",
            Limb::Right => "RIGHT",
        };
        f.pad(name)
    }
}

impl FromStr for Limb {
    type Err = InputReason;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "L" | "LEFT" => Ok(Limb::Left),
            "R" | "RIGHT" => Ok(Limb::Right),
            _ => Err(InputReason::R502_INPUT_UNKNOWN_LIMB),
        }
    }
}

/// One value per limb, indexed by [`Limb`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PerLimb<T> {
    pub left: T,
    pub right: T,
}

impl<T> PerLimb<T> {
    pub fn new(left: T, right: T) -> Self {
        Self { left, right }
    }

    /// Build both slots from the same constructor
    pub fn from_fn(mut f: impl FnMut(Limb) -> T) -> Self {
        Self {
            left: f(Limb::Left),
            right: f(Limb::Right),
        }
    }

    /// Iterate `(limb, value)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (Limb, &T)> {
        [(Limb::Left, &self.left), (Limb::Right, &self.right)].into_iter()
    }
}

impl<T: Clone> PerLimb<T> {
    /// Same value for both limbs
    pub fn splat(value: T) -> Self {
        Self {
            left: value.clone(),
            right: value,
        }
    }
}

impl<T> Index<Limb> for PerLimb<T> {
    type Output = T;

    fn index(&self, limb: Limb) -> &T {
        match limb {
            Limb::Left => &self.left,
            Limb::Right => &self.right,
        }
    }
}

impl<T> IndexMut<Limb> for PerLimb<T> {
    fn index_mut(&mut self, limb: Limb) -> &mut T {
        match limb {
            Limb::Left => &mut self.left,
            Limb::Right => &mut self.right,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limb_parsing_accepts_short_and_long_forms() {
        assert_eq!("l".parse::<Limb>(), Ok(Limb::Left));
        assert_eq!("Left".parse::<Limb>(), Ok(Limb::Left));
        assert_eq!(" R ".parse::<Limb>(), Ok(Limb::Right));
        assert_eq!("RIGHT".parse::<Limb>(), Ok(Limb::Right));
        assert_eq!("knee".parse::<Limb>(), Err(InputReason::R502_INPUT_UNKNOWN_LIMB));
    }

    #[test]
    fn test_per_limb_indexing_is_independent() {
        let mut counts = PerLimb::splat(0u32);
        counts[Limb::Right] += 3;
        assert_eq!(counts[Limb::Left], 0);
        assert_eq!(counts[Limb::Right], 3);
    }

    #[test]
    fn test_per_limb_iter_order() {
        let names = PerLimb::from_fn(|limb| limb.to_string());
        let order: Vec<Limb> = names.iter().map(|(limb, _)| limb).collect();
        assert_eq!(order, Limb::ALL.to_vec());
        assert_eq!(names.right, "RIGHT");
    }
}
