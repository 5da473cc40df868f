//! Line parser for the text sample format
//!
//! ```text
//! # limb  time(s)  angle(deg)
//! L 0.000 168.2
//! right, 0.033, 171.0
//! reset left
//! ```

use lazy_static::lazy_static;
use regex::Regex;

use crate::types::{AngleSample, InputLine, InputReason, Limb};

lazy_static! {
    static ref RE_SEPARATOR: Regex = Regex::new(r"[\s,]+").unwrap();

    static ref RE_RESET: Regex = Regex::new(r"(?i)^reset[\s,]+([a-z]+)$").unwrap();
}

/// Parser for sample lines
#[derive(Debug, Default)]
pub struct SampleParser;

impl SampleParser {
    pub fn new() -> Self {
        Self
    }

    pub fn parse_line(&self, line: &str) -> Result<InputLine, InputReason> {
        let line = line.split('#').next().unwrap_or("").trim();
        if line.is_empty() {
            return Ok(InputLine::Skip);
        }

        if let Some(caps) = RE_RESET.captures(line) {
            let limb: Limb = caps[1].parse()?;
            return Ok(InputLine::Reset(limb));
        }

        let fields: Vec<&str> = RE_SEPARATOR.split(line).collect();
        let [limb, at, angle] = fields.as_slice() else {
            return Err(InputReason::R501_INPUT_MALFORMED);
        };

        let limb: Limb = limb.parse()?;
        let at: f64 = at.parse().map_err(|_| InputReason::R503_INPUT_NOT_NUMERIC)?;
        if !at.is_finite() {
            return Err(InputReason::R503_INPUT_NOT_NUMERIC);
        }
        let angle: f64 = angle.parse().map_err(|_| InputReason::R503_INPUT_NOT_NUMERIC)?;

        Ok(InputLine::Sample(AngleSample::new(limb, at, angle)))
    }
}

// =============================================================================
// TESTS
// =============================================================================
