//! Size classification for integer values
//!
//! Every `i64` maps to exactly one [`SizeLabel`]. The sign decides
//! `negative` and `zero`; positive values are bucketed by the exclusive
//! upper bounds in [`SizeThresholds`].

pub mod pure;

pub use pure::{classify, classify_with, size};

use crate::errors::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Size category of an integer, ordered from smallest to largest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum SizeLabel {
    /// Any value below zero
    Negative,
    /// Exactly zero
    Zero,
    /// Positive and below `small_below`
    Small,
    /// At least `small_below` and below `big_below`
    Big,
    /// At least `big_below`
    Huge,
}

impl SizeLabel {
    /// All labels in ascending order
    pub const ALL: [SizeLabel; 5] = [
        SizeLabel::Negative,
        SizeLabel::Zero,
        SizeLabel::Small,
        SizeLabel::Big,
        SizeLabel::Huge,
    ];

    /// Get the label string
    pub fn as_str(&self) -> &'static str {
        match self {
            SizeLabel::Negative => "negative",
            SizeLabel::Zero => "zero",
            SizeLabel::Small => "small",
            SizeLabel::Big => "big",
            SizeLabel::Huge => "huge",
        }
    }
}

impl fmt::Display for SizeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for SizeLabel {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl FromStr for SizeLabel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        SizeLabel::ALL
            .into_iter()
            .find(|label| label.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::Validation(format!("unknown size label '{}'", s)))
    }
}

/// Bucket boundaries for positive values
///
/// Both bounds are exclusive: `small` covers `1..small_below`, `big`
/// covers `small_below..big_below` and everything from `big_below` up is
/// `huge`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeThresholds {
    #[serde(default = "default_small_below")]
    pub small_below: i64,

    #[serde(default = "default_big_below")]
    pub big_below: i64,
}

impl Default for SizeThresholds {
    fn default() -> Self {
        Self {
            small_below: default_small_below(),
            big_below: default_big_below(),
        }
    }
}

fn default_small_below() -> i64 {
    10
}

fn default_big_below() -> i64 {
    100
}

impl SizeThresholds {
    /// Create validated thresholds
    pub fn new(small_below: i64, big_below: i64) -> Result<Self> {
        let thresholds = Self {
            small_below,
            big_below,
        };
        thresholds.validate()?;
        Ok(thresholds)
    }

    /// Check `1 <= small_below <= big_below`
    pub fn validate(&self) -> Result<()> {
        if self.small_below < 1 {
            return Err(Error::Validation(format!(
                "small_below must be at least 1, got {}",
                self.small_below
            )));
        }
        if self.big_below < self.small_below {
            return Err(Error::Validation(format!(
                "big_below ({}) must not be less than small_below ({})",
                self.big_below, self.small_below
            )));
        }
        Ok(())
    }
}
