//! CSS-style shorthand expansion for four-sided values.
//!
//! `10px` applies to every side, `10px,20px` to vertical and horizontal
//! sides, `10px,20px,30px` to top, horizontal and bottom, and four values
//! are taken clockwise from the top. Every directional option goes through
//! [`DirectionalValue::parse`].

use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Four CSS lengths, one per side, plus the token they were expanded from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectionalValue {
    pub top: String,
    pub right: String,
    pub bottom: String,
    pub left: String,
    #[serde(skip)]
    source: String,
}

/// Why a shorthand string could not be expanded.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShorthandError {
    /// More than four or no values at all.
    #[error("expected 1 to 4 comma-separated values, got {0}")]
    PartCount(usize),
    /// A comma-separated part was blank (1-based position).
    #[error("value {0} is empty")]
    EmptyPart(usize),
}

impl DirectionalValue {
    /// Expand a comma-separated shorthand into four sides.
    pub fn parse(s: &str) -> Result<Self, ShorthandError> {
        if s.trim().is_empty() {
            return Err(ShorthandError::PartCount(0));
        }

        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        if let Some(pos) = parts.iter().position(|p| p.is_empty()) {
            return Err(ShorthandError::EmptyPart(pos + 1));
        }

        let (top, right, bottom, left) = match parts.as_slice() {
            [all] => (*all, *all, *all, *all),
            [vertical, horizontal] => (*vertical, *horizontal, *vertical, *horizontal),
            [top, horizontal, bottom] => (*top, *horizontal, *bottom, *horizontal),
            [top, right, bottom, left] => (*top, *right, *bottom, *left),
            _ => return Err(ShorthandError::PartCount(parts.len())),
        };

        Ok(Self {
            top: top.to_string(),
            right: right.to_string(),
            bottom: bottom.to_string(),
            left: left.to_string(),
            source: s.to_string(),
        })
    }

    /// The unexpanded token this value was created from.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Sides in CSS order: top, right, bottom, left.
    pub fn sides(&self) -> [&str; 4] {
        [&self.top, &self.right, &self.bottom, &self.left]
    }
}

impl FromStr for DirectionalValue {
    type Err = ShorthandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for DirectionalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}
