//! Knight "L" move convention.
//!
//! The knight's move is two perpendicular legs emitted one after the other.
//! Which direction each leg takes, and which leg comes first, is an explicit
//! input: the exercise levels disagree on it (Down + Left in the nested-loop
//! level, Up + Right in the recursion level).

use crate::Direction;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors for knight configurations whose legs are not perpendicular.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum KnightConfigError {
    #[error("knight vertical leg must be up or down, got {0:?}")]
    NotVertical(Direction),

    #[error("knight horizontal leg must be left or right, got {0:?}")]
    NotHorizontal(Direction),

    #[error("unknown knight convention '{0}': expected up-right or down-left")]
    UnknownPreset(String),

    #[error("unknown leg order '{0}': expected vertical-first or horizontal-first")]
    UnknownOrder(String),
}

/// Which leg of the "L" is emitted first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LegOrder {
    #[default]
    VerticalFirst,
    HorizontalFirst,
}

impl FromStr for LegOrder {
    type Err = KnightConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "vertical-first" => Ok(LegOrder::VerticalFirst),
            "horizontal-first" => Ok(LegOrder::HorizontalFirst),
            _ => Err(KnightConfigError::UnknownOrder(s.to_string())),
        }
    }
}

impl fmt::Display for LegOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LegOrder::VerticalFirst => write!(f, "vertical-first"),
            LegOrder::HorizontalFirst => write!(f, "horizontal-first"),
        }
    }
}

/// Direction per leg plus leg order for the knight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KnightConfig {
    vertical: Direction,
    horizontal: Direction,
    order: LegOrder,
}

impl KnightConfig {
    /// Two squares down, one square left.
    pub const ADVENTURER: KnightConfig = KnightConfig {
        vertical: Direction::Down,
        horizontal: Direction::Left,
        order: LegOrder::VerticalFirst,
    };

    /// Two squares up, one square right.
    pub const MASTER: KnightConfig = KnightConfig {
        vertical: Direction::Up,
        horizontal: Direction::Right,
        order: LegOrder::VerticalFirst,
    };

    /// Creates a validated knight configuration.
    pub fn new(
        vertical: Direction,
        horizontal: Direction,
        order: LegOrder,
    ) -> Result<Self, KnightConfigError> {
        if !vertical.is_vertical() {
            return Err(KnightConfigError::NotVertical(vertical));
        }
        if !horizontal.is_horizontal() {
            return Err(KnightConfigError::NotHorizontal(horizontal));
        }
        Ok(KnightConfig {
            vertical,
            horizontal,
            order,
        })
    }

    /// Looks up a named convention ("up-right" or "down-left").
    pub fn preset(name: &str) -> Result<Self, KnightConfigError> {
        match name.trim().to_ascii_lowercase().as_str() {
            "up-right" => Ok(Self::MASTER),
            "down-left" => Ok(Self::ADVENTURER),
            _ => Err(KnightConfigError::UnknownPreset(name.to_string())),
        }
    }

    /// Returns a copy with a different leg order.
    pub const fn with_order(self, order: LegOrder) -> Self {
        KnightConfig { order, ..self }
    }

    #[inline]
    pub const fn vertical(&self) -> Direction {
        self.vertical
    }

    #[inline]
    pub const fn horizontal(&self) -> Direction {
        self.horizontal
    }

    #[inline]
    pub const fn order(&self) -> LegOrder {
        self.order
    }

    /// Returns both legs as `(direction, count)` in emission order.
    pub const fn legs(&self, vertical: u32, horizontal: u32) -> [(Direction, u32); 2] {
        match self.order {
            LegOrder::VerticalFirst => [(self.vertical, vertical), (self.horizontal, horizontal)],
            LegOrder::HorizontalFirst => [(self.horizontal, horizontal), (self.vertical, vertical)],
        }
    }
}

impl Default for KnightConfig {
    fn default() -> Self {
        Self::MASTER
    }
}
