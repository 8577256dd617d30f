//! Movement direction tokens.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One square of movement.
///
/// `UpRight` is the compound diagonal step ("Cima Direita"); it is neither
/// vertical nor horizontal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[repr(u8)]
pub enum Direction {
    Up = 0,
    Down = 1,
    Left = 2,
    Right = 3,
    UpRight = 4,
}

/// Error returned when a direction name is not recognized.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid direction '{0}': expected up, down, left, right or up-right")]
pub struct DirectionParseError(pub String);

impl Direction {
    /// All directions.
    pub const ALL: [Direction; 5] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
        Direction::UpRight,
    ];

    /// Returns the printed token for this direction.
    #[inline]
    pub const fn token(self) -> &'static str {
        match self {
            Direction::Up => "Cima",
            Direction::Down => "Baixo",
            Direction::Left => "Esquerda",
            Direction::Right => "Direita",
            Direction::UpRight => "Cima Direita",
        }
    }

    /// Returns the configuration name (e.g. "up-right").
    pub const fn name(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::UpRight => "up-right",
        }
    }

    /// Returns the (file, rank) offset of one step.
    #[inline]
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Direction::Up => (0, 1),
            Direction::Down => (0, -1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::UpRight => (1, 1),
        }
    }

    #[inline]
    pub const fn is_vertical(self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }

    #[inline]
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }
}

impl FromStr for Direction {
    type Err = DirectionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|d| d.name() == lower)
            .ok_or_else(|| DirectionParseError(s.to_string()))
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}
