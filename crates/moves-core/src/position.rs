//! Board positions.

use crate::Direction;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of files (and ranks) on the board.
pub const BOARD_SIZE: u8 = 8;

/// A square on the 8x8 board.
///
/// Files `a`-`h` map to 0-7 and ranks `1`-`8` to 0-7. A `Position` is always
/// on the board; moves that would leave it produce `None`.
///
/// Ordering follows the little-endian rank-file mapping: a1 < b1 < ... < h8.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    rank: u8,
    file: u8,
}

/// Error returned when a string is not a square in algebraic notation.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid square '{0}': expected a file a-h followed by a rank 1-8")]
pub struct PositionParseError(pub String);

impl Position {
    /// Creates a position from file and rank indices (0-7).
    #[inline]
    pub const fn new(file: u8, rank: u8) -> Option<Self> {
        if file < BOARD_SIZE && rank < BOARD_SIZE {
            Some(Position { rank, file })
        } else {
            None
        }
    }

    /// Returns true if the signed coordinates name a square on the board.
    #[inline]
    pub const fn is_on_board(file: i32, rank: i32) -> bool {
        0 <= file && file < BOARD_SIZE as i32 && 0 <= rank && rank < BOARD_SIZE as i32
    }

    /// Parses a square from algebraic notation (e.g. "e4").
    pub const fn from_algebraic(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let file = bytes[0].to_ascii_lowercase();
        let rank = bytes[1];
        if file < b'a' || rank < b'1' {
            return None;
        }
        Self::new(file - b'a', rank - b'1')
    }

    /// Returns the file index (0-7).
    #[inline]
    pub const fn file(self) -> u8 {
        self.file
    }

    /// Returns the rank index (0-7).
    #[inline]
    pub const fn rank(self) -> u8 {
        self.rank
    }

    /// Returns the algebraic notation for this position.
    pub fn to_algebraic(self) -> String {
        format!("{}{}", (b'a' + self.file) as char, (b'1' + self.rank) as char)
    }

    /// Returns the position shifted by the given deltas, if still on the board.
    pub fn offset(self, file_delta: i8, rank_delta: i8) -> Option<Self> {
        let file = i32::from(self.file) + i32::from(file_delta);
        let rank = i32::from(self.rank) + i32::from(rank_delta);
        if !Self::is_on_board(file, rank) {
            return None;
        }
        Self::new(u8::try_from(file).ok()?, u8::try_from(rank).ok()?)
    }

    /// Returns the neighbouring position one step in `direction`.
    #[inline]
    pub fn step(self, direction: Direction) -> Option<Self> {
        let (file_delta, rank_delta) = direction.delta();
        self.offset(file_delta, rank_delta)
    }
}

impl FromStr for Position {
    type Err = PositionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_algebraic(s.trim()).ok_or_else(|| PositionParseError(s.to_string()))
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Position({})", self.to_algebraic())
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_algebraic())
    }
}
