//! Step-count parsing and validation.

use crate::{MoveSpec, Piece};
use std::num::IntErrorKind;
use thiserror::Error;

/// Largest accepted step count. Bounds the size of the generated output.
pub const MAX_STEPS: u32 = 100_000;

/// Errors that can occur when validating a step count.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StepError {
    #[error("'{0}' is not a base-10 integer")]
    NotANumber(String),

    #[error("{value} is outside the accepted range 0..={max}")]
    OutOfRange { value: String, max: u32 },
}

/// Parses a step count given as text.
///
/// Accepts an optional sign followed by decimal digits. Negative values and
/// values above [`MAX_STEPS`] are rejected, never clamped.
pub fn parse_step(s: &str) -> Result<u32, StepError> {
    match s.parse::<i64>() {
        Ok(value) => check_step(value),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => Err(StepError::OutOfRange {
                value: s.to_string(),
                max: MAX_STEPS,
            }),
            _ => Err(StepError::NotANumber(s.to_string())),
        },
    }
}

/// Range-checks an already numeric step count.
pub fn check_step(value: i64) -> Result<u32, StepError> {
    if (0..=i64::from(MAX_STEPS)).contains(&value) {
        Ok(value as u32)
    } else {
        Err(StepError::OutOfRange {
            value: value.to_string(),
            max: MAX_STEPS,
        })
    }
}

/// The five step counts of one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StepCounts {
    pub rook: u32,
    pub bishop: u32,
    pub queen: u32,
    pub knight_vertical: u32,
    pub knight_horizontal: u32,
}

impl StepCounts {
    /// Counts used when none are supplied: 5, 5, 8, 2, 1.
    pub const DEFAULT: StepCounts = StepCounts {
        rook: 5,
        bishop: 5,
        queen: 8,
        knight_vertical: 2,
        knight_horizontal: 1,
    };

    /// Builds counts from five raw values, in `rook bishop queen kv kh` order.
    ///
    /// Returns the zero-based position of the first invalid value with its error.
    pub fn parse<S: AsRef<str>>(values: &[S; 5]) -> Result<Self, (usize, StepError)> {
        let mut parsed = [0u32; 5];
        for (i, raw) in values.iter().enumerate() {
            parsed[i] = parse_step(raw.as_ref()).map_err(|e| (i, e))?;
        }
        Ok(StepCounts {
            rook: parsed[0],
            bishop: parsed[1],
            queen: parsed[2],
            knight_vertical: parsed[3],
            knight_horizontal: parsed[4],
        })
    }

    /// Returns the move spec for `piece`.
    pub const fn spec(&self, piece: Piece) -> MoveSpec {
        match piece {
            Piece::Rook => MoveSpec::Rook(self.rook),
            Piece::Bishop => MoveSpec::Bishop(self.bishop),
            Piece::Queen => MoveSpec::Queen(self.queen),
            Piece::Knight => MoveSpec::Knight {
                vertical: self.knight_vertical,
                horizontal: self.knight_horizontal,
            },
        }
    }

    /// Returns the specs of all four pieces in print order.
    pub fn specs(&self) -> [MoveSpec; 4] {
        Piece::ALL.map(|p| self.spec(p))
    }

    /// Returns the configuration summary line.
    pub fn summary(&self) -> String {
        format!(
            "Config: {}={}, {}={}, {}={}, {}=(V:{},H:{})",
            Piece::Rook.summary_name(),
            self.rook,
            Piece::Bishop.summary_name(),
            self.bishop,
            Piece::Queen.summary_name(),
            self.queen,
            Piece::Knight.summary_name(),
            self.knight_vertical,
            self.knight_horizontal
        )
    }
}

impl Default for StepCounts {
    fn default() -> Self {
        Self::DEFAULT
    }
}
