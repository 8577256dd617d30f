//! Generation strategies.
//!
//! This module provides the [`Strategy`] trait which abstracts over how a
//! move sequence is produced. Every strategy must yield exactly the same
//! sequence for the same inputs; only the control flow differs.

mod iterative;
mod recursive;

pub use iterative::Iterative;
pub use recursive::Recursive;

use moves_core::{KnightConfig, MoveSequence, MoveSpec};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Trait for implementing a generation strategy.
///
/// All operations are total: any `u32` input produces a sequence, and zero
/// always produces an empty one.
pub trait Strategy {
    /// `n` steps right.
    fn rook(&self, n: u32) -> MoveSequence;

    /// `n` diagonal up-right steps.
    fn bishop(&self, n: u32) -> MoveSequence;

    /// `n` steps left.
    fn queen(&self, n: u32) -> MoveSequence;

    /// The two knight legs, first leg fully emitted before the second.
    fn knight(&self, config: &KnightConfig, vertical: u32, horizontal: u32) -> MoveSequence;

    /// `n` pairs of `(Up, Right)`: the diagonal decomposed into orthogonal legs.
    fn bishop_decomposed(&self, n: u32) -> MoveSequence;

    /// Generates the sequence for a full [`MoveSpec`].
    fn generate(&self, config: &KnightConfig, spec: &MoveSpec) -> MoveSequence {
        match *spec {
            MoveSpec::Rook(n) => self.rook(n),
            MoveSpec::Bishop(n) => self.bishop(n),
            MoveSpec::Queen(n) => self.queen(n),
            MoveSpec::Knight {
                vertical,
                horizontal,
            } => self.knight(config, vertical, horizontal),
        }
    }

    /// Short name of the strategy, used in logs and rendered labels.
    fn name(&self) -> &'static str;
}

/// Error returned when a strategy name is not recognized.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown strategy '{0}': expected iterative or recursive")]
pub struct StrategyParseError(pub String);

/// Runtime selection between the two strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    #[default]
    Iterative,
    Recursive,
}

impl Strategy for StrategyKind {
    fn rook(&self, n: u32) -> MoveSequence {
        match self {
            StrategyKind::Iterative => Iterative.rook(n),
            StrategyKind::Recursive => Recursive.rook(n),
        }
    }

    fn bishop(&self, n: u32) -> MoveSequence {
        match self {
            StrategyKind::Iterative => Iterative.bishop(n),
            StrategyKind::Recursive => Recursive.bishop(n),
        }
    }

    fn queen(&self, n: u32) -> MoveSequence {
        match self {
            StrategyKind::Iterative => Iterative.queen(n),
            StrategyKind::Recursive => Recursive.queen(n),
        }
    }

    fn knight(&self, config: &KnightConfig, vertical: u32, horizontal: u32) -> MoveSequence {
        match self {
            StrategyKind::Iterative => Iterative.knight(config, vertical, horizontal),
            StrategyKind::Recursive => Recursive.knight(config, vertical, horizontal),
        }
    }

    fn bishop_decomposed(&self, n: u32) -> MoveSequence {
        match self {
            StrategyKind::Iterative => Iterative.bishop_decomposed(n),
            StrategyKind::Recursive => Recursive.bishop_decomposed(n),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            StrategyKind::Iterative => Iterative.name(),
            StrategyKind::Recursive => Recursive.name(),
        }
    }
}

impl FromStr for StrategyKind {
    type Err = StrategyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "iterative" => Ok(StrategyKind::Iterative),
            "recursive" => Ok(StrategyKind::Recursive),
            _ => Err(StrategyParseError(s.to_string())),
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
