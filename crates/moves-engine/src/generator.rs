//! The move-sequence generator.

use crate::strategy::{Iterative, Recursive, Strategy, StrategyKind};
use moves_core::{KnightConfig, MoveSequence, MoveSpec};

/// Produces the move sequence of each piece.
///
/// Pairs a [`Strategy`] with the knight's leg convention. Generation is a
/// pure function of the inputs and cannot fail; counts are validated by the
/// caller before they get here.
#[derive(Debug, Clone, Copy, Default)]
pub struct MoveSequenceGenerator<S = StrategyKind> {
    strategy: S,
    knight: KnightConfig,
}

impl MoveSequenceGenerator<Iterative> {
    pub const fn iterative(knight: KnightConfig) -> Self {
        MoveSequenceGenerator {
            strategy: Iterative,
            knight,
        }
    }
}

impl MoveSequenceGenerator<Recursive> {
    pub const fn recursive(knight: KnightConfig) -> Self {
        MoveSequenceGenerator {
            strategy: Recursive,
            knight,
        }
    }
}

impl<S: Strategy> MoveSequenceGenerator<S> {
    /// `n` Right tokens.
    pub fn generate_rook(&self, n: u32) -> MoveSequence {
        self.strategy.rook(n)
    }

    /// `n` UpRight tokens.
    pub fn generate_bishop(&self, n: u32) -> MoveSequence {
        self.strategy.bishop(n)
    }

    /// `n` Left tokens; empty for `n == 0`.
    pub fn generate_queen(&self, n: u32) -> MoveSequence {
        self.strategy.queen(n)
    }

    /// `vertical + horizontal` tokens, one leg after the other in the
    /// configured order.
    pub fn generate_knight(&self, vertical: u32, horizontal: u32) -> MoveSequence {
        self.strategy.knight(&self.knight, vertical, horizontal)
    }

    /// `n` pairs of (Up, Right). Not the same sequence as [`generate_bishop`].
    ///
    /// [`generate_bishop`]: Self::generate_bishop
    pub fn generate_bishop_decomposed(&self, n: u32) -> MoveSequence {
        self.strategy.bishop_decomposed(n)
    }

    pub fn generate(&self, spec: &MoveSpec) -> MoveSequence {
        self.strategy.generate(&self.knight, spec)
    }
}

impl MoveSequenceGenerator<StrategyKind> {
    /// Selects the strategy at runtime.
    pub const fn with_kind(kind: StrategyKind, knight: KnightConfig) -> Self {
        MoveSequenceGenerator {
            strategy: kind,
            knight,
        }
    }
}
