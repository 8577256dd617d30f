//! Requested moves.

use crate::Piece;
use std::fmt;

/// A piece plus its step counts.
///
/// Counts are unsigned, so a negative request cannot be represented; the
/// boundary rejects those before a spec is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveSpec {
    Rook(u32),
    Bishop(u32),
    Queen(u32),
    Knight { vertical: u32, horizontal: u32 },
}

impl MoveSpec {
    /// Returns the piece this spec moves.
    pub const fn piece(&self) -> Piece {
        match self {
            MoveSpec::Rook(_) => Piece::Rook,
            MoveSpec::Bishop(_) => Piece::Bishop,
            MoveSpec::Queen(_) => Piece::Queen,
            MoveSpec::Knight { .. } => Piece::Knight,
        }
    }

    /// Number of tokens the generated sequence must contain.
    pub const fn expected_len(&self) -> usize {
        match *self {
            MoveSpec::Rook(n) | MoveSpec::Bishop(n) | MoveSpec::Queen(n) => n as usize,
            MoveSpec::Knight {
                vertical,
                horizontal,
            } => vertical as usize + horizontal as usize,
        }
    }
}

impl fmt::Display for MoveSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveSpec::Rook(n) | MoveSpec::Bishop(n) | MoveSpec::Queen(n) => {
                write!(f, "{}({})", self.piece(), n)
            }
            MoveSpec::Knight {
                vertical,
                horizontal,
            } => write!(f, "Knight(V:{},H:{})", vertical, horizontal),
        }
    }
}
