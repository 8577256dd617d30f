//! Core types for chess piece movement.
//!
//! This crate provides the fundamental types shared by the generator and the CLI:
//! - [`Piece`] for the four moving pieces
//! - [`Direction`] for the movement tokens ("Direita", "Cima", ...)
//! - [`MoveSpec`] and [`MoveSequence`] for requested and produced moves
//! - [`KnightConfig`] for the knight's two-leg "L" convention
//! - [`Position`] for board squares and walking a sequence across the board
//! - Step-count parsing and validation ([`StepCounts`], [`parse_step`])

mod direction;
mod knight;
mod move_spec;
mod piece;
mod position;
mod sequence;
mod steps;

pub use direction::{Direction, DirectionParseError};
pub use knight::{KnightConfig, KnightConfigError, LegOrder};
pub use move_spec::MoveSpec;
pub use piece::Piece;
pub use position::{Position, PositionParseError, BOARD_SIZE};
pub use sequence::{MoveSequence, OffBoard};
pub use steps::{check_step, parse_step, StepCounts, StepError, MAX_STEPS};
