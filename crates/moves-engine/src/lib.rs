//! Move-sequence generation for chess pieces.
//!
//! This crate provides:
//! - [`Strategy`] - Trait for a way of producing move sequences
//! - [`Iterative`] and [`Recursive`] - The two strategies, which must agree
//! - [`MoveSequenceGenerator`] - Strategy plus knight convention, one operation per piece
//! - [`Level`] - The exercise levels as ready-made block lists
//! - [`Report`] - Text and JSON rendering of generated blocks
//! - [`possible_moves`] - Empty-board reach of each piece from a square
//!
//! # Example
//!
//! ```
//! use moves_core::{Direction, KnightConfig};
//! use moves_engine::MoveSequenceGenerator;
//!
//! let iterative = MoveSequenceGenerator::iterative(KnightConfig::MASTER);
//! let recursive = MoveSequenceGenerator::recursive(KnightConfig::MASTER);
//!
//! let rook = iterative.generate_rook(5);
//! assert_eq!(rook.len(), 5);
//! assert!(rook.all(Direction::Right));
//! assert_eq!(rook, recursive.generate_rook(5));
//! ```

mod block;
mod generator;
mod level;
mod reach;
mod render;
pub mod strategy;

pub use block::{Block, Route};
pub use generator::MoveSequenceGenerator;
pub use level::{Level, LevelParseError};
pub use reach::{can_move_to, possible_moves};
pub use render::{RenderOptions, Report};
pub use strategy::{Iterative, Recursive, Strategy, StrategyKind, StrategyParseError};
