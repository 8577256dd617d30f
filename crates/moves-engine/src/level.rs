//! The three exercise levels as block presets.
//!
//! - Novice: counted, condition-first and post-condition loops
//! - Adventurer: nested loops for the knight (Down + Left)
//! - Master: recursion for the sliders, bishop decomposition, knight Up + Right

use crate::block::Block;
use crate::generator::MoveSequenceGenerator;
use moves_core::{KnightConfig, Piece, StepCounts};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when a level name is not recognized.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown level '{0}': expected novice, adventurer, master or all")]
pub struct LevelParseError(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    Novice,
    Adventurer,
    Master,
    All,
}

impl Level {
    /// Heading printed above the level's blocks.
    pub const fn title(self) -> &'static str {
        match self {
            Level::Novice => "NÍVEL NOVATO",
            Level::Adventurer => "NÍVEL AVENTUREIRO",
            Level::Master => "NÍVEL MESTRE",
            Level::All => "TODOS OS NÍVEIS",
        }
    }

    /// Generates the level's blocks.
    ///
    /// The knight convention is part of the level: Adventurer moves down and
    /// left, Master moves up and right.
    pub fn blocks(self, counts: &StepCounts) -> Vec<Block> {
        match self {
            Level::Novice => {
                let generator = MoveSequenceGenerator::iterative(KnightConfig::default());
                vec![
                    Block::new(Piece::Rook, generator.generate_rook(counts.rook)).with_note("for"),
                    Block::new(Piece::Bishop, generator.generate_bishop(counts.bishop))
                        .with_note("while"),
                    Block::new(Piece::Queen, generator.generate_queen(counts.queen))
                        .with_note("loop"),
                ]
            }
            Level::Adventurer => {
                let generator = MoveSequenceGenerator::iterative(KnightConfig::ADVENTURER);
                vec![Block::new(
                    Piece::Knight,
                    generator.generate_knight(counts.knight_vertical, counts.knight_horizontal),
                )
                .with_note("loops aninhados")]
            }
            Level::Master => {
                let recursive = MoveSequenceGenerator::recursive(KnightConfig::MASTER);
                let iterative = MoveSequenceGenerator::iterative(KnightConfig::MASTER);
                vec![
                    Block::new(Piece::Rook, recursive.generate_rook(counts.rook))
                        .with_note("recursividade"),
                    Block::new(Piece::Bishop, recursive.generate_bishop(counts.bishop))
                        .with_note("recursividade"),
                    Block::new(
                        Piece::Bishop,
                        iterative.generate_bishop_decomposed(counts.bishop),
                    )
                    .with_note("loops aninhados"),
                    Block::new(Piece::Queen, recursive.generate_queen(counts.queen))
                        .with_note("recursividade"),
                    Block::new(
                        Piece::Knight,
                        iterative.generate_knight(counts.knight_vertical, counts.knight_horizontal),
                    )
                    .with_note("loops"),
                ]
            }
            Level::All => [Level::Novice, Level::Adventurer, Level::Master]
                .into_iter()
                .flat_map(|level| level.blocks(counts))
                .collect(),
        }
    }
}

impl FromStr for Level {
    type Err = LevelParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "novice" => Ok(Level::Novice),
            "adventurer" => Ok(Level::Adventurer),
            "master" => Ok(Level::Master),
            "all" => Ok(Level::All),
            _ => Err(LevelParseError(s.to_string())),
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Level::Novice => "novice",
            Level::Adventurer => "adventurer",
            Level::Master => "master",
            Level::All => "all",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use moves_core::Direction;

    #[test]
    fn novice_has_three_sliders() {
        let blocks = Level::Novice.blocks(&StepCounts::DEFAULT);
        let labels: Vec<String> = blocks.iter().map(Block::label).collect();
        assert_eq!(
            labels,
            vec!["TORRE (for)", "BISPO (while)", "RAINHA (loop)"]
        );
        assert_eq!(blocks[2].sequence.len(), 8);
    }

    #[test]
    fn adventurer_knight_moves_down_left() {
        let blocks = Level::Adventurer.blocks(&StepCounts::DEFAULT);
        assert_eq!(blocks.len(), 1);
        assert_eq!(
            blocks[0].sequence.as_slice(),
            &[Direction::Down, Direction::Down, Direction::Left]
        );
    }

    #[test]
    fn master_knight_moves_up_right() {
        let blocks = Level::Master.blocks(&StepCounts::DEFAULT);
        assert_eq!(blocks.len(), 5);
        let knight = blocks.last().unwrap();
        assert_eq!(knight.piece, Piece::Knight);
        assert_eq!(
            knight.sequence.as_slice(),
            &[Direction::Up, Direction::Up, Direction::Right]
        );
        assert_eq!(blocks[2].sequence.len(), 10);
    }

    #[test]
    fn all_concatenates_levels() {
        let all = Level::All.blocks(&StepCounts::DEFAULT);
        assert_eq!(all.len(), 3 + 1 + 5);
    }

    #[test]
    fn zero_counts_yield_empty_blocks() {
        let zero = StepCounts {
            rook: 0,
            bishop: 0,
            queen: 0,
            knight_vertical: 0,
            knight_horizontal: 0,
        };
        assert!(Level::All.blocks(&zero).iter().all(|b| b.sequence.is_empty()));
    }

    #[test]
    fn parse_level() {
        assert_eq!("Master".parse::<Level>(), Ok(Level::Master));
        assert_eq!("all".parse::<Level>(), Ok(Level::All));
        assert!("expert".parse::<Level>().is_err());
        assert_eq!(Level::Adventurer.to_string(), "adventurer");
    }
}
