//! Labeled output blocks.

use crate::generator::MoveSequenceGenerator;
use crate::reach::{can_move_to, possible_moves};
use crate::strategy::Strategy;
use moves_core::{MoveSequence, OffBoard, Piece, Position, StepCounts};

/// Where a block's sequence leads when walked from a start square.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub from: Position,
    pub to: Position,
    /// True if the piece could also reach `to` with a single move.
    pub single_move: bool,
    /// Squares the piece reaches from `from` in one move on an empty board.
    pub reachable: Vec<Position>,
}

/// One piece's generated sequence with the label it is printed under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub piece: Piece,
    /// Qualifier shown after the piece label, e.g. the loop construct used.
    pub note: Option<&'static str>,
    pub sequence: MoveSequence,
    pub route: Option<Route>,
}

impl Block {
    pub fn new(piece: Piece, sequence: MoveSequence) -> Self {
        Block {
            piece,
            note: None,
            sequence,
            route: None,
        }
    }

    pub fn with_note(mut self, note: &'static str) -> Self {
        self.note = Some(note);
        self
    }

    /// Returns the printed label, e.g. "TORRE" or "BISPO (while)".
    pub fn label(&self) -> String {
        match self.note {
            Some(note) => format!("{} ({})", self.piece.label(), note),
            None => self.piece.label().to_string(),
        }
    }

    /// Walks the sequence from `from` and records the destination.
    ///
    /// # Errors
    ///
    /// Returns [`OffBoard`] if any step leaves the board.
    pub fn walk_from(&mut self, from: Position) -> Result<(), OffBoard> {
        let to = self.sequence.walk(from)?;
        self.route = Some(Route {
            from,
            to,
            single_move: can_move_to(self.piece, from, to),
            reachable: possible_moves(self.piece, from),
        });
        Ok(())
    }

    /// Builds the four piece blocks for `counts`, in print order.
    ///
    /// With `decomposed`, the orthogonal bishop decomposition is inserted
    /// right after the bishop block.
    pub fn for_counts<S: Strategy>(
        generator: &MoveSequenceGenerator<S>,
        counts: &StepCounts,
        decomposed: bool,
    ) -> Vec<Block> {
        let mut blocks = Vec::with_capacity(5);
        for spec in counts.specs() {
            blocks.push(Block::new(spec.piece(), generator.generate(&spec)));
            if decomposed && spec.piece() == Piece::Bishop {
                blocks.push(
                    Block::new(
                        Piece::Bishop,
                        generator.generate_bishop_decomposed(counts.bishop),
                    )
                    .with_note("Cima + Direita"),
                );
            }
        }
        blocks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use moves_core::{Direction, KnightConfig};

    #[test]
    fn label_with_and_without_note() {
        let block = Block::new(Piece::Rook, MoveSequence::new());
        assert_eq!(block.label(), "TORRE");
        assert_eq!(block.with_note("for").label(), "TORRE (for)");
    }

    #[test]
    fn blocks_for_default_counts() {
        let generator = MoveSequenceGenerator::iterative(KnightConfig::MASTER);
        let blocks = Block::for_counts(&generator, &StepCounts::DEFAULT, false);
        let pieces: Vec<Piece> = blocks.iter().map(|b| b.piece).collect();
        assert_eq!(pieces, Piece::ALL.to_vec());
        assert_eq!(blocks[0].sequence.len(), 5);
        assert_eq!(blocks[2].sequence.len(), 8);
        assert_eq!(
            blocks[3].sequence.as_slice(),
            &[Direction::Up, Direction::Up, Direction::Right]
        );
    }

    #[test]
    fn decomposed_block_follows_bishop() {
        let generator = MoveSequenceGenerator::recursive(KnightConfig::MASTER);
        let blocks = Block::for_counts(&generator, &StepCounts::DEFAULT, true);
        assert_eq!(blocks.len(), 5);
        assert_eq!(blocks[2].piece, Piece::Bishop);
        assert_eq!(blocks[2].label(), "BISPO (Cima + Direita)");
        assert_eq!(blocks[2].sequence.len(), 10);
        assert_eq!(blocks[3].piece, Piece::Queen);
    }

    #[test]
    fn walk_from_records_route() {
        let generator = MoveSequenceGenerator::iterative(KnightConfig::MASTER);
        let mut knight = Block::new(Piece::Knight, generator.generate_knight(2, 1));
        let g1 = Position::from_algebraic("g1").unwrap();
        knight.walk_from(g1).unwrap();

        let route = knight.route.unwrap();
        assert_eq!(route.to, Position::from_algebraic("h3").unwrap());
        assert!(route.single_move);
        assert_eq!(route.reachable.len(), 3);
    }

    #[test]
    fn walk_from_rejects_leaving_the_board() {
        let generator = MoveSequenceGenerator::iterative(KnightConfig::MASTER);
        let mut rook = Block::new(Piece::Rook, generator.generate_rook(5));
        let err = rook
            .walk_from(Position::from_algebraic("e2").unwrap())
            .unwrap_err();
        assert_eq!(err.step, 4);
        assert_eq!(err.direction, Direction::Right);
        assert!(rook.route.is_none());
    }
}
