//! Generated move sequences.

use crate::{Direction, Position};
use std::fmt;
use thiserror::Error;

/// A sequence step that would move off the board.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("step {step} ({direction}) leaves the board from {from}")]
pub struct OffBoard {
    /// 1-based index of the offending step.
    pub step: usize,
    pub from: Position,
    pub direction: Direction,
}

/// An ordered, immutable list of direction tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct MoveSequence(Vec<Direction>);

impl MoveSequence {
    /// Creates an empty sequence.
    #[inline]
    pub const fn new() -> Self {
        MoveSequence(Vec::new())
    }

    /// Returns the number of tokens.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no token was produced.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the directions as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[Direction] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Direction> {
        self.0.iter()
    }

    /// Returns the printed tokens in order.
    pub fn tokens(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.iter().map(|d| d.token())
    }

    /// Returns true if every token equals `direction`.
    pub fn all(&self, direction: Direction) -> bool {
        self.0.iter().all(|d| *d == direction)
    }

    /// Follows every step from `start` and returns the final position.
    ///
    /// # Errors
    ///
    /// Returns [`OffBoard`] for the first step that would leave the board.
    pub fn walk(&self, start: Position) -> Result<Position, OffBoard> {
        self.iter()
            .enumerate()
            .try_fold(start, |from, (i, &direction)| {
                from.step(direction).ok_or(OffBoard {
                    step: i + 1,
                    from,
                    direction,
                })
            })
    }
}

impl From<Vec<Direction>> for MoveSequence {
    fn from(directions: Vec<Direction>) -> Self {
        MoveSequence(directions)
    }
}

impl FromIterator<Direction> for MoveSequence {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        MoveSequence(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a MoveSequence {
    type Item = &'a Direction;
    type IntoIter = std::slice::Iter<'a, Direction>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl std::ops::Index<usize> for MoveSequence {
    type Output = Direction;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

/// One token per line, no trailing newline.
impl fmt::Display for MoveSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, d) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            f.write_str(d.token())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn empty_sequence() {
        let seq = MoveSequence::new();
        assert!(seq.is_empty());
        assert_eq!(seq.len(), 0);
        assert_eq!(seq.to_string(), "");
        assert!(seq.all(Direction::Right));
    }

    #[test]
    fn tokens_in_order() {
        let seq = MoveSequence::from(vec![Direction::Up, Direction::Up, Direction::Right]);
        let tokens: Vec<&str> = seq.tokens().collect();
        assert_eq!(tokens, vec!["Cima", "Cima", "Direita"]);
        assert_eq!(seq[2], Direction::Right);
    }

    #[test]
    fn display_one_per_line() {
        let seq: MoveSequence = [Direction::UpRight, Direction::Left].into_iter().collect();
        assert_eq!(seq.to_string(), "Cima Direita\nEsquerda");
    }

    #[test]
    fn walk_follows_every_step() {
        let a1 = Position::from_algebraic("a1").unwrap();
        let knight = MoveSequence::from(vec![Direction::Up, Direction::Up, Direction::Right]);
        assert_eq!(knight.walk(a1), Ok(Position::from_algebraic("b3").unwrap()));
        assert_eq!(MoveSequence::new().walk(a1), Ok(a1));

        let bishop = MoveSequence::from(vec![Direction::UpRight; 7]);
        assert_eq!(bishop.walk(a1), Ok(Position::from_algebraic("h8").unwrap()));
    }

    #[test]
    fn walk_rejects_leaving_the_board() {
        let f1 = Position::from_algebraic("f1").unwrap();
        let rook = MoveSequence::from(vec![Direction::Right; 5]);
        assert_eq!(
            rook.walk(f1),
            Err(OffBoard {
                step: 3,
                from: Position::from_algebraic("h1").unwrap(),
                direction: Direction::Right,
            })
        );
    }

    #[test]
    fn all_matches_uniform_sequences() {
        let seq = MoveSequence::from(vec![Direction::Left; 3]);
        assert!(seq.all(Direction::Left));
        assert!(!seq.all(Direction::Right));
    }

    proptest! {
        #[test]
        fn rook_walk_stops_at_the_h_file(file in 0u8..8, rank in 0u8..8, n in 0u8..12) {
            let start = Position::new(file, rank).unwrap();
            let walked = MoveSequence::from(vec![Direction::Right; n as usize]).walk(start);
            if file + n < 8 {
                prop_assert_eq!(walked, Ok(Position::new(file + n, rank).unwrap()));
            } else {
                let err = walked.unwrap_err();
                prop_assert_eq!(err.step, usize::from(8 - file));
                prop_assert_eq!(err.from.file(), 7);
            }
        }
    }
}
