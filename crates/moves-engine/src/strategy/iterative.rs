//! Loop-based generation.

use super::Strategy;
use moves_core::{Direction, KnightConfig, MoveSequence};

/// Generates sequences with loops: a counted `for` for the rook, a
/// condition-first `while` for the bishop, a post-condition `loop` for the
/// queen and nested loops for the knight.
#[derive(Debug, Clone, Copy, Default)]
pub struct Iterative;

impl Strategy for Iterative {
    fn rook(&self, n: u32) -> MoveSequence {
        let mut out = Vec::with_capacity(n as usize);
        for _ in 1..=n {
            out.push(Direction::Right);
        }
        out.into()
    }

    fn bishop(&self, n: u32) -> MoveSequence {
        let mut out = Vec::with_capacity(n as usize);
        let mut count = 0;
        while count < n {
            out.push(Direction::UpRight);
            count += 1;
        }
        out.into()
    }

    fn queen(&self, n: u32) -> MoveSequence {
        let mut out = Vec::with_capacity(n as usize);
        // A bare post-condition loop would emit once for n == 0.
        if n > 0 {
            let mut count = 0;
            loop {
                out.push(Direction::Left);
                count += 1;
                if count >= n {
                    break;
                }
            }
        }
        out.into()
    }

    fn knight(&self, config: &KnightConfig, vertical: u32, horizontal: u32) -> MoveSequence {
        let mut out = Vec::with_capacity(vertical as usize + horizontal as usize);
        for (direction, count) in config.legs(vertical, horizontal) {
            let mut step = 0;
            while step < count {
                out.push(direction);
                step += 1;
            }
        }
        out.into()
    }

    fn bishop_decomposed(&self, n: u32) -> MoveSequence {
        let mut out = Vec::with_capacity(2 * n as usize);
        for _ in 0..n {
            for leg in [Direction::Up, Direction::Right] {
                out.push(leg);
            }
        }
        out.into()
    }

    fn name(&self) -> &'static str {
        "iterative"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use moves_core::LegOrder;

    #[test]
    fn rook_moves_right() {
        let seq = Iterative.rook(5);
        assert_eq!(seq.len(), 5);
        assert!(seq.all(Direction::Right));
    }

    #[test]
    fn bishop_moves_up_right() {
        let seq = Iterative.bishop(5);
        assert_eq!(seq.len(), 5);
        assert!(seq.all(Direction::UpRight));
    }

    #[test]
    fn queen_moves_left() {
        let seq = Iterative.queen(8);
        assert_eq!(seq.len(), 8);
        assert!(seq.all(Direction::Left));
    }

    #[test]
    fn queen_zero_is_empty() {
        // Post-condition loop corrected: no token when nothing is requested.
        assert!(Iterative.queen(0).is_empty());
        assert_eq!(Iterative.queen(1).len(), 1);
    }

    #[test]
    fn zero_steps_are_empty() {
        assert!(Iterative.rook(0).is_empty());
        assert!(Iterative.bishop(0).is_empty());
        assert!(Iterative.bishop_decomposed(0).is_empty());
        assert!(Iterative
            .knight(&KnightConfig::MASTER, 0, 0)
            .is_empty());
    }

    #[test]
    fn knight_adventurer_convention() {
        let seq = Iterative.knight(&KnightConfig::ADVENTURER, 2, 1);
        let tokens: Vec<&str> = seq.tokens().collect();
        assert_eq!(tokens, vec!["Baixo", "Baixo", "Esquerda"]);
    }

    #[test]
    fn knight_horizontal_first() {
        let config = KnightConfig::MASTER.with_order(LegOrder::HorizontalFirst);
        let seq = Iterative.knight(&config, 2, 1);
        assert_eq!(
            seq.as_slice(),
            &[Direction::Right, Direction::Up, Direction::Up]
        );
    }

    #[test]
    fn bishop_decomposed_pairs() {
        let seq = Iterative.bishop_decomposed(2);
        assert_eq!(
            seq.as_slice(),
            &[Direction::Up, Direction::Right, Direction::Up, Direction::Right]
        );
    }
}
