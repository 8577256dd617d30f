//! Recursion-based generation.
//!
//! Each operation decrements its count down to a base case of zero. The
//! output vector is threaded through the calls so frames stay small; depth
//! is still linear in the count.

use super::Strategy;
use moves_core::{Direction, KnightConfig, MoveSequence};

/// Generates sequences by recursion, one call per step.
#[derive(Debug, Clone, Copy, Default)]
pub struct Recursive;

fn repeat(out: &mut Vec<Direction>, direction: Direction, remaining: u32) {
    if remaining == 0 {
        return;
    }
    out.push(direction);
    repeat(out, direction, remaining - 1);
}

fn legs(out: &mut Vec<Direction>, remaining_legs: &[(Direction, u32)]) {
    if let Some((&(direction, count), rest)) = remaining_legs.split_first() {
        repeat(out, direction, count);
        legs(out, rest);
    }
}

fn pairs(out: &mut Vec<Direction>, remaining: u32) {
    if remaining == 0 {
        return;
    }
    out.push(Direction::Up);
    out.push(Direction::Right);
    pairs(out, remaining - 1);
}

fn run(capacity: usize, fill: impl FnOnce(&mut Vec<Direction>)) -> MoveSequence {
    let mut out = Vec::with_capacity(capacity);
    fill(&mut out);
    out.into()
}

impl Strategy for Recursive {
    fn rook(&self, n: u32) -> MoveSequence {
        run(n as usize, |out| repeat(out, Direction::Right, n))
    }

    fn bishop(&self, n: u32) -> MoveSequence {
        run(n as usize, |out| repeat(out, Direction::UpRight, n))
    }

    fn queen(&self, n: u32) -> MoveSequence {
        run(n as usize, |out| repeat(out, Direction::Left, n))
    }

    fn knight(&self, config: &KnightConfig, vertical: u32, horizontal: u32) -> MoveSequence {
        let plan = config.legs(vertical, horizontal);
        run(vertical as usize + horizontal as usize, |out| {
            legs(out, &plan)
        })
    }

    fn bishop_decomposed(&self, n: u32) -> MoveSequence {
        run(2 * n as usize, |out| pairs(out, n))
    }

    fn name(&self) -> &'static str {
        "recursive"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rook_base_case() {
        assert!(Recursive.rook(0).is_empty());
        assert_eq!(Recursive.rook(1).as_slice(), &[Direction::Right]);
    }

    #[test]
    fn queen_zero_is_empty() {
        assert!(Recursive.queen(0).is_empty());
    }

    #[test]
    fn bishop_recursive() {
        let seq = Recursive.bishop(5);
        assert_eq!(seq.len(), 5);
        assert!(seq.all(Direction::UpRight));
    }

    #[test]
    fn knight_master_convention() {
        let seq = Recursive.knight(&KnightConfig::MASTER, 2, 1);
        let tokens: Vec<&str> = seq.tokens().collect();
        assert_eq!(tokens, vec!["Cima", "Cima", "Direita"]);
    }

    #[test]
    fn knight_single_leg() {
        let seq = Recursive.knight(&KnightConfig::MASTER, 0, 3);
        assert!(seq.all(Direction::Right));
        assert_eq!(seq.len(), 3);
    }

    #[test]
    fn decomposed_length_is_doubled() {
        assert_eq!(Recursive.bishop_decomposed(5).len(), 10);
    }

    #[test]
    fn deep_recursion_on_worker_stack() {
        // Matches the stack size the CLI grants to recursive runs.
        let handle = std::thread::Builder::new()
            .stack_size(64 * 1024 * 1024)
            .spawn(|| Recursive.rook(100_000))
            .unwrap();
        let seq = handle.join().unwrap();
        assert_eq!(seq.len(), 100_000);
    }
}
