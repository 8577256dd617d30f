//! Squares each piece can reach in one move on an empty board.

use moves_core::{Piece, Position};

const ORTHOGONAL: [(i8, i8); 4] = [(0, 1), (0, -1), (-1, 0), (1, 0)];

const DIAGONAL: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

const ROYAL: [(i8, i8); 8] = [
    (0, 1),
    (0, -1),
    (-1, 0),
    (1, 0),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

// (file, rank) jumps of the "L".
const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (1, 2),
    (-1, 2),
    (1, -2),
    (-1, -2),
    (2, 1),
    (-2, 1),
    (2, -1),
    (-2, -1),
];

fn deltas(piece: Piece) -> &'static [(i8, i8)] {
    match piece {
        Piece::Rook => &ORTHOGONAL,
        Piece::Bishop => &DIAGONAL,
        Piece::Queen => &ROYAL,
        Piece::Knight => &KNIGHT_JUMPS,
    }
}

/// Returns every square `piece` can move to from `from` on an empty board,
/// sorted a1 to h8.
///
/// Sliding pieces follow each line to the edge; the knight makes one jump
/// per offset.
pub fn possible_moves(piece: Piece, from: Position) -> Vec<Position> {
    let mut moves = Vec::with_capacity(27);
    for &(file_delta, rank_delta) in deltas(piece) {
        let mut current = from;
        while let Some(next) = current.offset(file_delta, rank_delta) {
            moves.push(next);
            if !piece.is_slider() {
                break;
            }
            current = next;
        }
    }
    moves.sort_unstable();
    moves
}

/// Returns true if `piece` can go from `from` to `to` in one move on an
/// empty board.
pub fn can_move_to(piece: Piece, from: Position, to: Position) -> bool {
    from != to && possible_moves(piece, from).binary_search(&to).is_ok()
}
