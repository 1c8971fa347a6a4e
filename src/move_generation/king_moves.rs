//! Pseudo-legal king move generation. One step in each of the eight
//! directions; no castling. King safety is not this module's concern.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Position};

/// The eight adjacent squares as `(d_file, d_rank)` offsets.
pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub fn generate_king_moves(board: &Board, from: Position, color: Color, out: &mut Vec<Position>) {
    for (d_file, d_rank) in KING_OFFSETS {
        let Some(to) = from.offset(d_file, d_rank) else {
            continue;
        };
        match board.piece_at(to) {
            Some(target) if target.color == color => {}
            _ => out.push(to),
        }
    }
}
