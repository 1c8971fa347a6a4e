//! Pseudo-legal rook move generation.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Position};
use crate::move_generation::sliding_moves::generate_sliding_moves;

/// Orthogonal ray directions as `(d_file, d_rank)`.
pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

pub fn generate_rook_moves(board: &Board, from: Position, color: Color, out: &mut Vec<Position>) {
    generate_sliding_moves(board, from, color, &ROOK_DIRECTIONS, out);
}
