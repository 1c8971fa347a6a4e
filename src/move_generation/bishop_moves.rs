//! Pseudo-legal bishop move generation.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Position};
use crate::move_generation::sliding_moves::generate_sliding_moves;

/// Diagonal ray directions as `(d_file, d_rank)`.
pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

pub fn generate_bishop_moves(board: &Board, from: Position, color: Color, out: &mut Vec<Position>) {
    generate_sliding_moves(board, from, color, &BISHOP_DIRECTIONS, out);
}
