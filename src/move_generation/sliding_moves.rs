//! Shared slider walk for rook, bishop, and queen generation.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::BOARD_SIZE;
use crate::game_state::chess_types::{Color, Position};

/// Walk each direction one square at a time, distance ascending, pushing
/// empty squares and stopping at the board edge, before an own piece, or on
/// an enemy piece (which is pushed as a capture).
pub fn generate_sliding_moves(
    board: &Board,
    from: Position,
    color: Color,
    directions: &[(i8, i8)],
    out: &mut Vec<Position>,
) {
    for &(d_file, d_rank) in directions {
        for distance in 1..BOARD_SIZE as i8 {
            let Some(to) = from.offset(d_file * distance, d_rank * distance) else {
                break;
            };
            match board.piece_at(to) {
                None => out.push(to),
                Some(target) => {
                    if target.color != color {
                        out.push(to);
                    }
                    break;
                }
            }
        }
    }
}
