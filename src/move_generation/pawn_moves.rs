//! Pseudo-legal pawn move generation.
//!
//! White pawns advance toward rank 8, black pawns toward rank 1. The double
//! step keys off the pawn's starting rank, and both crossed squares must be
//! empty. Diagonal steps are generated only onto enemy-occupied squares.
//! No en passant, no promotion.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::{BLACK_PAWN_RANK, WHITE_PAWN_RANK};
use crate::game_state::chess_types::{Color, Position};

pub fn generate_pawn_moves(board: &Board, from: Position, color: Color, out: &mut Vec<Position>) {
    let (direction, start_rank) = match color {
        Color::White => (1i8, WHITE_PAWN_RANK),
        Color::Black => (-1i8, BLACK_PAWN_RANK),
    };

    // Single and double forward steps, both blocked by any occupant.
    if let Some(one_step) = from.offset(0, direction) {
        if board.piece_at(one_step).is_none() {
            out.push(one_step);

            if from.rank == start_rank {
                if let Some(two_step) = from.offset(0, 2 * direction) {
                    if board.piece_at(two_step).is_none() {
                        out.push(two_step);
                    }
                }
            }
        }
    }

    // Diagonal captures.
    for d_file in [-1i8, 1i8] {
        let Some(to) = from.offset(d_file, direction) else {
            continue;
        };
        if let Some(target) = board.piece_at(to) {
            if target.color != color {
                out.push(to);
            }
        }
    }
}
