//! Legal-move tree counting.
//!
//! `perft` walks every legal move sequence to a fixed depth and counts leaf
//! nodes. The known counts from the starting position (20, 400, 8902 for
//! depths 1 through 3) involve no castling, en passant, or promotion, so
//! they hold for this engine and pin down the whole generation pipeline.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Position};
use crate::move_generation::move_generator::generate_legal_moves;

pub fn perft(board: &Board, side_to_move: Color, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }

    let froms: Vec<Position> = board
        .occupied_squares()
        .filter(|(_, piece)| piece.color == side_to_move)
        .map(|(from, _)| from)
        .collect();

    let mut nodes = 0;
    for from in froms {
        for to in generate_legal_moves(board, from, side_to_move) {
            if depth == 1 {
                nodes += 1;
            } else {
                let next = board.board_after_move(from, to);
                nodes += perft(&next, side_to_move.opposite(), depth - 1);
            }
        }
    }
    nodes
}
