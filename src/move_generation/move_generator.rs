//! Move-generation pipeline: piece-kind dispatch, then legal filtering.
//!
//! Pseudo-legal generation obeys movement geometry and occupancy only.
//! `generate_legal_moves` removes every candidate that would leave the
//! mover's own king attacked by playing it out on a board copy and asking
//! `is_king_in_check` about the result. Generation order carries no meaning;
//! callers must treat the returned list as a set.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Piece, PieceKind, Position};
use crate::move_generation::bishop_moves::generate_bishop_moves;
use crate::move_generation::king_moves::generate_king_moves;
use crate::move_generation::knight_moves::generate_knight_moves;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::pawn_moves::generate_pawn_moves;
use crate::move_generation::queen_moves::generate_queen_moves;
use crate::move_generation::rook_moves::generate_rook_moves;

/// Pseudo-legal destinations for `piece` standing on `from`.
pub fn generate_piece_moves(board: &Board, from: Position, piece: Piece) -> Vec<Position> {
    let mut out = Vec::new();
    match piece.kind {
        PieceKind::Pawn => generate_pawn_moves(board, from, piece.color, &mut out),
        PieceKind::Knight => generate_knight_moves(board, from, piece.color, &mut out),
        PieceKind::Bishop => generate_bishop_moves(board, from, piece.color, &mut out),
        PieceKind::Rook => generate_rook_moves(board, from, piece.color, &mut out),
        PieceKind::Queen => generate_queen_moves(board, from, piece.color, &mut out),
        PieceKind::King => generate_king_moves(board, from, piece.color, &mut out),
    }
    out
}

/// Legal destinations for the piece on `from`, given `side_to_move`.
///
/// Empty when the square is empty or holds the opponent's piece. Each
/// pseudo-legal candidate is played out on a copy of the board; candidates
/// that leave the mover's king in check are dropped.
pub fn generate_legal_moves(board: &Board, from: Position, side_to_move: Color) -> Vec<Position> {
    let Some(piece) = board.piece_at(from) else {
        return Vec::new();
    };
    if piece.color != side_to_move {
        return Vec::new();
    }

    generate_piece_moves(board, from, piece)
        .into_iter()
        .filter(|&to| !is_king_in_check(&board.board_after_move(from, to), side_to_move))
        .collect()
}

/// True iff any piece of `color` has at least one legal move. Short-circuits
/// on the first square that does.
pub fn has_legal_moves(board: &Board, color: Color) -> bool {
    board
        .occupied_squares()
        .filter(|(_, piece)| piece.color == color)
        .any(|(from, _)| !generate_legal_moves(board, from, color).is_empty())
}
