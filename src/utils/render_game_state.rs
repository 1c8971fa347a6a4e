//! Terminal-oriented Unicode board renderer.
//!
//! Creates a human-readable board view for the driver binary, tests, and
//! diagnostics in text environments. Rank 8 is printed at the top, matching
//! the white-at-the-bottom convention.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::BOARD_SIZE;
use crate::game_state::chess_types::{Color, Piece, PieceKind, Position};

/// Render the board to a Unicode string for terminal output.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for rank in (1..=BOARD_SIZE as u8).rev() {
        out.push(char::from(b'0' + rank));
        out.push(' ');

        for file_index in 0..BOARD_SIZE as u8 {
            let position = Position::new((b'a' + file_index) as char, rank);
            match board.piece_at(position) {
                Some(piece) => out.push(piece_to_unicode(piece)),
                None => out.push('·'),
            }

            if file_index < BOARD_SIZE as u8 - 1 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(char::from(b'0' + rank));
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

fn piece_to_unicode(piece: Piece) -> char {
    match (piece.color, piece.kind) {
        (Color::White, PieceKind::King) => '♔',
        (Color::White, PieceKind::Queen) => '♕',
        (Color::White, PieceKind::Rook) => '♖',
        (Color::White, PieceKind::Bishop) => '♗',
        (Color::White, PieceKind::Knight) => '♘',
        (Color::White, PieceKind::Pawn) => '♙',
        (Color::Black, PieceKind::King) => '♚',
        (Color::Black, PieceKind::Queen) => '♛',
        (Color::Black, PieceKind::Rook) => '♜',
        (Color::Black, PieceKind::Bishop) => '♝',
        (Color::Black, PieceKind::Knight) => '♞',
        (Color::Black, PieceKind::Pawn) => '♟',
    }
}
