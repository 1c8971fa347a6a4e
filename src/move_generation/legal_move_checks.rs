//! Check detection.
//!
//! A king is in check when any enemy piece's pseudo-legal move set targets
//! the king's square. The pawn cases fall out of plain generation: the
//! forward push is never generated onto the occupied king square, while the
//! diagonal capture is generated precisely because the king stands there.
//! No attack map is cached; every query rescans the board, which is the
//! accepted cost at this scale.

use crate::game_state::board::Board;
use crate::game_state::chess_types::Color;
use crate::move_generation::move_generator::generate_piece_moves;

/// True iff `color`'s king is attacked. A position without that king is
/// reported as not in check (defensive; engine-built positions always carry
/// both kings).
pub fn is_king_in_check(board: &Board, color: Color) -> bool {
    let Some(king) = board.king_square(color) else {
        return false;
    };
    let enemy = color.opposite();

    board
        .occupied_squares()
        .filter(|(_, piece)| piece.color == enemy)
        .any(|(from, piece)| generate_piece_moves(board, from, piece).contains(&king))
}
