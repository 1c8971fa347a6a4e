//! Canonical chess-rule constants.
//!
//! Board geometry and the standard starting layout live here so the rest of
//! the crate never hard-codes a board dimension or a back-rank ordering.

use crate::game_state::chess_types::PieceKind;

/// Number of files and ranks on the board. Also bounds slider walks.
pub const BOARD_SIZE: usize = 8;

/// Back-rank piece ordering from file a to file h, shared by both sides.
pub const BACK_RANK_LAYOUT: [PieceKind; BOARD_SIZE] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Rank holding white's back-rank pieces at the start of the game.
pub const WHITE_BACK_RANK: u8 = 1;
/// Rank holding white's pawns at the start of the game.
pub const WHITE_PAWN_RANK: u8 = 2;
/// Rank holding black's pawns at the start of the game.
pub const BLACK_PAWN_RANK: u8 = 7;
/// Rank holding black's back-rank pieces at the start of the game.
pub const BLACK_BACK_RANK: u8 = 8;
