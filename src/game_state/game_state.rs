//! Derived game-state snapshot.

use crate::game_state::chess_types::Color;
use crate::game_state::move_record::MoveRecord;

/// Snapshot of everything a presentation layer needs after a move: whose
/// turn it is, whether that side is in check, whether the game has ended,
/// and the move history so far.
///
/// Always a pure function of `(board, current_player)`; the engine
/// recomputes it in full after every successful move rather than patching
/// it incrementally. `is_checkmate` and `is_stalemate` are mutually
/// exclusive by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    pub current_player: Color,
    pub is_in_check: bool,
    pub is_checkmate: bool,
    pub is_stalemate: bool,
    pub moves: Vec<MoveRecord>,
}
