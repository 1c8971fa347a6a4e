//! Append-only history entry for an executed move.

use crate::game_state::chess_types::{Piece, Position};

/// One executed move. `piece` is the pre-move snapshot (so `has_moved`
/// reflects the state before this move); `captured_piece` is whatever
/// occupied the destination. Records are never mutated after being appended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveRecord {
    pub from: Position,
    pub to: Position,
    pub piece: Piece,
    pub captured_piece: Option<Piece>,
}
