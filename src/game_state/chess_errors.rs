//! Errors reported by the rules engine.
//!
//! All variants are recoverable and local: a rejected move leaves the board,
//! history, and turn untouched, and the caller is expected to re-prompt.
//! Queries (`piece_at`, `valid_moves`, `king`) never fail; they return empty
//! defaults for squares that hold nothing useful.

use thiserror::Error;

use crate::game_state::chess_types::Color;

/// Failure modes of `GameEngine::make_move` and `GameEngine::from_position`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ChessError {
    /// The source square holds no piece.
    #[error("no piece at source position")]
    NoPieceAtSource,

    /// The source square holds a piece of the side not on move.
    #[error("not your piece")]
    NotYourTurn,

    /// The destination is not among the legal moves from the source square.
    /// Covers off-board targets, blocked paths, own-piece captures, and
    /// moves that would leave the mover's king in check.
    #[error("invalid move")]
    IllegalMove,

    /// A position handed to `from_position` does not have exactly one king
    /// of the given color.
    #[error("position must contain exactly one {0} king")]
    InvalidKingCount(Color),
}

#[cfg(test)]
mod tests {
    use super::ChessError;
    use crate::game_state::chess_types::Color;

    #[test]
    fn messages_match_the_user_facing_strings() {
        assert_eq!(
            ChessError::NoPieceAtSource.to_string(),
            "no piece at source position"
        );
        assert_eq!(ChessError::NotYourTurn.to_string(), "not your piece");
        assert_eq!(ChessError::IllegalMove.to_string(), "invalid move");
        assert_eq!(
            ChessError::InvalidKingCount(Color::Black).to_string(),
            "position must contain exactly one black king"
        );
    }
}
