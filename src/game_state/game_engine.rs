//! The game engine state machine.
//!
//! `GameEngine` owns the board, the side to move, and the move history, and
//! is the only writer of all three. Every successful move mutates the board,
//! appends one history record, flips the turn, and recomputes the derived
//! `GameState` snapshot in full. Nothing else changes. A rejected move
//! changes nothing at all.
//!
//! Checkmate and stalemate are reported, not enforced: the engine keeps
//! validating moves in a terminal position (the side on move simply has
//! none), and the driver decides when to stop asking. This mirrors the
//! behavior this engine replaces.

use log::debug;

use crate::game_state::board::Board;
use crate::game_state::chess_errors::ChessError;
use crate::game_state::chess_types::{Color, Piece, Position};
use crate::game_state::game_state::GameState;
use crate::game_state::move_record::MoveRecord;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::move_generator::{generate_legal_moves, has_legal_moves};

#[derive(Debug, Clone)]
pub struct GameEngine {
    board: Board,
    current_player: Color,
    moves: Vec<MoveRecord>,
    game_state: GameState,
}

impl GameEngine {
    /// Engine at the standard starting position, white to move.
    pub fn new() -> Self {
        Self::with_board(Board::starting_position(), Color::White)
    }

    /// Engine over an arbitrary layout.
    ///
    /// Check detection is undefined without exactly one king per side, so
    /// the layout is validated up front instead of trusted.
    pub fn from_position(board: Board, side_to_move: Color) -> Result<Self, ChessError> {
        for color in [Color::White, Color::Black] {
            if board.king_count(color) != 1 {
                return Err(ChessError::InvalidKingCount(color));
            }
        }
        Ok(Self::with_board(board, side_to_move))
    }

    fn with_board(board: Board, side_to_move: Color) -> Self {
        let mut engine = Self {
            board,
            current_player: side_to_move,
            moves: Vec::new(),
            game_state: GameState {
                current_player: side_to_move,
                is_in_check: false,
                is_checkmate: false,
                is_stalemate: false,
                moves: Vec::new(),
            },
        };
        engine.update_game_state();
        engine
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn piece_at(&self, position: Position) -> Option<Piece> {
        self.board.piece_at(position)
    }

    /// Legal destinations for the piece on `position`. Empty when the square
    /// is empty or holds a piece of the side not on move.
    pub fn valid_moves(&self, position: Position) -> Vec<Position> {
        generate_legal_moves(&self.board, position, self.current_player)
    }

    /// Square of the given color's king.
    pub fn king(&self, color: Color) -> Option<Position> {
        self.board.king_square(color)
    }

    /// Snapshot of the derived game state, including the move history.
    pub fn game_state(&self) -> GameState {
        self.game_state.clone()
    }

    /// Validate and execute a move.
    ///
    /// On success the board is updated (the moved piece lands as a
    /// `has_moved` copy), the move is appended to history with any captured
    /// piece, the turn flips, and the game state is recomputed. On failure
    /// nothing changes and the error says why.
    pub fn make_move(&mut self, from: Position, to: Position) -> Result<(), ChessError> {
        let piece = self.board.piece_at(from).ok_or(ChessError::NoPieceAtSource)?;

        if piece.color != self.current_player {
            return Err(ChessError::NotYourTurn);
        }

        if !self.valid_moves(from).contains(&to) {
            return Err(ChessError::IllegalMove);
        }

        let captured_piece = self.board.piece_at(to);

        self.board.set_piece_at(from, None);
        self.board.set_piece_at(to, Some(piece.moved()));

        self.moves.push(MoveRecord {
            from,
            to,
            piece,
            captured_piece,
        });
        self.current_player = self.current_player.opposite();
        self.update_game_state();

        debug!(
            "applied {from} -> {to}, {} to move",
            self.current_player
        );
        Ok(())
    }

    /// Back to the standard starting layout with an empty history.
    pub fn reset(&mut self) {
        debug!("resetting game after {} moves", self.moves.len());
        self.board = Board::starting_position();
        self.current_player = Color::White;
        self.moves.clear();
        self.update_game_state();
    }

    /// Recompute the derived snapshot from `(board, current_player)`.
    fn update_game_state(&mut self) {
        let is_in_check = is_king_in_check(&self.board, self.current_player);
        let has_moves = has_legal_moves(&self.board, self.current_player);

        self.game_state = GameState {
            current_player: self.current_player,
            is_in_check,
            is_checkmate: is_in_check && !has_moves,
            is_stalemate: !is_in_check && !has_moves,
            moves: self.moves.clone(),
        };
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
