//! The 8x8 board grid.
//!
//! `Board` owns an array of optional pieces indexed by
//! `(rank_index, file_index)` with rank index 0 at rank 8. Reads and writes
//! are O(1) and touch only the addressed cell. Hypothetical moves for check
//! testing are evaluated on a copy (`board_after_move`), never by mutating
//! and reverting the live grid.

use crate::game_state::chess_rules::{
    BACK_RANK_LAYOUT, BLACK_BACK_RANK, BLACK_PAWN_RANK, BOARD_SIZE, WHITE_BACK_RANK,
    WHITE_PAWN_RANK,
};
use crate::game_state::chess_types::{Color, Piece, PieceKind, Position};

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    squares: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Board with no pieces on it. Intended for test and driver setups fed
    /// through `GameEngine::from_position`.
    pub fn empty() -> Self {
        Self {
            squares: [[None; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Standard starting layout, white on ranks 1 and 2.
    pub fn starting_position() -> Self {
        let mut board = Self::empty();

        for (file_index, &kind) in BACK_RANK_LAYOUT.iter().enumerate() {
            let file = (b'a' + file_index as u8) as char;
            board.set_piece_at(
                Position::new(file, WHITE_BACK_RANK),
                Some(Piece::new(kind, Color::White)),
            );
            board.set_piece_at(
                Position::new(file, BLACK_BACK_RANK),
                Some(Piece::new(kind, Color::Black)),
            );
            board.set_piece_at(
                Position::new(file, WHITE_PAWN_RANK),
                Some(Piece::new(PieceKind::Pawn, Color::White)),
            );
            board.set_piece_at(
                Position::new(file, BLACK_PAWN_RANK),
                Some(Piece::new(PieceKind::Pawn, Color::Black)),
            );
        }

        board
    }

    #[inline]
    pub fn piece_at(&self, position: Position) -> Option<Piece> {
        let (rank_index, file_index) = position.to_indices();
        self.squares[rank_index][file_index]
    }

    #[inline]
    pub fn set_piece_at(&mut self, position: Position, piece: Option<Piece>) {
        let (rank_index, file_index) = position.to_indices();
        self.squares[rank_index][file_index] = piece;
    }

    /// Every occupied square together with its piece, in grid order.
    pub fn occupied_squares(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        (0..BOARD_SIZE).flat_map(move |rank_index| {
            (0..BOARD_SIZE).filter_map(move |file_index| {
                self.squares[rank_index][file_index]
                    .map(|piece| (Position::from_indices(rank_index, file_index), piece))
            })
        })
    }

    /// Square of the given color's king, scanning the grid. `None` only in
    /// malformed positions; `GameEngine::from_position` rules those out.
    pub fn king_square(&self, color: Color) -> Option<Position> {
        self.occupied_squares()
            .find(|(_, piece)| piece.kind == PieceKind::King && piece.color == color)
            .map(|(position, _)| position)
    }

    /// Count of the given color's kings, used to validate handed-in layouts.
    pub fn king_count(&self, color: Color) -> usize {
        self.occupied_squares()
            .filter(|(_, piece)| piece.kind == PieceKind::King && piece.color == color)
            .count()
    }

    /// Copy of this board with the piece on `from` placed on `to` (marked
    /// moved) and `from` cleared. Whatever occupied `to` is discarded. The
    /// receiver is untouched, which is what makes speculative check testing
    /// safe on every path.
    pub fn board_after_move(&self, from: Position, to: Position) -> Board {
        let mut next = self.clone();
        if let Some(piece) = next.piece_at(from) {
            next.set_piece_at(from, None);
            next.set_piece_at(to, Some(piece.moved()));
        }
        next
    }
}
