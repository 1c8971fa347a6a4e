//! Core value types for the rules engine.
//!
//! Squares are addressed two ways: the human-facing `Position` (file letter
//! plus rank number, as printed on a physical board) and grid indices into
//! the board array, where rank index 0 is rank 8 and file index 0 is file a.
//! `Position::to_indices` / `Position::from_indices` are the only conversion
//! points between the two systems.

use std::fmt;

use crate::game_state::chess_rules::BOARD_SIZE;

/// Side to move / piece ownership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

/// Piece kind (color is carried alongside in `Piece`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

/// A piece as stored on a single square.
///
/// Each square owns its piece value exclusively; executing a move writes a
/// fresh copy with `has_moved` set at the destination. `has_moved` is
/// record-keeping only (no movement rule in scope consults it).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    pub has_moved: bool,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self {
            kind,
            color,
            has_moved: false,
        }
    }

    /// Copy of this piece as it looks after it has been moved once.
    #[inline]
    pub const fn moved(self) -> Self {
        Self {
            kind: self.kind,
            color: self.color,
            has_moved: true,
        }
    }
}

/// A board square named by file letter (`a..=h`) and rank number (`1..=8`).
///
/// Two positions are equal iff file and rank match. Constructing a position
/// outside the valid range is a caller bug; use `offset` for checked
/// neighbor arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub file: char,
    pub rank: u8,
}

impl Position {
    #[inline]
    pub const fn new(file: char, rank: u8) -> Self {
        Self { file, rank }
    }

    /// Convert to `(rank_index, file_index)` grid indices.
    ///
    /// Rank index counts down from rank 8 (`rank_index = 8 - rank`), file
    /// index counts up from file a (`file_index = file - 'a'`).
    #[inline]
    pub fn to_indices(self) -> (usize, usize) {
        let rank_index = BOARD_SIZE - self.rank as usize;
        let file_index = (self.file as u8 - b'a') as usize;
        (rank_index, file_index)
    }

    /// Inverse of `to_indices`.
    #[inline]
    pub fn from_indices(rank_index: usize, file_index: usize) -> Self {
        Self {
            file: (b'a' + file_index as u8) as char,
            rank: (BOARD_SIZE - rank_index) as u8,
        }
    }

    /// Position shifted by `d_file` files and `d_rank` ranks, or `None` if
    /// the result leaves the board.
    #[inline]
    pub fn offset(self, d_file: i8, d_rank: i8) -> Option<Position> {
        let file = self.file as i8 + d_file;
        let rank = self.rank as i8 + d_rank;
        if !(b'a' as i8..=b'h' as i8).contains(&file) || !(1..=BOARD_SIZE as i8).contains(&rank) {
            return None;
        }
        Some(Position {
            file: file as u8 as char,
            rank: rank as u8,
        })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file, self.rank)
    }
}

#[cfg(test)]
mod tests {
    use super::{Color, Piece, PieceKind, Position};
    use crate::game_state::chess_rules::BOARD_SIZE;

    #[test]
    fn index_mapping_round_trips_over_all_squares() {
        for rank_index in 0..BOARD_SIZE {
            for file_index in 0..BOARD_SIZE {
                let pos = Position::from_indices(rank_index, file_index);
                assert_eq!(pos.to_indices(), (rank_index, file_index));
            }
        }
    }

    #[test]
    fn corner_squares_map_to_expected_indices() {
        assert_eq!(Position::new('a', 8).to_indices(), (0, 0));
        assert_eq!(Position::new('h', 1).to_indices(), (7, 7));
        assert_eq!(Position::new('e', 4).to_indices(), (4, 4));
    }

    #[test]
    fn offset_stays_on_board_or_returns_none() {
        let e4 = Position::new('e', 4);
        assert_eq!(e4.offset(1, 1), Some(Position::new('f', 5)));
        assert_eq!(e4.offset(-4, 0), Some(Position::new('a', 4)));
        assert_eq!(e4.offset(-5, 0), None);
        assert_eq!(Position::new('h', 8).offset(0, 1), None);
        assert_eq!(Position::new('a', 1).offset(-1, 0), None);
    }

    #[test]
    fn moved_copy_keeps_kind_and_color() {
        let pawn = Piece::new(PieceKind::Pawn, Color::White);
        assert!(!pawn.has_moved);
        let after = pawn.moved();
        assert!(after.has_moved);
        assert_eq!(after.kind, PieceKind::Pawn);
        assert_eq!(after.color, Color::White);
    }

    #[test]
    fn opposite_color_flips() {
        assert_eq!(Color::White.opposite(), Color::Black);
        assert_eq!(Color::Black.opposite(), Color::White);
    }

    #[test]
    fn positions_format_as_algebraic() {
        assert_eq!(Position::new('e', 4).to_string(), "e4");
        assert_eq!(Position::new('a', 8).to_string(), "a8");
    }
}
