//! Pseudo-legal queen move generation: the union of the rook and bishop
//! move sets from the same square.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Position};
use crate::move_generation::bishop_moves::generate_bishop_moves;
use crate::move_generation::rook_moves::generate_rook_moves;

pub fn generate_queen_moves(board: &Board, from: Position, color: Color, out: &mut Vec<Position>) {
    generate_rook_moves(board, from, color, out);
    generate_bishop_moves(board, from, color, out);
}

#[cfg(test)]
mod tests {
    use super::generate_queen_moves;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, Piece, PieceKind, Position};

    #[test]
    fn queen_in_the_center_of_an_empty_board_sees_twenty_seven_squares() {
        let mut board = Board::empty();
        let d4 = Position::new('d', 4);
        board.set_piece_at(d4, Some(Piece::new(PieceKind::Queen, Color::White)));

        let mut moves = Vec::new();
        generate_queen_moves(&board, d4, Color::White, &mut moves);
        assert_eq!(moves.len(), 27);
    }
}
