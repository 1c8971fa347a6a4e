//! Pseudo-legal knight move generation.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Position};

/// The eight knight jumps as `(d_file, d_rank)` offsets.
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

pub fn generate_knight_moves(
    board: &Board,
    from: Position,
    color: Color,
    out: &mut Vec<Position>,
) {
    for (d_file, d_rank) in KNIGHT_OFFSETS {
        let Some(to) = from.offset(d_file, d_rank) else {
            continue;
        };
        match board.piece_at(to) {
            Some(target) if target.color == color => {}
            _ => out.push(to),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::generate_knight_moves;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, Piece, PieceKind, Position};

    #[test]
    fn knight_in_the_center_of_an_empty_board_has_eight_jumps() {
        let mut board = Board::empty();
        let d4 = Position::new('d', 4);
        board.set_piece_at(d4, Some(Piece::new(PieceKind::Knight, Color::White)));

        let mut moves = Vec::new();
        generate_knight_moves(&board, d4, Color::White, &mut moves);
        assert_eq!(moves.len(), 8);
        assert!(moves.contains(&Position::new('e', 6)));
        assert!(moves.contains(&Position::new('c', 2)));
    }

    #[test]
    fn starting_knight_has_two_jumps_and_jumps_over_pawns() {
        let board = Board::starting_position();
        let mut moves = Vec::new();
        generate_knight_moves(&board, Position::new('b', 1), Color::White, &mut moves);
        moves.sort_by_key(|p| (p.file, p.rank));
        assert_eq!(moves, vec![Position::new('a', 3), Position::new('c', 3)]);
    }

    #[test]
    fn own_pieces_block_a_jump_and_enemies_do_not() {
        let mut board = Board::empty();
        let d4 = Position::new('d', 4);
        board.set_piece_at(d4, Some(Piece::new(PieceKind::Knight, Color::White)));
        board.set_piece_at(
            Position::new('e', 6),
            Some(Piece::new(PieceKind::Pawn, Color::White)),
        );
        board.set_piece_at(
            Position::new('c', 6),
            Some(Piece::new(PieceKind::Pawn, Color::Black)),
        );

        let mut moves = Vec::new();
        generate_knight_moves(&board, d4, Color::White, &mut moves);
        assert_eq!(moves.len(), 7);
        assert!(!moves.contains(&Position::new('e', 6)));
        assert!(moves.contains(&Position::new('c', 6)));
    }
}
