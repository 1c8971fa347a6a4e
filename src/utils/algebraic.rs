//! Conversions between algebraic square names and `Position`.
//!
//! Converts human-readable coordinates (for example `e4`) to the engine's
//! square type and back, reused by the driver binary and tests.

use crate::game_state::chess_types::Position;

/// Convert an algebraic square name (for example: "e4") to a `Position`.
#[inline]
pub fn algebraic_to_position(square: &str) -> Result<Position, String> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(format!("Invalid algebraic square: {square}"));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) {
        return Err(format!("Invalid algebraic file: {}", file as char));
    }
    if !(b'1'..=b'8').contains(&rank) {
        return Err(format!("Invalid algebraic rank: {}", rank as char));
    }

    Ok(Position::new(file as char, rank - b'0'))
}

/// Convert a `Position` to its algebraic square name (for example: "e4").
#[inline]
pub fn position_to_algebraic(position: Position) -> String {
    position.to_string()
}

#[cfg(test)]
mod tests {
    use super::{algebraic_to_position, position_to_algebraic};
    use crate::game_state::chess_types::Position;

    #[test]
    fn round_trip_square_conversions() {
        assert_eq!(
            algebraic_to_position("a1").expect("a1 should parse"),
            Position::new('a', 1)
        );
        assert_eq!(
            algebraic_to_position("h8").expect("h8 should parse"),
            Position::new('h', 8)
        );
        assert_eq!(position_to_algebraic(Position::new('e', 4)), "e4");
        for file in 'a'..='h' {
            for rank in 1..=8u8 {
                let name = format!("{file}{rank}");
                let parsed = algebraic_to_position(&name).expect("valid square should parse");
                assert_eq!(position_to_algebraic(parsed), name);
            }
        }
    }

    #[test]
    fn malformed_squares_are_rejected() {
        assert!(algebraic_to_position("").is_err());
        assert!(algebraic_to_position("e").is_err());
        assert!(algebraic_to_position("e44").is_err());
        assert!(algebraic_to_position("i4").is_err());
        assert!(algebraic_to_position("e9").is_err());
        assert!(algebraic_to_position("e0").is_err());
        assert!(algebraic_to_position("4e").is_err());
    }
}
