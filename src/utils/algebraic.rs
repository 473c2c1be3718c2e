//! Square conversions for algebraic coordinates.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and internal
//! square indices, where row 0 is rank 8: the rank digit maps to row
//! `8 - digit` in both directions.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::{file_of, row_of, square_at, Square};

/// Convert algebraic notation (for example: "e4") to a square index.
#[inline]
pub fn algebraic_to_square(square: &str) -> ChessResult<Square> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessError::InvalidAlgebraicSquare(square.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessError::InvalidAlgebraicSquare(square.to_owned()));
    }

    let row = 8 - (rank - b'0');
    Ok(square_at(row, file - b'a'))
}

/// Convert a square index (`0..=63`) to algebraic notation (for example: "e4").
#[inline]
pub fn square_to_algebraic(square: Square) -> String {
    let file_char = char::from(b'a' + file_of(square));
    let rank_char = char::from(b'0' + (8 - row_of(square)));
    format!("{file_char}{rank_char}")
}

#[cfg(test)]
mod tests {
    use super::{algebraic_to_square, square_to_algebraic};

    #[test]
    fn round_trip_square_conversions() {
        assert_eq!(algebraic_to_square("a8").expect("a8 should parse"), 0);
        assert_eq!(algebraic_to_square("h1").expect("h1 should parse"), 63);
        assert_eq!(algebraic_to_square("e3").expect("e3 should parse"), 44);
        assert_eq!(square_to_algebraic(0), "a8");
        assert_eq!(square_to_algebraic(63), "h1");
        for sq in 0..64u8 {
            assert_eq!(algebraic_to_square(&square_to_algebraic(sq)).ok(), Some(sq));
        }
    }

    #[test]
    fn rejects_out_of_range_text() {
        assert!(algebraic_to_square("i1").is_err());
        assert!(algebraic_to_square("a9").is_err());
        assert!(algebraic_to_square("a0").is_err());
        assert!(algebraic_to_square("e").is_err());
    }
}
