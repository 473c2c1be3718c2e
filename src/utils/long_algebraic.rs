//! Coordinate move text such as `e2e4` or `e7e8q`.
//!
//! A trailing promotion letter is accepted but carries no meaning: pawns
//! always promote to a queen.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::Square;
use crate::utils::algebraic::{algebraic_to_square, square_to_algebraic};

pub fn parse_long_algebraic(text: &str) -> ChessResult<(Square, Square)> {
    let text = text.trim();
    let invalid = || ChessError::InvalidMoveText(text.to_owned());

    if !(4..=5).contains(&text.len()) || !text.is_ascii() {
        return Err(invalid());
    }
    if text.len() == 5 && !matches!(text.as_bytes()[4], b'q' | b'r' | b'b' | b'n') {
        return Err(invalid());
    }

    let from = algebraic_to_square(&text[0..2]).map_err(|_| invalid())?;
    let to = algebraic_to_square(&text[2..4]).map_err(|_| invalid())?;
    Ok((from, to))
}

pub fn format_long_algebraic(from: Square, to: Square) -> String {
    format!("{}{}", square_to_algebraic(from), square_to_algebraic(to))
}

#[cfg(test)]
mod tests {
    use super::{format_long_algebraic, parse_long_algebraic};
    use crate::chess_errors::ChessError;

    #[test]
    fn parses_plain_and_promotion_moves() {
        assert_eq!(parse_long_algebraic("e2e4"), Ok((52, 36)));
        assert_eq!(parse_long_algebraic(" a7a8q "), Ok((8, 0)));
        assert_eq!(format_long_algebraic(52, 36), "e2e4");
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(
            parse_long_algebraic("e2e9"),
            Err(ChessError::InvalidMoveText("e2e9".to_owned()))
        );
        assert!(parse_long_algebraic("e2e4k").is_err());
        assert!(parse_long_algebraic("e2").is_err());
    }
}
