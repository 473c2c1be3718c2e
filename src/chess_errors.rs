//! Errors used throughout the rules engine.
//!
//! Only the input-facing edges can fail: coordinate text, move text and the
//! checked commit path. Position strings never fail to parse, and the
//! trusted `commit` path does not validate at all.

use std::error::Error;
use std::fmt;

use crate::game_state::chess_types::Square;
use crate::utils::algebraic::square_to_algebraic;

pub type ChessResult<T> = Result<T, ChessError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    /// Square text that is not a file letter `a..=h` plus a rank digit `1..=8`.
    InvalidAlgebraicSquare(String),

    /// Move text that is not two squares, optionally followed by a promotion letter.
    InvalidMoveText(String),

    /// No piece of the side to move stands on the origin square.
    NoMovablePiece(Square),

    /// The destination is not among the legal destinations of the origin.
    IllegalMove { from: Square, to: Square },
}

impl fmt::Display for ChessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChessError::InvalidAlgebraicSquare(text) => {
                write!(f, "invalid algebraic square: {text}")
            }
            ChessError::InvalidMoveText(text) => write!(f, "invalid move text: {text}"),
            ChessError::NoMovablePiece(square) => write!(
                f,
                "no piece of the side to move on {}",
                square_text(*square)
            ),
            ChessError::IllegalMove { from, to } => write!(
                f,
                "illegal move {}{}",
                square_text(*from),
                square_text(*to)
            ),
        }
    }
}

impl Error for ChessError {}

fn square_text(square: Square) -> String {
    if square < 64 {
        square_to_algebraic(square)
    } else {
        format!("#{square}")
    }
}
