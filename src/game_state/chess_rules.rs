//! Canonical chess-rule constants.
//!
//! This module stores static rule-related literals such as the standard
//! starting position string and the draw thresholds used by the evaluator.

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Halfmove clock value at which the fifty-move rule declares a draw.
pub const FIFTY_MOVE_RULE_HALFMOVES: u32 = 100;

/// Number of occurrences of one position that forces a draw.
pub const REPETITION_DRAW_COUNT: u32 = 3;
