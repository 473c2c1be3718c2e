//! Core board state representation.
//!
//! `GameState` is one complete snapshot of a game: the 64-slot placement,
//! turn and rule flags, clocks, the cached threat map and the repetition
//! counter. Snapshots are plain values; history keeps one per committed ply.

use std::collections::HashMap;

use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::*;
use crate::move_generation::threat_map::threat_map;
use crate::utils::fen_generator::{generate_fen, generate_repetition_key};
use crate::utils::fen_parser::parse_fen;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    // --- Placement ---
    pub squares: [Option<Piece>; 64],
    // [color] -> king square, kept in sync with `squares`.
    pub king_squares: [Option<Square>; 2],

    // --- Side and state flags ---
    pub side_to_move: Color,
    pub castling_rights: CastlingRights,
    pub en_passant_square: Option<Square>,

    // --- Clocks / move counters ---
    pub halfmove_clock: u32,
    pub fullmove_number: u32,

    // Squares attacked by the side that is *not* to move.
    pub threats: SquareSet,

    // --- Repetition support ---
    pub repetition_counts: HashMap<String, u32>,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            squares: [None; 64],
            king_squares: [None; 2],

            side_to_move: Color::White,
            castling_rights: CASTLE_NONE,
            en_passant_square: None,

            halfmove_clock: 0,
            fullmove_number: 1,

            threats: SquareSet::EMPTY,
            repetition_counts: HashMap::new(),
        }
    }
}

impl GameState {
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn new_game() -> Self {
        parse_fen(STARTING_POSITION_FEN)
    }

    #[inline]
    pub fn from_fen(fen: &str) -> Self {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares.get(usize::from(square)).copied().flatten()
    }

    #[inline]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.king_squares[color.index()]
    }

    /// Place (or clear) a square, keeping the king cache consistent.
    pub fn set_piece(&mut self, square: Square, piece: Option<Piece>) {
        if let Some(old) = self.squares[usize::from(square)] {
            if old.kind == PieceKind::King && self.king_squares[old.color.index()] == Some(square) {
                self.king_squares[old.color.index()] = None;
            }
        }
        if let Some(new) = piece {
            if new.kind == PieceKind::King {
                self.king_squares[new.color.index()] = Some(square);
            }
        }
        self.squares[usize::from(square)] = piece;
    }

    /// Whether the side to move has its king on a threatened square.
    #[inline]
    pub fn in_check(&self) -> bool {
        self.king_square(self.side_to_move)
            .is_some_and(|king| self.threats.contains(king))
    }

    /// Recompute the cached threat map for the current side to move.
    pub fn refresh_threats(&mut self) {
        self.threats = threat_map(self, self.side_to_move.opposite());
    }

    #[inline]
    pub fn repetition_key(&self) -> String {
        generate_repetition_key(self)
    }

    /// Count one more occurrence of the current position.
    pub fn record_position(&mut self) {
        let key = self.repetition_key();
        *self.repetition_counts.entry(key).or_insert(0) += 1;
    }

    /// Highest occurrence count of any position seen so far.
    pub fn max_repetitions(&self) -> u32 {
        self.repetition_counts.values().copied().max().unwrap_or(0)
    }
}
