//! The engine instance handed to a host (UI, text loop, tests).
//!
//! A `ChessGame` owns the snapshot history. Every committed ply pushes a new
//! full `GameState`; `revert` pops it again but never removes the position
//! the game was created from.

use log::debug;

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::game_status::{draw_reason, evaluate_game_status, DrawReason};
use crate::game_state::{chess_types::*, game_state::GameState, position_history::PositionHistory};
use crate::move_generation::legal_move_apply::{apply_move, MoveEffects};
use crate::move_generation::legal_move_filter::{legal_destinations, legal_moves};
use crate::utils::fen_parser::parse_fen;
use crate::utils::long_algebraic::format_long_algebraic;

#[derive(Debug, Clone)]
pub struct ChessGame {
    history: PositionHistory,
}

impl Default for ChessGame {
    fn default() -> Self {
        Self::new()
    }
}

impl ChessGame {
    /// Game from the standard starting position.
    pub fn new() -> Self {
        Self::from_fen(STARTING_POSITION_FEN)
    }

    pub fn from_fen(fen: &str) -> Self {
        Self {
            history: PositionHistory::new(parse_fen(fen)),
        }
    }

    #[inline]
    pub fn current(&self) -> &GameState {
        self.history.current()
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.current().piece_at(square)
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.current().side_to_move
    }

    #[inline]
    pub fn in_check(&self) -> bool {
        self.current().in_check()
    }

    /// Squares attacked by the side that is not to move.
    #[inline]
    pub fn threat_map(&self) -> SquareSet {
        self.current().threats
    }

    pub fn legal_destinations(&mut self, from: Square) -> SquareSet {
        legal_destinations(self.history.current_mut(), from)
    }

    pub fn legal_moves(&mut self) -> Vec<(Square, Square)> {
        legal_moves(self.history.current_mut())
    }

    /// Commit a move taken from `legal_destinations`. Not validated.
    pub fn commit(&mut self, from: Square, to: Square) -> MoveEffects {
        let mut next = self.current().clone();
        let effects = apply_move(&mut next, from, to);
        debug!(
            "commit {} ({:?}), ply {}",
            format_long_algebraic(from, to),
            effects,
            self.history.len()
        );
        self.history.push(next);
        effects
    }

    /// Commit a move after checking it against the legal destinations.
    pub fn try_commit(&mut self, from: Square, to: Square) -> ChessResult<MoveEffects> {
        if from >= 64 || to >= 64 {
            return Err(ChessError::IllegalMove { from, to });
        }
        let movable = self
            .piece_at(from)
            .is_some_and(|p| p.color == self.side_to_move());
        if !movable {
            return Err(ChessError::NoMovablePiece(from));
        }
        if !self.legal_destinations(from).contains(to) {
            return Err(ChessError::IllegalMove { from, to });
        }
        Ok(self.commit(from, to))
    }

    /// Undo the last committed ply. Returns `false` at the root position.
    pub fn revert(&mut self) -> bool {
        let popped = self.history.pop();
        if popped {
            debug!("revert, ply {}", self.history.len());
        }
        popped
    }

    pub fn game_status(&mut self) -> GameStatus {
        evaluate_game_status(self.history.current_mut())
    }

    pub fn draw_reason(&mut self) -> Option<DrawReason> {
        draw_reason(self.history.current_mut())
    }

    #[inline]
    pub fn to_fen(&self) -> String {
        self.current().get_fen()
    }

    /// Number of snapshots, including the starting position.
    #[inline]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }
}
