//! King-safety filtering of candidate moves.
//!
//! Every candidate is tried on the real board inside a `TrialMove` guard:
//! the placement is changed, the opponent threat map is rebuilt, the mover's
//! king is tested, and the guard puts placement, king cache and threat map
//! back when it goes out of scope (early returns and unwinding included).

use std::ops::Deref;

use log::trace;

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_apply::relocate_pieces;
use crate::move_generation::move_generator::{generate_candidate_moves, GenerationMode};
use crate::move_generation::threat_map::threat_map;

/// Scoped hypothetical move. Restores the pre-trial board on drop.
pub struct TrialMove<'a> {
    game_state: &'a mut GameState,
    saved_squares: [Option<Piece>; 64],
    saved_king_squares: [Option<Square>; 2],
    saved_threats: SquareSet,
    mover: Color,
}

impl<'a> TrialMove<'a> {
    pub fn begin(game_state: &'a mut GameState, from: Square, to: Square) -> Self {
        let mover = game_state
            .piece_at(from)
            .map_or(game_state.side_to_move, |p| p.color);

        let mut trial = Self {
            saved_squares: game_state.squares,
            saved_king_squares: game_state.king_squares,
            saved_threats: game_state.threats,
            mover,
            game_state,
        };

        relocate_pieces(&mut *trial.game_state, from, to);
        trial.game_state.threats = threat_map(&*trial.game_state, mover.opposite());
        trial
    }

    /// Whether the mover's king is outside the opponent's threat map.
    #[inline]
    pub fn king_is_safe(&self) -> bool {
        self.game_state
            .king_square(self.mover)
            .map_or(true, |king| !self.game_state.threats.contains(king))
    }
}

impl Deref for TrialMove<'_> {
    type Target = GameState;

    fn deref(&self) -> &GameState {
        self.game_state
    }
}

impl Drop for TrialMove<'_> {
    fn drop(&mut self) {
        self.game_state.squares = self.saved_squares;
        self.game_state.king_squares = self.saved_king_squares;
        self.game_state.threats = self.saved_threats;
    }
}

/// Legal destinations for the piece on `from`.
///
/// Empty for an empty square or a piece of the side not to move.
pub fn legal_destinations(game_state: &mut GameState, from: Square) -> SquareSet {
    let candidates = generate_candidate_moves(game_state, from, GenerationMode::Normal);

    let mut legal = SquareSet::EMPTY;
    for to in candidates {
        let trial = TrialMove::begin(game_state, from, to);
        if trial.king_is_safe() {
            legal.insert(to);
        } else {
            trace!("rejected move {from}->{to}: king left in check");
        }
    }
    legal
}

/// Every legal `(from, to)` pair for the side to move, in square order.
pub fn legal_moves(game_state: &mut GameState) -> Vec<(Square, Square)> {
    let mut moves = Vec::with_capacity(64);
    for from in 0..64u8 {
        for to in legal_destinations(game_state, from) {
            moves.push((from, to));
        }
    }
    moves
}

/// Whether the side to move has at least one legal move.
pub fn has_legal_move(game_state: &mut GameState) -> bool {
    (0..64u8).any(|from| !legal_destinations(game_state, from).is_empty())
}
