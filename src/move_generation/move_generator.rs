//! Per-square candidate move dispatch.
//!
//! Candidates are pseudo-legal: they respect piece geometry and blocking
//! but not king safety. `GenerationMode::Threat` reports the squares a piece
//! attacks instead, for any color and regardless of whose turn it is.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::candidate_moves_king::generate_king_candidates;
use crate::move_generation::candidate_moves_knight::generate_knight_candidates;
use crate::move_generation::candidate_moves_pawn::generate_pawn_candidates;
use crate::move_generation::candidate_moves_sliding::generate_sliding_candidates;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationMode {
    /// Move candidates for the side to move.
    Normal,
    /// Attacked squares, used for check detection and castling safety.
    Threat,
}

/// Candidate destinations for the piece on `from`.
///
/// In `Normal` mode an empty square or a piece of the side not to move
/// yields an empty set.
pub fn generate_candidate_moves(
    game_state: &GameState,
    from: Square,
    mode: GenerationMode,
) -> SquareSet {
    let Some(piece) = game_state.piece_at(from) else {
        return SquareSet::EMPTY;
    };
    if mode == GenerationMode::Normal && piece.color != game_state.side_to_move {
        return SquareSet::EMPTY;
    }

    match piece.kind {
        PieceKind::Pawn => generate_pawn_candidates(game_state, from, piece.color, mode),
        PieceKind::Knight => generate_knight_candidates(game_state, from, piece.color, mode),
        PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => {
            generate_sliding_candidates(game_state, from, piece, mode)
        }
        PieceKind::King => generate_king_candidates(game_state, from, piece.color, mode),
    }
}

/// Drop targets occupied by `color`'s own pieces.
#[inline]
pub(crate) fn exclude_own_pieces(game_state: &GameState, targets: SquareSet, color: Color) -> SquareSet {
    targets
        .iter()
        .filter(|&sq| game_state.piece_at(sq).map_or(true, |p| p.color != color))
        .collect()
}
