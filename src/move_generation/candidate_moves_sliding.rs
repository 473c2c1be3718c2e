//! Bishop, rook and queen candidate generation.
//!
//! Each ray is walked up to its precomputed edge distance and stops at the
//! first occupied square. An own piece there is excluded in normal mode but
//! still counts as covered in threat mode.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::move_generator::GenerationMode;
use crate::moves::direction_tables::{
    squares_to_edge, Direction, ALL_DIRECTIONS, DIAGONAL_DIRECTIONS, DIRECTION_OFFSETS,
    ORTHOGONAL_DIRECTIONS,
};

#[inline]
fn directions_for(kind: PieceKind) -> &'static [Direction] {
    match kind {
        PieceKind::Bishop => &DIAGONAL_DIRECTIONS,
        PieceKind::Rook => &ORTHOGONAL_DIRECTIONS,
        _ => &ALL_DIRECTIONS,
    }
}

pub fn generate_sliding_candidates(
    game_state: &GameState,
    from: Square,
    piece: Piece,
    mode: GenerationMode,
) -> SquareSet {
    let mut out = SquareSet::EMPTY;

    for &direction in directions_for(piece.kind) {
        let offset = DIRECTION_OFFSETS[direction];
        let mut target = from as i8;

        for _ in 0..squares_to_edge(from, direction) {
            target += offset;
            let square = target as Square;

            match game_state.piece_at(square) {
                None => out.insert(square),
                Some(occupant) => {
                    if occupant.color != piece.color || mode == GenerationMode::Threat {
                        out.insert(square);
                    }
                    break;
                }
            }
        }
    }

    out
}
