//! King step tables.
//!
//! One-square steps in all eight directions, clipped to the board edge.
//! Castling is handled by move generation, not here.

use crate::game_state::chess_types::{Square, SquareSet};
use crate::moves::knight_moves::set_if_valid;

/// (row delta, file delta) of each king step.
pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub const KING_TARGETS: [u64; 64] = generate_king_targets();

#[inline]
pub const fn king_targets(square: Square) -> SquareSet {
    SquareSet(KING_TARGETS[square as usize])
}

const fn generate_king_targets() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let row = (sq / 8) as i8;
        let file = (sq % 8) as i8;
        let mut targets = 0u64;

        let mut i = 0;
        while i < KING_OFFSETS.len() {
            let (dr, df) = KING_OFFSETS[i];
            targets |= set_if_valid(row + dr, file + df);
            i += 1;
        }

        table[sq] = targets;
        sq += 1;
    }

    table
}
