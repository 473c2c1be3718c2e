//! Knight target tables.
//!
//! The fixed eight knight jumps, clipped to the 8x8 board and precomputed
//! for every origin square.

use crate::game_state::chess_types::{Square, SquareSet};

/// (row delta, file delta) of each knight jump.
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, 2),
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
];

pub const KNIGHT_TARGETS: [u64; 64] = generate_knight_targets();

#[inline]
pub const fn knight_targets(square: Square) -> SquareSet {
    SquareSet(KNIGHT_TARGETS[square as usize])
}

const fn generate_knight_targets() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let row = (sq / 8) as i8;
        let file = (sq % 8) as i8;
        let mut targets = 0u64;

        let mut i = 0;
        while i < KNIGHT_OFFSETS.len() {
            let (dr, df) = KNIGHT_OFFSETS[i];
            targets |= set_if_valid(row + dr, file + df);
            i += 1;
        }

        table[sq] = targets;
        sq += 1;
    }

    table
}

pub(crate) const fn set_if_valid(row: i8, file: i8) -> u64 {
    if row < 0 || row > 7 || file < 0 || file > 7 {
        return 0;
    }

    let square = (row as usize) * 8 + (file as usize);
    1u64 << square
}
