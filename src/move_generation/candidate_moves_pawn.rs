//! Pawn candidate generation.
//!
//! Pushes go forward onto empty squares (two steps from the start row when
//! both squares are free). Diagonals need an enemy piece or the en-passant
//! target in normal mode, and are always reported in threat mode.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::move_generator::GenerationMode;

#[inline]
const fn forward_step(color: Color) -> i8 {
    match color {
        Color::White => -1,
        Color::Black => 1,
    }
}

pub fn generate_pawn_candidates(
    game_state: &GameState,
    from: Square,
    color: Color,
    mode: GenerationMode,
) -> SquareSet {
    let mut out = SquareSet::EMPTY;
    let row = row_of(from) as i8;
    let file = file_of(from) as i8;
    let step = forward_step(color);

    let next_row = row + step;
    if !(0..8).contains(&next_row) {
        return out;
    }

    if mode == GenerationMode::Normal {
        let one_step = square_at(next_row as u8, file as u8);
        if game_state.piece_at(one_step).is_none() {
            out.insert(one_step);

            let two_row = next_row + step;
            if row as u8 == color.pawn_start_row() && (0..8).contains(&two_row) {
                let two_step = square_at(two_row as u8, file as u8);
                if game_state.piece_at(two_step).is_none() {
                    out.insert(two_step);
                }
            }
        }
    }

    for file_delta in [-1i8, 1i8] {
        let new_file = file + file_delta;
        if !(0..8).contains(&new_file) {
            continue;
        }
        let to = square_at(next_row as u8, new_file as u8);

        match mode {
            GenerationMode::Threat => out.insert(to),
            GenerationMode::Normal => {
                let enemy_there = game_state.piece_at(to).is_some_and(|p| p.color != color);
                if enemy_there || game_state.en_passant_square == Some(to) {
                    out.insert(to);
                }
            }
        }
    }

    out
}
