//! Threat map aggregation.
//!
//! The threat map is the union of every threat-mode destination of one
//! color. It is rebuilt from scratch after each board change.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::move_generator::{generate_candidate_moves, GenerationMode};

pub fn threat_map(game_state: &GameState, attacker: Color) -> SquareSet {
    let mut threats = SquareSet::EMPTY;
    for from in 0..64u8 {
        if game_state.piece_at(from).is_some_and(|p| p.color == attacker) {
            threats = threats.union(generate_candidate_moves(game_state, from, GenerationMode::Threat));
        }
    }
    threats
}

#[cfg(test)]
mod tests {
    use super::threat_map;
    use crate::game_state::{chess_types::*, game_state::GameState};

    #[test]
    fn start_position_threatens_the_third_rank_and_own_pieces() {
        let game = GameState::new_game();
        let white = threat_map(&game, Color::White);
        // Every square of rank 3 (row 5) is covered by a pawn.
        for file in 0..8 {
            assert!(white.contains(square_at(5, file)));
        }
        // Defended own pieces count too (d2 pawn defended by the queen).
        assert!(white.contains(51));
        assert!(!white.contains(square_at(4, 4)));
    }

    #[test]
    fn king_square_is_covered_by_slider() {
        let game = GameState::from_fen("4k3/8/8/8/8/8/8/R3K3 b - - 0 1");
        let white = threat_map(&game, Color::White);
        assert!(white.contains(0));
        assert!(!white.contains(4));
        assert_eq!(game.threats, white);
    }
}
