use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::move_generator::{exclude_own_pieces, GenerationMode};
use crate::moves::king_moves::king_targets;

pub fn generate_king_candidates(
    game_state: &GameState,
    from: Square,
    color: Color,
    mode: GenerationMode,
) -> SquareSet {
    let targets = king_targets(from);
    match mode {
        GenerationMode::Threat => targets,
        GenerationMode::Normal => exclude_own_pieces(game_state, targets, color)
            .union(generate_castling_candidates(game_state, from, color)),
    }
}

/// Castling destinations for a king of the side to move.
///
/// Relies on `game_state.threats` holding the opponent's threat map, which
/// is the case whenever `color` is the side to move.
fn generate_castling_candidates(game_state: &GameState, king_from: Square, color: Color) -> SquareSet {
    let mut out = SquareSet::EMPTY;
    let home = square_at(color.back_row(), 4);

    // Cannot castle out of check or from anywhere but the home square.
    if king_from != home || game_state.threats.contains(home) {
        return out;
    }

    let own_rook = Some(Piece::new(PieceKind::Rook, color));
    let is_empty = |sq: Square| game_state.piece_at(sq).is_none();
    let is_safe = |sq: Square| !game_state.threats.contains(sq);

    if (game_state.castling_rights & kingside_right(color)) != 0
        && game_state.piece_at(home + 3) == own_rook
        && is_empty(home + 1)
        && is_empty(home + 2)
        && is_safe(home + 1)
        && is_safe(home + 2)
    {
        out.insert(home + 2);
    }

    if (game_state.castling_rights & queenside_right(color)) != 0
        && game_state.piece_at(home - 4) == own_rook
        && is_empty(home - 1)
        && is_empty(home - 2)
        && is_empty(home - 3)
        && is_safe(home - 1)
        && is_safe(home - 2)
    {
        out.insert(home - 2);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::generate_king_candidates;
    use crate::game_state::{chess_types::*, game_state::GameState};
    use crate::move_generation::move_generator::GenerationMode;

    const CASTLE_BOTH_WAYS: &str = "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1";

    #[test]
    fn both_castles_available_on_open_back_rank() {
        let game = GameState::from_fen(CASTLE_BOTH_WAYS);
        let moves = generate_king_candidates(&game, 60, Color::White, GenerationMode::Normal);
        assert!(moves.contains(62));
        assert!(moves.contains(58));
        assert_eq!(moves.len(), 7);
    }

    #[test]
    fn threat_mode_never_castles() {
        let game = GameState::from_fen(CASTLE_BOTH_WAYS);
        let moves = generate_king_candidates(&game, 60, Color::White, GenerationMode::Threat);
        assert_eq!(moves.len(), 5);
        assert!(!moves.contains(62));
    }

    #[test]
    fn attacked_transit_square_blocks_only_that_side() {
        // Black rook on f5 covers f1.
        let game = GameState::from_fen("4k3/8/8/5r2/8/8/8/R3K2R w KQ - 0 1");
        let moves = generate_king_candidates(&game, 60, Color::White, GenerationMode::Normal);
        assert!(!moves.contains(62));
        assert!(moves.contains(58));
    }

    #[test]
    fn no_castling_out_of_check() {
        let game = GameState::from_fen("4k3/8/8/4r3/8/8/8/R3K2R w KQ - 0 1");
        let moves = generate_king_candidates(&game, 60, Color::White, GenerationMode::Normal);
        assert!(!moves.contains(62));
        assert!(!moves.contains(58));
    }

    #[test]
    fn attacked_b_file_square_does_not_block_queenside() {
        // Black rook on b5 covers b1, which the king never crosses.
        let game = GameState::from_fen("4k3/8/8/1r6/8/8/8/R3K2R w KQ - 0 1");
        let moves = generate_king_candidates(&game, 60, Color::White, GenerationMode::Normal);
        assert!(moves.contains(58));
        assert!(moves.contains(62));
    }
}
