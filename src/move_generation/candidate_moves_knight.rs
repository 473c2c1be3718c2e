use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::move_generator::{exclude_own_pieces, GenerationMode};
use crate::moves::knight_moves::knight_targets;

pub fn generate_knight_candidates(
    game_state: &GameState,
    from: Square,
    color: Color,
    mode: GenerationMode,
) -> SquareSet {
    let targets = knight_targets(from);
    match mode {
        GenerationMode::Threat => targets,
        GenerationMode::Normal => exclude_own_pieces(game_state, targets, color),
    }
}
