//! Game-state evaluation: playing, checkmate or draw.
//!
//! Draw rules are checked first (fifty-move rule, threefold repetition of
//! any position), then the side to move is checkmated or stalemated when it
//! has no legal move at all.

use crate::game_state::chess_rules::{FIFTY_MOVE_RULE_HALFMOVES, REPETITION_DRAW_COUNT};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_filter::has_legal_move;

/// Why a position is a draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawReason {
    FiftyMoveRule,
    ThreefoldRepetition,
    Stalemate,
}

pub fn evaluate_game_status(game_state: &mut GameState) -> GameStatus {
    if rule_draw(game_state).is_some() {
        return GameStatus::Draw;
    }

    let in_check = game_state.in_check();
    if has_legal_move(game_state) {
        GameStatus::Playing
    } else if in_check {
        GameStatus::Checkmate
    } else {
        GameStatus::Draw
    }
}

/// The draw rule that currently applies, if any.
pub fn draw_reason(game_state: &mut GameState) -> Option<DrawReason> {
    if let Some(reason) = rule_draw(game_state) {
        return Some(reason);
    }
    if !game_state.in_check() && !has_legal_move(game_state) {
        return Some(DrawReason::Stalemate);
    }
    None
}

fn rule_draw(game_state: &GameState) -> Option<DrawReason> {
    if game_state.halfmove_clock >= FIFTY_MOVE_RULE_HALFMOVES {
        Some(DrawReason::FiftyMoveRule)
    } else if game_state.max_repetitions() >= REPETITION_DRAW_COUNT {
        Some(DrawReason::ThreefoldRepetition)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::{draw_reason, evaluate_game_status, DrawReason};
    use crate::game_state::{chess_types::*, game_state::GameState};

    #[test]
    fn fools_mate_is_checkmate() {
        let mut game = GameState::from_fen(
            "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3",
        );
        assert_eq!(evaluate_game_status(&mut game), GameStatus::Checkmate);
    }

    #[test]
    fn cornered_king_without_moves_is_stalemate() {
        let mut game = GameState::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1");
        assert_eq!(evaluate_game_status(&mut game), GameStatus::Draw);
        assert_eq!(draw_reason(&mut game), Some(DrawReason::Stalemate));
    }

    #[test]
    fn hundred_quiet_halfmoves_force_a_draw() {
        let mut game = GameState::from_fen("4k3/8/8/8/8/8/8/R3K3 w Q - 100 80");
        assert_eq!(evaluate_game_status(&mut game), GameStatus::Draw);
        assert_eq!(draw_reason(&mut game), Some(DrawReason::FiftyMoveRule));

        game.halfmove_clock = 99;
        assert_eq!(evaluate_game_status(&mut game), GameStatus::Playing);
    }

    #[test]
    fn start_position_is_playing() {
        let mut game = GameState::new_game();
        assert_eq!(evaluate_game_status(&mut game), GameStatus::Playing);
        assert_eq!(draw_reason(&mut game), None);
    }
}
