use log::{debug, trace};
use rand::{seq::IndexedRandom, Rng};

use crate::chess_game::ChessGame;
use crate::game_state::chess_types::GameStatus;
use crate::utils::long_algebraic::format_long_algebraic;

/// Play uniformly random legal moves until the game ends or `max_plies`
/// have been committed. Returns the final status and the plies played.
pub fn random_playout<R: Rng + ?Sized>(
    game: &mut ChessGame,
    rng: &mut R,
    max_plies: usize,
) -> (GameStatus, usize) {
    let mut plies = 0usize;

    loop {
        let status = game.game_status();
        if status != GameStatus::Playing || plies >= max_plies {
            debug!("playout stopped after {plies} plies: {status:?}");
            return (status, plies);
        }

        let moves = game.legal_moves();
        let Some(&(from, to)) = moves.choose(rng) else {
            // Unreachable while the status says Playing.
            return (status, plies);
        };

        trace!("playout ply {plies}: {}", format_long_algebraic(from, to));
        game.commit(from, to);
        plies += 1;
    }
}
