//! Random legal playouts, summarized by result.
//!
//! Usage:
//! `cargo run --release --bin random_game -- --games 100 --seed 7 --max-plies 400`

use rand::{rngs::StdRng, SeedableRng};

use chessboard_core::chess_game::ChessGame;
use chessboard_core::game_state::chess_types::GameStatus;
use chessboard_core::utils::random_playout::random_playout;

fn parse_arg<T: std::str::FromStr>(flag: &str) -> Option<T> {
    let args: Vec<String> = std::env::args().collect();
    args.iter()
        .position(|arg| arg == flag)
        .and_then(|i| args.get(i + 1))
        .and_then(|value| value.parse::<T>().ok())
}

fn main() -> Result<(), String> {
    env_logger::Builder::from_env(env_logger::Env::default().filter_or("RUST_LOG", "info")).init();

    let games = parse_arg::<usize>("--games").unwrap_or(10);
    if games == 0 {
        return Err("--games must be at least 1".to_owned());
    }
    let max_plies = parse_arg::<usize>("--max-plies").unwrap_or(1_000);
    let seed = parse_arg::<u64>("--seed").unwrap_or_else(rand::random);
    let mut rng = StdRng::seed_from_u64(seed);

    let (mut checkmates, mut draws, mut unfinished) = (0usize, 0usize, 0usize);
    let mut total_plies = 0usize;

    for index in 0..games {
        let mut game = ChessGame::new();
        let (status, plies) = random_playout(&mut game, &mut rng, max_plies);
        total_plies += plies;

        let detail = match status {
            GameStatus::Checkmate => {
                checkmates += 1;
                format!("checkmate, {:?} mated", game.side_to_move())
            }
            GameStatus::Draw => {
                draws += 1;
                format!("draw {:?}", game.draw_reason())
            }
            GameStatus::Playing => {
                unfinished += 1;
                "ply limit".to_owned()
            }
        };
        log::info!("game {index}: {plies} plies, {detail}, final {}", game.to_fen());
    }

    println!(
        "seed={seed} games={games} checkmates={checkmates} draws={draws} unfinished={unfinished} avg_plies={:.1}",
        total_plies as f64 / games as f64
    );
    Ok(())
}
