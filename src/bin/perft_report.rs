//! Timed perft node counts.
//!
//! Usage:
//! `cargo run --release --bin perft_report`
//! `cargo run --release --bin perft_report -- --depth 5 --fen "<fen>"`

use std::time::Instant;

use chessboard_core::chess_game::ChessGame;
use chessboard_core::game_state::chess_rules::STARTING_POSITION_FEN;
use chessboard_core::move_generation::perft::{perft_detailed, perft_divide};
use chessboard_core::utils::long_algebraic::format_long_algebraic;

fn parse_arg<T: std::str::FromStr>(flag: &str) -> Option<T> {
    let args: Vec<String> = std::env::args().collect();
    args.iter()
        .position(|arg| arg == flag)
        .and_then(|i| args.get(i + 1))
        .and_then(|value| value.parse::<T>().ok())
}

fn main() -> Result<(), String> {
    env_logger::Builder::from_env(env_logger::Env::default().filter_or("RUST_LOG", "info")).init();

    let depth = parse_arg::<u8>("--depth").unwrap_or(4);
    let fen = parse_arg::<String>("--fen").unwrap_or_else(|| STARTING_POSITION_FEN.to_owned());
    let mut game = ChessGame::from_fen(&fen);

    println!("perft report: {}", game.to_fen());
    for ply in 1..=depth {
        let started = Instant::now();
        let counts = perft_detailed(&mut game, ply);
        let elapsed = started.elapsed();
        let nps = counts.nodes as f64 / elapsed.as_secs_f64().max(1e-9);
        println!(
            "depth={ply} nodes={} captures={} ep={} castles={} promotions={} checks={} elapsed_ms={} nps={:.0}",
            counts.nodes,
            counts.captures,
            counts.en_passant,
            counts.castles,
            counts.promotions,
            counts.checks,
            elapsed.as_millis(),
            nps
        );
    }

    if depth > 0 {
        println!("divide at depth {depth}:");
        for (from, to, nodes) in perft_divide(&mut game, depth) {
            println!("  {}: {nodes}", format_long_algebraic(from, to));
        }
    }

    if game.history_len() != 1 {
        return Err("perft left moves on the history".to_owned());
    }
    Ok(())
}
