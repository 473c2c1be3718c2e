//! Line-oriented text host for the rules engine.
//!
//! Commands:
//! `new`, `fen <text>`, `show`, `moves [square]`, `move <e2e4>`, `undo`,
//! `status`, `threats`, `perft <depth>`, `quit`.

use std::io::{self, BufRead, Write};
use std::time::Instant;

use chessboard_core::chess_game::ChessGame;
use chessboard_core::game_state::chess_types::GameStatus;
use chessboard_core::move_generation::perft::perft_divide;
use chessboard_core::utils::algebraic::{algebraic_to_square, square_to_algebraic};
use chessboard_core::utils::long_algebraic::{format_long_algebraic, parse_long_algebraic};
use chessboard_core::utils::render_game_state::render_game_state;

fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().filter_or("RUST_LOG", "info"))
        .format_timestamp(None)
        .init();
}

fn handle_command(game: &mut ChessGame, line: &str) -> Result<bool, String> {
    let (command, rest) = line.split_once(' ').unwrap_or((line, ""));
    let rest = rest.trim();

    match command {
        "quit" | "exit" => return Ok(false),
        "new" => *game = ChessGame::new(),
        "fen" if rest.is_empty() => println!("{}", game.to_fen()),
        "fen" => *game = ChessGame::from_fen(rest),
        "show" => print!("{}", render_game_state(game.current())),
        "moves" if rest.is_empty() => {
            let moves: Vec<String> = game
                .legal_moves()
                .into_iter()
                .map(|(from, to)| format_long_algebraic(from, to))
                .collect();
            println!("{} moves: {}", moves.len(), moves.join(" "));
        }
        "moves" => {
            let from = algebraic_to_square(rest).map_err(|e| e.to_string())?;
            let targets: Vec<String> = game
                .legal_destinations(from)
                .iter()
                .map(square_to_algebraic)
                .collect();
            println!("{}", targets.join(" "));
        }
        "move" => {
            let (from, to) = parse_long_algebraic(rest).map_err(|e| e.to_string())?;
            let effects = game.try_commit(from, to).map_err(|e| e.to_string())?;
            log::info!("played {rest} {effects:?}");
            report_status(game);
        }
        "undo" => {
            if !game.revert() {
                return Err("nothing to undo".to_owned());
            }
        }
        "status" => report_status(game),
        "threats" => {
            let threats: Vec<String> = game.threat_map().iter().map(square_to_algebraic).collect();
            println!("{}", threats.join(" "));
        }
        "perft" => {
            let depth = rest
                .parse::<u8>()
                .map_err(|_| format!("bad perft depth '{rest}'"))?;
            let started = Instant::now();
            let divided = perft_divide(game, depth);
            let mut total = 0u64;
            for (from, to, nodes) in &divided {
                println!("{}: {nodes}", format_long_algebraic(*from, *to));
                total += nodes;
            }
            println!("nodes {total} in {:?}", started.elapsed());
        }
        "" => {}
        other => return Err(format!("unknown command '{other}'")),
    }

    Ok(true)
}

fn report_status(game: &mut ChessGame) {
    match game.game_status() {
        GameStatus::Playing if game.in_check() => println!("check"),
        GameStatus::Playing => println!("{:?} to move", game.side_to_move()),
        GameStatus::Checkmate => println!("checkmate, {:?} loses", game.side_to_move()),
        GameStatus::Draw => match game.draw_reason() {
            Some(reason) => println!("draw ({reason:?})"),
            None => println!("draw"),
        },
    }
}

fn main() -> Result<(), String> {
    init_logging();

    let mut game = ChessGame::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = line.map_err(|e| e.to_string())?;
        match handle_command(&mut game, line.trim()) {
            Ok(true) => {}
            Ok(false) => break,
            Err(message) => println!("error: {message}"),
        }
        stdout.flush().map_err(|e| e.to_string())?;
    }

    Ok(())
}
