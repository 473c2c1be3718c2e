//! Chess rules engine: board state, legal move generation, move application
//! with snapshot undo, and game-result evaluation.
//!
//! Hosts normally drive a `chess_game::ChessGame`; the lower-level modules
//! stay public for perft tooling and tests.

pub mod chess_errors;
pub mod chess_game;

pub mod game_state {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod game_status;
    pub mod position_history;
}

pub mod moves {
    pub mod direction_tables;
    pub mod king_moves;
    pub mod knight_moves;
}

pub mod move_generation {
    pub mod candidate_moves_king;
    pub mod candidate_moves_knight;
    pub mod candidate_moves_pawn;
    pub mod candidate_moves_sliding;
    pub mod legal_move_apply;
    pub mod legal_move_filter;
    pub mod move_generator;
    pub mod perft;
    pub mod threat_map;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod long_algebraic;
    pub mod random_playout;
    pub mod render_game_state;
}
