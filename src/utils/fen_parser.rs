//! FEN-to-GameState parser.
//!
//! Builds a complete state from Forsyth-Edwards Notation. Parsing is lenient
//! and never fails: fields are read left to right, and the first missing or
//! unreadable field stops parsing with every later field left at its
//! default (White to move, no castling rights, no en-passant square,
//! clocks 0 and 1). Unknown placement characters are skipped.

use log::debug;

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::utils::algebraic::algebraic_to_square;

pub fn parse_fen(fen: &str) -> GameState {
    let mut game_state = GameState::new_empty();
    parse_fields(fen, &mut game_state);

    game_state.refresh_threats();
    game_state.record_position();
    game_state
}

fn parse_fields(fen: &str, game_state: &mut GameState) {
    let mut parts = fen.split_whitespace();

    let Some(board_part) = parts.next() else {
        debug!("FEN is empty, using an empty board");
        return;
    };
    parse_board(board_part, game_state);

    let Some(side_part) = parts.next() else {
        return;
    };
    game_state.side_to_move = parse_side_to_move(side_part);

    let Some(castling_part) = parts.next() else {
        return;
    };
    game_state.castling_rights = parse_castling_rights(castling_part);

    let Some(en_passant_part) = parts.next() else {
        return;
    };
    match parse_en_passant_square(en_passant_part) {
        Some(square) => game_state.en_passant_square = square,
        None => {
            debug!("unreadable en-passant field '{en_passant_part}', stopping");
            return;
        }
    }

    let Some(halfmove_part) = parts.next() else {
        return;
    };
    match halfmove_part.parse::<u32>() {
        Ok(clock) => game_state.halfmove_clock = clock,
        Err(_) => {
            debug!("unreadable halfmove clock '{halfmove_part}', stopping");
            return;
        }
    }

    let Some(fullmove_part) = parts.next() else {
        return;
    };
    match fullmove_part.parse::<u32>() {
        Ok(number) => game_state.fullmove_number = number,
        Err(_) => debug!("unreadable fullmove number '{fullmove_part}'"),
    }
}

fn parse_board(board_part: &str, game_state: &mut GameState) {
    let mut row = 0u8;
    let mut file = 0u8;

    for ch in board_part.chars() {
        if ch == '/' {
            row = row.saturating_add(1);
            file = 0;
            continue;
        }

        if let Some(empty_count) = ch.to_digit(10) {
            if (1..=8).contains(&empty_count) {
                file = file.saturating_add(empty_count as u8);
            }
            continue;
        }

        let Some(piece) = piece_from_fen_char(ch) else {
            continue;
        };

        // Overfull ranks and extra ranks are dropped rather than wrapped.
        if row < 8 && file < 8 {
            game_state.set_piece(square_at(row, file), Some(piece));
        }
        file = file.saturating_add(1);
    }
}

fn parse_side_to_move(side_part: &str) -> Color {
    if side_part == "b" {
        Color::Black
    } else {
        Color::White
    }
}

fn parse_castling_rights(castling_part: &str) -> CastlingRights {
    let mut rights = CASTLE_NONE;

    for ch in castling_part.chars() {
        match ch {
            'K' => rights |= CASTLE_WHITE_KINGSIDE,
            'Q' => rights |= CASTLE_WHITE_QUEENSIDE,
            'k' => rights |= CASTLE_BLACK_KINGSIDE,
            'q' => rights |= CASTLE_BLACK_QUEENSIDE,
            _ => {}
        }
    }

    rights
}

/// `Some(None)` for "-", `Some(Some(sq))` for a square, `None` if unreadable.
fn parse_en_passant_square(en_passant_part: &str) -> Option<Option<Square>> {
    if en_passant_part == "-" {
        return Some(None);
    }

    algebraic_to_square(en_passant_part).ok().map(Some)
}

pub(crate) fn piece_from_fen_char(ch: char) -> Option<Piece> {
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else if ch.is_ascii_lowercase() {
        Color::Black
    } else {
        return None;
    };

    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some(Piece::new(kind, color))
}

#[cfg(test)]
mod tests {
    use super::parse_fen;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::*;
    use crate::utils::render_game_state::render_game_state;

    #[test]
    fn parse_starting_fen_and_render_board() {
        let game_state = parse_fen(STARTING_POSITION_FEN);

        println!("\n{}", render_game_state(&game_state));

        assert_eq!(game_state.side_to_move, Color::White);
        assert_eq!(game_state.fullmove_number, 1);
        assert_eq!(game_state.halfmove_clock, 0);
        assert_eq!(
            game_state.piece_at(0),
            Some(Piece::new(PieceKind::Rook, Color::Black))
        );
        assert_eq!(
            game_state.piece_at(60),
            Some(Piece::new(PieceKind::King, Color::White))
        );
        assert_eq!(game_state.castling_rights, 0b1111);
    }

    #[test]
    fn truncated_fen_keeps_defaults() {
        let game_state = parse_fen("4k3/8/8/8/8/8/8/4K3 b");
        assert_eq!(game_state.side_to_move, Color::Black);
        assert_eq!(game_state.castling_rights, CASTLE_NONE);
        assert_eq!(game_state.en_passant_square, None);
        assert_eq!(game_state.halfmove_clock, 0);
        assert_eq!(game_state.fullmove_number, 1);
        assert_eq!(game_state.king_square(Color::Black), Some(4));
    }

    #[test]
    fn placement_only_defaults_to_white() {
        let game_state = parse_fen("8/8/8/8/8/8/8/8");
        assert_eq!(game_state.side_to_move, Color::White);
        assert!(game_state.squares.iter().all(Option::is_none));
        assert_eq!(game_state.king_square(Color::White), None);
    }

    #[test]
    fn garbage_never_panics() {
        for text in ["", "   ", "xyz/9/////////////", "KKKKKKKKKK/8 x ZZ z9 q -4"] {
            let _ = parse_fen(text);
        }
    }

    #[test]
    fn unreadable_en_passant_stops_parsing() {
        let game_state = parse_fen("4k3/8/8/8/8/8/8/4K3 w - z9 12 40");
        assert_eq!(game_state.en_passant_square, None);
        assert_eq!(game_state.halfmove_clock, 0);
        assert_eq!(game_state.fullmove_number, 1);
    }

    #[test]
    fn en_passant_and_clocks_are_read() {
        let game_state =
            parse_fen("rnbqkbnr/pppp1ppp/8/8/4pP2/8/PPPPP1PP/RNBQKBNR b KQkq f3 0 3");
        assert_eq!(game_state.en_passant_square, Some(45));
        assert_eq!(game_state.fullmove_number, 3);
    }
}
