use crate::game_state::{chess_types::*, game_state::GameState};
use crate::utils::algebraic::square_to_algebraic;

pub fn generate_fen(game_state: &GameState) -> String {
    format!(
        "{} {} {}",
        generate_repetition_key(game_state),
        game_state.halfmove_clock,
        game_state.fullmove_number
    )
}

/// First four FEN fields: placement, side to move, castling, en passant.
///
/// Two positions repeat only when all four match.
pub fn generate_repetition_key(game_state: &GameState) -> String {
    let board = generate_board_field(game_state);
    let side_to_move = match game_state.side_to_move {
        Color::White => "w",
        Color::Black => "b",
    };
    let castling = generate_castling_field(game_state.castling_rights);
    let en_passant = generate_en_passant_field(game_state.en_passant_square);

    format!("{board} {side_to_move} {castling} {en_passant}")
}

fn generate_board_field(game_state: &GameState) -> String {
    let mut out = String::with_capacity(72);

    for row in 0..8u8 {
        let mut empty_count = 0u8;

        for file in 0..8u8 {
            match game_state.piece_at(square_at(row, file)) {
                Some(piece) => {
                    if empty_count > 0 {
                        out.push(char::from(b'0' + empty_count));
                        empty_count = 0;
                    }
                    out.push(piece_to_fen_char(piece));
                }
                None => empty_count += 1,
            }
        }

        // Runs never cross a rank boundary.
        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if row < 7 {
            out.push('/');
        }
    }

    out
}

pub(crate) fn piece_to_fen_char(piece: Piece) -> char {
    let base = match piece.kind {
        PieceKind::Pawn => 'p',
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        PieceKind::Queen => 'q',
        PieceKind::King => 'k',
    };

    match piece.color {
        Color::White => base.to_ascii_uppercase(),
        Color::Black => base,
    }
}

fn generate_castling_field(rights: CastlingRights) -> String {
    let mut out = String::new();

    if (rights & CASTLE_WHITE_KINGSIDE) != 0 {
        out.push('K');
    }
    if (rights & CASTLE_WHITE_QUEENSIDE) != 0 {
        out.push('Q');
    }
    if (rights & CASTLE_BLACK_KINGSIDE) != 0 {
        out.push('k');
    }
    if (rights & CASTLE_BLACK_QUEENSIDE) != 0 {
        out.push('q');
    }

    if out.is_empty() {
        out.push('-');
    }

    out
}

fn generate_en_passant_field(square: Option<Square>) -> String {
    square.map_or_else(|| "-".to_owned(), square_to_algebraic)
}

#[cfg(test)]
mod tests {
    use super::{generate_fen, generate_repetition_key};
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::{CASTLE_BLACK_KINGSIDE, CASTLE_BLACK_QUEENSIDE, Color};
    use crate::utils::fen_parser::parse_fen;

    #[test]
    fn round_trip_starting_position_fen() {
        let parsed = parse_fen(STARTING_POSITION_FEN);
        let generated = generate_fen(&parsed);

        assert_eq!(generated, STARTING_POSITION_FEN);

        let reparsed = parse_fen(&generated);
        assert_eq!(reparsed.squares, parsed.squares);
        assert_eq!(reparsed.side_to_move, parsed.side_to_move);
        assert_eq!(reparsed.castling_rights, parsed.castling_rights);
        assert_eq!(reparsed.en_passant_square, parsed.en_passant_square);
        assert_eq!(reparsed.halfmove_clock, parsed.halfmove_clock);
        assert_eq!(reparsed.fullmove_number, parsed.fullmove_number);
    }

    #[test]
    fn round_trip_custom_position_fen() {
        let fen = "r1bqk2r/pppp1ppp/2n2n2/2b1p3/2B1P3/2N2N2/PPPP1PPP/R1BQ1RK1 b kq - 4 6";
        let parsed = parse_fen(fen);
        let generated = generate_fen(&parsed);
        let reparsed = parse_fen(&generated);

        assert_eq!(generated, fen);
        assert_eq!(reparsed.squares, parsed.squares);
        assert_eq!(reparsed.side_to_move, Color::Black);
        assert_eq!(
            reparsed.castling_rights,
            CASTLE_BLACK_KINGSIDE | CASTLE_BLACK_QUEENSIDE
        );
        assert_eq!(reparsed.en_passant_square, None);
        assert_eq!(reparsed.halfmove_clock, 4);
        assert_eq!(reparsed.fullmove_number, 6);
    }

    #[test]
    fn en_passant_square_round_trips() {
        let fen = "rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3";
        assert_eq!(generate_fen(&parse_fen(fen)), fen);
    }

    #[test]
    fn repetition_key_ignores_clocks_only() {
        let a = parse_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1");
        let b = parse_fen("4k3/8/8/8/8/8/8/4K3 w - - 17 40");
        let c = parse_fen("4k3/8/8/8/8/8/8/4K3 b - - 0 1");
        assert_eq!(generate_repetition_key(&a), generate_repetition_key(&b));
        assert_ne!(generate_repetition_key(&a), generate_repetition_key(&c));
    }
}
