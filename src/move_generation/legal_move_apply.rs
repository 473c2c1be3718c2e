//! Move application.
//!
//! `relocate_pieces` performs only the placement side of a move (captures,
//! en-passant removal, castling rook, promotion, king cache) and is shared by
//! the legality trial. `apply_move` is the full commit: clocks, rights,
//! en-passant window, turn, threat map and repetition counter.

use log::debug;

use crate::game_state::{chess_types::*, game_state::GameState};

/// What a committed move did besides relocating the mover.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveEffects {
    pub captured: Option<Piece>,
    pub en_passant: bool,
    pub castled: bool,
    pub promoted: bool,
}

impl MoveEffects {
    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}

/// Apply the placement changes of `from -> to` without touching any flags.
pub fn relocate_pieces(game_state: &mut GameState, from: Square, to: Square) -> MoveEffects {
    let Some(piece) = game_state.piece_at(from) else {
        return MoveEffects::default();
    };

    let mut effects = MoveEffects {
        captured: game_state.piece_at(to).filter(|p| p.color != piece.color),
        ..MoveEffects::default()
    };

    // En passant: the captured pawn sits beside the mover, behind the target.
    if piece.kind == PieceKind::Pawn && game_state.en_passant_square == Some(to) {
        let victim_square = match piece.color {
            Color::White => to + 8,
            Color::Black => to - 8,
        };
        let victim = game_state.piece_at(victim_square);
        if victim.is_some_and(|p| p.kind == PieceKind::Pawn && p.color != piece.color) {
            game_state.set_piece(victim_square, None);
            effects.captured = victim;
            effects.en_passant = true;
        }
    }

    // Castling: the king moves two files, the rook jumps next to it.
    if piece.kind == PieceKind::King && row_of(from) == row_of(to) {
        let row = row_of(from);
        let file_delta = i16::from(file_of(to)) - i16::from(file_of(from));
        let rook_move = match file_delta {
            2 => Some((square_at(row, 7), to - 1)),
            -2 => Some((square_at(row, 0), to + 1)),
            _ => None,
        };
        if let Some((rook_from, rook_to)) = rook_move {
            let rook = game_state.piece_at(rook_from);
            game_state.set_piece(rook_from, None);
            game_state.set_piece(rook_to, rook);
            effects.castled = true;
        }
    }

    game_state.set_piece(from, None);

    // Promotion is always to a queen.
    if piece.kind == PieceKind::Pawn && row_of(to) == piece.color.promotion_row() {
        game_state.set_piece(to, Some(Piece::new(PieceKind::Queen, piece.color)));
        effects.promoted = true;
    } else {
        game_state.set_piece(to, Some(piece));
    }

    effects
}

/// Commit `from -> to` to `game_state`.
///
/// The move is trusted to be legal; no legality check happens here.
pub fn apply_move(game_state: &mut GameState, from: Square, to: Square) -> MoveEffects {
    let Some(piece) = game_state.piece_at(from) else {
        debug!("apply_move: no piece on square {from}, ignoring");
        return MoveEffects::default();
    };
    let moving_color = piece.color;

    // Update clocks.
    let is_capture = game_state.piece_at(to).is_some_and(|p| p.color != moving_color);
    if piece.kind == PieceKind::Pawn || is_capture {
        game_state.halfmove_clock = 0;
    } else {
        game_state.halfmove_clock = game_state.halfmove_clock.saturating_add(1);
    }

    update_castling_rights(game_state, piece, from, to);

    // Placement first: en-passant capture reads the old target.
    let effects = relocate_pieces(game_state, from, to);

    // Update en-passant square.
    let is_double_push =
        piece.kind == PieceKind::Pawn && row_of(from).abs_diff(row_of(to)) == 2;
    game_state.en_passant_square = if is_double_push {
        Some((from + to) / 2)
    } else {
        None
    };

    if moving_color == Color::Black {
        game_state.fullmove_number = game_state.fullmove_number.saturating_add(1);
    }

    game_state.side_to_move = moving_color.opposite();
    game_state.refresh_threats();
    game_state.record_position();

    effects
}

/// Castling right tied to a rook's home corner.
#[inline]
const fn corner_right(square: Square) -> CastlingRights {
    match square {
        0 => CASTLE_BLACK_QUEENSIDE,
        7 => CASTLE_BLACK_KINGSIDE,
        56 => CASTLE_WHITE_QUEENSIDE,
        63 => CASTLE_WHITE_KINGSIDE,
        _ => CASTLE_NONE,
    }
}

fn update_castling_rights(game_state: &mut GameState, piece: Piece, from: Square, to: Square) {
    if piece.kind == PieceKind::King {
        game_state.castling_rights &= !(kingside_right(piece.color) | queenside_right(piece.color));
    }

    if piece.kind == PieceKind::Rook {
        game_state.castling_rights &= !corner_right(from);
    }

    // Capturing a rook on its corner also removes the owner's right.
    game_state.castling_rights &= !corner_right(to);
}
