//! Exhaustive legal-move tree counting (perft).
//!
//! A correctness oracle for move generation, not part of play. Every
//! counter walks the tree through `ChessGame::commit` / `revert`, so it
//! also exercises the snapshot history.

use crate::chess_game::ChessGame;
use crate::game_state::chess_types::Square;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub en_passant: u64,
    pub castles: u64,
    pub promotions: u64,
    pub checks: u64,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
    }
}

/// Number of leaf positions `depth` plies below the current position.
pub fn node_count(game: &mut ChessGame, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = game.legal_moves();
    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0u64;
    for (from, to) in moves {
        game.commit(from, to);
        nodes += node_count(game, depth - 1);
        game.revert();
    }
    nodes
}

/// Node count below each root move, in square order.
pub fn perft_divide(game: &mut ChessGame, depth: u8) -> Vec<(Square, Square, u64)> {
    if depth == 0 {
        return Vec::new();
    }

    let moves = game.legal_moves();
    let mut divided = Vec::with_capacity(moves.len());
    for (from, to) in moves {
        game.commit(from, to);
        divided.push((from, to, node_count(game, depth - 1)));
        game.revert();
    }
    divided
}

/// Node count plus a classification of the moves leading to the leaves.
pub fn perft_detailed(game: &mut ChessGame, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    for (from, to) in game.legal_moves() {
        let effects = game.commit(from, to);

        if depth == 1 {
            total.nodes += 1;
            if effects.is_capture() {
                total.captures += 1;
            }
            if effects.en_passant {
                total.en_passant += 1;
            }
            if effects.castled {
                total.castles += 1;
            }
            if effects.promoted {
                total.promotions += 1;
            }
            if game.in_check() {
                total.checks += 1;
            }
        } else {
            total.merge(perft_detailed(game, depth - 1));
        }

        game.revert();
    }

    total
}

#[cfg(test)]
mod tests {
    use super::{node_count, perft_detailed, perft_divide, PerftCounts};
    use crate::chess_game::ChessGame;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;

    const KIWIPETE_FEN: &str =
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
    const ROOK_ENDGAME_FEN: &str = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1";

    #[test]
    fn perft_depth_zero_counts_single_node() {
        let mut game = ChessGame::new();
        assert_eq!(node_count(&mut game, 0), 1);
        assert_eq!(
            perft_detailed(&mut game, 0),
            PerftCounts {
                nodes: 1,
                ..PerftCounts::default()
            }
        );
    }

    #[test]
    fn start_position_node_counts() {
        let mut game = ChessGame::new();
        for (depth, expected) in [(1, 20), (2, 400), (3, 8_902), (4, 197_281)] {
            assert_eq!(node_count(&mut game, depth), expected, "depth {depth}");
        }
        assert_eq!(game.history_len(), 1);
        assert_eq!(game.to_fen(), STARTING_POSITION_FEN);
    }

    #[test]
    fn start_position_depth_three_details() {
        let mut game = ChessGame::new();
        assert_eq!(
            perft_detailed(&mut game, 3),
            PerftCounts {
                nodes: 8_902,
                captures: 34,
                en_passant: 0,
                castles: 0,
                promotions: 0,
                checks: 12,
            }
        );
    }

    #[test]
    fn kiwipete_node_counts() {
        let mut game = ChessGame::from_fen(KIWIPETE_FEN);
        for (depth, expected) in [(1, 48), (2, 2_039), (3, 97_862)] {
            assert_eq!(node_count(&mut game, depth), expected, "depth {depth}");
        }
    }

    #[test]
    fn kiwipete_depth_two_details() {
        let mut game = ChessGame::from_fen(KIWIPETE_FEN);
        assert_eq!(
            perft_detailed(&mut game, 2),
            PerftCounts {
                nodes: 2_039,
                captures: 351,
                en_passant: 1,
                castles: 91,
                promotions: 0,
                checks: 3,
            }
        );
    }

    #[test]
    fn rook_endgame_node_counts() {
        let mut game = ChessGame::from_fen(ROOK_ENDGAME_FEN);
        for (depth, expected) in [(1, 14), (2, 191), (3, 2_812), (4, 43_238)] {
            assert_eq!(node_count(&mut game, depth), expected, "depth {depth}");
        }
    }

    #[test]
    fn divide_sums_to_node_count() {
        let mut game = ChessGame::new();
        let divided = perft_divide(&mut game, 2);
        assert_eq!(divided.len(), 20);
        assert!(divided.iter().all(|&(_, _, nodes)| nodes == 20));
        assert_eq!(divided.iter().map(|&(_, _, n)| n).sum::<u64>(), 400);
    }
}
