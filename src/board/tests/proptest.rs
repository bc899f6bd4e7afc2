//! Property-based tests using proptest.

use crate::board::{Board, Move, UnmakeInfo};
use proptest::prelude::*;

/// Strategy to generate a random legal move sequence length
fn move_count_strategy() -> impl Strategy<Value = usize> {
    1..=30usize
}

/// Strategy to generate a random seed for move selection
fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

proptest! {
    /// Property: make_move followed by unmake_move restores board state exactly
    #[test]
    fn prop_make_unmake_restores_state(seed in seed_strategy(), num_moves in move_count_strategy()) {
        use rand::prelude::*;

        let mut board = Board::new();
        let mut rng = StdRng::seed_from_u64(seed);

        let initial_fen = board.to_fen();
        let initial_log_len = board.repetition_log.len();

        let mut history: Vec<(Move, UnmakeInfo)> = Vec::new();

        for _ in 0..num_moves {
            let moves = board.generate_moves();
            if moves.is_empty() {
                break;
            }
            let idx = rng.gen_range(0..moves.len());
            let mv = moves.as_slice()[idx];
            let info = board.make_move(mv);
            history.push((mv, info));
        }

        while let Some((mv, info)) = history.pop() {
            board.unmake_move(mv, info);
        }

        prop_assert_eq!(board.to_fen(), initial_fen);
        prop_assert_eq!(board.repetition_log.len(), initial_log_len);
    }

    /// Property: the last fingerprint in the log always matches the position
    #[test]
    fn prop_fingerprint_log_tracks_position(seed in seed_strategy(), num_moves in move_count_strategy()) {
        use rand::prelude::*;

        let mut board = Board::new();
        let mut rng = StdRng::seed_from_u64(seed);

        for _ in 0..num_moves {
            let moves = board.generate_moves();
            if moves.is_empty() {
                break;
            }
            let idx = rng.gen_range(0..moves.len());
            board.make_move(moves.as_slice()[idx]);

            let current = board.fingerprint();
            prop_assert_eq!(board.repetition_log.last(), Some(&current));
        }
    }

    /// Property: FEN round-trip preserves position
    #[test]
    fn prop_fen_roundtrip(seed in seed_strategy(), num_moves in move_count_strategy()) {
        use rand::prelude::*;

        let mut board = Board::new();
        let mut rng = StdRng::seed_from_u64(seed);

        for _ in 0..num_moves {
            let moves = board.generate_moves();
            if moves.is_empty() {
                break;
            }
            let idx = rng.gen_range(0..moves.len());
            board.make_move(moves.as_slice()[idx]);
        }

        let fen = board.to_fen();
        let restored = Board::from_fen(&fen);

        prop_assert_eq!(board.fingerprint(), restored.fingerprint());
        prop_assert_eq!(board.white_to_move(), restored.white_to_move());
        prop_assert_eq!(board.castling_rights, restored.castling_rights);
        prop_assert_eq!(board.en_passant_target, restored.en_passant_target);
        prop_assert_eq!(board.halfmove_clock(), restored.halfmove_clock());
        prop_assert_eq!(board.fullmove_number(), restored.fullmove_number());
    }

    /// Property: legal moves never leave the mover's king in check
    #[test]
    fn prop_legal_moves_are_legal(seed in seed_strategy()) {
        use rand::prelude::*;

        let mut board = Board::new();
        let mut rng = StdRng::seed_from_u64(seed);

        for _ in 0..10 {
            let moves = board.generate_moves();
            if moves.is_empty() {
                break;
            }

            let mover = board.side_to_move();
            for mv in moves.iter() {
                let info = board.make_move(*mv);
                prop_assert!(!board.is_in_check(mover),
                    "Legal move left king in check: {:?}", mv);
                board.unmake_move(*mv, info);
            }

            let idx = rng.gen_range(0..moves.len());
            board.make_move(moves.as_slice()[idx]);
        }
    }

    /// Property: SAN strings of the legal moves in a position are distinct
    #[test]
    fn prop_san_is_unambiguous(seed in seed_strategy(), num_moves in 0..15usize) {
        use rand::prelude::*;
        use std::collections::HashSet;

        let mut board = Board::new();
        let mut rng = StdRng::seed_from_u64(seed);

        for _ in 0..num_moves {
            let moves = board.generate_moves();
            if moves.is_empty() {
                break;
            }
            let idx = rng.gen_range(0..moves.len());
            board.make_move(moves.as_slice()[idx]);
        }

        let moves = board.generate_moves();
        let mut seen = HashSet::new();
        for mv in moves.iter() {
            let san = board.move_to_san(*mv);
            prop_assert!(seen.insert(san.clone()),
                "Duplicate SAN {} in position {}", san, board.to_fen());
        }
    }

    /// Property: evaluation is bounded by material on the board
    #[test]
    fn prop_eval_bounded(seed in seed_strategy(), num_moves in 0..30usize) {
        use rand::prelude::*;

        let mut board = Board::new();
        let mut rng = StdRng::seed_from_u64(seed);

        for _ in 0..num_moves {
            let moves = board.generate_moves();
            if moves.is_empty() {
                break;
            }
            let idx = rng.gen_range(0..moves.len());
            board.make_move(moves.as_slice()[idx]);
        }

        let eval = board.evaluate();
        prop_assert!(eval.abs() < 10_000,
            "Evaluation {} is unreasonably large", eval);
    }

    /// Property: evaluation negates when only the side to move flips
    #[test]
    fn prop_eval_antisymmetric(seed in seed_strategy(), num_moves in 0..20usize) {
        use rand::prelude::*;

        let mut board = Board::new();
        let mut rng = StdRng::seed_from_u64(seed);

        for _ in 0..num_moves {
            let moves = board.generate_moves();
            if moves.is_empty() {
                break;
            }
            let idx = rng.gen_range(0..moves.len());
            board.make_move(moves.as_slice()[idx]);
        }

        let mut flipped = board.clone();
        flipped.white_to_move = !flipped.white_to_move;
        prop_assert_eq!(board.evaluate(), -flipped.evaluate());
    }
}
