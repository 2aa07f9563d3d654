//! Property-based tests using proptest.

use crate::board::{Board, Color, Move, Square, UnmakeInfo};
use proptest::prelude::*;
use rand::prelude::*;
use rand::Rng;

/// Strategy to generate a random move sequence length
fn move_count_strategy() -> impl Strategy<Value = usize> {
    1..=40usize
}

/// Strategy to generate a random seed for move selection
fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

fn play_random(board: &mut Board, rng: &mut StdRng) -> Option<(Move, UnmakeInfo)> {
    let moves = board.generate_moves();
    if moves.is_empty() {
        return None;
    }
    let mv = moves[rng.gen_range(0..moves.len())];
    let info = board.make_move(mv);
    Some((mv, info))
}

proptest! {
    /// Property: make_move followed by unmake_move restores board state exactly
    #[test]
    fn prop_make_unmake_restores_state(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut board = Board::new();
        let mut rng = StdRng::seed_from_u64(seed);

        let initial_hash = board.hash();
        let initial_squares: Vec<_> = Square::all().map(|s| board.piece_at(s)).collect();

        let mut history: Vec<(Move, UnmakeInfo)> = Vec::new();
        for _ in 0..num_moves {
            match play_random(&mut board, &mut rng) {
                Some(entry) => history.push(entry),
                None => break,
            }
        }

        while let Some((mv, info)) = history.pop() {
            board.unmake_move(mv, info);
        }

        prop_assert_eq!(board.hash(), initial_hash);
        prop_assert_eq!(board.side_to_move(), Color::Red);
        prop_assert_eq!(board.game_ply(), 0);
        for color in Color::ALL {
            prop_assert!(!board.is_eliminated(color));
        }
        let squares: Vec<_> = Square::all().map(|s| board.piece_at(s)).collect();
        prop_assert_eq!(squares, initial_squares);
    }

    /// Property: hash is always consistent with recomputed hash
    #[test]
    fn prop_hash_consistency(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut board = Board::new();
        let mut rng = StdRng::seed_from_u64(seed);

        for _ in 0..num_moves {
            if play_random(&mut board, &mut rng).is_none() {
                break;
            }
            prop_assert_eq!(board.hash(), board.calculate_hash());
        }
    }

    /// Property: piece counts always match the squares
    #[test]
    fn prop_piece_counts_match_board(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut board = Board::new();
        let mut rng = StdRng::seed_from_u64(seed);

        for _ in 0..num_moves {
            if play_random(&mut board, &mut rng).is_none() {
                break;
            }
        }

        let mut counted = [[0u32; 6]; 4];
        for sq in Square::all() {
            if let Some((color, piece)) = board.piece_at(sq) {
                counted[color.index()][piece.index()] += 1;
            }
        }
        prop_assert_eq!(counted, board.piece_counts);
    }
}
