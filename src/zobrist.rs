//! Zobrist hashing for four-player positions.
//!
//! Provides incrementally-updatable 64-bit position hashes for transposition tables.

use once_cell::sync::Lazy;
use rand::prelude::*;

use crate::board::{Color, Piece, Square, NUM_SQUARES};

pub(crate) struct ZobristKeys {
    // piece_keys[piece_type][color][square_index]
    pub(crate) piece_keys: [[[u64; NUM_SQUARES]; 4]; 6],
    // side_to_move_keys[color]
    pub(crate) side_to_move_keys: [u64; 4],
    // eliminated_keys[color]
    pub(crate) eliminated_keys: [u64; 4],
}

impl ZobristKeys {
    fn new() -> Self {
        let mut rng = StdRng::seed_from_u64(0x0004_C4E5_5000_0001); // fixed seed: hashes are reproducible across runs
        let mut piece_keys = [[[0; NUM_SQUARES]; 4]; 6];
        let mut side_to_move_keys = [0; 4];
        let mut eliminated_keys = [0; 4];

        for piece in &mut piece_keys {
            for color in piece.iter_mut() {
                for key in color.iter_mut() {
                    *key = rng.gen();
                }
            }
        }

        for key in &mut side_to_move_keys {
            *key = rng.gen();
        }

        for key in &mut eliminated_keys {
            *key = rng.gen();
        }

        ZobristKeys {
            piece_keys,
            side_to_move_keys,
            eliminated_keys,
        }
    }

    #[inline]
    pub(crate) fn piece(&self, color: Color, piece: Piece, sq: Square) -> u64 {
        self.piece_keys[piece.index()][color.index()][sq.index()]
    }

    #[inline]
    pub(crate) fn side_to_move(&self, color: Color) -> u64 {
        self.side_to_move_keys[color.index()]
    }

    #[inline]
    pub(crate) fn eliminated(&self, color: Color) -> u64 {
        self.eliminated_keys[color.index()]
    }
}

// Initialize Zobrist keys lazily and globally
pub(crate) static ZOBRIST: Lazy<ZobristKeys> = Lazy::new(ZobristKeys::new);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_are_distinct() {
        let sq = Square::new(5, 5).expect("playable");
        let red = ZOBRIST.piece(Color::Red, Piece::Queen, sq);
        let blue = ZOBRIST.piece(Color::Blue, Piece::Queen, sq);
        assert_ne!(red, blue);
        assert_ne!(ZOBRIST.side_to_move(Color::Red), ZOBRIST.side_to_move(Color::Green));
    }
}
