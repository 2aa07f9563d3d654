//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `movegen.rs` - Move generation on the cross-shaped board
//! - `make_unmake.rs` - Make/unmake correctness, elimination and draws
//! - `proptest.rs` - Property-based tests

mod proptest;

use crate::board::{Board, Move, Square};

pub(super) fn sq(s: &str) -> Square {
    s.parse().expect("valid square")
}

pub(super) fn find_move(board: &Board, from: &str, to: &str) -> Move {
    let (from, to) = (sq(from), sq(to));
    for m in board.generate_moves().iter() {
        if m.from() == from && m.to() == to {
            return *m;
        }
    }
    panic!("Expected move {from}-{to} not found");
}
