//! Core board types.
//!
//! This module contains the fundamental types used throughout the engine:
//! - `Piece` and `Color` - piece types and the four players
//! - `Square` - compact square on the 14x14 cross-shaped board
//! - `Move` and `MoveList` - move representation

mod moves;
mod piece;
mod square;

pub use moves::{Move, MoveList};
pub use piece::{Color, Piece};
pub use square::{is_playable, Square, BOARD_SIZE, NUM_SQUARES};

pub(crate) use moves::{EMPTY_MOVE, MAX_MOVES};
