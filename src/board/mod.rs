//! Four-player chess board representation and game rules.
//!
//! A 14x14 board with the 3x3 corners removed. Red, Blue, Yellow and Green
//! move in that order; capturing a king eliminates its owner and the last
//! color standing wins.
//!
//! # Example
//! ```
//! use paranoid_chess::board::{Board, Color};
//!
//! let mut board = Board::new();
//! let moves = board.generate_moves();
//! println!("Starting position has {} moves", moves.len());
//!
//! let info = board.make_move(moves[0]);
//! assert_eq!(board.side_to_move(), Color::Blue);
//! board.unmake_move(moves[0], info);
//! ```

mod builder;
mod error;
mod make_unmake;
mod movegen;
mod notation;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use error::{BuilderError, MoveParseError, SquareError};
pub use state::{Board, UnmakeInfo};
pub use types::{is_playable, Color, Move, MoveList, Piece, Square, BOARD_SIZE, NUM_SQUARES};

pub(crate) use types::{EMPTY_MOVE, MAX_MOVES};
