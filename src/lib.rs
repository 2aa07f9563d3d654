//! Paranoid alpha-beta search for four-player chess.
//!
//! The search is generic over the [`Position`] trait; [`Board`] is the
//! bundled four-player implementation.
//!
//! # Example
//! ```
//! use paranoid_chess::{Board, RandomSearch, Search};
//!
//! let search = RandomSearch::new(Board::new(), 42);
//! let eval = search.position_evaluation().expect("start position has moves");
//! assert_eq!(eval.principal_variation.len(), 1);
//! ```

pub mod board;
pub mod position;
pub mod search;
pub mod sync;
pub mod tt;
mod zobrist;

pub use board::{Board, BoardBuilder, Color, Move, Piece, Square};
pub use position::Position;
pub use search::{
    ParanoidSearch, PositionEvaluation, RandomSearch, Search, SearchConfig, SearchStatus,
};
pub use sync::StopFlag;
pub use tt::{NodeType, TranspositionTable};
