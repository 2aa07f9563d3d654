//! Fluent builder for constructing four-player positions.
//!
//! # Example
//! ```
//! use paranoid_chess::board::{BoardBuilder, Color, Piece, Square};
//!
//! let sq = |s: &str| s.parse::<Square>().unwrap();
//! let board = BoardBuilder::new()
//!     .piece(sq("h1"), Color::Red, Piece::King)
//!     .piece(sq("a7"), Color::Blue, Piece::King)
//!     .piece(sq("h2"), Color::Red, Piece::Pawn)
//!     .eliminated(Color::Yellow)
//!     .eliminated(Color::Green)
//!     .side_to_move(Color::Red)
//!     .build()
//!     .unwrap();
//! assert_eq!(board.generate_moves().len(), 6);
//! ```

use super::error::BuilderError;
use super::{Board, Color, Piece, Square};

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    pieces: Vec<(Square, Color, Piece)>,
    side_to_move: Color,
    eliminated: [bool; 4],
    halfmove_clock: u32,
    game_ply: u32,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            pieces: Vec::new(),
            side_to_move: Color::Red,
            eliminated: [false; 4],
            halfmove_clock: 0,
            game_ply: 0,
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let board = Board::new();
        let mut builder = Self::new();
        for sq in Square::all() {
            if let Some((color, piece)) = board.piece_at(sq) {
                builder.pieces.push((sq, color, piece));
            }
        }
        builder
    }

    /// Place a piece on the board, replacing whatever stood there.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, piece: Piece) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self.pieces.push((square, color, piece));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self
    }

    /// Set the side to move.
    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    /// Mark a color as already eliminated.
    #[must_use]
    pub const fn eliminated(mut self, color: Color) -> Self {
        self.eliminated[color.index()] = true;
        self
    }

    /// Set the quiet-move clock.
    #[must_use]
    pub const fn halfmove_clock(mut self, clock: u32) -> Self {
        self.halfmove_clock = clock;
        self
    }

    /// Set the game ply counter (used to age transposition entries).
    #[must_use]
    pub const fn game_ply(mut self, ply: u32) -> Self {
        self.game_ply = ply;
        self
    }

    /// Build the board.
    ///
    /// # Errors
    /// Returns a `BuilderError` if a color still in the game does not have
    /// exactly one king, or if the side to move is eliminated.
    pub fn build(self) -> Result<Board, BuilderError> {
        let mut board = Board::empty();

        for (square, color, piece) in self.pieces {
            board.set_piece(square, color, piece);
        }

        for color in Color::ALL {
            if self.eliminated[color.index()] {
                continue;
            }
            match board.count_pieces(color, Piece::King) {
                0 => {
                    return Err(BuilderError::MissingKing {
                        color: color.to_string(),
                    })
                }
                1 => {}
                _ => {
                    return Err(BuilderError::MultipleKings {
                        color: color.to_string(),
                    })
                }
            }
        }

        if self.eliminated[self.side_to_move.index()] {
            return Err(BuilderError::SideToMoveEliminated {
                color: self.side_to_move.to_string(),
            });
        }

        board.side_to_move = self.side_to_move;
        board.eliminated = self.eliminated;
        board.winner = board.sole_survivor();
        board.halfmove_clock = self.halfmove_clock;
        board.game_ply = self.game_ply;
        board.hash = board.calculate_hash();
        board.repetition_counts.set(board.hash, 1);

        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().expect("valid square")
    }

    #[test]
    fn test_starting_position() {
        let built = BoardBuilder::starting_position().build().expect("valid");
        let standard = Board::new();

        assert_eq!(built.hash(), standard.hash());
        for color in Color::ALL {
            for piece in Piece::ALL {
                assert_eq!(built.count_pieces(color, piece), standard.count_pieces(color, piece));
            }
        }
    }

    #[test]
    fn test_missing_king_rejected() {
        let result = BoardBuilder::new()
            .piece(sq("h1"), Color::Red, Piece::King)
            .eliminated(Color::Yellow)
            .eliminated(Color::Green)
            .build();

        assert_eq!(
            result.err(),
            Some(BuilderError::MissingKing {
                color: "Blue".to_string()
            })
        );
    }

    #[test]
    fn test_eliminated_side_to_move_rejected() {
        let result = BoardBuilder::new()
            .piece(sq("h1"), Color::Red, Piece::King)
            .piece(sq("a7"), Color::Blue, Piece::King)
            .eliminated(Color::Yellow)
            .eliminated(Color::Green)
            .side_to_move(Color::Green)
            .build();

        assert!(matches!(
            result,
            Err(BuilderError::SideToMoveEliminated { .. })
        ));
    }

    #[test]
    fn test_sole_survivor_is_winner() {
        let board = BoardBuilder::new()
            .piece(sq("h1"), Color::Red, Piece::King)
            .eliminated(Color::Blue)
            .eliminated(Color::Yellow)
            .eliminated(Color::Green)
            .build()
            .expect("valid");

        assert_eq!(board.winner(), Some(Color::Red));
        assert!(board.generate_moves().is_empty());
    }

    #[test]
    fn test_clear_square() {
        let board = BoardBuilder::starting_position()
            .clear(sq("d1"))
            .build()
            .expect("valid");

        assert!(board.piece_at(sq("d1")).is_none());
        assert!(board.piece_at(sq("e1")).is_some());
    }
}
