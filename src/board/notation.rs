//! Human-readable move notation.
//!
//! Four-player games are usually recorded in long algebraic form since
//! short algebraic disambiguation gets awkward with four armies on the
//! board. Examples: "h2-h4", "Nj1-i3", "Qg1xk5", "f7-f8=Q", "Bf4xh6#"
//! (a trailing `#` marks a king capture).
//!
//! # Examples
//! ```
//! use paranoid_chess::board::Board;
//!
//! let board = Board::new();
//! let mv = board.parse_move("h2h4").unwrap();
//! assert_eq!(board.move_to_text(mv), "h2-h4");
//! ```

use super::error::MoveParseError;
use super::{Board, Move, Piece, Square};

impl Board {
    /// Format a move in long algebraic notation.
    ///
    /// Must be called before the move is made.
    #[must_use]
    pub fn move_to_text(&self, mv: Move) -> String {
        let mut text = String::new();

        if let Some(piece) = self.piece_on(mv.from()) {
            if piece != Piece::Pawn {
                text.push(piece.to_char().to_ascii_uppercase());
            }
        }

        text.push_str(&mv.from().to_string());
        text.push(if mv.is_capture() { 'x' } else { '-' });
        text.push_str(&mv.to().to_string());

        if mv.is_promotion() {
            text.push_str("=Q");
        }

        if self.piece_on(mv.to()) == Some(Piece::King) {
            text.push('#');
        }

        text
    }

    /// Parse a move in coordinate or long algebraic notation and match it
    /// against the moves available in this position.
    ///
    /// Accepts forms like "h2h4", "h2-h4", "Nj1-i3", "g1xk5", "f7f8q".
    ///
    /// # Errors
    /// Returns `MoveParseError` if the text cannot be split into two
    /// squares, a square is invalid, or the move is not available.
    pub fn parse_move(&self, text: &str) -> Result<Move, MoveParseError> {
        let notation = text.trim();
        let invalid = || MoveParseError::InvalidFormat {
            notation: notation.to_string(),
        };

        let body = notation
            .strip_prefix(|c: char| c.is_ascii_uppercase())
            .unwrap_or(notation)
            .trim_end_matches(['#', '+'])
            .trim_end_matches("=Q")
            .trim_end_matches(['q', 'Q']);

        let (from_str, rest) = split_square(body).ok_or_else(invalid)?;
        let rest = rest.trim_start_matches(['-', 'x']);
        let (to_str, tail) = split_square(rest).ok_or_else(invalid)?;
        if !tail.is_empty() {
            return Err(invalid());
        }

        let parse_square = |s: &str| {
            s.parse::<Square>()
                .map_err(|source| MoveParseError::InvalidSquare {
                    notation: notation.to_string(),
                    source,
                })
        };
        let from = parse_square(from_str)?;
        let to = parse_square(to_str)?;

        self.generate_moves()
            .iter()
            .copied()
            .find(|m| m.from() == from && m.to() == to)
            .ok_or_else(|| MoveParseError::IllegalMove {
                notation: notation.to_string(),
            })
    }
}

/// Split a leading square ("k11") off a string, returning it and the rest.
fn split_square(s: &str) -> Option<(&str, &str)> {
    let mut chars = s.char_indices();
    let (_, file) = chars.next()?;
    if !file.is_ascii_lowercase() {
        return None;
    }
    let end = s[1..]
        .find(|c: char| !c.is_ascii_digit())
        .map_or(s.len(), |i| i + 1);
    if end == 1 {
        return None;
    }
    Some((&s[..end], &s[end..]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{BoardBuilder, Color};

    fn sq(s: &str) -> Square {
        s.parse().expect("valid square")
    }

    #[test]
    fn test_knight_move_text() {
        let board = Board::new();
        let mv = board.parse_move("j1-i3").expect("legal");
        assert_eq!(board.move_to_text(mv), "Nj1-i3");
    }

    #[test]
    fn test_parse_accepts_piece_prefix() {
        let board = Board::new();
        let plain = board.parse_move("e1f3").expect("legal");
        let prefixed = board.parse_move("Ne1-f3").expect("legal");
        assert_eq!(plain, prefixed);
    }

    #[test]
    fn test_king_capture_marked() {
        let board = BoardBuilder::new()
            .piece(sq("h1"), Color::Red, Piece::King)
            .piece(sq("h5"), Color::Red, Piece::Rook)
            .piece(sq("h9"), Color::Yellow, Piece::King)
            .eliminated(Color::Blue)
            .eliminated(Color::Green)
            .build()
            .expect("valid");

        let mv = board.parse_move("h5xh9").expect("legal");
        assert_eq!(board.move_to_text(mv), "Rh5xh9#");
    }

    #[test]
    fn test_parse_errors() {
        let board = Board::new();
        assert!(matches!(
            board.parse_move("zz"),
            Err(MoveParseError::InvalidFormat { .. })
        ));
        assert!(matches!(
            board.parse_move("a1a2"),
            Err(MoveParseError::InvalidSquare { .. })
        ));
        assert!(matches!(
            board.parse_move("h2h5"),
            Err(MoveParseError::IllegalMove { .. })
        ));
    }
}
