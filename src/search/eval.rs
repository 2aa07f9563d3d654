//! Material evaluation from the paranoid point of view.

use crate::board::{Color, Piece};
use crate::position::Position;

/// Material value for a piece (in centipawns).
///
/// The king carries a small constant value: losing it ends the game for its
/// owner, which the search scores separately, but a lone king still counts
/// for something when weighing an elimination.
#[must_use]
pub const fn piece_value(piece: Piece) -> i32 {
    match piece {
        Piece::Pawn => 100,
        Piece::Knight => 300,
        Piece::Bishop => 400,
        Piece::Rook => 500,
        Piece::Queen => 1000,
        Piece::King => 300,
    }
}

fn material<P: Position>(position: &P, color: Color) -> i32 {
    if position.is_eliminated(color) {
        return 0;
    }
    Piece::ALL
        .iter()
        .map(|&piece| position.count_pieces(color, piece) as i32 * piece_value(piece))
        .sum()
}

/// Static evaluation for `color`: its own material minus the pooled
/// material of every other color still in the game.
#[must_use]
pub fn evaluate<P: Position>(position: &P, color: Color) -> i32 {
    Color::ALL.iter().fold(0, |score, &other| {
        if other == color {
            score + material(position, other)
        } else {
            score - material(position, other)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Board, BoardBuilder, Square};

    fn sq(s: &str) -> Square {
        s.parse().expect("valid square")
    }

    #[test]
    fn test_starting_position_is_paranoid() {
        // 8 pawns, 2 knights, 2 bishops, 2 rooks, queen, king = 4500 per color
        let board = Board::new();
        for color in Color::ALL {
            assert_eq!(evaluate(&board, color), 4500 - 3 * 4500);
        }
    }

    #[test]
    fn test_eliminated_colors_contribute_nothing() {
        let board = BoardBuilder::new()
            .piece(sq("h1"), Color::Red, Piece::King)
            .piece(sq("h2"), Color::Red, Piece::Queen)
            .piece(sq("a7"), Color::Blue, Piece::King)
            .piece(sq("b7"), Color::Yellow, Piece::Rook)
            .eliminated(Color::Yellow)
            .eliminated(Color::Green)
            .build()
            .expect("valid");

        assert_eq!(evaluate(&board, Color::Red), 1300 - 300);
        assert_eq!(evaluate(&board, Color::Blue), 300 - 1300);
        // An eliminated color's own pieces do not count either
        assert_eq!(evaluate(&board, Color::Yellow), -1300 - 300);
    }
}
