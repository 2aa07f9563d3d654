//! Piece and color types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Chess piece types.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Piece {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl Piece {
    /// All piece types in index order
    pub const ALL: [Piece; 6] = [
        Piece::Pawn,
        Piece::Knight,
        Piece::Bishop,
        Piece::Rook,
        Piece::Queen,
        Piece::King,
    ];

    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            Piece::Pawn => 0,
            Piece::Knight => 1,
            Piece::Bishop => 2,
            Piece::Rook => 3,
            Piece::Queen => 4,
            Piece::King => 5,
        }
    }

    /// Parse a piece from a character (p, n, b, r, q, k), case-insensitive
    #[must_use]
    pub fn from_char(c: char) -> Option<Piece> {
        match c.to_ascii_lowercase() {
            'p' => Some(Piece::Pawn),
            'n' => Some(Piece::Knight),
            'b' => Some(Piece::Bishop),
            'r' => Some(Piece::Rook),
            'q' => Some(Piece::Queen),
            'k' => Some(Piece::King),
            _ => None,
        }
    }

    /// Convert piece to lowercase character
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Piece::Pawn => 'p',
            Piece::Knight => 'n',
            Piece::Bishop => 'b',
            Piece::Rook => 'r',
            Piece::Queen => 'q',
            Piece::King => 'k',
        }
    }

    /// Returns true if this piece slides along diagonals (Bishop, Queen)
    #[inline]
    #[must_use]
    pub const fn attacks_diagonally(self) -> bool {
        matches!(self, Piece::Bishop | Piece::Queen)
    }

    /// Returns true if this piece slides along ranks/files (Rook, Queen)
    #[inline]
    #[must_use]
    pub const fn attacks_straight(self) -> bool {
        matches!(self, Piece::Rook | Piece::Queen)
    }
}

/// The four players, in turn order.
///
/// Red sits on the south edge, Blue on the west, Yellow on the north and
/// Green on the east. Play passes clockwise.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    Red,
    Blue,
    Yellow,
    Green,
}

impl Color {
    /// All colors in turn order (Red=0 .. Green=3)
    pub const ALL: [Color; 4] = [Color::Red, Color::Blue, Color::Yellow, Color::Green];

    pub const COUNT: usize = 4;

    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Color::Red => 0,
            Color::Blue => 1,
            Color::Yellow => 2,
            Color::Green => 3,
        }
    }

    #[inline]
    #[must_use]
    pub const fn from_index(idx: usize) -> Color {
        match idx % 4 {
            0 => Color::Red,
            1 => Color::Blue,
            2 => Color::Yellow,
            _ => Color::Green,
        }
    }

    /// The color that moves after this one, ignoring eliminations
    #[inline]
    #[must_use]
    pub const fn next(self) -> Color {
        Color::from_index(self.index() + 1)
    }

    /// Pawn forward direction as (file delta, rank delta)
    #[inline]
    #[must_use]
    pub(crate) const fn pawn_direction(self) -> (i32, i32) {
        match self {
            Color::Red => (0, 1),
            Color::Blue => (1, 0),
            Color::Yellow => (0, -1),
            Color::Green => (-1, 0),
        }
    }

    /// Coordinate along the pawn's axis of travel (rank for Red/Yellow, file for Blue/Green)
    #[inline]
    #[must_use]
    pub(crate) const fn pawn_axis(self, file: usize, rank: usize) -> usize {
        match self {
            Color::Red | Color::Yellow => rank,
            Color::Blue | Color::Green => file,
        }
    }

    /// Line the pawns start on, measured along the pawn axis
    #[inline]
    #[must_use]
    pub(crate) const fn pawn_start_line(self) -> usize {
        match self {
            Color::Red | Color::Blue => 1,
            Color::Yellow | Color::Green => 12,
        }
    }

    /// Line on which pawns promote (the color's 8th rank)
    #[inline]
    #[must_use]
    pub(crate) const fn pawn_promotion_line(self) -> usize {
        match self {
            Color::Red | Color::Blue => 7,
            Color::Yellow | Color::Green => 6,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Red => write!(f, "Red"),
            Color::Blue => write!(f, "Blue"),
            Color::Yellow => write!(f, "Yellow"),
            Color::Green => write!(f, "Green"),
        }
    }
}
