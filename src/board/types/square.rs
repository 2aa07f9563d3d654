//! Square types and utilities.
//!
//! The four-player board is a 14x14 grid with the 3x3 block in every corner
//! removed, leaving 160 playable squares. Files run `a`..`n`, ranks `1`..`14`.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// Width and height of the board grid
pub const BOARD_SIZE: usize = 14;

/// Number of grid cells, including the removed corners
pub const NUM_SQUARES: usize = BOARD_SIZE * BOARD_SIZE;

/// Width of each removed corner block
const CORNER: usize = 3;

/// A square on the board, stored as `rank * 14 + file`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(u8);

/// Returns true if (rank, file) lies on the cross-shaped playing area
#[inline]
#[must_use]
pub const fn is_playable(rank: usize, file: usize) -> bool {
    if rank >= BOARD_SIZE || file >= BOARD_SIZE {
        return false;
    }
    let rank_edge = rank < CORNER || rank >= BOARD_SIZE - CORNER;
    let file_edge = file < CORNER || file >= BOARD_SIZE - CORNER;
    !(rank_edge && file_edge)
}

impl Square {
    /// Create a new square, returning `None` off the board or inside a corner
    #[must_use]
    pub fn new(rank: usize, file: usize) -> Option<Self> {
        if is_playable(rank, file) {
            Some(Square((rank * BOARD_SIZE + file) as u8))
        } else {
            None
        }
    }

    /// Create a square from a raw grid index without validation.
    ///
    /// Used by move decoding and by synthetic positions that only need
    /// distinct move encodings.
    #[inline]
    #[must_use]
    pub const fn from_index(idx: usize) -> Self {
        Square(idx as u8)
    }

    /// Grid index (0-195)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Get the rank (0-13, where 0 = rank 1)
    #[inline]
    #[must_use]
    pub const fn rank(self) -> usize {
        self.0 as usize / BOARD_SIZE
    }

    /// Get the file (0-13, where 0 = file a)
    #[inline]
    #[must_use]
    pub const fn file(self) -> usize {
        self.0 as usize % BOARD_SIZE
    }

    /// Step by a (file, rank) delta, returning `None` when leaving the playing area
    #[inline]
    #[must_use]
    pub fn offset(self, df: i32, dr: i32) -> Option<Square> {
        let file = self.file() as i32 + df;
        let rank = self.rank() as i32 + dr;
        if file < 0 || rank < 0 {
            return None;
        }
        Square::new(rank as usize, file as usize)
    }

    /// Iterate over all playable squares in index order
    pub fn all() -> impl Iterator<Item = Square> {
        (0..NUM_SQUARES)
            .map(Square::from_index)
            .filter(|sq| is_playable(sq.rank(), sq.file()))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.file() as u8) as char;
        write!(f, "{}{}", file, self.rank() + 1)
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let file_char = chars.next().ok_or_else(|| SquareError::InvalidNotation {
            notation: s.to_string(),
        })?;
        if !file_char.is_ascii_lowercase() {
            return Err(SquareError::InvalidNotation {
                notation: s.to_string(),
            });
        }
        let file = file_char as usize - 'a' as usize;
        if file >= BOARD_SIZE {
            return Err(SquareError::FileOutOfBounds { file });
        }

        let rank_str = chars.as_str();
        let rank: usize = rank_str
            .parse()
            .map_err(|_| SquareError::InvalidNotation {
                notation: s.to_string(),
            })?;
        if rank == 0 || rank > BOARD_SIZE {
            return Err(SquareError::RankOutOfBounds { rank });
        }

        Square::new(rank - 1, file).ok_or(SquareError::CornerSquare {
            notation: s.to_string(),
        })
    }
}
