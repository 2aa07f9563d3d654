//! Move types and move list.

use std::fmt;
use std::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Piece;
use super::square::Square;

// Move flags (4 bits)
const FLAG_QUIET: u32 = 0;
const FLAG_DOUBLE_PAWN: u32 = 1;
const FLAG_CAPTURE: u32 = 4;
const FLAG_PROMOTION: u32 = 8;
const FLAG_PROMOTION_CAPTURE: u32 = FLAG_PROMOTION | FLAG_CAPTURE;

/// Compact 32-bit move representation.
///
/// Encoding:
/// - bits 0-7:   from square (0-195)
/// - bits 8-15:  to square (0-195)
/// - bits 16-19: flags (move type)
///
/// The all-zero value is reserved for "no move"; square 0 is a removed
/// corner, so no real move encodes to it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move(u32);

impl Move {
    /// Create a null/empty move (used for initialization)
    #[inline]
    #[must_use]
    pub const fn null() -> Self {
        Move(0)
    }

    /// Create a quiet move (no capture, no special flags)
    #[inline]
    #[must_use]
    pub const fn quiet(from: Square, to: Square) -> Self {
        Move::with_flag(from, to, FLAG_QUIET)
    }

    /// Create a capture move
    #[inline]
    #[must_use]
    pub const fn capture(from: Square, to: Square) -> Self {
        Move::with_flag(from, to, FLAG_CAPTURE)
    }

    /// Create a double pawn push move
    #[inline]
    #[must_use]
    pub const fn double_pawn_push(from: Square, to: Square) -> Self {
        Move::with_flag(from, to, FLAG_DOUBLE_PAWN)
    }

    /// Create a pawn promotion (always to a queen)
    #[inline]
    #[must_use]
    pub const fn promotion(from: Square, to: Square, capture: bool) -> Self {
        let flag = if capture {
            FLAG_PROMOTION_CAPTURE
        } else {
            FLAG_PROMOTION
        };
        Move::with_flag(from, to, flag)
    }

    #[inline]
    const fn with_flag(from: Square, to: Square, flag: u32) -> Self {
        Move(from.index() as u32 | ((to.index() as u32) << 8) | (flag << 16))
    }

    /// Get the source square
    #[inline]
    #[must_use]
    pub const fn from(self) -> Square {
        Square::from_index((self.0 & 0xFF) as usize)
    }

    /// Get the destination square
    #[inline]
    #[must_use]
    pub const fn to(self) -> Square {
        Square::from_index(((self.0 >> 8) & 0xFF) as usize)
    }

    #[inline]
    const fn flag(self) -> u32 {
        (self.0 >> 16) & 0xF
    }

    /// Returns true if this is the reserved "no move" value
    #[inline]
    #[must_use]
    pub const fn is_null(self) -> bool {
        self.0 == 0
    }

    /// Returns true if this move captures a piece
    #[inline]
    #[must_use]
    pub const fn is_capture(self) -> bool {
        self.flag() & FLAG_CAPTURE != 0
    }

    /// Returns true if this move is a double pawn push
    #[inline]
    #[must_use]
    pub const fn is_double_pawn_push(self) -> bool {
        self.flag() == FLAG_DOUBLE_PAWN
    }

    /// Returns true if this move is a pawn promotion
    #[inline]
    #[must_use]
    pub const fn is_promotion(self) -> bool {
        self.flag() & FLAG_PROMOTION != 0
    }

    /// Get the promotion piece, if this is a promotion move
    #[inline]
    #[must_use]
    pub const fn promotion_piece(self) -> Option<Piece> {
        if self.is_promotion() {
            Some(Piece::Queen)
        } else {
            None
        }
    }

    /// Returns true if this move is "quiet" (neither a capture nor a promotion)
    #[inline]
    #[must_use]
    pub const fn is_quiet(self) -> bool {
        !self.is_capture() && !self.is_promotion()
    }

    /// Get the raw 32-bit value (for hashing/storage)
    #[inline]
    #[must_use]
    pub const fn as_u32(self) -> u32 {
        self.0
    }

    /// Create from raw 32-bit value
    #[inline]
    #[must_use]
    pub const fn from_u32(value: u32) -> Self {
        Move(value)
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            return write!(f, "Move(null)");
        }
        write!(f, "Move({}{}", self.from(), self.to())?;
        if self.is_promotion() {
            write!(f, "=Q")?;
        }
        if self.is_capture() {
            write!(f, " cap")?;
        }
        write!(f, ")")
    }
}

/// Coordinate notation, e.g. `h2h4` or `h7h8q`
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from(), self.to())?;
        if let Some(promo) = self.promotion_piece() {
            write!(f, "{}", promo.to_char())?;
        }
        Ok(())
    }
}

pub(crate) const MAX_MOVES: usize = 512;
pub(crate) const EMPTY_MOVE: Move = Move::null();

/// List of moves with fixed-size backing array.
#[derive(Clone, Debug)]
pub struct MoveList {
    moves: [Move; MAX_MOVES],
    len: usize,
}

impl MoveList {
    #[must_use]
    pub fn new() -> Self {
        MoveList {
            moves: [EMPTY_MOVE; MAX_MOVES],
            len: 0,
        }
    }

    /// Append a move.
    ///
    /// Overflowing the list is a generator bug: it panics in debug builds
    /// and drops the move in release builds.
    pub fn push(&mut self, mv: Move) {
        debug_assert!(self.len < MAX_MOVES, "MoveList overflow ({MAX_MOVES} moves)");
        if self.len < MAX_MOVES {
            self.moves[self.len] = mv;
            self.len += 1;
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves[..self.len]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.as_slice().iter()
    }

    #[must_use]
    pub fn get(&self, idx: usize) -> Option<Move> {
        if idx < self.len {
            Some(self.moves[idx])
        } else {
            None
        }
    }

    #[must_use]
    pub fn contains(&self, mv: Move) -> bool {
        self.as_slice().contains(&mv)
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl Default for MoveList {
    fn default() -> Self {
        MoveList::new()
    }
}

impl FromIterator<Move> for MoveList {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> Self {
        let mut list = MoveList::new();
        for mv in iter {
            list.push(mv);
        }
        list
    }
}

impl Index<usize> for MoveList {
    type Output = Move;

    fn index(&self, idx: usize) -> &Self::Output {
        assert!(
            idx < self.len,
            "MoveList index {} out of bounds (len {})",
            idx,
            self.len
        );
        &self.moves[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(rank: usize, file: usize) -> Square {
        Square::new(rank, file).expect("playable square")
    }

    #[test]
    fn test_move_encoding_fields() {
        let from = sq(1, 7);
        let to = sq(3, 7);
        let mv = Move::double_pawn_push(from, to);
        assert_eq!(mv.from(), from);
        assert_eq!(mv.to(), to);
        assert!(mv.is_double_pawn_push());
        assert!(mv.is_quiet());
        assert!(!mv.is_capture());
    }

    #[test]
    fn test_promotion_capture_flags() {
        let mv = Move::promotion(sq(6, 4), sq(7, 5), true);
        assert!(mv.is_capture());
        assert!(mv.is_promotion());
        assert!(!mv.is_quiet());
        assert_eq!(mv.promotion_piece(), Some(Piece::Queen));
        assert_eq!(mv.to_string(), "e7f8q");
    }

    #[test]
    fn test_null_move_is_distinct() {
        assert!(Move::null().is_null());
        assert!(!Move::quiet(sq(0, 3), sq(2, 4)).is_null());
        assert_eq!(Move::default(), Move::null());
    }

    #[test]
    fn test_move_list_fills_to_capacity() {
        let mv = Move::quiet(sq(0, 3), sq(2, 4));
        let list: MoveList = std::iter::repeat(mv).take(MAX_MOVES).collect();
        assert_eq!(list.len(), MAX_MOVES);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "MoveList overflow")]
    fn test_move_list_overflow_panics_in_debug() {
        let mv = Move::quiet(sq(0, 3), sq(2, 4));
        let _list: MoveList = std::iter::repeat(mv).take(MAX_MOVES + 1).collect();
    }
}
