//! The position contract consumed by the search.
//!
//! The search never looks at squares or pieces directly; it drives any
//! type that can hash itself, list its moves, apply and retract them and
//! report game-over conditions. `Board` is the crate's implementation.

use crate::board::{Board, Color, Move, MoveList, Piece, UnmakeInfo};

/// A mutable game position the search can traverse in place.
///
/// `Clone` must produce an independent deep snapshot: the search clones the
/// bound position once per run and mutates only its private copy.
pub trait Position: Clone + Send + 'static {
    /// State returned by `make_move` and consumed by `unmake_move`
    type Undo;

    fn hash(&self) -> u64;
    fn side_to_move(&self) -> Color;
    fn is_eliminated(&self, color: Color) -> bool;
    fn winner(&self) -> Option<Color>;
    fn is_draw(&self) -> bool;
    fn is_draw_by_claim_possible(&self) -> bool;
    fn count_pieces(&self, color: Color, piece: Piece) -> u32;

    /// Monotonic ply counter used to age transposition entries
    fn game_ply(&self) -> u32;

    fn generate_moves(&self) -> MoveList;

    /// Apply a move. Calls must be paired with `unmake_move` in reverse order.
    fn make_move(&mut self, mv: Move) -> Self::Undo;
    fn unmake_move(&mut self, mv: Move, undo: Self::Undo);

    /// Human-readable rendering of a move available in this position
    fn move_to_text(&self, mv: Move) -> String;
}

impl Position for Board {
    type Undo = UnmakeInfo;

    fn hash(&self) -> u64 {
        Board::hash(self)
    }

    fn side_to_move(&self) -> Color {
        Board::side_to_move(self)
    }

    fn is_eliminated(&self, color: Color) -> bool {
        Board::is_eliminated(self, color)
    }

    fn winner(&self) -> Option<Color> {
        Board::winner(self)
    }

    fn is_draw(&self) -> bool {
        Board::is_draw(self)
    }

    fn is_draw_by_claim_possible(&self) -> bool {
        Board::is_draw_by_claim_possible(self)
    }

    fn count_pieces(&self, color: Color, piece: Piece) -> u32 {
        Board::count_pieces(self, color, piece)
    }

    fn game_ply(&self) -> u32 {
        Board::game_ply(self)
    }

    fn generate_moves(&self) -> MoveList {
        Board::generate_moves(self)
    }

    fn make_move(&mut self, mv: Move) -> UnmakeInfo {
        Board::make_move(self, mv)
    }

    fn unmake_move(&mut self, mv: Move, undo: UnmakeInfo) {
        Board::unmake_move(self, mv, undo);
    }

    fn move_to_text(&self, mv: Move) -> String {
        Board::move_to_text(self, mv)
    }
}
