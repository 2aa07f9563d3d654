use super::super::{Board, Color, MoveList, Square};
use super::{DIAGONALS, STRAIGHTS};

impl Board {
    pub(crate) fn generate_king_moves(&self, from: Square, color: Color, moves: &mut MoveList) {
        for (df, dr) in DIAGONALS.into_iter().chain(STRAIGHTS) {
            if let Some(to) = from.offset(df, dr) {
                self.push_target(from, to, color, moves);
            }
        }
    }
}
