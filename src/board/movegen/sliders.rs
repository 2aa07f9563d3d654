use super::super::{Board, Color, MoveList, Square};

impl Board {
    pub(crate) fn generate_sliding_moves(
        &self,
        from: Square,
        color: Color,
        directions: &[(i32, i32)],
        moves: &mut MoveList,
    ) {
        for &(df, dr) in directions {
            let mut current = from;
            while let Some(to) = current.offset(df, dr) {
                if !self.push_target(from, to, color, moves) {
                    break;
                }
                current = to;
            }
        }
    }
}
