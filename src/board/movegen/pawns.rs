use super::super::{Board, Color, Move, MoveList, Square};

impl Board {
    pub(crate) fn generate_pawn_moves(&self, from: Square, color: Color, moves: &mut MoveList) {
        let (df, dr) = color.pawn_direction();
        let promotes = |sq: Square| color.pawn_axis(sq.file(), sq.rank()) == color.pawn_promotion_line();

        if let Some(one) = from.offset(df, dr) {
            if self.is_empty(one) {
                if promotes(one) {
                    moves.push(Move::promotion(from, one, false));
                } else {
                    moves.push(Move::quiet(from, one));
                }

                let on_start_line =
                    color.pawn_axis(from.file(), from.rank()) == color.pawn_start_line();
                if on_start_line {
                    if let Some(two) = one.offset(df, dr) {
                        if self.is_empty(two) {
                            moves.push(Move::double_pawn_push(from, two));
                        }
                    }
                }
            }
        }

        // Diagonal captures: forward step plus one square sideways
        let sideways = if df == 0 { [(1, 0), (-1, 0)] } else { [(0, 1), (0, -1)] };
        for (sf, sr) in sideways {
            let Some(to) = from.offset(df + sf, dr + sr) else {
                continue;
            };
            match self.piece_at(to) {
                Some((owner, _)) if owner != color => {
                    if promotes(to) {
                        moves.push(Move::promotion(from, to, true));
                    } else {
                        moves.push(Move::capture(from, to));
                    }
                }
                _ => {}
            }
        }
    }
}
