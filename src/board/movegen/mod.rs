//! Pseudo-legal move generation under king-capture rules.
//!
//! There is no check detection: a move that leaves the king en prise is
//! playable, and the reply that captures the king eliminates its owner.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::{Board, Color, Move, MoveList, Piece, Square};

const DIAGONALS: [(i32, i32); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
const STRAIGHTS: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

impl Board {
    /// Generate every move available to the side to move.
    ///
    /// Returns an empty list once the game has a winner.
    #[must_use]
    pub fn generate_moves(&self) -> MoveList {
        let mut moves = MoveList::new();
        if self.winner.is_some() || self.is_eliminated(self.side_to_move) {
            return moves;
        }

        let color = self.side_to_move;
        for from in Square::all() {
            let Some((owner, piece)) = self.piece_at(from) else {
                continue;
            };
            if owner != color {
                continue;
            }
            match piece {
                Piece::Pawn => self.generate_pawn_moves(from, color, &mut moves),
                Piece::Knight => self.generate_knight_moves(from, color, &mut moves),
                Piece::Bishop => self.generate_sliding_moves(from, color, &DIAGONALS, &mut moves),
                Piece::Rook => self.generate_sliding_moves(from, color, &STRAIGHTS, &mut moves),
                Piece::Queen => {
                    self.generate_sliding_moves(from, color, &DIAGONALS, &mut moves);
                    self.generate_sliding_moves(from, color, &STRAIGHTS, &mut moves);
                }
                Piece::King => self.generate_king_moves(from, color, &mut moves),
            }
        }

        moves
    }

    /// Push a non-pawn move to `to` if the square is empty or holds an
    /// enemy piece. Returns true if the square was empty (sliders continue).
    fn push_target(&self, from: Square, to: Square, color: Color, moves: &mut MoveList) -> bool {
        match self.piece_at(to) {
            None => {
                moves.push(Move::quiet(from, to));
                true
            }
            Some((owner, _)) if owner != color => {
                moves.push(Move::capture(from, to));
                false
            }
            Some(_) => false,
        }
    }

    /// Returns true if `mv` is among the moves available in this position
    #[must_use]
    pub fn is_legal_move(&self, mv: Move) -> bool {
        !mv.is_null() && self.generate_moves().contains(mv)
    }
}
