use crate::zobrist::ZOBRIST;

use super::{Board, Move, Piece, UnmakeInfo};

impl Board {
    /// Apply a move generated for the side to move.
    ///
    /// Capturing a king eliminates its owner; the owner's remaining pieces
    /// stay on the board but never move again. When only one color is left
    /// it becomes the winner.
    ///
    /// # Panics
    /// Panics if the source square is empty, which means the move was not
    /// generated from this position.
    pub fn make_move(&mut self, mv: Move) -> UnmakeInfo {
        let previous_hash = self.hash;
        let previous_side_to_move = self.side_to_move;
        let previous_eliminated = self.eliminated;
        let previous_winner = self.winner;
        let previous_halfmove_clock = self.halfmove_clock;

        let mut current_hash = self.hash;
        let from = mv.from();
        let to = mv.to();

        let captured_piece_info = self.piece_at(to);
        if let Some((cap_color, cap_piece)) = captured_piece_info {
            self.remove_piece(to, cap_color, cap_piece);
            current_hash ^= ZOBRIST.piece(cap_color, cap_piece, to);
        }

        let (moving_color, moving_piece) = self.piece_at(from).expect("make_move 'from' empty");
        self.remove_piece(from, moving_color, moving_piece);
        current_hash ^= ZOBRIST.piece(moving_color, moving_piece, from);

        let placed_piece = if mv.is_promotion() {
            Piece::Queen
        } else {
            moving_piece
        };
        self.set_piece(to, moving_color, placed_piece);
        current_hash ^= ZOBRIST.piece(moving_color, placed_piece, to);

        if let Some((cap_color, Piece::King)) = captured_piece_info {
            if !self.eliminated[cap_color.index()] {
                self.eliminated[cap_color.index()] = true;
                current_hash ^= ZOBRIST.eliminated(cap_color);
            }
            self.winner = self.sole_survivor();
        }

        self.halfmove_clock = if captured_piece_info.is_some() || moving_piece == Piece::Pawn {
            0
        } else {
            self.halfmove_clock + 1
        };

        let next = self.next_active_after(previous_side_to_move);
        current_hash ^= ZOBRIST.side_to_move(previous_side_to_move);
        current_hash ^= ZOBRIST.side_to_move(next);
        self.side_to_move = next;

        self.game_ply += 1;
        self.hash = current_hash;
        let previous_repetition_count = self.repetition_counts.get(current_hash);
        self.repetition_counts.increment(current_hash);

        UnmakeInfo {
            captured_piece_info,
            previous_side_to_move,
            previous_eliminated,
            previous_winner,
            previous_hash,
            previous_halfmove_clock,
            previous_repetition_count,
        }
    }

    /// Reverse a move applied with `make_move`. Moves must be unmade in the
    /// exact reverse order they were made.
    ///
    /// # Panics
    /// Panics if the destination square is empty.
    pub fn unmake_move(&mut self, mv: Move, info: UnmakeInfo) {
        let from = mv.from();
        let to = mv.to();

        self.repetition_counts
            .set(self.hash, info.previous_repetition_count);

        let (moving_color, placed_piece) = self.piece_at(to).expect("unmake_move 'to' empty");
        self.remove_piece(to, moving_color, placed_piece);

        let original_piece = if mv.is_promotion() {
            Piece::Pawn
        } else {
            placed_piece
        };
        self.set_piece(from, moving_color, original_piece);

        if let Some((cap_color, cap_piece)) = info.captured_piece_info {
            self.set_piece(to, cap_color, cap_piece);
        }

        self.side_to_move = info.previous_side_to_move;
        self.eliminated = info.previous_eliminated;
        self.winner = info.previous_winner;
        self.halfmove_clock = info.previous_halfmove_clock;
        self.hash = info.previous_hash;
        self.game_ply -= 1;
    }
}
