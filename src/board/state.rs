use std::collections::HashMap;

use crate::zobrist::ZOBRIST;

use super::{Color, Piece, Square, NUM_SQUARES};

/// Quiet plies after which the game is drawn (50 moves for each of four players)
pub(crate) const DRAW_CLOCK_PLIES: u32 = 200;

/// Occurrences of a position after which a draw may be claimed
pub(crate) const REPETITION_CLAIM_COUNT: u32 = 3;

const BACK_RANK_RED_GREEN: [Piece; 8] = [
    Piece::Rook,
    Piece::Knight,
    Piece::Bishop,
    Piece::Queen,
    Piece::King,
    Piece::Bishop,
    Piece::Knight,
    Piece::Rook,
];

const BACK_RANK_BLUE_YELLOW: [Piece; 8] = [
    Piece::Rook,
    Piece::Knight,
    Piece::Bishop,
    Piece::King,
    Piece::Queen,
    Piece::Bishop,
    Piece::Knight,
    Piece::Rook,
];

/// State needed to reverse a `make_move`.
#[derive(Clone, Debug)]
pub struct UnmakeInfo {
    pub(crate) captured_piece_info: Option<(Color, Piece)>,
    pub(crate) previous_side_to_move: Color,
    pub(crate) previous_eliminated: [bool; 4],
    pub(crate) previous_winner: Option<Color>,
    pub(crate) previous_hash: u64,
    pub(crate) previous_halfmove_clock: u32,
    pub(crate) previous_repetition_count: u32,
}

#[derive(Clone, Debug)]
pub(crate) struct RepetitionTable {
    counts: HashMap<u64, u32>,
}

impl RepetitionTable {
    pub(crate) fn new() -> Self {
        RepetitionTable {
            counts: HashMap::new(),
        }
    }

    pub(crate) fn get(&self, hash: u64) -> u32 {
        self.counts.get(&hash).copied().unwrap_or(0)
    }

    pub(crate) fn set(&mut self, hash: u64, count: u32) {
        if count == 0 {
            self.counts.remove(&hash);
        } else {
            self.counts.insert(hash, count);
        }
    }

    pub(crate) fn increment(&mut self, hash: u64) -> u32 {
        let next = self.get(hash).saturating_add(1);
        self.set(hash, next);
        next
    }
}

/// A four-player chess position.
///
/// Mailbox representation over the 14x14 grid. Piece counts per color are
/// maintained incrementally so material evaluation never scans the board.
#[derive(Clone, Debug)]
pub struct Board {
    pub(crate) squares: [Option<(Color, Piece)>; NUM_SQUARES],
    pub(crate) piece_counts: [[u32; 6]; 4],
    pub(crate) side_to_move: Color,
    pub(crate) eliminated: [bool; 4],
    pub(crate) winner: Option<Color>,
    pub(crate) hash: u64,
    pub(crate) halfmove_clock: u32,
    pub(crate) game_ply: u32,
    pub(crate) repetition_counts: RepetitionTable,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// The standard four-player starting position, Red to move.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();

        for (i, (&red_green, &blue_yellow)) in BACK_RANK_RED_GREEN
            .iter()
            .zip(BACK_RANK_BLUE_YELLOW.iter())
            .enumerate()
        {
            let line = i + 3;
            board.place(0, line, Color::Red, red_green);
            board.place(1, line, Color::Red, Piece::Pawn);
            board.place(line, 0, Color::Blue, blue_yellow);
            board.place(line, 1, Color::Blue, Piece::Pawn);
            board.place(13, line, Color::Yellow, blue_yellow);
            board.place(12, line, Color::Yellow, Piece::Pawn);
            board.place(line, 13, Color::Green, red_green);
            board.place(line, 12, Color::Green, Piece::Pawn);
        }

        board.hash = board.calculate_hash();
        board.repetition_counts.increment(board.hash);
        board
    }

    /// An empty board with Red to move and nobody eliminated.
    pub(crate) fn empty() -> Self {
        Board {
            squares: [None; NUM_SQUARES],
            piece_counts: [[0; 6]; 4],
            side_to_move: Color::Red,
            eliminated: [false; 4],
            winner: None,
            hash: 0,
            halfmove_clock: 0,
            game_ply: 0,
            repetition_counts: RepetitionTable::new(),
        }
    }

    fn place(&mut self, rank: usize, file: usize, color: Color, piece: Piece) {
        if let Some(sq) = Square::new(rank, file) {
            self.set_piece(sq, color, piece);
        }
    }

    pub(crate) fn set_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        self.squares[sq.index()] = Some((color, piece));
        self.piece_counts[color.index()][piece.index()] += 1;
    }

    pub(crate) fn remove_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        self.squares[sq.index()] = None;
        let count = &mut self.piece_counts[color.index()][piece.index()];
        *count = count.saturating_sub(1);
    }

    /// Get the piece and its owner on a square
    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        self.squares.get(sq.index()).copied().flatten()
    }

    #[inline]
    pub(crate) fn is_empty(&self, sq: Square) -> bool {
        self.piece_at(sq).is_none()
    }

    /// Get just the piece type on a square (without color)
    #[must_use]
    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        self.piece_at(sq).map(|(_, piece)| piece)
    }

    /// Get just the color of the piece on a square
    #[must_use]
    pub fn color_on(&self, sq: Square) -> Option<Color> {
        self.piece_at(sq).map(|(color, _)| color)
    }

    #[must_use]
    pub fn hash(&self) -> u64 {
        self.hash
    }

    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[must_use]
    pub fn is_eliminated(&self, color: Color) -> bool {
        self.eliminated[color.index()]
    }

    #[must_use]
    pub fn winner(&self) -> Option<Color> {
        self.winner
    }

    #[must_use]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    /// Plies played since the position the board was created from
    #[must_use]
    pub fn game_ply(&self) -> u32 {
        self.game_ply
    }

    /// Number of pieces of the given type a color has on the board
    #[must_use]
    pub fn count_pieces(&self, color: Color, piece: Piece) -> u32 {
        self.piece_counts[color.index()][piece.index()]
    }

    /// Colors still in the game
    pub fn active_colors(&self) -> impl Iterator<Item = Color> + '_ {
        Color::ALL
            .into_iter()
            .filter(move |c| !self.eliminated[c.index()])
    }

    /// Quiet-move clock has run out
    #[must_use]
    pub fn is_draw(&self) -> bool {
        self.halfmove_clock >= DRAW_CLOCK_PLIES
    }

    /// Current position has occurred often enough for a draw claim
    #[must_use]
    pub fn is_draw_by_claim_possible(&self) -> bool {
        self.repetition_counts.get(self.hash) >= REPETITION_CLAIM_COUNT
    }

    /// Next color after `color` that is still in the game, or `color` itself
    /// if everybody else is out.
    pub(crate) fn next_active_after(&self, color: Color) -> Color {
        let mut next = color.next();
        for _ in 0..Color::COUNT {
            if !self.eliminated[next.index()] {
                return next;
            }
            next = next.next();
        }
        color
    }

    /// The single surviving color, if only one remains
    pub(crate) fn sole_survivor(&self) -> Option<Color> {
        let mut survivors = self.active_colors();
        match (survivors.next(), survivors.next()) {
            (Some(color), None) => Some(color),
            _ => None,
        }
    }

    pub(crate) fn calculate_hash(&self) -> u64 {
        let mut hash: u64 = 0;

        for sq in Square::all() {
            if let Some((color, piece)) = self.piece_at(sq) {
                hash ^= ZOBRIST.piece(color, piece, sq);
            }
        }

        hash ^= ZOBRIST.side_to_move(self.side_to_move);

        for color in Color::ALL {
            if self.eliminated[color.index()] {
                hash ^= ZOBRIST.eliminated(color);
            }
        }

        hash
    }
}
