//! Shared fixtures for integration tests.
//!
//! `TreePosition` is a synthetic game tree: every node is identified by the
//! path of child indices leading to it, and all of its properties (branching,
//! material, which moves are captures) are derived from a hash of that path.
//! There are no transpositions, so an unpruned minimax over it is an exact
//! reference for the pruned search.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use paranoid_chess::board::MoveList;
use paranoid_chess::search::{evaluate, LOSS_SCORE, WIN_SCORE};
use paranoid_chess::{Color, Move, Piece, Position, Square, StopFlag};

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Sets the stop flag after a fixed number of `make_move` calls and records
/// which node was being entered at that moment.
#[derive(Clone)]
pub struct Tripwire {
    stop: StopFlag,
    remaining: Arc<AtomicUsize>,
    visited: Arc<Mutex<Vec<Vec<u8>>>>,
    tripped_at: Arc<Mutex<Option<Vec<u8>>>>,
}

impl Tripwire {
    pub fn new(stop: StopFlag, after_moves: usize) -> Self {
        Tripwire {
            stop,
            remaining: Arc::new(AtomicUsize::new(after_moves)),
            visited: Arc::new(Mutex::new(Vec::new())),
            tripped_at: Arc::new(Mutex::new(None)),
        }
    }

    /// Path of the node entered by the move that tripped the wire
    pub fn tripped_at(&self) -> Option<Vec<u8>> {
        self.tripped_at.lock().clone()
    }

    /// Every path entered through `make_move`, in order
    pub fn visited(&self) -> Vec<Vec<u8>> {
        self.visited.lock().clone()
    }

    fn record(&self, path: &[u8]) {
        self.visited.lock().push(path.to_vec());
        if self.remaining.fetch_sub(1, Ordering::SeqCst) == 1 {
            *self.tripped_at.lock() = Some(path.to_vec());
            self.stop.stop();
        }
    }
}

#[derive(Clone, Default)]
pub struct TreePosition {
    seed: u64,
    path: Vec<u8>,
    eliminated: Option<Color>,
    panic_from_ply: Option<usize>,
    tripwire: Option<Tripwire>,
}

impl TreePosition {
    pub fn new(seed: u64) -> Self {
        TreePosition {
            seed,
            ..TreePosition::default()
        }
    }

    pub fn with_eliminated(mut self, color: Color) -> Self {
        self.eliminated = Some(color);
        self
    }

    pub fn with_panicking_generator(self) -> Self {
        self.with_generator_panicking_from(0)
    }

    /// Move generation panics at nodes `ply` or more plies below the root
    pub fn with_generator_panicking_from(mut self, ply: usize) -> Self {
        self.panic_from_ply = Some(ply);
        self
    }

    pub fn with_tripwire(mut self, tripwire: Tripwire) -> Self {
        self.tripwire = Some(tripwire);
        self
    }

    /// Hash of the node reached from the root by `path`
    pub fn hash_of(seed: u64, path: &[u8]) -> u64 {
        let mut h = FNV_OFFSET ^ seed;
        for &step in path {
            h ^= u64::from(step) + 1;
            h = h.wrapping_mul(FNV_PRIME);
        }
        // Spread into the low bits used for table indexing
        h ^= h >> 33;
        h = h.wrapping_mul(0xff51_afd7_ed55_8ccd);
        h ^= h >> 33;
        h
    }

    fn child_move(&self, child: usize) -> Move {
        let from = Square::from_index(1);
        let to = Square::from_index(child + 2);
        let mut child_path = self.path.clone();
        child_path.push(child as u8);
        if Self::hash_of(self.seed, &child_path) % 5 == 0 {
            Move::capture(from, to)
        } else {
            Move::quiet(from, to)
        }
    }
}

impl Position for TreePosition {
    type Undo = ();

    fn hash(&self) -> u64 {
        Self::hash_of(self.seed, &self.path)
    }

    fn side_to_move(&self) -> Color {
        Color::from_index(self.path.len())
    }

    fn is_eliminated(&self, color: Color) -> bool {
        self.eliminated == Some(color)
    }

    fn winner(&self) -> Option<Color> {
        None
    }

    fn is_draw(&self) -> bool {
        false
    }

    fn is_draw_by_claim_possible(&self) -> bool {
        false
    }

    fn count_pieces(&self, color: Color, piece: Piece) -> u32 {
        let piece_idx = Piece::ALL
            .iter()
            .position(|&p| p == piece)
            .unwrap_or_default();
        let bits = self.hash().rotate_left(17);
        ((bits >> (color.index() * 12 + piece_idx * 2)) & 3) as u32
    }

    fn game_ply(&self) -> u32 {
        self.path.len() as u32
    }

    fn generate_moves(&self) -> MoveList {
        if self.panic_from_ply.is_some_and(|ply| self.path.len() >= ply) {
            panic!("tree generator failure at {:?}", self.path);
        }
        let branching = 2 + (self.hash() % 3) as usize;
        (0..branching).map(|child| self.child_move(child)).collect()
    }

    fn make_move(&mut self, mv: Move) -> Self::Undo {
        self.path.push((mv.to().index() - 2) as u8);
        if let Some(tripwire) = &self.tripwire {
            tripwire.record(&self.path);
        }
    }

    fn unmake_move(&mut self, _mv: Move, _undo: ()) {
        self.path.pop();
    }

    fn move_to_text(&self, mv: Move) -> String {
        format!("c{}", mv.to().index() - 2)
    }
}

/// Unpruned paranoid minimax, the reference for the alpha-beta search
pub fn paranoid_minimax<P: Position>(position: &mut P, max_color: Color, depth: u32) -> i32 {
    if position.is_eliminated(max_color) {
        return LOSS_SCORE;
    }
    if position.winner() == Some(max_color) {
        return WIN_SCORE;
    }
    if position.is_draw() || position.is_draw_by_claim_possible() {
        return 0;
    }
    if depth == 0 {
        return evaluate(&*position, max_color);
    }

    let moves = position.generate_moves();
    if moves.is_empty() {
        return evaluate(&*position, max_color);
    }

    let maximizing = position.side_to_move() == max_color;
    let mut best = if maximizing { i32::MIN } else { i32::MAX };
    for &mv in moves.iter() {
        let undo = position.make_move(mv);
        let score = paranoid_minimax(position, max_color, depth - 1);
        position.unmake_move(mv, undo);
        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }
    best
}
