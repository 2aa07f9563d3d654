//! Baseline engine that plays a random available move.

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::board::Board;
use crate::position::Position;

use super::{PositionEvaluation, Search};

/// Picks a uniformly random move from a seeded generator.
///
/// Evaluation happens on demand in `position_evaluation`; starting and
/// stopping do nothing. The same seed and the same position yield the same
/// sequence of moves.
pub struct RandomSearch<P: Position = Board> {
    position: P,
    rng: Mutex<StdRng>,
}

impl<P: Position> RandomSearch<P> {
    #[must_use]
    pub fn new(position: P, seed: u64) -> Self {
        RandomSearch {
            position,
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    pub fn set_position(&mut self, position: P) {
        self.position = position;
    }

    #[must_use]
    pub fn position(&self) -> &P {
        &self.position
    }
}

impl<P: Position> Search for RandomSearch<P> {
    fn start_search(&mut self) {}

    fn stop_search(&mut self) {}

    fn position_evaluation(&self) -> Option<PositionEvaluation> {
        let moves = self.position.generate_moves();
        if moves.is_empty() {
            return None;
        }
        let mv = moves[self.rng.lock().gen_range(0..moves.len())];
        Some(PositionEvaluation {
            principal_variation: vec![(mv, self.position.move_to_text(mv))],
            evaluation_score: 0.0,
        })
    }
}
