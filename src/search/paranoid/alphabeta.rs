//! Paranoid alpha-beta recursion.

use crate::board::{Color, Move};
use crate::position::Position;
use crate::sync::StopFlag;
use crate::tt::NodeType;

use super::super::constants::{INF, LOSS_SCORE, WIN_SCORE};
use super::super::eval::evaluate;
use super::super::move_order::order_moves;
use super::super::SearchState;

/// Search context for a single alpha-beta pass
pub(crate) struct SearchContext<'a, P: Position> {
    pub position: &'a mut P,
    pub state: &'a mut SearchState,
    pub stop: &'a StopFlag,
    /// The color to move at the root; the only maximizer
    pub max_color: Color,
    pub nodes: u64,
    pub tt_hits: u64,
    /// Set once any node observed cancellation
    pub aborted: bool,
}

impl<'a, P: Position> SearchContext<'a, P> {
    pub fn new(position: &'a mut P, state: &'a mut SearchState, stop: &'a StopFlag) -> Self {
        let max_color = position.side_to_move();
        SearchContext {
            position,
            state,
            stop,
            max_color,
            nodes: 0,
            tt_hits: 0,
            aborted: false,
        }
    }

    /// Full-window search of the root to `depth` plies.
    pub fn search_root(&mut self, depth: u32) -> i32 {
        let is_maximizing = self.position.side_to_move() == self.max_color;
        self.alphabeta(-INF, INF, depth, is_maximizing, 0)
    }

    /// Score for a node whose remaining depth is spent or whose game is over,
    /// checked in this order: eliminated, won, drawn, horizon.
    fn terminal_score(&self, depth: u32) -> Option<i32> {
        if self.position.is_eliminated(self.max_color) {
            return Some(LOSS_SCORE);
        }
        if self.position.winner() == Some(self.max_color) {
            return Some(WIN_SCORE);
        }
        if self.position.is_draw() || self.position.is_draw_by_claim_possible() {
            return Some(0);
        }
        if depth == 0 {
            return Some(evaluate(&*self.position, self.max_color));
        }
        None
    }

    /// Paranoid alpha-beta. `is_maximizing` is true exactly when the color
    /// to move is `max_color`.
    ///
    /// On cancellation the node returns its neutral bound (beta when
    /// maximizing, alpha when minimizing) and nothing on the path back to
    /// the root writes a transposition entry.
    pub fn alphabeta(
        &mut self,
        mut alpha: i32,
        mut beta: i32,
        depth: u32,
        is_maximizing: bool,
        ply: usize,
    ) -> i32 {
        if self.stop.is_stopped() {
            self.aborted = true;
            return if is_maximizing { beta } else { alpha };
        }
        self.nodes += 1;

        if let Some(score) = self.terminal_score(depth) {
            return score;
        }

        // Probe TT for the hash move and a usable bound. The root only takes
        // the move: a bound left by an earlier search would leave it without
        // an exact score and so without a line to publish.
        let hash = self.position.hash();
        let mut tt_move = Move::null();
        if let Some(entry) = self.state.tt(self.max_color).and_then(|tt| tt.get(hash)) {
            tt_move = entry.best_move;
            if ply > 0 && entry.depth() >= depth {
                self.tt_hits += 1;
                match entry.node_type {
                    NodeType::Exact => return entry.score,
                    NodeType::LowerBound => alpha = alpha.max(entry.score),
                    NodeType::UpperBound => beta = beta.min(entry.score),
                }
                if alpha >= beta {
                    return if entry.node_type == NodeType::LowerBound {
                        alpha
                    } else {
                        beta
                    };
                }
            }
        }

        let moves = self.position.generate_moves();
        if moves.is_empty() {
            return evaluate(&*self.position, self.max_color);
        }

        // Classify against the window the children saw: after a TT bound
        // tightened it, the score is only known relative to these bounds
        let (window_alpha, window_beta) = (alpha, beta);
        let mover = self.position.side_to_move();
        let killers = self.state.killers.killers(mover, ply);
        let ordered = order_moves(&moves, tt_move, &killers, &self.state.history, mover);

        let mut best_score = if is_maximizing { -INF } else { INF };
        let mut best_move = Move::null();

        for scored in ordered.iter() {
            let mv = scored.mv;
            let undo = self.position.make_move(mv);
            let child_maximizing = self.position.side_to_move() == self.max_color;
            let score = self.alphabeta(alpha, beta, depth - 1, child_maximizing, ply + 1);
            self.position.unmake_move(mv, undo);

            if self.aborted {
                return if is_maximizing { window_beta } else { window_alpha };
            }

            if is_maximizing {
                if score > best_score {
                    best_score = score;
                    best_move = mv;
                }
                alpha = alpha.max(score);
            } else {
                if score < best_score {
                    best_score = score;
                    best_move = mv;
                }
                beta = beta.min(score);
            }

            if alpha >= beta {
                if !mv.is_capture() {
                    self.state.killers.add_killer_move(mover, mv, ply);
                    self.state.history.increase(mv, mover, depth);
                }
                break;
            }
        }

        let node_type = if best_score <= window_alpha {
            NodeType::UpperBound
        } else if best_score >= window_beta {
            NodeType::LowerBound
        } else {
            NodeType::Exact
        };
        let game_ply = self.position.game_ply();
        self.state
            .tt_mut(self.max_color)
            .put(hash, best_move, depth, best_score, node_type, game_ply);

        best_score
    }
}
