use std::time::Instant;

use log::debug;

use crate::position::Position;
use crate::sync::StopFlag;
use crate::tt::NodeType;

use super::super::{PositionEvaluation, SearchInfoCallback, SearchIterationInfo, SearchState, SearchStats};
use super::alphabeta::SearchContext;

/// How an iterative deepening run ended
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum DeepeningOutcome {
    /// Every depth finished, or the root is terminal
    Completed { depth: u32 },
    /// Cancelled; `depth` is the last depth that finished
    Cancelled { depth: u32 },
}

/// Run one full-window alpha-beta pass to `depth` plies from the side to
/// move of `position`.
///
/// Returns the root score, or `None` if the pass was cancelled. Statistics
/// for the pass are left in `state.stats`.
pub fn search_to_depth<P: Position>(
    position: &mut P,
    state: &mut SearchState,
    depth: u32,
    stop: &StopFlag,
) -> Option<i32> {
    let mut ctx = SearchContext::new(position, state, stop);
    let score = ctx.search_root(depth);
    let stats = SearchStats {
        nodes: ctx.nodes,
        tt_hits: ctx.tt_hits,
    };
    let aborted = ctx.aborted;
    state.stats = stats;

    if aborted {
        None
    } else {
        Some(score)
    }
}

/// Reconstruct the principal variation from the transposition table of the
/// side to move.
///
/// Follows exact entries from the root on a scratch copy and stops at the
/// first miss, bound entry, unavailable move or repeated position. Returns
/// `None` when the root has no exact entry with a move.
#[must_use]
pub fn best_line<P: Position>(position: &P, state: &SearchState) -> Option<PositionEvaluation> {
    let tt = state.tt(position.side_to_move())?;
    let root = tt.get(position.hash())?;

    let mut scratch = position.clone();
    let mut seen_hashes: Vec<u64> = Vec::new();
    let mut line = Vec::new();

    loop {
        let hash = scratch.hash();
        if seen_hashes.contains(&hash) {
            break;
        }
        seen_hashes.push(hash);

        let Some(entry) = tt.get(hash) else { break };
        if entry.node_type != NodeType::Exact {
            break;
        }
        let Some(mv) = entry.best_move() else { break };
        if !scratch.generate_moves().contains(mv) {
            break;
        }

        line.push((mv, scratch.move_to_text(mv)));
        scratch.make_move(mv);
    }

    if line.is_empty() {
        return None;
    }

    Some(PositionEvaluation {
        principal_variation: line,
        evaluation_score: f64::from(root.score) / 100.0,
    })
}

/// True when the root has no move to report: the root color is out, the
/// game is decided or drawn, or nothing can be played.
fn root_is_terminal<P: Position>(position: &P) -> bool {
    let max_color = position.side_to_move();
    position.is_eliminated(max_color)
        || position.winner().is_some()
        || position.is_draw()
        || position.is_draw_by_claim_possible()
        || position.generate_moves().is_empty()
}

/// Iterative deepening from depth 1 to `max_depth`.
///
/// After each completed depth the principal variation is handed to
/// `publish` and reported to `info_callback`. A cancelled depth is
/// discarded; tables keep whatever the completed depths stored. A terminal
/// root is not searched at all.
pub(crate) fn iterative_deepening<P: Position>(
    position: &mut P,
    state: &mut SearchState,
    max_depth: u32,
    stop: &StopFlag,
    info_callback: Option<&SearchInfoCallback>,
    mut publish: impl FnMut(PositionEvaluation),
) -> DeepeningOutcome {
    if root_is_terminal(&*position) {
        debug!("root is terminal, nothing to search");
        return DeepeningOutcome::Completed { depth: 0 };
    }

    let start_time = Instant::now();
    let max_color = position.side_to_move();
    let mut completed = 0;

    for depth in 1..=max_depth {
        if stop.is_stopped() {
            return DeepeningOutcome::Cancelled { depth: completed };
        }

        let Some(score) = search_to_depth(position, state, depth, stop) else {
            return DeepeningOutcome::Cancelled { depth: completed };
        };
        completed = depth;

        let Some(line) = best_line(&*position, state) else {
            // Root entry lost to a slot collision; the next depth stores it again
            debug!("depth {depth}: score {score}, no line in table");
            continue;
        };

        let elapsed = start_time.elapsed().as_millis() as u64;
        let hashfull = state
            .tt(max_color)
            .map_or(0, |tt| tt.hashfull_per_mille());
        let pv = line.pv_text();
        debug!(
            "depth {depth} score {score} nodes {} tt_hits {} hashfull {hashfull} time {elapsed}ms pv {pv}",
            state.stats.nodes, state.stats.tt_hits
        );

        if let Some(cb) = info_callback {
            cb(&SearchIterationInfo {
                depth,
                score,
                nodes: state.stats.nodes,
                tt_hits: state.stats.tt_hits,
                time_ms: elapsed,
                hashfull,
                pv,
            });
        }

        publish(line);
    }

    DeepeningOutcome::Completed { depth: completed }
}
