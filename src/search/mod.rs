//! Search module implementing paranoid alpha-beta with iterative deepening.
//!
//! Features:
//! - Paranoid reduction: the color to move at the root maximizes, every
//!   other color is treated as one minimizing opponent
//! - Iterative deepening from depth 1, publishing the principal variation
//!   after every completed depth
//! - Per-color transposition tables, aged by game ply
//! - Move ordering (TT move, killers, captures, history)
//! - Cooperative cancellation through a shared `StopFlag`
//!
//! Two engines implement [`Search`]: [`ParanoidSearch`] runs on a
//! background thread, [`RandomSearch`] picks a seeded random move and
//! serves as a baseline.

mod constants;
mod eval;
mod move_order;
mod paranoid;
mod params;
mod random;
mod tables;

use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{Color, Move};
use crate::tt::TranspositionTable;

pub use constants::{DEFAULT_MAX_DEPTH, KILLER_SLOTS, LOSS_SCORE, MAX_PLY, WIN_SCORE};
pub use eval::{evaluate, piece_value};
pub use paranoid::{best_line, search_to_depth, ParanoidSearch};
pub use params::SearchConfig;
pub use random::RandomSearch;
pub use tables::{HistoryTable, KillerTable};

/// Common interface of every search engine.
///
/// Callers drive engines only through these three operations and must not
/// depend on which engine they hold.
pub trait Search: Send {
    /// Begin searching the bound position. Returns immediately.
    fn start_search(&mut self);

    /// Request cancellation. Returns immediately; the search stops at its
    /// next node.
    fn stop_search(&mut self);

    /// Best line found so far, or `None` if there is nothing to report yet
    /// or the position has no moves.
    fn position_evaluation(&self) -> Option<PositionEvaluation>;
}

/// A principal variation and its score.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PositionEvaluation {
    /// Moves of the line with their notation, starting at the root
    pub principal_variation: Vec<(Move, String)>,
    /// Score for the root side to move, in pawns
    pub evaluation_score: f64,
}

impl PositionEvaluation {
    /// First move of the line
    #[must_use]
    pub fn best_move(&self) -> Option<Move> {
        self.principal_variation.first().map(|(mv, _)| *mv)
    }

    /// The line as space-separated notation
    #[must_use]
    pub fn pv_text(&self) -> String {
        self.principal_variation
            .iter()
            .map(|(_, text)| text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Lifecycle of a background search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchStatus {
    /// Never started since the position was bound
    Idle,
    Running,
    /// Cancelled before the last depth finished
    Stopped,
    /// Every depth finished, or the root position is terminal
    Completed,
    /// The search thread panicked or could not be spawned
    Failed,
}

/// Statistics for the most recent alpha-beta pass
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,
    pub tt_hits: u64,
}

/// Information about a completed search iteration.
#[derive(Debug, Clone)]
pub struct SearchIterationInfo {
    pub depth: u32,
    /// Root score in centipawns
    pub score: i32,
    pub nodes: u64,
    pub tt_hits: u64,
    pub time_ms: u64,
    /// Fill of the root color's transposition table, per mille
    pub hashfull: u32,
    pub pv: String,
}

/// Callback type for iteration info.
pub type SearchInfoCallback = Arc<dyn Fn(&SearchIterationInfo) + Send + Sync>;

/// Search state persisted across searches: transposition tables (one per
/// root color, allocated on first use), killers and history.
pub struct SearchState {
    tt_size_log2: u32,
    tables: [Option<TranspositionTable>; Color::COUNT],
    pub killers: KillerTable,
    pub history: HistoryTable,
    pub stats: SearchStats,
}

impl Default for SearchState {
    fn default() -> Self {
        SearchState::new(crate::tt::DEFAULT_TT_SIZE_LOG2)
    }
}

impl SearchState {
    /// Create a state whose transposition tables will hold `2^tt_size_log2`
    /// slots each.
    #[must_use]
    pub fn new(tt_size_log2: u32) -> Self {
        SearchState {
            tt_size_log2,
            tables: [None, None, None, None],
            killers: KillerTable::new(),
            history: HistoryTable::new(),
            stats: SearchStats::default(),
        }
    }

    /// Transposition table of searches rooted at `color`, if one exists
    #[must_use]
    pub fn tt(&self, color: Color) -> Option<&TranspositionTable> {
        self.tables[color.index()].as_ref()
    }

    /// Transposition table of searches rooted at `color`, allocating it on
    /// first use
    pub fn tt_mut(&mut self, color: Color) -> &mut TranspositionTable {
        let size_log2 = self.tt_size_log2;
        self.tables[color.index()].get_or_insert_with(|| TranspositionTable::new(size_log2))
    }
}
