//! Background paranoid search engine.
//!
//! The engine owns a position snapshot and a `SearchState`. Each
//! `start_search` clones the snapshot into the search thread, so the
//! caller's copy is never touched. Results are published into a small
//! mutex of their own after every completed depth, so polling never waits
//! on the search.

mod alphabeta;
mod iterative;

pub use iterative::{best_line, search_to_depth};

use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use log::{error, info, warn};
use parking_lot::Mutex;

use crate::board::Board;
use crate::position::Position;
use crate::sync::StopFlag;

use super::{PositionEvaluation, Search, SearchConfig, SearchInfoCallback, SearchState, SearchStatus};
use iterative::{iterative_deepening, DeepeningOutcome};

/// Paranoid alpha-beta engine running on a background thread.
///
/// # Example
/// ```
/// use paranoid_chess::{Board, ParanoidSearch, Search, SearchConfig, SearchStatus};
///
/// let config = SearchConfig::default().with_max_depth(2).with_tt_size_log2(12);
/// let mut search = ParanoidSearch::new(Board::new(), config);
/// search.start_search();
/// search.wait();
///
/// assert_eq!(search.status(), SearchStatus::Completed);
/// assert!(search.position_evaluation().is_some());
/// ```
pub struct ParanoidSearch<P: Position = Board> {
    position: P,
    config: SearchConfig,
    state: Arc<Mutex<SearchState>>,
    stop: StopFlag,
    status: Arc<Mutex<SearchStatus>>,
    evaluation: Arc<Mutex<Option<PositionEvaluation>>>,
    info_callback: Option<SearchInfoCallback>,
    handle: Option<JoinHandle<()>>,
}

impl<P: Position> ParanoidSearch<P> {
    /// Create an engine bound to `position`.
    #[must_use]
    pub fn new(position: P, config: SearchConfig) -> Self {
        let state = SearchState::new(config.tt_size_log2);
        ParanoidSearch {
            position,
            config,
            state: Arc::new(Mutex::new(state)),
            stop: StopFlag::new(),
            status: Arc::new(Mutex::new(SearchStatus::Idle)),
            evaluation: Arc::new(Mutex::new(None)),
            info_callback: None,
            handle: None,
        }
    }

    /// Attach a callback called after every completed depth.
    #[must_use]
    pub fn with_info_callback(mut self, callback: SearchInfoCallback) -> Self {
        self.info_callback = Some(callback);
        self
    }

    /// Bind a new position, typically the next ply of the same game.
    ///
    /// Stops and joins a running search and clears the published result.
    /// Transposition, killer and history tables are kept; entries from
    /// earlier plies age out through the game ply.
    pub fn set_position(&mut self, position: P) {
        self.stop_and_wait();
        self.position = position;
        *self.evaluation.lock() = None;
        *self.status.lock() = SearchStatus::Idle;
    }

    #[must_use]
    pub fn position(&self) -> &P {
        &self.position
    }

    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    #[must_use]
    pub fn status(&self) -> SearchStatus {
        *self.status.lock()
    }

    /// Block until the running search, if any, has finished.
    pub fn wait(&mut self) {
        if let Some(handle) = self.handle.take() {
            // Panics are caught inside the thread, so join only fails if
            // the status bookkeeping itself panicked
            if handle.join().is_err() {
                *self.status.lock() = SearchStatus::Failed;
            }
        }
    }

    /// Execute a closure with access to the search state.
    ///
    /// Blocks while a search is running.
    pub fn with_search_state<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut SearchState) -> R,
    {
        f(&mut *self.state.lock())
    }

    fn stop_and_wait(&mut self) {
        self.stop.stop();
        self.wait();
    }

    fn spawn(&mut self) {
        let stop = StopFlag::new();
        self.stop = stop.clone();
        *self.status.lock() = SearchStatus::Running;

        let mut working = self.position.clone();
        let state = Arc::clone(&self.state);
        let status = Arc::clone(&self.status);
        let evaluation = Arc::clone(&self.evaluation);
        let info_callback = self.info_callback.clone();
        let max_depth = self.config.max_depth;
        let max_color = working.side_to_move();

        info!("search started: {max_color} to move, max depth {max_depth}");

        let spawned = thread::Builder::new()
            .name("paranoid-search".to_string())
            .stack_size(self.config.thread_stack_size)
            .spawn(move || {
                let result = panic::catch_unwind(AssertUnwindSafe(|| {
                    let mut guard = state.lock();
                    iterative_deepening(
                        &mut working,
                        &mut guard,
                        max_depth,
                        &stop,
                        info_callback.as_ref(),
                        |line| *evaluation.lock() = Some(line),
                    )
                }));

                let final_status = match result {
                    Ok(DeepeningOutcome::Completed { depth }) => {
                        info!("search completed at depth {depth}");
                        SearchStatus::Completed
                    }
                    Ok(DeepeningOutcome::Cancelled { depth }) => {
                        info!("search stopped after depth {depth}");
                        SearchStatus::Stopped
                    }
                    Err(panic_info) => {
                        let panic_msg = if let Some(s) = panic_info.downcast_ref::<String>() {
                            s.clone()
                        } else if let Some(s) = panic_info.downcast_ref::<&str>() {
                            (*s).to_string()
                        } else {
                            "Unknown panic".to_string()
                        };
                        error!("PANIC in search thread: {panic_msg}");
                        SearchStatus::Failed
                    }
                };
                *status.lock() = final_status;
            });

        match spawned {
            Ok(handle) => self.handle = Some(handle),
            Err(e) => {
                warn!("failed to spawn search thread: {e}");
                *self.status.lock() = SearchStatus::Failed;
            }
        }
    }
}

impl<P: Position> Search for ParanoidSearch<P> {
    /// Start searching the bound position. A search that is still running
    /// is stopped and joined first.
    fn start_search(&mut self) {
        self.stop_and_wait();
        self.spawn();
    }

    fn stop_search(&mut self) {
        self.stop.stop();
    }

    fn position_evaluation(&self) -> Option<PositionEvaluation> {
        self.evaluation.lock().clone()
    }
}

impl<P: Position> Drop for ParanoidSearch<P> {
    fn drop(&mut self) {
        self.stop_and_wait();
    }
}
