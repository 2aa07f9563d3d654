#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::tt::DEFAULT_TT_SIZE_LOG2;

use super::constants::{DEFAULT_MAX_DEPTH, DEFAULT_STACK_SIZE};

/// Configuration for a paranoid search.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    /// Deepest iteration to run
    pub max_depth: u32,
    /// Each color's transposition table holds `2^tt_size_log2` slots
    pub tt_size_log2: u32,
    /// Stack size of the background search thread in bytes
    pub thread_stack_size: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            max_depth: DEFAULT_MAX_DEPTH,
            tt_size_log2: DEFAULT_TT_SIZE_LOG2,
            thread_stack_size: DEFAULT_STACK_SIZE,
        }
    }
}

impl SearchConfig {
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    #[must_use]
    pub fn with_tt_size_log2(mut self, tt_size_log2: u32) -> Self {
        self.tt_size_log2 = tt_size_log2;
        self
    }

    #[must_use]
    pub fn with_thread_stack_size(mut self, bytes: usize) -> Self {
        self.thread_stack_size = bytes;
        self
    }
}
