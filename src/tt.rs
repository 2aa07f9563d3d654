//! Transposition table for caching search results.
//!
//! Direct-mapped: every hash owns exactly one slot, `hash & (capacity - 1)`.
//! A probe only hits when the stored key equals the full 64-bit hash, so a
//! slot collision is just a miss. Entries are never deleted, only replaced.
//!
//! The search keeps one table per color; a table is owned by one search
//! thread at a time, so slots are plain values rather than atomics.

use crate::board::Move;

/// Entries older than this many plies may be replaced regardless of depth
pub const STALE_PLIES: u32 = 40;

/// Default table size: 2^20 slots
pub const DEFAULT_TT_SIZE_LOG2: u32 = 20;

/// `game_ply` value marking a slot that has never been written
const EMPTY_PLY: u32 = u32::MAX;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NodeType {
    Exact,      // Score is the exact value
    LowerBound, // Score is at least this value (failed high - score >= beta)
    UpperBound, // Score is at most this value (failed low - score <= alpha)
}

/// A cached search result
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TTEntry {
    pub key: u64,
    pub best_move: Move,
    pub depth: u8,
    pub score: i32,
    pub node_type: NodeType,
    pub game_ply: u32,
}

impl TTEntry {
    const EMPTY: TTEntry = TTEntry {
        key: 0,
        best_move: Move::null(),
        depth: 0,
        score: 0,
        node_type: NodeType::UpperBound,
        game_ply: EMPTY_PLY,
    };

    #[inline]
    fn is_empty(&self) -> bool {
        self.game_ply == EMPTY_PLY
    }

    pub fn depth(&self) -> u32 {
        u32::from(self.depth)
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn node_type(&self) -> NodeType {
        self.node_type
    }

    /// The stored best move, if one was recorded
    pub fn best_move(&self) -> Option<Move> {
        if self.best_move.is_null() {
            None
        } else {
            Some(self.best_move)
        }
    }

    /// Replacement rule, checked in order: stale entry, at least as deep
    /// without downgrading an exact score, or an exact score replacing a bound.
    fn should_replace(&self, depth: u8, node_type: NodeType, game_ply: u32) -> bool {
        if self.is_empty() {
            return true;
        }
        if game_ply > self.game_ply.saturating_add(STALE_PLIES) {
            return true;
        }
        if depth >= self.depth
            && (self.node_type != NodeType::Exact || node_type == NodeType::Exact)
        {
            return true;
        }
        self.node_type != NodeType::Exact && node_type == NodeType::Exact
    }
}

/// Direct-mapped transposition table.
pub struct TranspositionTable {
    entries: Vec<TTEntry>,
    mask: usize,
}

impl Default for TranspositionTable {
    fn default() -> Self {
        Self::new(DEFAULT_TT_SIZE_LOG2)
    }
}

impl TranspositionTable {
    /// Create a table with `2^size_log2` slots.
    #[must_use]
    pub fn new(size_log2: u32) -> Self {
        let capacity = 1usize << size_log2.min(usize::BITS - 1);
        TranspositionTable {
            entries: vec![TTEntry::EMPTY; capacity],
            mask: capacity - 1,
        }
    }

    #[inline]
    fn index(&self, hash: u64) -> usize {
        (hash as usize) & self.mask
    }

    /// Number of slots
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.entries.len()
    }

    /// Look up the entry for `hash`. Returns `None` on an empty slot or when
    /// the slot holds a different position.
    #[must_use]
    pub fn get(&self, hash: u64) -> Option<TTEntry> {
        let entry = self.entries[self.index(hash)];
        if !entry.is_empty() && entry.key == hash {
            Some(entry)
        } else {
            None
        }
    }

    /// Store a search result, subject to the replacement rule.
    pub fn put(
        &mut self,
        hash: u64,
        best_move: Move,
        depth: u32,
        score: i32,
        node_type: NodeType,
        game_ply: u32,
    ) {
        let depth = depth.min(u32::from(u8::MAX)) as u8;
        let idx = self.index(hash);
        let slot = &mut self.entries[idx];

        if slot.should_replace(depth, node_type, game_ply) {
            *slot = TTEntry {
                key: hash,
                best_move,
                depth,
                score,
                node_type,
                game_ply,
            };
        }
    }

    /// Returns table fullness in per mille (0-1000).
    #[must_use]
    pub fn hashfull_per_mille(&self) -> u32 {
        // Sample the first 1000 slots
        let sample_size = self.entries.len().min(1000);
        let occupied = self
            .entries
            .iter()
            .take(sample_size)
            .filter(|e| !e.is_empty())
            .count();

        ((occupied as u64 * 1000) / sample_size as u64) as u32
    }
}
