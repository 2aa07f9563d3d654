//! Search constants.

// ============================================================================
// SCORES
// ============================================================================

/// Score of a position where the searching color has won
pub const WIN_SCORE: i32 = 1_000_000;

/// Score of a position where the searching color has been eliminated
pub const LOSS_SCORE: i32 = -WIN_SCORE;

/// Initial window bound; strictly outside every reachable score
pub(crate) const INF: i32 = WIN_SCORE + 1;

// ============================================================================
// SEARCH LIMITS
// ============================================================================

/// Deepest iteration run by default
pub const DEFAULT_MAX_DEPTH: u32 = 20;

/// Plies from the root tracked by the killer table
pub const MAX_PLY: usize = 64;

/// Killer moves remembered per color and ply
pub const KILLER_SLOTS: usize = 3;

/// Search thread stack size (32 MB)
pub const DEFAULT_STACK_SIZE: usize = 32 * 1024 * 1024;

// ============================================================================
// MOVE ORDERING PRIORITIES
// ============================================================================
// Tiers occupy the high 32 bits so a saturated history score can never
// outrank a capture. Ordered: TT > killers > captures > quiet by history.

const TIER_SHIFT: u32 = 32;

/// Hash move (from transposition table) - highest priority
pub(crate) const TT_MOVE_SCORE: i64 = 4 << TIER_SHIFT;

/// Killer moves; the most recent killer gets the highest offset
pub(crate) const KILLER_SCORE: i64 = 3 << TIER_SHIFT;

/// Captures, in generation order
pub(crate) const CAPTURE_SCORE: i64 = 2 << TIER_SHIFT;

/// Quiet moves, offset by their history score
pub(crate) const QUIET_SCORE: i64 = 1 << TIER_SHIFT;
