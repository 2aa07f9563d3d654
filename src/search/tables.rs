//! Killer-move and history tables.
//!
//! Both only influence the order in which moves are tried; they never
//! change the value a search returns.

use crate::board::{Color, Move, EMPTY_MOVE, NUM_SQUARES};

use super::constants::{KILLER_SLOTS, MAX_PLY};

/// Quiet moves that caused a cutoff, per color and ply from the root.
pub struct KillerTable {
    slots: [[[Move; KILLER_SLOTS]; MAX_PLY]; Color::COUNT],
}

impl Default for KillerTable {
    fn default() -> Self {
        Self::new()
    }
}

impl KillerTable {
    #[must_use]
    pub fn new() -> Self {
        KillerTable {
            slots: [[[EMPTY_MOVE; KILLER_SLOTS]; MAX_PLY]; Color::COUNT],
        }
    }

    /// Killers for `color` at `ply`, most recent first. Unused slots hold
    /// the null move.
    #[must_use]
    pub fn killers(&self, color: Color, ply: usize) -> [Move; KILLER_SLOTS] {
        self.slots[color.index()]
            .get(ply)
            .copied()
            .unwrap_or([EMPTY_MOVE; KILLER_SLOTS])
    }

    /// Record a cutoff move. The oldest killer is evicted when the row is
    /// full; a move already present is left where it is.
    pub fn add_killer_move(&mut self, color: Color, mv: Move, ply: usize) {
        let Some(row) = self.slots[color.index()].get_mut(ply) else {
            return;
        };
        if mv.is_null() || row.contains(&mv) {
            return;
        }
        row.rotate_right(1);
        row[0] = mv;
    }
}

/// Cutoff statistics per (color, from, to).
pub struct HistoryTable {
    entries: Vec<i32>,
}

impl Default for HistoryTable {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryTable {
    #[must_use]
    pub fn new() -> Self {
        HistoryTable {
            entries: vec![0; Color::COUNT * NUM_SQUARES * NUM_SQUARES],
        }
    }

    #[inline]
    fn index(mv: Move, color: Color) -> usize {
        (color.index() * NUM_SQUARES + mv.from().index()) * NUM_SQUARES + mv.to().index()
    }

    #[must_use]
    pub fn score(&self, mv: Move, color: Color) -> i32 {
        self.entries
            .get(Self::index(mv, color))
            .copied()
            .unwrap_or(0)
    }

    /// Credit a move that caused a cutoff with `depth³`, saturating.
    pub fn increase(&mut self, mv: Move, color: Color, depth: u32) {
        let bonus = depth.saturating_mul(depth).saturating_mul(depth);
        let bonus = i32::try_from(bonus).unwrap_or(i32::MAX);
        if let Some(entry) = self.entries.get_mut(Self::index(mv, color)) {
            *entry = entry.saturating_add(bonus);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Square;

    fn mv(from: usize, to: usize) -> Move {
        Move::quiet(Square::from_index(from), Square::from_index(to))
    }

    #[test]
    fn test_killer_insertion_order() {
        let mut killers = KillerTable::new();
        killers.add_killer_move(Color::Red, mv(20, 21), 3);
        killers.add_killer_move(Color::Red, mv(22, 23), 3);

        let row = killers.killers(Color::Red, 3);
        assert_eq!(row[0], mv(22, 23));
        assert_eq!(row[1], mv(20, 21));
        assert!(row[2].is_null());
    }

    #[test]
    fn test_killer_eviction_and_duplicates() {
        let mut killers = KillerTable::new();
        for i in 0..4 {
            killers.add_killer_move(Color::Blue, mv(20 + i, 40), 0);
        }
        // Re-adding a stored move changes nothing
        killers.add_killer_move(Color::Blue, mv(22, 40), 0);

        let row = killers.killers(Color::Blue, 0);
        assert_eq!(row, [mv(23, 40), mv(22, 40), mv(21, 40)]);
    }

    #[test]
    fn test_killers_are_per_color_and_ply() {
        let mut killers = KillerTable::new();
        killers.add_killer_move(Color::Red, mv(20, 21), 2);

        assert!(killers.killers(Color::Green, 2)[0].is_null());
        assert!(killers.killers(Color::Red, 1)[0].is_null());
        assert!(killers.killers(Color::Red, MAX_PLY + 5)[0].is_null());

        // Plies past the table are ignored
        killers.add_killer_move(Color::Red, mv(20, 21), MAX_PLY + 5);
        assert!(killers.killers(Color::Red, MAX_PLY + 5)[0].is_null());
    }

    #[test]
    fn test_history_grows_with_depth() {
        let mut history = HistoryTable::new();
        let m = mv(30, 44);

        history.increase(m, Color::Yellow, 2);
        assert_eq!(history.score(m, Color::Yellow), 8);
        history.increase(m, Color::Yellow, 3);
        assert_eq!(history.score(m, Color::Yellow), 35);
        assert_eq!(history.score(m, Color::Red), 0);
    }

    #[test]
    fn test_history_saturates() {
        let mut history = HistoryTable::new();
        let m = mv(30, 44);
        for _ in 0..3 {
            history.increase(m, Color::Red, 2000);
        }
        assert_eq!(history.score(m, Color::Red), i32::MAX);
    }
}
