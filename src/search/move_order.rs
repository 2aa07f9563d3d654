//! Move ordering for search.

use crate::board::{Color, Move, MoveList, EMPTY_MOVE, MAX_MOVES};

use super::constants::{CAPTURE_SCORE, KILLER_SCORE, KILLER_SLOTS, QUIET_SCORE, TT_MOVE_SCORE};
use super::tables::HistoryTable;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct ScoredMove {
    pub mv: Move,
    pub score: i64,
}

/// Fixed-size list of scored moves to avoid heap allocation.
#[derive(Clone, Debug)]
pub(crate) struct ScoredMoveList {
    moves: [ScoredMove; MAX_MOVES],
    len: usize,
}

impl ScoredMoveList {
    pub fn new() -> Self {
        ScoredMoveList {
            moves: [ScoredMove {
                mv: EMPTY_MOVE,
                score: 0,
            }; MAX_MOVES],
            len: 0,
        }
    }

    #[inline]
    pub fn push(&mut self, mv: Move, score: i64) {
        if self.len < MAX_MOVES {
            self.moves[self.len] = ScoredMove { mv, score };
            self.len += 1;
        }
    }

    pub fn as_slice(&self) -> &[ScoredMove] {
        &self.moves[..self.len]
    }

    /// Sort moves by score in descending order. Equal scores keep their
    /// generation order.
    pub fn sort_by_score_desc(&mut self) {
        self.moves[..self.len].sort_by(|a, b| b.score.cmp(&a.score));
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ScoredMove> {
        self.as_slice().iter()
    }
}

/// Order moves: TT move, killers for this ply, captures, then quiet moves
/// by history score.
pub(crate) fn order_moves(
    moves: &MoveList,
    tt_move: Move,
    killers: &[Move; KILLER_SLOTS],
    history: &HistoryTable,
    color: Color,
) -> ScoredMoveList {
    let mut scored = ScoredMoveList::new();
    for &m in moves {
        let score = if !tt_move.is_null() && m == tt_move {
            TT_MOVE_SCORE
        } else if let Some(slot) = killers.iter().position(|&k| !k.is_null() && k == m) {
            KILLER_SCORE + (KILLER_SLOTS - slot) as i64
        } else if m.is_capture() {
            CAPTURE_SCORE
        } else {
            QUIET_SCORE + i64::from(history.score(m, color))
        };
        scored.push(m, score);
    }
    scored.sort_by_score_desc();
    scored
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Square;

    fn quiet(n: usize) -> Move {
        Move::quiet(Square::from_index(n), Square::from_index(n + 14))
    }

    fn capture(n: usize) -> Move {
        Move::capture(Square::from_index(n), Square::from_index(n + 14))
    }

    #[test]
    fn test_ordering_tiers() {
        let moves: MoveList = [quiet(20), capture(21), quiet(22), quiet(23), capture(24)]
            .into_iter()
            .collect();

        let mut history = HistoryTable::new();
        history.increase(quiet(23), Color::Red, 2000);

        let killers = [quiet(22), EMPTY_MOVE, EMPTY_MOVE];
        let ordered = order_moves(&moves, capture(24), &killers, &history, Color::Red);
        let order: Vec<Move> = ordered.iter().map(|s| s.mv).collect();

        assert_eq!(ordered.as_slice().len(), 5);
        assert_eq!(
            order,
            vec![capture(24), quiet(22), capture(21), quiet(23), quiet(20)]
        );
    }

    #[test]
    fn test_history_is_per_color() {
        let moves: MoveList = [quiet(20), quiet(22)].into_iter().collect();
        let mut history = HistoryTable::new();
        history.increase(quiet(22), Color::Blue, 3);

        let none = [EMPTY_MOVE; KILLER_SLOTS];
        let red = order_moves(&moves, EMPTY_MOVE, &none, &history, Color::Red);
        let blue = order_moves(&moves, EMPTY_MOVE, &none, &history, Color::Blue);

        assert_eq!(red.as_slice()[0].mv, quiet(20));
        assert_eq!(blue.as_slice()[0].mv, quiet(22));
    }
}
