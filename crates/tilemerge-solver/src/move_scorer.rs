//! Move scoring: evaluating a direction without playing it.
//!
//! The score of a move is a weighted sum over every line the move resolves:
//!
//! ```text
//! score = Σ_lines (empty_space × internal_gaps(line) + merge × adjacent_pairs(line))
//! ```
//!
//! Where:
//!
//! - `internal_gaps` counts empty cells that lie before some tile in
//!   traversal order. Trailing empties do not count, so the metric rewards
//!   how much the move would compact rather than how empty the line is.
//! - `adjacent_pairs` counts neighbouring equal tiles after compaction. A run
//!   of three equal tiles counts two pairs, even though only one merge
//!   happens.
//!
//! Scoring never mutates the board and ignores the tile a move would spawn.

use serde::{Deserialize, Serialize};
use tilemerge_engine::{Board, Direction, compact, internal_gaps, traversal_order};

/// Weights of the linear move-scoring model.
///
/// # Example
///
/// ```
/// use tilemerge_engine::{Board, Direction};
/// use tilemerge_solver::move_scorer::ScoreWeights;
///
/// let board = Board::from_rows([
///     [Some(2), None, Some(2), None],
///     [None; 4],
///     [None; 4],
///     [None; 4],
/// ]);
/// let weights = ScoreWeights { empty_space: 10, merge: 100 };
///
/// // one internal gap, one pair
/// assert_eq!(weights.score_move(&board, Direction::Left), 110);
/// // traversed right to left: [_, 2, _, 2] has two internal gaps
/// assert_eq!(weights.score_move(&board, Direction::Right), 120);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScoreWeights {
    /// Reward per internal gap the move would close.
    pub empty_space: i32,
    /// Reward per adjacent equal pair after compaction.
    pub merge: i32,
}

impl ScoreWeights {
    /// Fixed weights used by the simple score-based policy.
    pub const SIMPLE: Self = Self {
        empty_space: 10,
        merge: 100,
    };

    /// Number of weight dimensions.
    pub const DIMENSIONS: usize = 2;

    /// Returns a copy with dimension `index` (0 = empty space, 1 = merge)
    /// shifted by `delta`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= Self::DIMENSIONS`.
    #[must_use]
    pub fn with_offset(self, index: usize, delta: i32) -> Self {
        let mut weights = self;
        match index {
            0 => weights.empty_space += delta,
            1 => weights.merge += delta,
            _ => panic!("weight index out of range: {index}"),
        }
        weights
    }

    /// Scores a move in `direction` on `board`.
    #[must_use]
    pub fn score_move(&self, board: &Board, direction: Direction) -> i64 {
        score_move(board, direction, *self)
    }
}

/// Scores a move in `direction` on `board` with the given weights.
#[must_use]
pub fn score_move(board: &Board, direction: Direction, weights: ScoreWeights) -> i64 {
    (0..board.size())
        .map(|index| {
            let line = traversal_order(
                &board.line(direction.axis(), index),
                direction.is_reversed(),
            );
            let gaps = count_as_i64(internal_gaps(&line));
            let pairs = count_as_i64(adjacent_pairs(&compact(&line)));
            gaps * i64::from(weights.empty_space) + pairs * i64::from(weights.merge)
        })
        .sum()
}

/// Scores all four directions, in [`Direction::ALL`] order.
#[must_use]
pub fn score_all(board: &Board, weights: ScoreWeights) -> [(Direction, i64); 4] {
    Direction::ALL.map(|dir| (dir, score_move(board, dir, weights)))
}

/// Counts neighbouring equal values.
///
/// ```
/// use tilemerge_solver::move_scorer::adjacent_pairs;
///
/// assert_eq!(adjacent_pairs(&[2, 2, 2]), 2);
/// assert_eq!(adjacent_pairs(&[2, 4, 2, 4]), 0);
/// assert_eq!(adjacent_pairs(&[4, 4, 8, 8]), 2);
/// ```
#[must_use]
pub fn adjacent_pairs(tiles: &[u32]) -> usize {
    tiles.windows(2).filter(|pair| pair[0] == pair[1]).count()
}

fn count_as_i64(count: usize) -> i64 {
    i64::try_from(count).unwrap_or(i64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(rows: [[u32; 4]; 4]) -> Board {
        Board::from_rows(rows.map(|row| row.map(|v| if v == 0 { None } else { Some(v) })))
    }

    const GAPS_ONLY: ScoreWeights = ScoreWeights {
        empty_space: 1,
        merge: 0,
    };
    const PAIRS_ONLY: ScoreWeights = ScoreWeights {
        empty_space: 0,
        merge: 1,
    };

    #[test]
    fn test_gap_metric_ignores_trailing_empties() {
        let b = board([[2, 0, 4, 0], [0; 4], [0; 4], [0; 4]]);
        assert_eq!(score_move(&b, Direction::Left, GAPS_ONLY), 1);
        // reversed: [_, 4, _, 2] -> 2 gaps
        assert_eq!(score_move(&b, Direction::Right, GAPS_ONLY), 2);
        // columns: col 0 [2,_,_,_] 0 gaps, col 2 [4,_,_,_] 0 gaps
        assert_eq!(score_move(&b, Direction::Up, GAPS_ONLY), 0);
        // reversed columns: [_,_,_,2] and [_,_,_,4] -> 3 each
        assert_eq!(score_move(&b, Direction::Down, GAPS_ONLY), 6);
    }

    #[test]
    fn test_pair_metric_counts_overlapping_pairs() {
        let b = board([[2, 2, 2, 0], [8, 0, 8, 0], [0; 4], [0; 4]]);
        assert_eq!(score_move(&b, Direction::Left, PAIRS_ONLY), 3);
        assert_eq!(score_move(&b, Direction::Right, PAIRS_ONLY), 3);
        assert_eq!(score_move(&b, Direction::Up, PAIRS_ONLY), 0);
    }

    #[test]
    fn test_scoring_does_not_mutate_board() {
        let b = board([[2, 2, 0, 4], [0, 4, 4, 0], [8, 0, 0, 8], [2, 4, 8, 16]]);
        let copy = b.clone();
        for dir in Direction::ALL {
            let _ = score_move(&b, dir, ScoreWeights::SIMPLE);
        }
        assert_eq!(b, copy);
    }

    #[test]
    fn test_negative_weights() {
        let b = board([[2, 0, 2, 0], [0; 4], [0; 4], [0; 4]]);
        let weights = ScoreWeights {
            empty_space: -5,
            merge: 180,
        };
        assert_eq!(score_move(&b, Direction::Left, weights), 175);
    }

    #[test]
    fn test_score_all_order() {
        let b = board([[2, 0, 0, 0], [0; 4], [0; 4], [0; 4]]);
        let scores = score_all(&b, GAPS_ONLY);
        let dirs = scores.map(|(dir, _)| dir);
        assert_eq!(dirs, Direction::ALL);
        assert_eq!(scores.map(|(_, s)| s), [0, 3, 0, 3]);
    }

    #[test]
    fn test_weight_dimensions() {
        let w = ScoreWeights {
            empty_space: 0,
            merge: 180,
        };
        assert_eq!(w.with_offset(0, -5).empty_space, -5);
        assert_eq!(w.with_offset(1, 5).merge, 185);
        assert_eq!(w.with_offset(1, 5).empty_space, 0);
    }
}
