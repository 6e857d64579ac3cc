//! Weight neighborhoods and candidate selection.
//!
//! - **Neighborhood**: [`neighborhood`] lists the current weights followed by
//!   every single-dimension shift by `±step`
//! - **Selection**: [`select_best`] picks the fittest candidate, keeping the
//!   earliest one on ties

use tilemerge_solver::move_scorer::ScoreWeights;

/// Builds the candidates around `best`.
///
/// The first candidate is `best` unchanged, followed by `+step` and `-step`
/// for each dimension in order, giving `1 + 2 * DIMENSIONS` candidates.
///
/// # Examples
///
/// ```
/// use tilemerge_solver::move_scorer::ScoreWeights;
/// use tilemerge_training::weights;
///
/// let best = ScoreWeights { empty_space: 0, merge: 180 };
/// let candidates = weights::neighborhood(best, 5);
///
/// assert_eq!(candidates.len(), 5);
/// assert_eq!(candidates[0], best);
/// assert_eq!(candidates[1], ScoreWeights { empty_space: 5, merge: 180 });
/// assert_eq!(candidates[2], ScoreWeights { empty_space: -5, merge: 180 });
/// assert_eq!(candidates[3], ScoreWeights { empty_space: 0, merge: 185 });
/// assert_eq!(candidates[4], ScoreWeights { empty_space: 0, merge: 175 });
/// ```
#[must_use]
pub fn neighborhood(best: ScoreWeights, step: i32) -> Vec<ScoreWeights> {
    let mut candidates = Vec::with_capacity(1 + 2 * ScoreWeights::DIMENSIONS);
    candidates.push(best);
    for i in 0..ScoreWeights::DIMENSIONS {
        candidates.push(best.with_offset(i, step));
        candidates.push(best.with_offset(i, -step));
    }
    candidates
}

/// Returns the index of the highest fitness.
///
/// Ties resolve to the earliest index. NaN fitness never wins. Returns `None`
/// for an empty slice.
#[must_use]
pub fn select_best(fitness: &[f64]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, &value) in fitness.iter().enumerate() {
        match best {
            Some(b) if value > fitness[b] => best = Some(i),
            None if !value.is_nan() => best = Some(i),
            _ => {}
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neighborhood_allows_negative_weights() {
        let candidates = neighborhood(
            ScoreWeights {
                empty_space: 0,
                merge: 0,
            },
            10,
        );
        assert!(candidates.iter().any(|w| w.empty_space == -10));
        assert!(candidates.iter().any(|w| w.merge == -10));
    }

    #[test]
    fn test_neighborhood_changes_one_dimension_at_a_time() {
        let best = ScoreWeights {
            empty_space: 3,
            merge: 7,
        };
        for w in &neighborhood(best, 2)[1..] {
            let changed = usize::from(w.empty_space != best.empty_space)
                + usize::from(w.merge != best.merge);
            assert_eq!(changed, 1);
        }
    }

    #[test]
    fn test_select_best_prefers_earliest_tie() {
        assert_eq!(select_best(&[1.0, 3.0, 3.0, 2.0]), Some(1));
        assert_eq!(select_best(&[5.0, 5.0]), Some(0));
    }

    #[test]
    fn test_select_best_edge_cases() {
        assert_eq!(select_best(&[]), None);
        assert_eq!(select_best(&[f64::NAN, 1.0]), Some(1));
        assert_eq!(select_best(&[2.0, f64::NAN]), Some(0));
        assert_eq!(select_best(&[f64::NAN]), None);
    }
}
