//! Running many independent games under one policy configuration.
//!
//! Every run gets a fresh [`Game`](tilemerge_engine::Game) and a fresh
//! policy instance, each seeded from a per-run seed drawn from the batch
//! seed. Runs share no mutable state, and run `n` completes before run
//! `n + 1` starts.
//!
//! The batch records the largest tile reached in each game and aggregates
//! them into a [`ValueTally`], along with descriptive statistics of the final
//! scores.
//!
//! # Example
//!
//! ```
//! use tilemerge_engine::RngSeed;
//! use tilemerge_solver::{
//!     batch_runner::{BatchParams, run_batch},
//!     move_scorer::ScoreWeights,
//!     policy::PolicyKind,
//! };
//!
//! let params = BatchParams { runs: 20, ..BatchParams::default() };
//! let report = run_batch(&params, RngSeed::from_u128(1), |seed| {
//!     PolicyKind::Circular.build(seed, ScoreWeights::SIMPLE)
//! })?;
//!
//! assert_eq!(report.total_games, 20);
//! assert_eq!(report.max_value_counts.total(), 20);
//! assert_eq!(report.max_value_counts.max_value(), Some(report.max_value));
//! # Ok::<(), tilemerge_solver::PlayError>(())
//! ```

use rand::Rng as _;
use serde::Serialize;
use tilemerge_engine::{GameConfig, RngSeed};
use tilemerge_stats::{descriptive::DescriptiveStats, tally::ValueTally};

use crate::{PlayError, playout, policy::DirectionPolicy};

/// Parameters of a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchParams {
    /// Number of games to play.
    pub runs: usize,
    /// Log a progress line every this many games (0 disables progress).
    pub progress_interval: usize,
    pub config: GameConfig,
}

impl Default for BatchParams {
    fn default() -> Self {
        Self {
            runs: 1000,
            progress_interval: 1000,
            config: GameConfig::default(),
        }
    }
}

/// Aggregated outcome of a batch.
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub total_games: usize,
    /// Largest tile reached across all games (0 if no games were played).
    pub max_value: u32,
    /// Largest tile of each game → number of games.
    pub max_value_counts: ValueTally,
    pub wins: usize,
    /// Statistics of final scores; `None` if no games were played.
    pub score_stats: Option<DescriptiveStats>,
}

/// Plays `params.runs` independent games.
///
/// `make_policy` is called once per game with a per-game seed and must
/// return a fresh policy, so stateful policies never carry state across games.
#[expect(clippy::cast_precision_loss)]
pub fn run_batch<F, P>(
    params: &BatchParams,
    seed: RngSeed,
    mut make_policy: F,
) -> Result<BatchReport, PlayError>
where
    F: FnMut(RngSeed) -> P,
    P: DirectionPolicy,
{
    let mut rng = seed.to_rng();
    let mut max_value_counts = ValueTally::new();
    let mut scores = Vec::with_capacity(params.runs);
    let mut wins = 0;

    for i in 0..params.runs {
        if params.progress_interval > 0 && i % params.progress_interval == 0 {
            log::info!("Running game {i}");
        }
        let game_seed: RngSeed = rng.random();
        let policy_seed: RngSeed = rng.random();
        let mut policy = make_policy(policy_seed);
        let (_game, summary) = playout::play_new_game(params.config, game_seed, &mut policy)?;
        log::debug!(
            "game {i}: largest {} score {} in {} turns",
            summary.largest_value,
            summary.score,
            summary.turns
        );

        max_value_counts.record(summary.largest_value);
        scores.push(summary.score as f64);
        if summary.won {
            wins += 1;
        }
    }

    let report = BatchReport {
        total_games: params.runs,
        max_value: max_value_counts.max_value().unwrap_or(0),
        max_value_counts,
        wins,
        score_stats: DescriptiveStats::new(scores),
    };
    log::info!(
        "Results - Total Games: {} Max Value: {}",
        report.total_games,
        report.max_value
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        move_scorer::ScoreWeights,
        policy::{AlternatingPolicy, PolicyKind},
    };

    fn params(runs: usize) -> BatchParams {
        BatchParams {
            runs,
            progress_interval: 0,
            config: GameConfig::default(),
        }
    }

    #[test]
    fn test_report_counts_every_game() {
        let report = run_batch(&params(30), RngSeed::from_u128(9), |seed| {
            PolicyKind::Random.build(seed, ScoreWeights::SIMPLE)
        })
        .unwrap();

        assert_eq!(report.total_games, 30);
        assert_eq!(report.max_value_counts.total(), 30);
        assert_eq!(report.max_value_counts.max_value(), Some(report.max_value));
        assert!(report.max_value >= 8);
        assert!(
            report
                .max_value_counts
                .iter()
                .all(|(value, _)| value.is_power_of_two())
        );
        assert_eq!(report.score_stats.as_ref().unwrap().count, 30);
    }

    #[test]
    fn test_same_seed_same_report() {
        let run = || {
            run_batch(&params(10), RngSeed::from_u128(21), |seed| {
                PolicyKind::Random.build(seed, ScoreWeights::SIMPLE)
            })
            .unwrap()
        };
        let a = run();
        let b = run();
        assert_eq!(a.max_value_counts, b.max_value_counts);
        assert_eq!(a.score_stats, b.score_stats);
    }

    #[test]
    fn test_fresh_policy_per_game() {
        let mut built = 0;
        let _ = run_batch(&params(5), RngSeed::from_u128(4), |_| {
            built += 1;
            AlternatingPolicy::left_corner()
        })
        .unwrap();
        assert_eq!(built, 5);
    }

    #[test]
    fn test_empty_batch() {
        let report = run_batch(&params(0), RngSeed::from_u128(0), |seed| {
            PolicyKind::Circular.build(seed, ScoreWeights::SIMPLE)
        })
        .unwrap();
        assert_eq!(report.total_games, 0);
        assert_eq!(report.max_value, 0);
        assert!(report.score_stats.is_none());
    }

    #[test]
    fn test_report_serializes() {
        let report = run_batch(&params(3), RngSeed::from_u128(5), |seed| {
            PolicyKind::SimpleScore.build(seed, ScoreWeights::SIMPLE)
        })
        .unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["total_games"], 3);
        assert!(json["max_value_counts"].is_object());
    }
}
