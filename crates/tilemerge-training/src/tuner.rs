//! Coordinate-ascent search over the move-scoring weights.
//!
//! Each generation evaluates the [neighborhood](crate::weights::neighborhood)
//! of the current best weights and moves to the fittest candidate. The search
//! runs the full generation budget; there is no convergence check.
//!
//! # Fitness
//!
//! A candidate's fitness is the mean final score of
//! [`TunerParams::playouts_per_candidate`] games played with a
//! [`ScorePolicy`] using the candidate's weights.
//!
//! All candidates of one generation play the same set of games: the game
//! seeds are drawn once per generation from the tuner seed. Candidates are
//! therefore compared on identical tile sequences, and a run is reproducible
//! from its seed.
//!
//! # Parallelization
//!
//! Candidates are evaluated on scoped threads, one per candidate. Each thread
//! owns its games; nothing is shared between them except the read-only seeds.

use std::thread;

use rand::Rng as _;
use serde::Serialize;
use tilemerge_engine::{GameConfig, RngSeed};
use tilemerge_solver::{PlayError, move_scorer::ScoreWeights, playout, policy::ScorePolicy};
use tilemerge_stats::descriptive::DescriptiveStats;

use crate::weights;

/// Tuning parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TunerParams {
    /// Number of generations to run.
    pub generations: usize,
    /// Games played to evaluate one candidate.
    pub playouts_per_candidate: usize,
    /// Amount added to and subtracted from each weight to build neighbors.
    pub step: i32,
    /// Weights the search starts from.
    pub start: ScoreWeights,
    pub config: GameConfig,
}

impl TunerParams {
    /// Starting point found by earlier tuning runs.
    pub const START_WEIGHTS: ScoreWeights = ScoreWeights {
        empty_space: 0,
        merge: 180,
    };
    pub const DEFAULT_STEP: i32 = 5;
}

impl Default for TunerParams {
    fn default() -> Self {
        Self {
            generations: 10,
            playouts_per_candidate: 100,
            step: Self::DEFAULT_STEP,
            start: Self::START_WEIGHTS,
            config: GameConfig::default(),
        }
    }
}

/// A weight vector and its measured fitness.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Candidate {
    pub weights: ScoreWeights,
    /// Mean final score.
    pub fitness: f64,
}

/// Outcome of one generation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationReport {
    pub generation: usize,
    /// Candidates in neighborhood order, the previous best first.
    pub candidates: Vec<Candidate>,
    /// Index of the selected candidate in `candidates`.
    pub best_index: usize,
}

impl GenerationReport {
    #[must_use]
    pub fn best(&self) -> &Candidate {
        &self.candidates[self.best_index]
    }

    /// `true` if the previous best was kept.
    #[must_use]
    pub fn is_stagnant(&self) -> bool {
        self.best_index == 0
    }
}

/// Outcome of a whole tuning run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TuningResult {
    /// Best weights after the last generation (the start weights if no
    /// generation ran).
    pub best: ScoreWeights,
    /// Fitness of `best`; `None` if no generation ran.
    pub fitness: Option<f64>,
    pub generations: Vec<GenerationReport>,
}

/// Runs the coordinate-ascent search.
pub fn tune(params: &TunerParams, seed: RngSeed) -> Result<TuningResult, PlayError> {
    let mut rng = seed.to_rng();
    let mut best = params.start;
    let mut fitness = None;
    let mut generations = Vec::with_capacity(params.generations);

    for generation in 0..params.generations {
        log::info!("Starting generation {generation}");
        let game_seeds = (0..params.playouts_per_candidate)
            .map(|_| rng.random())
            .collect::<Vec<RngSeed>>();

        let candidates = evaluate_neighborhood(
            params.config,
            &weights::neighborhood(best, params.step),
            &game_seeds,
        )?;
        for candidate in &candidates {
            log::debug!(
                "generation {generation}: {:?} -> {:.2}",
                candidate.weights,
                candidate.fitness
            );
        }

        let scores = candidates.iter().map(|c| c.fitness).collect::<Vec<_>>();
        let best_index = weights::select_best(&scores).unwrap_or(0);
        let report = GenerationReport {
            generation,
            candidates,
            best_index,
        };
        best = report.best().weights;
        fitness = Some(report.best().fitness);
        log::info!(
            "Results: empty_space={} merge={} fitness={:.2}{}",
            best.empty_space,
            best.merge,
            report.best().fitness,
            if report.is_stagnant() { " (unchanged)" } else { "" }
        );
        generations.push(report);
    }
    log::info!("Finished!");

    Ok(TuningResult {
        best,
        fitness,
        generations,
    })
}

/// Evaluates every candidate on its own thread.
///
/// Returns the candidates in input order.
pub fn evaluate_neighborhood(
    config: GameConfig,
    neighborhood: &[ScoreWeights],
    game_seeds: &[RngSeed],
) -> Result<Vec<Candidate>, PlayError> {
    let mut results: Vec<Result<f64, PlayError>> = Vec::with_capacity(neighborhood.len());
    results.resize_with(neighborhood.len(), || Ok(0.0));

    thread::scope(|s| {
        for (weights, slot) in neighborhood.iter().zip(&mut results) {
            s.spawn(move || *slot = evaluate_fitness(config, *weights, game_seeds));
        }
    });

    neighborhood
        .iter()
        .zip(results)
        .map(|(weights, fitness)| {
            Ok(Candidate {
                weights: *weights,
                fitness: fitness?,
            })
        })
        .collect()
}

/// Mean final score of one game per seed, played with [`ScorePolicy`].
///
/// Returns 0 when `game_seeds` is empty.
#[expect(clippy::cast_precision_loss)]
pub fn evaluate_fitness(
    config: GameConfig,
    weights: ScoreWeights,
    game_seeds: &[RngSeed],
) -> Result<f64, PlayError> {
    let mut scores = Vec::with_capacity(game_seeds.len());
    for seed in game_seeds {
        let mut policy = ScorePolicy::new(weights);
        let (_game, summary) = playout::play_new_game(config, *seed, &mut policy)?;
        scores.push(summary.score as f64);
    }
    Ok(DescriptiveStats::new(scores).map_or(0.0, |stats| stats.mean))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_params(generations: usize) -> TunerParams {
        TunerParams {
            generations,
            playouts_per_candidate: 3,
            ..TunerParams::default()
        }
    }

    #[test]
    fn test_default_params() {
        let params = TunerParams::default();
        assert_eq!(
            params.start,
            ScoreWeights {
                empty_space: 0,
                merge: 180
            }
        );
        assert_eq!(params.step, 5);
    }

    #[test]
    fn test_runs_full_generation_budget() {
        let result = tune(&small_params(3), RngSeed::from_u128(1)).unwrap();
        assert_eq!(result.generations.len(), 3);
        for (i, report) in result.generations.iter().enumerate() {
            assert_eq!(report.generation, i);
            assert_eq!(report.candidates.len(), 5);
        }
    }

    #[test]
    fn test_each_generation_starts_from_previous_best() {
        let result = tune(&small_params(3), RngSeed::from_u128(2)).unwrap();
        let mut expected_start = TunerParams::START_WEIGHTS;
        for report in &result.generations {
            assert_eq!(report.candidates[0].weights, expected_start);
            expected_start = report.best().weights;
        }
        assert_eq!(result.best, expected_start);
        assert_eq!(
            result.fitness,
            result.generations.last().map(|r| r.best().fitness)
        );
    }

    #[test]
    fn test_selected_candidate_has_max_fitness() {
        let result = tune(&small_params(2), RngSeed::from_u128(3)).unwrap();
        for report in &result.generations {
            let max = report
                .candidates
                .iter()
                .map(|c| c.fitness)
                .fold(f64::MIN, f64::max);
            assert!((report.best().fitness - max).abs() < f64::EPSILON);
            // no earlier candidate reaches the same fitness
            assert!(
                report.candidates[..report.best_index]
                    .iter()
                    .all(|c| c.fitness < max)
            );
        }
    }

    #[test]
    fn test_same_seed_same_result() {
        let a = tune(&small_params(2), RngSeed::from_u128(4)).unwrap();
        let b = tune(&small_params(2), RngSeed::from_u128(4)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_zero_generations_keeps_start() {
        let result = tune(&small_params(0), RngSeed::from_u128(5)).unwrap();
        assert_eq!(result.best, TunerParams::START_WEIGHTS);
        assert!(result.fitness.is_none());
        assert!(result.generations.is_empty());
    }

    #[test]
    fn test_fitness_is_mean_score() {
        let config = GameConfig::default();
        let weights = ScoreWeights::SIMPLE;
        let seeds = [RngSeed::from_u128(10), RngSeed::from_u128(11)];
        let total: u64 = seeds
            .iter()
            .map(|seed| {
                let mut policy = ScorePolicy::new(weights);
                playout::play_new_game(config, *seed, &mut policy)
                    .unwrap()
                    .1
                    .score
            })
            .sum();
        let fitness = evaluate_fitness(config, weights, &seeds).unwrap();
        #[expect(clippy::cast_precision_loss)]
        let expected = total as f64 / 2.0;
        assert!((fitness - expected).abs() < 1e-9);
        assert!(evaluate_fitness(config, weights, &[]).unwrap().abs() < f64::EPSILON);
    }

    #[test]
    fn test_identical_candidates_score_identically() {
        let w = ScoreWeights::SIMPLE;
        let seeds = [RngSeed::from_u128(7), RngSeed::from_u128(8)];
        let candidates = evaluate_neighborhood(GameConfig::default(), &[w, w], &seeds).unwrap();
        assert_eq!(candidates[0], candidates[1]);
    }
}
