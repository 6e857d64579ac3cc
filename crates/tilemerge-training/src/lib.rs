//! Tuning the move-scoring weights by coordinate ascent.
//!
//! This crate searches the two weights of
//! [`ScoreWeights`](tilemerge_solver::move_scorer::ScoreWeights) for
//! combinations that make the score-based policy reach higher final scores.
//!
//! # How Tuning Works
//!
//! 1. **Neighborhood** - Build candidates around the current best: the best
//!    itself, then each weight shifted up and down by a fixed step
//! 2. **Evaluation** - Each candidate plays a fixed number of games with the
//!    score-based policy
//! 3. **Fitness** - The mean final score of those games
//! 4. **Selection** - The fittest candidate becomes the new best; on a tie the
//!    earlier candidate wins, so "no change" is kept over an equal neighbor
//! 5. **Repeat** - For a fixed number of generations
//!
//! # Architecture
//!
//! ```text
//! Tuner (generations)
//!     ↓ builds
//! Weight Neighborhood (candidates)
//!     ↓ evaluated by
//! Playouts with ScorePolicy (tilemerge-solver)
//!     ↓ produce
//! Fitness (mean final score)
//!     ↓ guides
//! Selection
//! ```
//!
//! # Example
//!
//! ```
//! use tilemerge_engine::RngSeed;
//! use tilemerge_training::tuner::{TunerParams, tune};
//!
//! let params = TunerParams {
//!     generations: 1,
//!     playouts_per_candidate: 2,
//!     ..TunerParams::default()
//! };
//! let result = tune(&params, RngSeed::from_u128(3))?;
//!
//! assert_eq!(result.generations.len(), 1);
//! assert_eq!(result.generations[0].candidates.len(), 5);
//! # Ok::<(), tilemerge_solver::PlayError>(())
//! ```
//!
//! # Current Limitations
//!
//! - **No early stop**: the search always runs the full generation budget, even
//!   when the best candidate has not changed for several generations
//! - **Fixed step**: the step size never shrinks, so the search cannot refine
//!   below it
//! - **Noisy fitness**: a small number of playouts per candidate makes the
//!   selection sensitive to luck

pub mod tuner;
pub mod weights;
