//! Automated move selection for 2048 games.
//!
//! This crate builds three layers on top of `tilemerge-engine`:
//!
//! 1. **Move Scoring** ([`move_scorer`]) - Scores a hypothetical move with a
//!    linear model over internal gaps and adjacent equal pairs, without
//!    touching the board.
//!
//! 2. **Direction Policies** ([`policy`]) - Rank the four directions for the
//!    current game state (random, fixed priority, alternating, score based).
//!
//! 3. **Playouts and Batches** ([`playout`], [`batch_runner`]) - Drive a game
//!    to completion under a policy, and run many independent games to
//!    aggregate outcome statistics.
//!
//! # Architecture
//!
//! ```text
//! Batch Runner (many games, tally of largest tiles)
//!     ↓ uses
//! Playout (try ranked directions until one moves)
//!     ↓ uses
//! Direction Policy (rank the four directions)
//!     ↓ may use
//! Move Scorer (score one direction)
//! ```
//!
//! # Example
//!
//! ```
//! use tilemerge_engine::{Game, GameConfig, RngSeed};
//! use tilemerge_solver::{playout, policy::FixedPriorityPolicy};
//!
//! let mut game = Game::with_seed(GameConfig::default(), RngSeed::from_u128(1));
//! game.start()?;
//!
//! let mut policy = FixedPriorityPolicy::circular();
//! let summary = playout::play_out(&mut game, &mut policy, None)?;
//! assert!(summary.stuck);
//! assert!(summary.largest_value >= 4);
//! # Ok::<(), tilemerge_solver::PlayError>(())
//! ```
//!
//! # Design: Greedy, No Lookahead
//!
//! Every policy decides from the current board only. Score-based policies
//! look one move ahead through the move scorer, which ignores the tile that
//! will spawn. There is no search tree.

use tilemerge_engine::{MoveError, StartError};

pub mod batch_runner;
pub mod move_scorer;
pub mod playout;
pub mod policy;

/// Error raised while driving a game.
///
/// Policies only produce valid directions on started games, so these errors
/// signal a bug in the driving code. They are propagated, not retried.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum PlayError {
    #[display("{_0}")]
    Start(StartError),
    #[display("{_0}")]
    Move(MoveError),
}
