//! Game orchestration on top of the core data structures.
//!
//! - [`Game`] - Board, score, turn counter and turn history for one game
//! - [`GameConfig`] - Board size, win target and base spawn value
//! - [`TileSpawner`] - Seedable source of spawned tile values and positions
//! - [`RngSeed`] - Seed for reproducible games and solver runs
//! - [`TurnHistory`] - Append-only record of every turn
//!
//! # Game Flow
//!
//! 1. Create a [`Game`] (unstarted, turn counter at -2)
//! 2. [`Game::start`] places two seed tiles, bringing the turn counter to 0
//! 3. Each [`Game::apply_move`] that changes the board spawns one tile and
//!    appends one [`TurnRecord`]
//! 4. Callers poll [`Game::has_won`] and [`Game::has_lost`]; the engine keeps
//!    accepting moves after either becomes true
//!
//! # Example
//!
//! ```
//! use tilemerge_engine::{Direction, Game, GameConfig, RngSeed};
//!
//! let mut game = Game::with_seed(GameConfig::default(), RngSeed::from_u128(42));
//! game.start()?;
//! while Direction::ALL.into_iter().any(|dir| game.apply_move(dir).unwrap_or(false)) {}
//!
//! println!("{}", game.board());
//! println!("score = {}, largest = {}", game.score(), game.largest_value());
//! # Ok::<(), tilemerge_engine::StartError>(())
//! ```

pub use self::{config::*, game::*, tile_spawner::*, turn_history::*};

mod config;
mod game;
mod tile_spawner;
mod turn_history;
