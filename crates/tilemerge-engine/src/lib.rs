//! Game engine for the 2048 tile-merging puzzle.
//!
//! The crate is split into two layers:
//!
//! - [`core`] - Pure data structures and algorithms: the [`Board`], the
//!   [`Direction`] of a move, and single-line slide/merge resolution.
//! - [`engine`] - Game orchestration: [`Game`] owns a board, the cumulative
//!   score, the turn counter and the append-only [`TurnHistory`], and spawns
//!   tiles through a seedable [`TileSpawner`].
//!
//! # Example
//!
//! ```
//! use tilemerge_engine::{Direction, Game, GameConfig, RngSeed};
//!
//! let mut game = Game::with_seed(GameConfig::default(), RngSeed::from_u128(7));
//! game.start()?;
//! assert_eq!(game.board().occupied_count(), 2);
//!
//! // A move returns whether the board changed.
//! let _changed = game.apply_move(Direction::Left)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;

#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("game has already been started")]
pub struct AlreadyStartedError;

#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("game needs to be started first")]
pub struct NotStartedError;

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invalid direction specified: {input:?}")]
pub struct InvalidDirectionError {
    pub input: String,
}

#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("can't add a tile to a full board")]
pub struct BoardFullError;

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum StartError {
    #[display("{_0}")]
    AlreadyStarted(AlreadyStartedError),
    #[display("{_0}")]
    BoardFull(BoardFullError),
}

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum MoveError {
    #[display("{_0}")]
    NotStarted(NotStartedError),
    #[display("{_0}")]
    InvalidDirection(InvalidDirectionError),
    #[display("{_0}")]
    BoardFull(BoardFullError),
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum InvalidConfigError {
    #[display("board size must be at least 2, got {size}")]
    SizeTooSmall { size: usize },
    #[display("base value must be a power of two greater than 1, got {value}")]
    BaseValue { value: u32 },
    #[display("win value must be a power of two greater than the base value, got {value}")]
    WinValue { value: u32 },
}
