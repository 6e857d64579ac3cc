//! Playing a game to its end under a direction policy.
//!
//! Each iteration asks the policy for a ranking and tries the directions in
//! that order; the first direction that changes the board is accepted and
//! the policy is consulted again on the new state. When no direction moves
//! the board, the game is over (won or lost) and the playout stops.
//!
//! A playout never stops on its own after a win: it keeps going until the
//! board is stuck. Callers that need a bound pass a turn limit.

use serde::Serialize;
use tilemerge_engine::{Direction, Game, GameConfig, RngSeed};

use crate::{PlayError, policy::DirectionPolicy};

/// Final state of a playout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlayoutSummary {
    /// Turn counter when the playout stopped.
    pub turns: i64,
    pub score: u64,
    pub largest_value: u32,
    pub won: bool,
    /// `true` if no direction could move; `false` if the turn limit was hit.
    pub stuck: bool,
}

impl PlayoutSummary {
    fn from_game(game: &Game, stuck: bool) -> Self {
        Self {
            turns: game.current_turn(),
            score: game.score(),
            largest_value: game.largest_value(),
            won: game.has_won(),
            stuck,
        }
    }
}

/// Tries the ranked directions once and returns the direction that moved.
pub fn step<P>(game: &mut Game, policy: &mut P) -> Result<Option<Direction>, PlayError>
where
    P: DirectionPolicy + ?Sized,
{
    for dir in policy.rank_directions(game) {
        if game.apply_move(dir)? {
            return Ok(Some(dir));
        }
    }
    Ok(None)
}

/// Plays `game` until no direction changes the board, or until
/// `turn_limit` accepted moves have been made.
///
/// The game must already be started; it may be in progress.
pub fn play_out<P>(
    game: &mut Game,
    policy: &mut P,
    turn_limit: Option<usize>,
) -> Result<PlayoutSummary, PlayError>
where
    P: DirectionPolicy + ?Sized,
{
    let mut moves = 0;
    loop {
        if turn_limit.is_some_and(|limit| moves >= limit) {
            return Ok(PlayoutSummary::from_game(game, false));
        }
        if step(game, policy)?.is_none() {
            return Ok(PlayoutSummary::from_game(game, true));
        }
        moves += 1;
    }
}

/// Starts a fresh game and plays it to the end.
///
/// Returns the finished game so callers can inspect the board and history.
pub fn play_new_game<P>(
    config: GameConfig,
    seed: RngSeed,
    policy: &mut P,
) -> Result<(Game, PlayoutSummary), PlayError>
where
    P: DirectionPolicy + ?Sized,
{
    let mut game = Game::with_seed(config, seed);
    game.start()?;
    let summary = play_out(&mut game, policy, None)?;
    Ok((game, summary))
}
