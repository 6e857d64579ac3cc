use rand::Rng as _;

use crate::{
    AlreadyStartedError, BoardFullError, MoveError, NotStartedError, StartError,
    core::{board::Board, direction::Direction, line::resolve_line},
};

use super::{
    config::GameConfig,
    tile_spawner::{RngSeed, TileSpawner},
    turn_history::{TilePlacement, TurnHistory},
};

/// Probability that a seed tile placed by [`Game::start`] holds the doubled base value.
pub const SEED_DOUBLE_CHANCE: f64 = 0.1;

/// Probability that a tile spawned after a move holds the doubled base value.
pub const SPAWN_DOUBLE_CHANCE: f64 = 0.2;

/// Turn counter of a freshly created game; two seed turns bring it to 0.
const INITIAL_TURN: i64 = -2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum GameState {
    Unstarted,
    InProgress,
}

/// A single game of 2048.
///
/// Owns the board, the cumulative score, the turn counter and the turn
/// history. All randomness comes from the game's own [`TileSpawner`], so two
/// games built with the same [`RngSeed`] and fed the same moves are
/// identical.
///
/// Win and loss are advisory: [`Game::has_won`] and [`Game::has_lost`] are
/// queries, and moves stay accepted after either becomes true.
#[derive(Debug, Clone)]
pub struct Game {
    config: GameConfig,
    board: Board,
    current_turn: i64,
    score: u64,
    history: TurnHistory,
    spawner: TileSpawner,
}

impl Game {
    /// Creates an unstarted game with a random seed.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self::with_seed(config, rand::rng().random())
    }

    /// Like [`Self::new`], but with a specific seed for reproducible spawns.
    #[must_use]
    pub fn with_seed(config: GameConfig, seed: RngSeed) -> Self {
        Self {
            config,
            board: Board::empty(config.size()),
            current_turn: INITIAL_TURN,
            score: 0,
            history: TurnHistory::new(),
            spawner: TileSpawner::with_seed(seed),
        }
    }

    /// Creates an already-started game on a prepared board.
    ///
    /// Intended for fixtures and for resuming from a known position. No seed
    /// turns are recorded: the turn counter starts at 0, the score at 0, and
    /// the history is empty, so its first record has turn id 0 rather than -2.
    ///
    /// # Panics
    ///
    /// Panics if the board size differs from `config.size()`.
    #[must_use]
    pub fn with_board(config: GameConfig, board: Board, seed: RngSeed) -> Self {
        assert_eq!(board.size(), config.size(), "board size must match config");
        Self {
            config,
            board,
            current_turn: 0,
            score: 0,
            history: TurnHistory::new(),
            spawner: TileSpawner::with_seed(seed),
        }
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn score(&self) -> u64 {
        self.score
    }

    /// Returns the turn counter: -2 before start, 0 right after start, and
    /// one more for each move that changed the board.
    #[must_use]
    pub fn current_turn(&self) -> i64 {
        self.current_turn
    }

    #[must_use]
    pub fn history(&self) -> &TurnHistory {
        &self.history
    }

    #[must_use]
    pub fn state(&self) -> GameState {
        if self.current_turn < 0 {
            GameState::Unstarted
        } else {
            GameState::InProgress
        }
    }

    /// Places the two seed tiles and records them as turns -2 and -1.
    pub fn start(&mut self) -> Result<(), StartError> {
        if self.state().is_in_progress() {
            return Err(AlreadyStartedError.into());
        }
        while self.current_turn < 0 {
            let spawned = self.place_tile(SEED_DOUBLE_CHANCE)?;
            self.history.push(self.current_turn, spawned, 0, None);
            self.current_turn += 1;
        }
        Ok(())
    }

    /// Slides and merges every line toward `direction`.
    ///
    /// Returns `Ok(true)` if the board changed, in which case one tile was
    /// spawned and one turn recorded. Returns `Ok(false)` if nothing could
    /// move; the game is then left exactly as it was.
    pub fn apply_move(&mut self, direction: Direction) -> Result<bool, MoveError> {
        if self.state().is_unstarted() {
            return Err(NotStartedError.into());
        }

        let axis = direction.axis();
        let reversed = direction.is_reversed();
        let mut changes = 0;
        for index in 0..self.board.size() {
            let outcome = resolve_line(&self.board.line(axis, index), reversed);
            if outcome.changes == 0 {
                continue;
            }
            changes += outcome.changes;
            self.score += outcome.gained;
            self.board.set_line(axis, index, &outcome.cells);
        }

        if changes == 0 {
            return Ok(false);
        }

        let spawned = self.place_tile(SPAWN_DOUBLE_CHANCE)?;
        self.history
            .push(self.current_turn, spawned, changes, Some(direction));
        self.current_turn += 1;
        Ok(true)
    }

    /// Like [`Self::apply_move`], with the direction given by name
    /// (`"left"`, `"right"`, `"up"` or `"down"`).
    pub fn move_named(&mut self, direction: &str) -> Result<bool, MoveError> {
        let direction = direction.parse::<Direction>()?;
        self.apply_move(direction)
    }

    /// Places one tile on a uniformly chosen empty cell.
    ///
    /// This does not record a turn.
    pub fn add_piece(&mut self) -> Result<TilePlacement, BoardFullError> {
        self.place_tile(SPAWN_DOUBLE_CHANCE)
    }

    fn place_tile(&mut self, double_chance: f64) -> Result<TilePlacement, BoardFullError> {
        let value = self
            .spawner
            .draw_value(self.config.base_value(), double_chance);
        let free_count = self.board.count_free_spaces();
        if free_count == 0 {
            return Err(BoardFullError);
        }
        let index = self.spawner.draw_index(free_count);
        let (row, col) = self
            .board
            .empty_positions()
            .nth(index)
            .ok_or(BoardFullError)?;
        self.board.set(row, col, Some(value));
        Ok(TilePlacement { row, col, value })
    }

    #[must_use]
    pub fn count_free_spaces(&self) -> usize {
        self.board.count_free_spaces()
    }

    #[must_use]
    pub fn largest_value(&self) -> u32 {
        self.board.largest_value()
    }

    #[must_use]
    pub fn has_won(&self) -> bool {
        self.largest_value() >= self.config.win_value()
    }

    /// Returns `true` if the board is full and the game has not been won.
    ///
    /// A full board may still allow merges; this predicate does not look
    /// for them.
    #[must_use]
    pub fn has_lost(&self) -> bool {
        self.count_free_spaces() == 0 && !self.has_won()
    }
}
