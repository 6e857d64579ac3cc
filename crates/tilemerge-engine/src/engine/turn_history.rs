use serde::{Deserialize, Serialize};

use crate::Direction;

/// A tile placed on the board by the spawner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TilePlacement {
    pub row: usize,
    pub col: usize,
    pub value: u32,
}

/// One entry of the turn history.
///
/// Seed turns (the two tiles placed by [`Game::start`](crate::Game::start))
/// have no direction and a change count of 0. Every later record belongs to
/// a move that changed the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    turn_id: i64,
    spawned: TilePlacement,
    change_count: usize,
    direction: Option<Direction>,
}

impl TurnRecord {
    #[must_use]
    pub const fn turn_id(&self) -> i64 {
        self.turn_id
    }

    /// Tile spawned at the end of this turn.
    #[must_use]
    pub const fn spawned(&self) -> TilePlacement {
        self.spawned
    }

    /// Number of gaps closed plus merges performed by the move.
    #[must_use]
    pub const fn change_count(&self) -> usize {
        self.change_count
    }

    /// Direction of the move, or `None` for seed turns.
    #[must_use]
    pub const fn direction(&self) -> Option<Direction> {
        self.direction
    }

    #[must_use]
    pub const fn is_seed(&self) -> bool {
        self.direction.is_none()
    }
}

/// Ordered, append-only list of turn records.
///
/// Turn ids are strictly consecutive; [`Game`](crate::Game) is the only
/// writer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TurnHistory {
    records: Vec<TurnRecord>,
}

impl TurnHistory {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    pub(crate) fn push(
        &mut self,
        turn_id: i64,
        spawned: TilePlacement,
        change_count: usize,
        direction: Option<Direction>,
    ) {
        if let Some(last) = self.records.last() {
            assert_eq!(last.turn_id + 1, turn_id, "turn ids must be consecutive");
        }
        self.records.push(TurnRecord {
            turn_id,
            spawned,
            change_count,
            direction,
        });
    }

    #[must_use]
    pub fn records(&self) -> &[TurnRecord] {
        &self.records
    }

    #[must_use]
    pub fn last(&self) -> Option<&TurnRecord> {
        self.records.last()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TurnRecord> {
        self.records.iter()
    }
}
