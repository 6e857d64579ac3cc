//! Direction policies: ranking the four directions for the current turn.
//!
//! A policy returns all four directions in order of preference. The playout
//! loop tries them in that order and accepts the first one that changes the
//! board, so a policy never needs to know which moves are legal.
//!
//! # Policies
//!
//! | Policy | Ranking |
//! |---|---|
//! | [`RandomPolicy`] | uniformly shuffled every turn |
//! | [`FixedPriorityPolicy`] | the same order every turn |
//! | [`AlternatingPolicy`] | switches between two orders on every call |
//! | [`ScorePolicy`] | descending move score, ties kept in [`Direction::ALL`] order |
//!
//! [`PolicyKind`] names the built-in configurations so callers (the CLI, the
//! batch runner) can construct a fresh policy per game.

use std::{cmp::Reverse, fmt};

use rand::seq::SliceRandom as _;
use rand_pcg::Pcg32;
use tilemerge_engine::{Direction, Game, RngSeed};

use crate::move_scorer::{self, ScoreWeights};

/// Ranks the four directions for a game state.
pub trait DirectionPolicy: fmt::Debug + Send {
    /// Returns all four directions, most preferred first.
    fn rank_directions(&mut self, game: &Game) -> [Direction; 4];
}

impl<P> DirectionPolicy for Box<P>
where
    P: DirectionPolicy + ?Sized,
{
    fn rank_directions(&mut self, game: &Game) -> [Direction; 4] {
        (**self).rank_directions(game)
    }
}

/// Shuffles the directions uniformly on every call.
#[derive(Debug, Clone)]
pub struct RandomPolicy {
    rng: Pcg32,
}

impl RandomPolicy {
    #[must_use]
    pub fn new(seed: RngSeed) -> Self {
        Self { rng: seed.to_rng() }
    }
}

impl DirectionPolicy for RandomPolicy {
    fn rank_directions(&mut self, _game: &Game) -> [Direction; 4] {
        let mut dirs = Direction::ALL;
        dirs.shuffle(&mut self.rng);
        dirs
    }
}

/// Always returns the same ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedPriorityPolicy {
    order: [Direction; 4],
}

impl FixedPriorityPolicy {
    /// Creates a fixed policy.
    ///
    /// # Panics
    ///
    /// Panics if `order` does not contain each direction exactly once.
    #[must_use]
    pub fn new(order: [Direction; 4]) -> Self {
        assert_permutation(order);
        Self { order }
    }

    /// left, up, right, down
    #[must_use]
    pub fn circular() -> Self {
        Self::new([
            Direction::Left,
            Direction::Up,
            Direction::Right,
            Direction::Down,
        ])
    }

    /// down, left, right, up
    #[must_use]
    pub fn avoid_up() -> Self {
        Self::new([
            Direction::Down,
            Direction::Left,
            Direction::Right,
            Direction::Up,
        ])
    }
}

impl DirectionPolicy for FixedPriorityPolicy {
    fn rank_directions(&mut self, _game: &Game) -> [Direction; 4] {
        self.order
    }
}

/// Alternates between two fixed rankings.
///
/// The first call returns the first ranking, the second call the second
/// one, and so on. The call counter belongs to the policy instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlternatingPolicy {
    orders: [[Direction; 4]; 2],
    calls: usize,
}

impl AlternatingPolicy {
    /// # Panics
    ///
    /// Panics if either ranking does not contain each direction exactly once.
    #[must_use]
    pub fn new(even: [Direction; 4], odd: [Direction; 4]) -> Self {
        assert_permutation(even);
        assert_permutation(odd);
        Self {
            orders: [even, odd],
            calls: 0,
        }
    }

    /// Pushes tiles toward the bottom-left corner: down-first and left-first
    /// rankings in turn, with up as the last resort.
    #[must_use]
    pub fn left_corner() -> Self {
        Self::new(
            [
                Direction::Down,
                Direction::Left,
                Direction::Right,
                Direction::Up,
            ],
            [
                Direction::Left,
                Direction::Down,
                Direction::Right,
                Direction::Up,
            ],
        )
    }
}

impl DirectionPolicy for AlternatingPolicy {
    fn rank_directions(&mut self, _game: &Game) -> [Direction; 4] {
        let order = self.orders[self.calls % 2];
        self.calls += 1;
        order
    }
}

/// Ranks directions by descending [move score](crate::move_scorer).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScorePolicy {
    weights: ScoreWeights,
}

impl ScorePolicy {
    #[must_use]
    pub const fn new(weights: ScoreWeights) -> Self {
        Self { weights }
    }

    /// Score-based policy with [`ScoreWeights::SIMPLE`].
    #[must_use]
    pub const fn simple() -> Self {
        Self::new(ScoreWeights::SIMPLE)
    }

    #[must_use]
    pub const fn weights(&self) -> ScoreWeights {
        self.weights
    }
}

impl DirectionPolicy for ScorePolicy {
    fn rank_directions(&mut self, game: &Game) -> [Direction; 4] {
        let mut scored = move_scorer::score_all(game.board(), self.weights);
        // stable: equal scores keep Direction::ALL order
        scored.sort_by_key(|(_, score)| Reverse(*score));
        scored.map(|(dir, _)| dir)
    }
}

/// Built-in policy configurations.
///
/// Parses case-insensitively from the variant name (`"random"`, `"avoidup"`,
/// `"LeftCorner"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, derive_more::FromStr, derive_more::Display)]
pub enum PolicyKind {
    Random,
    Circular,
    AvoidUp,
    LeftCorner,
    #[default]
    SimpleScore,
    Weighted,
}

impl PolicyKind {
    pub const ALL: [Self; 6] = [
        Self::Random,
        Self::Circular,
        Self::AvoidUp,
        Self::LeftCorner,
        Self::SimpleScore,
        Self::Weighted,
    ];

    /// Builds a fresh policy instance.
    ///
    /// `seed` is used by [`PolicyKind::Random`] only; `weights` by
    /// [`PolicyKind::Weighted`] only.
    #[must_use]
    pub fn build(self, seed: RngSeed, weights: ScoreWeights) -> Box<dyn DirectionPolicy> {
        match self {
            Self::Random => Box::new(RandomPolicy::new(seed)),
            Self::Circular => Box::new(FixedPriorityPolicy::circular()),
            Self::AvoidUp => Box::new(FixedPriorityPolicy::avoid_up()),
            Self::LeftCorner => Box::new(AlternatingPolicy::left_corner()),
            Self::SimpleScore => Box::new(ScorePolicy::simple()),
            Self::Weighted => Box::new(ScorePolicy::new(weights)),
        }
    }
}

fn assert_permutation(order: [Direction; 4]) {
    assert!(
        Direction::ALL.iter().all(|dir| order.contains(dir)),
        "ranking must contain every direction exactly once: {order:?}"
    );
}

#[cfg(test)]
mod tests {
    use tilemerge_engine::{Board, GameConfig};

    use super::*;

    fn game(rows: [[u32; 4]; 4]) -> Game {
        let board =
            Board::from_rows(rows.map(|row| row.map(|v| if v == 0 { None } else { Some(v) })));
        Game::with_board(GameConfig::default(), board, RngSeed::from_u128(0))
    }

    fn sorted(mut dirs: [Direction; 4]) -> [Direction; 4] {
        dirs.sort();
        dirs
    }

    #[test]
    fn test_random_policy_returns_permutations() {
        let g = game([[0; 4]; 4]);
        let mut policy = RandomPolicy::new(RngSeed::from_u128(5));
        let mut seen_first = Vec::new();
        for _ in 0..200 {
            let ranked = policy.rank_directions(&g);
            assert_eq!(sorted(ranked), sorted(Direction::ALL));
            if !seen_first.contains(&ranked[0]) {
                seen_first.push(ranked[0]);
            }
        }
        assert_eq!(seen_first.len(), 4);
    }

    #[test]
    fn test_random_policy_is_reproducible() {
        let g = game([[0; 4]; 4]);
        let mut p1 = RandomPolicy::new(RngSeed::from_u128(8));
        let mut p2 = RandomPolicy::new(RngSeed::from_u128(8));
        for _ in 0..20 {
            assert_eq!(p1.rank_directions(&g), p2.rank_directions(&g));
        }
    }

    #[test]
    fn test_fixed_policies() {
        let g = game([[0; 4]; 4]);
        assert_eq!(
            FixedPriorityPolicy::circular().rank_directions(&g),
            [
                Direction::Left,
                Direction::Up,
                Direction::Right,
                Direction::Down
            ]
        );
        assert_eq!(
            FixedPriorityPolicy::avoid_up().rank_directions(&g),
            [
                Direction::Down,
                Direction::Left,
                Direction::Right,
                Direction::Up
            ]
        );
    }

    #[test]
    #[should_panic(expected = "every direction")]
    fn test_fixed_policy_rejects_duplicates() {
        let _ = FixedPriorityPolicy::new([
            Direction::Left,
            Direction::Left,
            Direction::Up,
            Direction::Down,
        ]);
    }

    #[test]
    fn test_alternating_policy_switches_each_call() {
        let g = game([[0; 4]; 4]);
        let mut policy = AlternatingPolicy::left_corner();
        let first = policy.rank_directions(&g);
        let second = policy.rank_directions(&g);
        let third = policy.rank_directions(&g);
        assert_eq!(first[0], Direction::Down);
        assert_eq!(second[0], Direction::Left);
        assert_eq!(third, first);
        assert_eq!(first[3], Direction::Up);
        assert_eq!(second[3], Direction::Up);
    }

    #[test]
    fn test_alternating_counter_is_per_instance() {
        let g = game([[0; 4]; 4]);
        let mut a = AlternatingPolicy::left_corner();
        let _ = a.rank_directions(&g);
        let mut b = AlternatingPolicy::left_corner();
        assert_eq!(b.rank_directions(&g)[0], Direction::Down);
        assert_eq!(a.rank_directions(&g)[0], Direction::Left);
    }

    #[test]
    fn test_score_policy_ranks_descending() {
        // left: 0, right: 6 gaps, up: 1 pair, down: 1 pair + 2 gaps
        let g = game([[2, 0, 0, 0], [2, 0, 0, 0], [0; 4], [0; 4]]);
        let mut policy = ScorePolicy::new(ScoreWeights {
            empty_space: 10,
            merge: 100,
        });
        assert_eq!(
            policy.rank_directions(&g),
            [
                Direction::Down,
                Direction::Up,
                Direction::Right,
                Direction::Left
            ]
        );
    }

    #[test]
    fn test_score_policy_ties_keep_insertion_order() {
        let g = game([[0; 4]; 4]);
        let mut policy = ScorePolicy::simple();
        assert_eq!(policy.rank_directions(&g), Direction::ALL);
    }

    #[test]
    fn test_policy_kind_parse_and_build() {
        assert_eq!("random".parse::<PolicyKind>().unwrap(), PolicyKind::Random);
        assert_eq!("AvoidUp".parse::<PolicyKind>().unwrap(), PolicyKind::AvoidUp);
        assert_eq!(
            "leftcorner".parse::<PolicyKind>().unwrap(),
            PolicyKind::LeftCorner
        );
        assert!("minimax".parse::<PolicyKind>().is_err());

        let g = game([[0; 4]; 4]);
        for kind in PolicyKind::ALL {
            let mut policy = kind.build(RngSeed::from_u128(1), ScoreWeights::SIMPLE);
            let ranked = policy.rank_directions(&g);
            assert_eq!(sorted(ranked), sorted(Direction::ALL), "{kind}");
        }
    }
}
