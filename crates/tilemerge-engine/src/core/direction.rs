use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::InvalidDirectionError;

/// Orientation of a line on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// A horizontal line, indexed by row.
    Row,
    /// A vertical line, indexed by column.
    Column,
}

/// Direction in which all tiles slide during a move.
///
/// Left and right moves resolve each row, up and down moves resolve each
/// column. Right and down moves traverse their lines back to front so that
/// the same resolution logic applies to all four directions.
///
/// # Example
///
/// ```
/// use tilemerge_engine::{Axis, Direction};
///
/// let dir: Direction = "down".parse().unwrap();
/// assert_eq!(dir, Direction::Down);
/// assert_eq!(dir.axis(), Axis::Column);
/// assert!(dir.is_reversed());
///
/// assert!("diagonal".parse::<Direction>().is_err());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[display("left")]
    Left,
    #[display("right")]
    Right,
    #[display("up")]
    Up,
    #[display("down")]
    Down,
}

impl Direction {
    /// All four directions, in the order solvers enumerate them.
    pub const ALL: [Self; 4] = [Self::Left, Self::Right, Self::Up, Self::Down];

    /// Returns the kind of line this direction resolves.
    #[must_use]
    pub const fn axis(self) -> Axis {
        match self {
            Self::Left | Self::Right => Axis::Row,
            Self::Up | Self::Down => Axis::Column,
        }
    }

    /// Returns `true` if lines are traversed back to front for this direction.
    #[must_use]
    pub const fn is_reversed(self) -> bool {
        matches!(self, Self::Right | Self::Down)
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Up => "up",
            Self::Down => "down",
        }
    }
}

impl FromStr for Direction {
    type Err = InvalidDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|dir| dir.name() == s)
            .ok_or_else(|| InvalidDirectionError {
                input: s.to_owned(),
            })
    }
}
