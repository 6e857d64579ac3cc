use serde::Serialize;

use crate::{InvalidConfigError, core::board::is_tile_value};

/// Construction parameters of a [`Game`](crate::Game).
///
/// A `GameConfig` is always valid: fields are private and only
/// [`GameConfig::new`] (which validates) or [`Default`] create one.
///
/// # Example
///
/// ```
/// use tilemerge_engine::GameConfig;
///
/// let config = GameConfig::default();
/// assert_eq!(config.size(), 4);
/// assert_eq!(config.win_value(), 2048);
/// assert_eq!(config.base_value(), 2);
///
/// let small = GameConfig::new(3, 256, 2).unwrap();
/// assert_eq!(small.size(), 3);
///
/// assert!(GameConfig::new(1, 2048, 2).is_err());
/// assert!(GameConfig::new(4, 1000, 2).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameConfig {
    size: usize,
    win_value: u32,
    base_value: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: Self::DEFAULT_SIZE,
            win_value: Self::DEFAULT_WIN_VALUE,
            base_value: Self::DEFAULT_BASE_VALUE,
        }
    }
}

impl GameConfig {
    pub const DEFAULT_SIZE: usize = 4;
    pub const DEFAULT_WIN_VALUE: u32 = 2048;
    pub const DEFAULT_BASE_VALUE: u32 = 2;

    /// Creates a validated configuration.
    ///
    /// - `size` must be at least 2
    /// - `base_value` must be a power of two greater than 1
    /// - `win_value` must be a power of two greater than `base_value`
    pub fn new(size: usize, win_value: u32, base_value: u32) -> Result<Self, InvalidConfigError> {
        if size < 2 {
            return Err(InvalidConfigError::SizeTooSmall { size });
        }
        if !is_tile_value(base_value) {
            return Err(InvalidConfigError::BaseValue { value: base_value });
        }
        if !is_tile_value(win_value) || win_value <= base_value {
            return Err(InvalidConfigError::WinValue { value: win_value });
        }
        Ok(Self {
            size,
            win_value,
            base_value,
        })
    }

    /// Side length N of the board.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Tile value that counts as a win.
    #[must_use]
    pub const fn win_value(&self) -> u32 {
        self.win_value
    }

    /// Value of an ordinary spawned tile; doubled spawns hold twice this.
    #[must_use]
    pub const fn base_value(&self) -> u32 {
        self.base_value
    }
}
