use std::fmt;

use serde::{Deserialize, Serialize};

use super::direction::Axis;

/// A single board slot: empty, or a tile holding a power-of-two value.
pub type Cell = Option<u32>;

/// Width of one rendered cell in the text representation.
const CELL_WIDTH: usize = 4;

/// Square N×N grid of cells, stored in row-major order.
///
/// The board only stores values. It has no notion of turns or scoring;
/// [`Game`](crate::Game) owns a board and is the only code that mutates it
/// during play.
///
/// Lines are read and written in canonical order (left to right for rows,
/// top to bottom for columns) through [`Board::line`] and
/// [`Board::set_line`]. Direction-specific reversal is the caller's
/// concern.
///
/// # Example
///
/// ```
/// use tilemerge_engine::{Axis, Board};
///
/// let board = Board::from_rows([
///     [Some(2), None, None],
///     [None, Some(4), None],
///     [None, None, Some(8)],
/// ]);
/// assert_eq!(board.count_free_spaces(), 6);
/// assert_eq!(board.largest_value(), 8);
/// assert_eq!(board.line(Axis::Column, 1), vec![None, Some(4), None]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an empty `size`×`size` board.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    #[must_use]
    pub fn empty(size: usize) -> Self {
        assert!(size > 0, "board size must be positive");
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    /// Builds a board from rows of cells.
    ///
    /// # Panics
    ///
    /// Panics if the rows do not form a non-empty square, or if any tile is
    /// not a power of two greater than 1.
    #[must_use]
    pub fn from_rows<R, C>(rows: R) -> Self
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator<Item = Cell>,
    {
        let rows = rows
            .into_iter()
            .map(|row| row.into_iter().collect::<Vec<_>>())
            .collect::<Vec<_>>();
        let size = rows.len();
        assert!(size > 0, "board must have at least one row");
        assert!(
            rows.iter().all(|row| row.len() == size),
            "board must be square"
        );
        let cells = rows.into_iter().flatten().collect::<Vec<_>>();
        assert!(
            cells.iter().flatten().all(|v| is_tile_value(*v)),
            "tile values must be powers of two greater than 1"
        );
        Self { size, cells }
    }

    /// Returns the side length N of the board.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[self.index(row, col)]
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, cell: Cell) {
        let index = self.index(row, col);
        self.cells[index] = cell;
    }

    fn index(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.size && col < self.size,
            "position ({row}, {col}) out of bounds for size {}",
            self.size
        );
        row * self.size + col
    }

    /// Returns an iterator over the rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size)
    }

    /// Returns the positions of all empty cells in row-major order.
    pub fn empty_positions(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(i, _)| (i / self.size, i % self.size))
    }

    /// Extracts a row or column in canonical order.
    ///
    /// The returned vector is a fresh copy; modifying it does not affect the board.
    #[must_use]
    pub fn line(&self, axis: Axis, index: usize) -> Vec<Cell> {
        (0..self.size)
            .map(|i| match axis {
                Axis::Row => self.get(index, i),
                Axis::Column => self.get(i, index),
            })
            .collect()
    }

    /// Writes a row or column back in canonical order.
    pub(crate) fn set_line(&mut self, axis: Axis, index: usize, cells: &[Cell]) {
        assert_eq!(cells.len(), self.size);
        for (i, cell) in cells.iter().enumerate() {
            match axis {
                Axis::Row => self.set(index, i, *cell),
                Axis::Column => self.set(i, index, *cell),
            }
        }
    }

    #[must_use]
    pub fn count_free_spaces(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_none()).count()
    }

    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.cells.len() - self.count_free_spaces()
    }

    /// Returns the largest tile value on the board, or 0 for an empty board.
    #[must_use]
    pub fn largest_value(&self) -> u32 {
        self.cells.iter().flatten().copied().max().unwrap_or(0)
    }
}

/// Renders the board as a fixed-width text grid.
///
/// ```text
/// |   2|   2|   2|    |
/// |   8|   4|   8|    |
/// | 256|  64|  32|   2|
/// ```
///
/// Values wider than four digits are abbreviated to `~` followed by their
/// first three digits.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "|")?;
            for cell in row {
                match cell {
                    None => write!(f, "{:CELL_WIDTH$}|", "")?,
                    Some(value) => {
                        let text = value.to_string();
                        if text.len() > CELL_WIDTH {
                            write!(f, "~{}|", &text[..CELL_WIDTH - 1])?;
                        } else {
                            write!(f, "{text:>CELL_WIDTH$}|")?;
                        }
                    }
                }
            }
        }
        Ok(())
    }
}

pub(crate) fn is_tile_value(value: u32) -> bool {
    value > 1 && value.is_power_of_two()
}
