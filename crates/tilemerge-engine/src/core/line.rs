//! Slide and merge resolution for a single row or column.
//!
//! A move resolves every line of the board independently with
//! [`resolve_line`]. The function works on the line in traversal order,
//! toward index 0, and the caller says whether the canonical line must be
//! reversed first (right and down moves).
//!
//! # Algorithm
//!
//! 1. Reorder the line into traversal order.
//! 2. Slide: drop empty cells, preserving the order of tiles.
//! 3. Merge: a single sweep from the front; two equal neighbours combine into
//!    one tile of their sum and the sweep continues after the pair, so each
//!    tile merges at most once per move. Two tiles whose sum does not fit in
//!    a `u32` stay apart.
//! 4. Pad with empty cells at the back and restore canonical order.
//!
//! Every internal gap closed and every merge performed counts as one change.
//! A move whose lines report zero changes in total leaves the board untouched.

use super::board::Cell;

/// Result of resolving one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineOutcome {
    /// Resolved cells, in canonical order.
    pub cells: Vec<Cell>,
    /// Number of gaps closed plus number of merges performed.
    pub changes: usize,
    /// Sum of the values of all tiles created by merging.
    pub gained: u64,
}

/// Resolves a move along one line.
///
/// `line` is given in canonical order. If `reversed` is set, the line is
/// traversed back to front and the resolved cells are written back in the
/// same orientation, so tiles end up at the high-index end.
///
/// # Example
///
/// ```
/// use tilemerge_engine::resolve_line;
///
/// let outcome = resolve_line(&[Some(2), Some(2), Some(2), None], false);
/// assert_eq!(outcome.cells, vec![Some(4), Some(2), None, None]);
/// assert_eq!(outcome.gained, 4);
///
/// let outcome = resolve_line(&[Some(2), Some(2), Some(2), None], true);
/// assert_eq!(outcome.cells, vec![None, None, Some(2), Some(4)]);
/// ```
#[must_use]
pub fn resolve_line(line: &[Cell], reversed: bool) -> LineOutcome {
    let ordered = traversal_order(line, reversed);
    let mut changes = internal_gaps(&ordered);

    let tiles = compact(&ordered);
    let mut merged = Vec::with_capacity(tiles.len());
    let mut gained = 0;
    let mut i = 0;
    while i < tiles.len() {
        let sum = tiles
            .get(i + 1)
            .filter(|next| **next == tiles[i])
            .and_then(|next| tiles[i].checked_add(*next));
        if let Some(value) = sum {
            merged.push(value);
            gained += u64::from(value);
            changes += 1;
            i += 2;
        } else {
            merged.push(tiles[i]);
            i += 1;
        }
    }

    let mut cells = merged.into_iter().map(Some).collect::<Vec<_>>();
    cells.resize(line.len(), None);
    if reversed {
        cells.reverse();
    }

    LineOutcome {
        cells,
        changes,
        gained,
    }
}

/// Returns a copy of `line` in traversal order.
#[must_use]
pub fn traversal_order(line: &[Cell], reversed: bool) -> Vec<Cell> {
    if reversed {
        line.iter().rev().copied().collect()
    } else {
        line.to_vec()
    }
}

/// Returns the tile values of `line`, with empty cells removed.
#[must_use]
pub fn compact(line: &[Cell]) -> Vec<u32> {
    line.iter().flatten().copied().collect()
}

/// Counts empty cells that lie before some tile.
///
/// Empty cells after the last tile are not counted, since sliding toward
/// index 0 does not close them.
///
/// ```
/// use tilemerge_engine::internal_gaps;
///
/// assert_eq!(internal_gaps(&[Some(2), None, Some(4), None, None]), 1);
/// assert_eq!(internal_gaps(&[None, None, Some(2), None, Some(4)]), 3);
/// assert_eq!(internal_gaps(&[Some(2), None, None, None]), 0);
/// ```
#[must_use]
pub fn internal_gaps(line: &[Cell]) -> usize {
    let mut counted = 0;
    let mut pending = 0;
    for cell in line {
        if cell.is_some() {
            counted += pending;
            pending = 0;
        } else {
            pending += 1;
        }
    }
    counted
}
