//! Sub-rectangle of the grid used for random player/goal placement.

use std::fmt;

use crate::rng::SimpleRng;
use crate::types::{Position, PLACEMENT_MARGIN};

/// Inclusive row/column ranges to sample placement positions from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlacementBounds {
    pub row_min: usize,
    pub row_max: usize,
    pub col_min: usize,
    pub col_max: usize,
}

impl PlacementBounds {
    pub fn new(row_min: usize, row_max: usize, col_min: usize, col_max: usize) -> Self {
        Self {
            row_min,
            row_max,
            col_min,
            col_max,
        }
    }

    /// The whole grid.
    pub fn whole(rows: usize, cols: usize) -> Self {
        Self::new(0, rows.saturating_sub(1), 0, cols.saturating_sub(1))
    }

    /// Sampling window kept away from the outer border: `[2, dim - 2]` on
    /// both axes. For a 41x41 maze this is rows and columns 2..=39.
    pub fn interior(rows: usize, cols: usize) -> Self {
        Self::new(
            PLACEMENT_MARGIN,
            rows.saturating_sub(2),
            PLACEMENT_MARGIN,
            cols.saturating_sub(2),
        )
    }

    /// Intersect with a `rows x cols` grid. `None` when nothing is left.
    pub fn clamp_to(self, rows: usize, cols: usize) -> Option<Self> {
        if rows == 0 || cols == 0 {
            return None;
        }
        let clamped = Self {
            row_min: self.row_min,
            row_max: self.row_max.min(rows - 1),
            col_min: self.col_min,
            col_max: self.col_max.min(cols - 1),
        };
        if clamped.row_min > clamped.row_max || clamped.col_min > clamped.col_max {
            return None;
        }
        Some(clamped)
    }

    pub fn contains(&self, pos: Position) -> bool {
        (self.row_min..=self.row_max).contains(&pos.row)
            && (self.col_min..=self.col_max).contains(&pos.col)
    }

    pub(crate) fn sample(&self, rng: &mut SimpleRng) -> Position {
        let row = rng.range_inclusive(self.row_min, self.row_max);
        let col = rng.range_inclusive(self.col_min, self.col_max);
        Position::new(row, col)
    }
}

impl fmt::Display for PlacementBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rows {}..={} cols {}..={}",
            self.row_min, self.row_max, self.col_min, self.col_max
        )
    }
}
