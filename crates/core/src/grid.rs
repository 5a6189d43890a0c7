//! Grid module - the maze terrain and its overlay states
//!
//! The grid is an R x C array of [`CellState`] stored flat in row-major order.
//! Dimensions are fixed once loaded.
//!
//! # Source format
//!
//! One row per line, comma-separated single digits, no header:
//!
//! ```text
//! 0,0,0,0,0
//! 0,1,1,1,0
//! 0,0,0,0,0
//! ```
//!
//! Only `0` (wall) and `1` (corridor) are valid in the source. Blank lines are
//! ignored, fields may carry surrounding whitespace, and `\r\n` endings are
//! accepted.

use crate::error::FormatError;
use crate::types::{CellState, Position};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    /// Flat array of cells, row-major order (row * cols + col)
    cells: Vec<CellState>,
}

impl Grid {
    /// Parse a grid from its delimited text form.
    pub fn parse(source: &str) -> Result<Self, FormatError> {
        let mut cols: Option<usize> = None;
        let mut cells = Vec::new();
        let mut rows = 0usize;

        for (i, raw) in source.lines().enumerate() {
            let line_no = i + 1;
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }

            let mut found = 0usize;
            for (j, field) in line.split(',').enumerate() {
                let field = field.trim();
                let state = field
                    .parse::<u8>()
                    .ok()
                    .and_then(CellState::from_persisted)
                    .ok_or_else(|| FormatError::InvalidCell {
                        line: line_no,
                        column: j + 1,
                        value: field.to_string(),
                    })?;
                cells.push(state);
                found += 1;
            }

            match cols {
                None => cols = Some(found),
                Some(expected) if expected != found => {
                    return Err(FormatError::RaggedRow {
                        line: line_no,
                        expected,
                        found,
                    });
                }
                Some(_) => {}
            }
            rows += 1;
        }

        let cols = cols.ok_or(FormatError::Empty)?;
        Ok(Self { rows, cols, cells })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    #[inline(always)]
    fn index(&self, pos: Position) -> Option<usize> {
        if !self.contains(pos) {
            return None;
        }
        Some(pos.row * self.cols + pos.col)
    }

    /// Get cell at `pos`, `None` if out of bounds.
    pub fn get(&self, pos: Position) -> Option<CellState> {
        self.index(pos).map(|i| self.cells[i])
    }

    /// Set cell at `pos`. Returns false if out of bounds.
    pub(crate) fn set(&mut self, pos: Position, state: CellState) -> bool {
        match self.index(pos) {
            Some(i) => {
                self.cells[i] = state;
                true
            }
            None => false,
        }
    }

    /// Restore every overlay cell to plain corridor.
    pub(crate) fn clear_overlays(&mut self) {
        for cell in self.cells.iter_mut() {
            if !cell.is_terrain() {
                *cell = CellState::Corridor;
            }
        }
    }

    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&c| c == state).count()
    }
}
