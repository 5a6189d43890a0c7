use crate::types::{CellState, Position};

/// Copy of everything a renderer needs, taken under the maze lock.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MazeSnapshot {
    pub rows: usize,
    pub cols: usize,
    /// Row-major cells.
    pub cells: Vec<CellState>,
    pub cursor: Option<Position>,
    pub goal: Option<Position>,
    pub goal_reached: bool,
    pub moves: u32,
    pub revision: u64,
}

impl MazeSnapshot {
    /// Cell at (row, col); `Wall` outside the grid.
    pub fn cell(&self, row: usize, col: usize) -> CellState {
        if row >= self.rows || col >= self.cols {
            return CellState::Wall;
        }
        self.cells[row * self.cols + col]
    }
}
