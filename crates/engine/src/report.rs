//! Serializable summary of a finished (or interrupted) search.

use serde::Serialize;

use crate::core::MazeState;
use crate::solver::{Backtracker, SolverState};
use crate::types::Position;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SolveReport {
    pub outcome: SolverState,
    pub rows: usize,
    pub cols: usize,
    pub start: Option<Position>,
    pub goal: Option<Position>,
    pub final_cursor: Option<Position>,
    pub visited: usize,
    pub pops: u32,
    pub moves: u32,
    pub visit_order: Vec<Position>,
}

impl SolveReport {
    pub fn new(solver: &Backtracker, maze: &MazeState) -> Self {
        let (rows, cols) = maze.dimensions();
        Self {
            outcome: solver.state(),
            rows,
            cols,
            start: solver.start(),
            goal: maze.goal(),
            final_cursor: maze.cursor(),
            visited: solver.visit_order().len(),
            pops: solver.pops(),
            moves: maze.moves(),
            visit_order: solver.visit_order().to_vec(),
        }
    }
}

/// Run a search to the end without pacing and summarize it.
pub fn solve(maze: &mut MazeState) -> SolveReport {
    let mut solver = Backtracker::new(maze);
    solver.run(maze);
    SolveReport::new(&solver, maze)
}
