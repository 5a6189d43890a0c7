//! Solver engine.
//!
//! Drives a [`MazeState`](tui_maze_core::MazeState) with a stack-based
//! depth-first search. The engine is synchronous and single-stepped: the
//! caller decides how to pace and where to hold the maze lock between steps.

pub mod report;
pub mod solver;

pub use tui_maze_core as core;
pub use tui_maze_types as types;

pub use report::{solve, SolveReport};
pub use solver::{passable_neighbors, Backtracker, SolverState, Step};
