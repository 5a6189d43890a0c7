//! Core maze logic - pure, deterministic, and testable
//!
//! This crate owns the maze state model. It has **zero dependencies** on UI,
//! threading, or terminal I/O:
//!
//! - **Deterministic**: the same grid and seed place the player and goal on
//!   the same cells
//! - **Single writer path**: every relocation of the player goes through
//!   [`MazeState::move_player`], for manual play and the solver alike
//! - **Cheap snapshots**: renderers copy state out with
//!   [`MazeState::snapshot_into`] and never hold the maze while drawing
//!
//! # Module Structure
//!
//! - [`grid`]: fixed-size cell array and the comma-separated source parser
//! - [`maze`]: player cursor, goal, movement rules, revision counter
//! - [`placement`]: sampling window for random placement
//! - [`rng`]: seeded LCG
//! - [`snapshot`]: render-side copy of the maze
//! - [`error`]: `FormatError`, `PlacementError`, `MazeError`
//!
//! # Example
//!
//! ```
//! use tui_maze_core::MazeState;
//! use tui_maze_types::{CellState, Position};
//!
//! let mut maze = MazeState::load("0,0,0,0\n0,1,1,0\n0,0,0,0\n").unwrap();
//! maze.place_at(Position::new(1, 1), Position::new(1, 2)).unwrap();
//!
//! assert!(maze.is_goal(Position::new(1, 2)));
//! assert!(maze.move_player(Position::new(1, 2)));
//! assert_eq!(maze.cell_at(Position::new(1, 1)), CellState::Trail);
//! assert!(maze.goal_reached());
//! ```

pub mod error;
pub mod grid;
pub mod maze;
pub mod placement;
pub mod rng;
pub mod snapshot;

pub use tui_maze_types as types;

pub use error::{FormatError, MazeError, PlacementError};
pub use grid::Grid;
pub use maze::MazeState;
pub use placement::PlacementBounds;
pub use rng::SimpleRng;
pub use snapshot::MazeSnapshot;
