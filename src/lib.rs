//! TUI Maze (workspace facade crate).
//!
//! Re-exports the workspace crates under short module names
//! (`tui_maze::{core, engine, input, runtime, term, types}`) and hosts the
//! run configuration shared by the binary and the integration tests.

pub mod config;

pub use tui_maze_core as core;
pub use tui_maze_engine as engine;
pub use tui_maze_input as input;
pub use tui_maze_runtime as runtime;
pub use tui_maze_term as term;
pub use tui_maze_types as types;
