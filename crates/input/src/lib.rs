//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::MazeAction`] and turns a
//! directional action into the destination cell the maze should be asked to
//! move to. Nothing here touches the maze itself.

pub mod map;

pub use tui_maze_types as types;

pub use map::{handle_key_event, move_target, should_quit};
