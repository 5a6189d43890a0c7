//! Terminal maze renderer.
//!
//! A small, game-oriented rendering layer: views draw into a plain
//! framebuffer, and [`TerminalRenderer`] flushes it to the terminal with
//! crossterm. No widget toolkit is involved.
//!
//! - [`MazeView`] is pure and maps a snapshot to styled tiles
//! - [`TerminalRenderer`] owns the display lifecycle and diffs frames
//! - [`RenderThrottle`] skips frames whose visible state did not change

pub mod fb;
pub mod maze_view;
pub mod render_throttle;
pub mod renderer;

pub use tui_maze_core as core;
pub use tui_maze_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use maze_view::{tile_color, AnchorY, HudView, MazeView, Viewport, TILE};
pub use render_throttle::{fingerprint, RenderThrottle};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer, WINDOW_TITLE};
