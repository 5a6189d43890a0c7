//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data with no I/O, so they are usable in any context
//! (maze state, solver, terminal rendering, headless reports).
//!
//! # Cell Codes
//!
//! The persisted grid format only knows walls and corridors. The other states
//! are runtime overlays on top of corridor cells:
//!
//! | State | Code | Persisted |
//! |-------|------|-----------|
//! | `Wall` | 0 | yes |
//! | `Corridor` | 1 | yes |
//! | `Player` | 2 | no |
//! | `Goal` | 3 | no |
//! | `Trail` | 4 | no |
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Frame tick of the render loop (~60 FPS) |
//! | `SOLVER_STEP_MS` | 10 | Pause after each solver expansion |
//!
//! # Examples
//!
//! ```
//! use tui_maze_types::{CellState, Direction, Position};
//!
//! assert_eq!(CellState::from_code(1), Some(CellState::Corridor));
//! assert!(CellState::Goal.is_passable());
//!
//! let p = Position::new(1, 1);
//! assert_eq!(p.step(Direction::Up), Some(Position::new(0, 1)));
//! assert_eq!(Position::new(0, 0).step(Direction::Left), None);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Frame tick of the interactive loop in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Delay between solver expansions, purely for animation.
pub const SOLVER_STEP_MS: u32 = 10;

/// Lower edge of the random placement window (rows and columns).
pub const PLACEMENT_MARGIN: usize = 2;

/// Rejection sampling gives up after this many draws per placement.
pub const MAX_PLACEMENT_ATTEMPTS: u32 = 10_000;

/// Terminal columns per maze cell (compensates for glyph aspect ratio).
pub const DEFAULT_TILE_WIDTH: u16 = 2;

/// State of a single maze cell.
///
/// `Wall` and `Corridor` are terrain loaded from the grid source.
/// `Player`, `Goal` and `Trail` only ever sit on top of corridor cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum CellState {
    #[default]
    Wall = 0,
    Corridor = 1,
    Player = 2,
    Goal = 3,
    Trail = 4,
}

impl CellState {
    /// Decode any of the five runtime codes.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(CellState::Wall),
            1 => Some(CellState::Corridor),
            2 => Some(CellState::Player),
            3 => Some(CellState::Goal),
            4 => Some(CellState::Trail),
            _ => None,
        }
    }

    /// Decode a code from the persisted grid format (`0` or `1` only).
    pub fn from_persisted(code: u8) -> Option<Self> {
        match code {
            0 => Some(CellState::Wall),
            1 => Some(CellState::Corridor),
            _ => None,
        }
    }

    pub fn code(self) -> u8 {
        self as u8
    }

    /// A cell the player may enter: an open corridor or the goal.
    pub fn is_passable(self) -> bool {
        matches!(self, CellState::Corridor | CellState::Goal)
    }

    pub fn is_terrain(self) -> bool {
        matches!(self, CellState::Wall | CellState::Corridor)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CellState::Wall => "wall",
            CellState::Corridor => "corridor",
            CellState::Player => "player",
            CellState::Goal => "goal",
            CellState::Trail => "trail",
        }
    }
}

/// A (row, column) pair, 0-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Neighbor one step in `dir`, or `None` when it would leave the
    /// non-negative quadrant. Upper bounds are the caller's business.
    pub fn step(self, dir: Direction) -> Option<Position> {
        let (dr, dc) = dir.delta();
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        Some(Position { row, col })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

/// The four orthogonal directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Push order used by the backtracking solver.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// (row delta, column delta)
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

/// Commands the host loop understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MazeAction {
    Move(Direction),
    /// Start the backtracking solver (ignored once it has started).
    Solve,
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn persisted_format_only_accepts_terrain() {
        assert_eq!(CellState::from_persisted(0), Some(CellState::Wall));
        assert_eq!(CellState::from_persisted(1), Some(CellState::Corridor));
        for code in 2..=9 {
            assert_eq!(CellState::from_persisted(code), None);
        }
    }

    #[test]
    fn runtime_codes_roundtrip() {
        for code in 0..=4 {
            let state = CellState::from_code(code).unwrap();
            assert_eq!(state.code(), code);
        }
        assert_eq!(CellState::from_code(5), None);
    }

    #[test]
    fn passability() {
        assert!(CellState::Corridor.is_passable());
        assert!(CellState::Goal.is_passable());
        assert!(!CellState::Wall.is_passable());
        assert!(!CellState::Player.is_passable());
        assert!(!CellState::Trail.is_passable());
    }

    #[test]
    fn step_saturates_at_origin() {
        let origin = Position::new(0, 0);
        assert_eq!(origin.step(Direction::Up), None);
        assert_eq!(origin.step(Direction::Left), None);
        assert_eq!(origin.step(Direction::Down), Some(Position::new(1, 0)));
        assert_eq!(origin.step(Direction::Right), Some(Position::new(0, 1)));
    }

    #[test]
    fn position_display() {
        assert_eq!(Position::new(3, 7).to_string(), "(3, 7)");
    }
}
