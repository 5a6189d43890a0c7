//! Maze state - the single source of truth for layout and player position
//!
//! All reads and writes to the grid go through [`MazeState`]. The player
//! cursor and goal position are cached next to the grid so queries never
//! scan.
//!
//! Movement semantics are shared by manual play and the solver: the only way
//! to relocate the player is [`MazeState::move_player`].

use std::fs;
use std::path::Path;

use crate::error::{FormatError, MazeError, PlacementError};
use crate::grid::Grid;
use crate::placement::PlacementBounds;
use crate::rng::SimpleRng;
use crate::snapshot::MazeSnapshot;
use crate::types::{CellState, Position, MAX_PLACEMENT_ATTEMPTS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MazeState {
    grid: Grid,
    cursor: Option<Position>,
    goal: Option<Position>,
    goal_reached: bool,
    moves: u32,
    /// Incremented on every mutation; observers redraw when it changes.
    revision: u64,
}

impl MazeState {
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            cursor: None,
            goal: None,
            goal_reached: false,
            moves: 0,
            revision: 0,
        }
    }

    /// Parse a maze from its delimited text form. Every cell is `Wall` or
    /// `Corridor` afterwards.
    pub fn load(source: &str) -> Result<Self, FormatError> {
        let grid = Grid::parse(source)?;
        log::debug!("loaded {}x{} maze", grid.rows(), grid.cols());
        Ok(Self::new(grid))
    }

    pub fn load_file(path: impl AsRef<Path>) -> Result<Self, MazeError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| MazeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::load(&source).map_err(|source| MazeError::Format {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Put the player, then the goal, on random corridor cells inside
    /// `bounds` by rejection sampling.
    ///
    /// The goal is drawn after the player cell has become `Player`, so the two
    /// are always distinct. Any earlier placement and trail are cleared first.
    /// On failure the maze is left without a player or goal.
    pub fn place_player_and_goal(
        &mut self,
        bounds: PlacementBounds,
        rng: &mut SimpleRng,
    ) -> Result<(Position, Position), PlacementError> {
        let bounds = bounds
            .clamp_to(self.grid.rows(), self.grid.cols())
            .ok_or(PlacementError::EmptyBounds(bounds))?;
        self.reset();

        let player = self.sample_corridor(bounds, rng)?;
        self.grid.set(player, CellState::Player);
        self.cursor = Some(player);

        let goal = match self.sample_corridor(bounds, rng) {
            Ok(goal) => goal,
            Err(e) => {
                self.reset();
                return Err(e);
            }
        };
        self.grid.set(goal, CellState::Goal);
        self.goal = Some(goal);
        self.revision += 1;

        log::info!("placed player at {} and goal at {}", player, goal);
        Ok((player, goal))
    }

    /// Place player and goal on explicit cells. Both must be corridor
    /// terrain and distinct.
    ///
    /// Cells currently covered by the player, goal or trail count as
    /// corridor. A rejected request leaves the current placement untouched.
    pub fn place_at(&mut self, player: Position, goal: Position) -> Result<(), PlacementError> {
        if player == goal {
            return Err(PlacementError::SameCell(player));
        }
        for pos in [player, goal] {
            let open = self.grid.get(pos).is_some_and(|s| s != CellState::Wall);
            if !open {
                return Err(PlacementError::NotCorridor(pos));
            }
        }
        self.reset();

        self.grid.set(player, CellState::Player);
        self.grid.set(goal, CellState::Goal);
        self.cursor = Some(player);
        self.goal = Some(goal);
        self.revision += 1;
        Ok(())
    }

    fn sample_corridor(
        &self,
        bounds: PlacementBounds,
        rng: &mut SimpleRng,
    ) -> Result<Position, PlacementError> {
        for _ in 0..MAX_PLACEMENT_ATTEMPTS {
            let pos = bounds.sample(rng);
            if self.grid.get(pos) == Some(CellState::Corridor) {
                return Ok(pos);
            }
        }
        Err(PlacementError::NoCorridor {
            bounds,
            attempts: MAX_PLACEMENT_ATTEMPTS,
        })
    }

    /// Drop player, goal and trail, leaving plain terrain.
    fn reset(&mut self) {
        self.grid.clear_overlays();
        self.cursor = None;
        self.goal = None;
        self.goal_reached = false;
        self.moves = 0;
        self.revision += 1;
    }

    /// Relocate the player to `pos`.
    ///
    /// A no-op returning `false` when the maze has no player yet, when `pos`
    /// lies outside the grid, or when the cell is not `Corridor`/`Goal`.
    /// Otherwise the old cursor cell becomes `Trail`, `pos` becomes `Player`
    /// and the revision is bumped. There is no adjacency requirement here.
    pub fn move_player(&mut self, pos: Position) -> bool {
        let Some(from) = self.cursor else {
            return false;
        };
        if !self.grid.get(pos).is_some_and(CellState::is_passable) {
            return false;
        }

        self.grid.set(from, CellState::Trail);
        self.grid.set(pos, CellState::Player);
        self.cursor = Some(pos);
        if self.goal == Some(pos) {
            self.goal_reached = true;
        }
        self.moves += 1;
        self.revision += 1;
        true
    }

    /// Current state of `pos`.
    ///
    /// # Panics
    ///
    /// When `pos` is outside the grid. Use [`MazeState::get`] for a checked
    /// read.
    pub fn cell_at(&self, pos: Position) -> CellState {
        match self.grid.get(pos) {
            Some(state) => state,
            None => panic!(
                "position {} outside {}x{} maze",
                pos,
                self.grid.rows(),
                self.grid.cols()
            ),
        }
    }

    pub fn get(&self, pos: Position) -> Option<CellState> {
        self.grid.get(pos)
    }

    /// True iff `pos` currently holds the goal. Panics when out of bounds.
    pub fn is_goal(&self, pos: Position) -> bool {
        self.cell_at(pos) == CellState::Goal
    }

    /// True iff `pos` is `Corridor` or `Goal`. Panics when out of bounds.
    pub fn is_passable(&self, pos: Position) -> bool {
        self.cell_at(pos).is_passable()
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.grid.contains(pos)
    }

    pub fn cursor(&self) -> Option<Position> {
        self.cursor
    }

    pub fn goal(&self) -> Option<Position> {
        self.goal
    }

    pub fn goal_reached(&self) -> bool {
        self.goal_reached
    }

    /// (rows, cols)
    pub fn dimensions(&self) -> (usize, usize) {
        (self.grid.rows(), self.grid.cols())
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Copy the renderable state into `out`, reusing its allocation.
    pub fn snapshot_into(&self, out: &mut MazeSnapshot) {
        out.rows = self.grid.rows();
        out.cols = self.grid.cols();
        out.cells.clear();
        out.cells.extend_from_slice(self.grid.cells());
        out.cursor = self.cursor;
        out.goal = self.goal;
        out.goal_reached = self.goal_reached;
        out.moves = self.moves;
        out.revision = self.revision;
    }

    pub fn snapshot(&self) -> MazeSnapshot {
        let mut s = MazeSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}
