//! Backtracking solver - stack-based depth-first search over the maze
//!
//! The solver keeps an explicit stack of frontier positions and a visited
//! grid. Each [`Backtracker::step`] pops exactly one position:
//!
//! 1. If it holds the goal, the player is moved onto it and the search ends
//!    as [`SolverState::Solved`].
//! 2. If it was not visited yet, it is marked and the player is moved there
//!    through [`MazeState::move_player`], which leaves `Trail` behind.
//! 3. Every in-bounds passable neighbor is pushed, in the order up, down,
//!    left, right. Visited checks happen at pop time, so a cell may sit on
//!    the stack more than once.
//!
//! An empty stack ends the search as [`SolverState::Exhausted`]. Because the
//! last pushed neighbor is popped first, exploration prefers right, then left,
//! then down, then up, and is fully deterministic for a given maze and start.

use arrayvec::ArrayVec;
use serde::Serialize;

use crate::core::MazeState;
use crate::types::{Direction, Position};

/// `Idle -> Running -> {Solved, Exhausted, Cancelled}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SolverState {
    Idle,
    Running,
    Solved,
    Exhausted,
    Cancelled,
}

impl SolverState {
    pub fn is_finished(self) -> bool {
        matches!(
            self,
            SolverState::Solved | SolverState::Exhausted | SolverState::Cancelled
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SolverState::Idle => "idle",
            SolverState::Running => "running",
            SolverState::Solved => "solved",
            SolverState::Exhausted => "exhausted",
            SolverState::Cancelled => "cancelled",
        }
    }
}

/// Result of a single [`Backtracker::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// First visit of this position; the player was moved there.
    Expanded(Position),
    /// Position was already visited; only its neighbors were pushed.
    Revisited(Position),
    /// The search is over.
    Finished(SolverState),
}

#[derive(Debug, Clone)]
pub struct Backtracker {
    stack: Vec<Position>,
    visited: Vec<bool>,
    cols: usize,
    state: SolverState,
    start: Option<Position>,
    visit_order: Vec<Position>,
    pops: u32,
}

impl Backtracker {
    /// Prepare a search from the maze's current cursor. A maze without a
    /// player starts with an empty stack and exhausts on the first step.
    pub fn new(maze: &MazeState) -> Self {
        let (rows, cols) = maze.dimensions();
        let start = maze.cursor();
        Self {
            stack: start.into_iter().collect(),
            visited: vec![false; rows * cols],
            cols,
            state: SolverState::Idle,
            start,
            visit_order: Vec::new(),
            pops: 0,
        }
    }

    pub fn state(&self) -> SolverState {
        self.state
    }

    pub fn start(&self) -> Option<Position> {
        self.start
    }

    /// Positions in the order they were first visited.
    pub fn visit_order(&self) -> &[Position] {
        &self.visit_order
    }

    /// Number of positions popped so far, stale ones included.
    pub fn pops(&self) -> u32 {
        self.pops
    }

    pub fn frontier_len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_visited(&self, pos: Position) -> bool {
        self.visited
            .get(pos.row * self.cols + pos.col)
            .copied()
            .unwrap_or(false)
    }

    /// Stop the search. Has no effect once it has finished.
    pub fn cancel(&mut self) {
        if !self.state.is_finished() {
            self.state = SolverState::Cancelled;
            log::debug!("solver cancelled after {} pops", self.pops);
        }
    }

    /// Pop one position and act on it.
    pub fn step(&mut self, maze: &mut MazeState) -> Step {
        if self.state.is_finished() {
            return Step::Finished(self.state);
        }
        self.state = SolverState::Running;

        let Some(pos) = self.stack.pop() else {
            self.finish(SolverState::Exhausted);
            return Step::Finished(self.state);
        };
        self.pops += 1;

        // Goal check comes before any marking so the goal is never trailed.
        if maze.is_goal(pos) {
            maze.move_player(pos);
            self.finish(SolverState::Solved);
            return Step::Finished(self.state);
        }

        let idx = pos.row * self.cols + pos.col;
        let fresh = !self.visited[idx];
        if fresh {
            self.visited[idx] = true;
            self.visit_order.push(pos);
            maze.move_player(pos);
        }

        self.stack.extend(passable_neighbors(maze, pos));

        if fresh {
            Step::Expanded(pos)
        } else {
            Step::Revisited(pos)
        }
    }

    /// Step until the search finishes.
    pub fn run(&mut self, maze: &mut MazeState) -> SolverState {
        loop {
            if let Step::Finished(state) = self.step(maze) {
                return state;
            }
        }
    }

    fn finish(&mut self, state: SolverState) {
        self.state = state;
        log::info!(
            "solver {} after {} pops, {} cells visited",
            state.as_str(),
            self.pops,
            self.visit_order.len()
        );
    }
}

/// In-bounds `Corridor`/`Goal` neighbors of `pos`, in push order.
pub fn passable_neighbors(maze: &MazeState, pos: Position) -> ArrayVec<Position, 4> {
    let mut out = ArrayVec::new();
    for dir in Direction::ALL {
        if let Some(n) = pos.step(dir) {
            if maze.contains(n) && maze.is_passable(n) {
                out.push(n);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CellState;

    const OPEN_5X5: &str = "0,0,0,0,0\n0,1,1,1,0\n0,1,1,1,0\n0,1,1,1,0\n0,0,0,0,0\n";
    const SPLIT_5X5: &str = "0,0,0,0,0\n0,1,0,1,0\n0,1,0,1,0\n0,1,0,1,0\n0,0,0,0,0\n";

    fn maze(src: &str, player: (usize, usize), goal: (usize, usize)) -> MazeState {
        let mut m = MazeState::load(src).unwrap();
        m.place_at(player.into(), goal.into()).unwrap();
        m
    }

    #[test]
    fn starts_idle() {
        let m = maze(OPEN_5X5, (1, 1), (3, 3));
        let solver = Backtracker::new(&m);
        assert_eq!(solver.state(), SolverState::Idle);
        assert_eq!(solver.frontier_len(), 1);
        assert_eq!(solver.start(), Some(Position::new(1, 1)));
    }

    #[test]
    fn first_step_expands_start_without_moving() {
        let mut m = maze(OPEN_5X5, (1, 1), (3, 3));
        let mut solver = Backtracker::new(&m);
        assert_eq!(solver.step(&mut m), Step::Expanded(Position::new(1, 1)));
        assert_eq!(solver.state(), SolverState::Running);
        assert_eq!(m.cursor(), Some(Position::new(1, 1)));
        assert_eq!(m.moves(), 0);
        // down (2,1) then right (1,2)
        assert_eq!(solver.frontier_len(), 2);
    }

    #[test]
    fn neighbors_follow_push_order() {
        let m = maze(OPEN_5X5, (1, 1), (3, 3));
        let n: Vec<_> = passable_neighbors(&m, Position::new(2, 2)).into_iter().collect();
        assert_eq!(
            n,
            vec![
                Position::new(1, 2),
                Position::new(3, 2),
                Position::new(2, 1),
                Position::new(2, 3)
            ]
        );
    }

    #[test]
    fn solves_open_room_in_depth_first_order() {
        let mut m = maze(OPEN_5X5, (1, 1), (3, 3));
        let mut solver = Backtracker::new(&m);
        assert_eq!(solver.run(&mut m), SolverState::Solved);
        assert_eq!(m.cursor(), Some(Position::new(3, 3)));
        assert!(m.goal_reached());

        let order = [(1, 1), (1, 2), (1, 3), (2, 3), (2, 2), (2, 1), (3, 1), (3, 2)];
        let expected: Vec<Position> = order
            .into_iter()
            .map(Position::from)
            .collect();
        assert_eq!(solver.visit_order(), expected.as_slice());
        for p in &expected {
            assert_eq!(m.cell_at(*p), CellState::Trail);
        }
    }

    #[test]
    fn exhausts_when_goal_is_walled_off() {
        let mut m = maze(SPLIT_5X5, (1, 1), (3, 3));
        let mut solver = Backtracker::new(&m);
        assert_eq!(solver.run(&mut m), SolverState::Exhausted);
        assert_eq!(solver.visit_order().len(), 3);
        assert_eq!(m.cell_at(Position::new(3, 3)), CellState::Goal);
        assert!(!m.goal_reached());
        assert_eq!(m.cursor(), Some(Position::new(3, 1)));
    }

    #[test]
    fn finished_solver_stays_finished() {
        let mut m = maze(SPLIT_5X5, (1, 1), (3, 3));
        let mut solver = Backtracker::new(&m);
        solver.run(&mut m);
        let rev = m.revision();
        assert_eq!(solver.step(&mut m), Step::Finished(SolverState::Exhausted));
        assert_eq!(m.revision(), rev);
        solver.cancel();
        assert_eq!(solver.state(), SolverState::Exhausted);
    }

    #[test]
    fn cancel_stops_stepping() {
        let mut m = maze(OPEN_5X5, (1, 1), (3, 3));
        let mut solver = Backtracker::new(&m);
        solver.step(&mut m);
        solver.cancel();
        assert_eq!(solver.step(&mut m), Step::Finished(SolverState::Cancelled));
    }

    #[test]
    fn unplaced_maze_exhausts_immediately() {
        let mut m = MazeState::load(OPEN_5X5).unwrap();
        let mut solver = Backtracker::new(&m);
        assert_eq!(solver.step(&mut m), Step::Finished(SolverState::Exhausted));
        assert_eq!(solver.pops(), 0);
    }
}
