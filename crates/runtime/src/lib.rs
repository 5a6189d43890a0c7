//! Solver runtime.
//!
//! Bridges the sync frame loop with a background solver task. The maze lives
//! behind a single mutex ([`SharedMaze`]); the solver takes the lock for one
//! step at a time and the frame loop takes it to apply key presses and copy a
//! snapshot. Between expansions the solver waits on a timer that a stop signal
//! can interrupt, so closing the display cancels it promptly.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use anyhow::{Context, Result};
use tokio::runtime::{Builder, Runtime};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time;

pub use tui_maze_core as core;
pub use tui_maze_engine as engine;
pub use tui_maze_types as types;

use crate::core::MazeState;
use crate::engine::{Backtracker, SolverState, Step};

/// How long [`SolverRuntime::shutdown`] waits for the task to notice the stop.
const SHUTDOWN_GRACE: Duration = Duration::from_millis(500);

/// The exclusive-access boundary around the maze.
pub type SharedMaze = Arc<Mutex<MazeState>>;

pub fn share(maze: MazeState) -> SharedMaze {
    Arc::new(Mutex::new(maze))
}

/// Lock the maze. A panic in another holder does not leave the grid in a
/// torn state (every mutation is a few plain stores), so poisoning is ignored.
pub fn lock(maze: &SharedMaze) -> MutexGuard<'_, MazeState> {
    maze.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Run a backtracking search over `maze` until it finishes or `stop` flips
/// to `true`.
///
/// The lock is held for one [`Backtracker::step`] at a time. After a step
/// that moved the player the task waits `step_delay`; stale pops only yield.
/// Every state change is published on `status`.
pub async fn drive(
    maze: SharedMaze,
    step_delay: Duration,
    mut stop: watch::Receiver<bool>,
    status: watch::Sender<SolverState>,
) -> SolverState {
    let mut solver = Backtracker::new(&lock(&maze));
    status.send_replace(SolverState::Running);

    loop {
        if *stop.borrow() {
            solver.cancel();
            break;
        }

        let step = {
            let mut guard = lock(&maze);
            solver.step(&mut guard)
        };

        match step {
            Step::Finished(_) => break,
            Step::Revisited(_) => tokio::task::yield_now().await,
            Step::Expanded(_) => {
                tokio::select! {
                    _ = time::sleep(step_delay) => {}
                    changed = stop.changed() => {
                        // Sender gone: nobody can stop us later, so stop now.
                        if changed.is_err() {
                            solver.cancel();
                            break;
                        }
                    }
                }
            }
        }
    }

    let state = solver.state();
    status.send_replace(state);
    state
}

/// Owns the tokio runtime the solver task runs on.
pub struct SolverRuntime {
    rt: Runtime,
    stop_tx: watch::Sender<bool>,
    status_rx: watch::Receiver<SolverState>,
    status_tx: Option<watch::Sender<SolverState>>,
    task: Option<JoinHandle<SolverState>>,
}

impl SolverRuntime {
    pub fn new() -> Result<Self> {
        let rt = Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("maze-solver")
            .enable_all()
            .build()
            .context("failed to create solver runtime")?;
        let (stop_tx, _) = watch::channel(false);
        let (status_tx, status_rx) = watch::channel(SolverState::Idle);

        Ok(Self {
            rt,
            stop_tx,
            status_rx,
            status_tx: Some(status_tx),
            task: None,
        })
    }

    /// Spawn the solver. Returns `false` if it was already started; a maze is
    /// solved at most once per runtime.
    pub fn start(&mut self, maze: SharedMaze, step_delay: Duration) -> bool {
        let Some(status_tx) = self.status_tx.take() else {
            return false;
        };
        let stop_rx = self.stop_tx.subscribe();
        log::info!("starting solver, step delay {:?}", step_delay);
        self.task = Some(self.rt.spawn(drive(maze, step_delay, stop_rx, status_tx)));
        true
    }

    pub fn is_started(&self) -> bool {
        self.task.is_some()
    }

    pub fn state(&self) -> SolverState {
        *self.status_rx.borrow()
    }

    /// Ask the task to stop at its next check. Does not wait.
    pub fn stop(&self) {
        self.stop_tx.send_replace(true);
    }

    /// Stop the task, wait briefly for it to finish, and tear the runtime down.
    pub fn shutdown(mut self) -> SolverState {
        self.stop();
        if let Some(task) = self.task.take() {
            match self.rt.block_on(time::timeout(SHUTDOWN_GRACE, task)) {
                Ok(Ok(state)) => log::debug!("solver task ended as {}", state.as_str()),
                Ok(Err(e)) => log::warn!("solver task failed: {}", e),
                Err(_) => log::warn!("solver task did not stop within {:?}", SHUTDOWN_GRACE),
            }
        }
        let state = self.state();
        self.rt.shutdown_timeout(SHUTDOWN_GRACE);
        state
    }
}
