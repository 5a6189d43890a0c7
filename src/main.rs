//! Terminal maze runner (default binary).
//!
//! Loads a maze, places the player and goal at random, then either solves it
//! headless and prints a JSON report, or opens the terminal view where the
//! player can be moved by hand and the backtracking solver can be started.

use std::path::PathBuf;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};

use tui_maze::config::{RunConfig, DEFAULT_MAZE_PATH};
use tui_maze::core::{MazeSnapshot, MazeState, PlacementBounds, SimpleRng};
use tui_maze::engine::{self, SolverState};
use tui_maze::input::{handle_key_event, move_target};
use tui_maze::runtime::{lock, share, SharedMaze, SolverRuntime};
use tui_maze::term::{
    fingerprint, FrameBuffer, HudView, MazeView, RenderThrottle, TerminalRenderer, Viewport,
};
use tui_maze::types::MazeAction;

/// Unchanged frames are still refreshed this often.
const IDLE_REFRESH_MS: u64 = 500;

/// How long the solved maze stays on screen before exiting.
const SOLVED_HOLD: Duration = Duration::from_millis(1200);

/// Grid maze with manual play and an animated backtracking solver
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Maze file: comma-separated 0 (wall) / 1 (corridor), one row per line
    #[arg(default_value = DEFAULT_MAZE_PATH)]
    maze: PathBuf,

    /// Placement seed (overrides MAZE_SEED)
    #[arg(long)]
    seed: Option<u32>,

    /// Start the solver right away
    #[arg(long)]
    solve: bool,

    /// Solve without a terminal UI and print a JSON report
    #[arg(long)]
    headless: bool,

    /// Pause between solver steps in milliseconds (overrides MAZE_STEP_MS)
    #[arg(long)]
    step_ms: Option<u64>,

    /// Terminal columns per maze cell (overrides MAZE_TILE_W)
    #[arg(long)]
    tile_width: Option<u16>,
}

fn main() -> Result<()> {
    init_logging();

    let args = Args::parse();
    let config = RunConfig::from_env().with_overrides(args.seed, args.step_ms, args.tile_width);
    let seed = config.resolve_seed();
    log::debug!("config {:?}, seed {}", config, seed);

    let mut maze = MazeState::load_file(&args.maze)?;
    let (rows, cols) = maze.dimensions();
    maze.place_player_and_goal(PlacementBounds::interior(rows, cols), &mut SimpleRng::new(seed))
        .context("cannot place player and goal")?;

    if args.headless {
        let report = engine::solve(&mut maze);
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let maze = share(maze);
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &maze, &config, seed, args.solve);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Logging is off unless `MAZE_LOG` is set; it goes to stderr, so redirect
/// it (`2>maze.log`) while the terminal view is up.
fn init_logging() {
    if std::env::var_os("MAZE_LOG").is_some() {
        let env = env_logger::Env::new()
            .filter("MAZE_LOG")
            .write_style("MAZE_LOG_STYLE");
        env_logger::init_from_env(env);
    }
}

fn run(
    term: &mut TerminalRenderer,
    maze: &SharedMaze,
    config: &RunConfig,
    seed: u32,
    autostart: bool,
) -> Result<()> {
    let mut solver = SolverRuntime::new()?;
    if autostart {
        solver.start(maze.clone(), config.step_delay());
    }

    let result = frame_loop(term, maze, &mut solver, config, seed);

    let state = solver.shutdown();
    log::info!("exiting, solver {}", state.as_str());
    result
}

fn frame_loop(
    term: &mut TerminalRenderer,
    maze: &SharedMaze,
    solver: &mut SolverRuntime,
    config: &RunConfig,
    seed: u32,
) -> Result<()> {
    let view = MazeView::new(config.tile_width, 1);
    let mut throttle = RenderThrottle::new(IDLE_REFRESH_MS);
    let mut snap = MazeSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);
    let started = Instant::now();

    loop {
        let state = solver.state();
        lock(maze).snapshot_into(&mut snap);

        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let fp = fingerprint(snap.revision, state as u8, (w, h));
        if throttle.should_render(started.elapsed().as_millis() as u64, fp) {
            let hud = HudView {
                solver: state.as_str(),
                seed,
                banner: banner(state, &snap),
            };
            view.render_into(&snap, &hud, Viewport::new(w, h), &mut fb);
            term.draw_swap(&mut fb)?;
        }

        if state == SolverState::Solved {
            thread::sleep(SOLVED_HOLD);
            return Ok(());
        }

        // Input, bounded by one tick.
        if !event::poll(config.tick())? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => match handle_key_event(key) {
                Some(MazeAction::Quit) => return Ok(()),
                Some(MazeAction::Solve) => {
                    solver.start(maze.clone(), config.step_delay());
                }
                Some(MazeAction::Move(dir)) => {
                    let mut m = lock(maze);
                    let dims = m.dimensions();
                    if let Some(target) = m.cursor().and_then(|c| move_target(c, dir, dims)) {
                        m.move_player(target);
                    }
                }
                None => {}
            },
            Event::Resize(..) => {
                term.invalidate();
                throttle.invalidate();
            }
            _ => {}
        }
    }
}

fn banner(state: SolverState, snap: &MazeSnapshot) -> Option<&'static str> {
    match state {
        SolverState::Solved => Some("SOLVED"),
        SolverState::Exhausted => Some("NO PATH"),
        _ if snap.goal_reached => Some("GOAL REACHED"),
        _ => None,
    }
}
