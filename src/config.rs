//! Run configuration.
//!
//! Values come from the environment first and can be overridden on the
//! command line:
//!
//! - `MAZE_STEP_MS`: pause between solver expansions (default 10)
//! - `MAZE_TICK_MS`: frame tick of the render loop (default 16)
//! - `MAZE_SEED`: placement seed (default: derived from the clock)
//! - `MAZE_TILE_W`: terminal columns per maze cell (default 2)
//!
//! Unparseable values fall back to the default.

use std::str::FromStr;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::types::{DEFAULT_TILE_WIDTH, SOLVER_STEP_MS, TICK_MS};

/// Maze loaded when no path is given.
pub const DEFAULT_MAZE_PATH: &str = "mazes/labirinto.csv";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub step_ms: u64,
    pub tick_ms: u64,
    pub seed: Option<u32>,
    pub tile_width: u16,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            step_ms: SOLVER_STEP_MS as u64,
            tick_ms: TICK_MS as u64,
            seed: None,
            tile_width: DEFAULT_TILE_WIDTH,
        }
    }
}

impl RunConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key/value source (the environment in production).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        fn parsed<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
            lookup(key).and_then(|s| s.trim().parse().ok())
        }

        let defaults = Self::default();
        Self {
            step_ms: parsed(&lookup, "MAZE_STEP_MS").unwrap_or(defaults.step_ms),
            tick_ms: parsed::<u64>(&lookup, "MAZE_TICK_MS")
                .filter(|&ms| ms > 0)
                .unwrap_or(defaults.tick_ms),
            seed: parsed(&lookup, "MAZE_SEED"),
            tile_width: parsed::<u16>(&lookup, "MAZE_TILE_W")
                .filter(|&w| w > 0)
                .unwrap_or(defaults.tile_width),
        }
    }

    /// Apply command-line overrides; `None` keeps the current value.
    pub fn with_overrides(
        mut self,
        seed: Option<u32>,
        step_ms: Option<u64>,
        tile_width: Option<u16>,
    ) -> Self {
        if seed.is_some() {
            self.seed = seed;
        }
        if let Some(ms) = step_ms {
            self.step_ms = ms;
        }
        if let Some(w) = tile_width.filter(|&w| w > 0) {
            self.tile_width = w;
        }
        self
    }

    pub fn step_delay(&self) -> Duration {
        Duration::from_millis(self.step_ms)
    }

    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    /// The configured seed, or one derived from the system clock.
    pub fn resolve_seed(&self) -> u32 {
        self.seed.unwrap_or_else(clock_seed)
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_gives_defaults() {
        assert_eq!(RunConfig::from_lookup(|_| None), RunConfig::default());
    }

    #[test]
    fn reads_every_key() {
        let cfg = RunConfig::from_lookup(lookup(&[
            ("MAZE_STEP_MS", "25"),
            ("MAZE_TICK_MS", "33"),
            ("MAZE_SEED", "42"),
            ("MAZE_TILE_W", "3"),
        ]));
        assert_eq!(cfg.step_ms, 25);
        assert_eq!(cfg.tick_ms, 33);
        assert_eq!(cfg.seed, Some(42));
        assert_eq!(cfg.tile_width, 3);
    }

    #[test]
    fn bad_values_fall_back() {
        let cfg = RunConfig::from_lookup(lookup(&[
            ("MAZE_STEP_MS", "fast"),
            ("MAZE_TICK_MS", "0"),
            ("MAZE_TILE_W", "0"),
        ]));
        assert_eq!(cfg, RunConfig::default());
    }

    #[test]
    fn overrides_win_over_environment() {
        let cfg = RunConfig::from_lookup(lookup(&[("MAZE_SEED", "1"), ("MAZE_STEP_MS", "5")]))
            .with_overrides(Some(7), None, Some(4));
        assert_eq!(cfg.seed, Some(7));
        assert_eq!(cfg.step_ms, 5);
        assert_eq!(cfg.tile_width, 4);
        assert_eq!(cfg.resolve_seed(), 7);
    }
}
