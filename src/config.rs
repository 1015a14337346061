// --- File: config.rs ---
use crate::constants::{ALIVE_PROBABILITY, DEFAULT_COLS, DEFAULT_ROWS, REPRODUCTION_INTERVAL_MS};
use crate::error::{LifeError, LifeResult};
use std::{str::FromStr, time::Duration};

// Environment overrides read by `LifeConfig::from_env`.
pub const ENV_ROWS: &str = "LIFE_ROWS";
pub const ENV_COLS: &str = "LIFE_COLS";
pub const ENV_INTERVAL_MS: &str = "LIFE_INTERVAL_MS";
pub const ENV_SEED: &str = "LIFE_SEED";
pub const ENV_GENERATIONS: &str = "LIFE_GENERATIONS";

#[derive(Debug, Clone, PartialEq)]
pub struct LifeConfig {
    pub rows: usize,
    pub cols: usize,
    // Driver cadence; the engine itself has no notion of time.
    pub generation_interval: Duration,
    pub alive_probability: f64,
    pub seed: Option<u64>,
    // None runs until the board dies out.
    pub max_generations: Option<u64>,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            generation_interval: Duration::from_millis(REPRODUCTION_INTERVAL_MS),
            alive_probability: ALIVE_PROBABILITY,
            seed: None,
            max_generations: None,
        }
    }
}

impl LifeConfig {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            ..Self::default()
        }
    }

    /// Defaults overlaid with any `LIFE_*` environment variables that parse.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    // Split out from `from_env` so tests don't have to touch the process environment.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(rows) = parse_var(&lookup, ENV_ROWS) {
            config.rows = rows;
        }
        if let Some(cols) = parse_var(&lookup, ENV_COLS) {
            config.cols = cols;
        }
        if let Some(ms) = parse_var::<u64, _>(&lookup, ENV_INTERVAL_MS) {
            config.generation_interval = Duration::from_millis(ms);
        }
        if let Some(seed) = parse_var(&lookup, ENV_SEED) {
            config.seed = Some(seed);
        }
        if let Some(generations) = parse_var(&lookup, ENV_GENERATIONS) {
            config.max_generations = Some(generations);
        }
        config
    }

    pub fn validate(&self) -> LifeResult<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(LifeError::InvalidDimension {
                rows: self.rows,
                cols: self.cols,
            });
        }
        // Also catches NaN, which `gen_bool` would panic on.
        if !(0.0..=1.0).contains(&self.alive_probability) {
            return Err(LifeError::InvalidProbability(self.alive_probability));
        }
        Ok(())
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Option<T>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            log::warn!("Ignoring {}={:?}: not a valid value", key, raw);
            None
        }
    }
}
