// --- File: simulation.rs ---
use crate::config::LifeConfig;
use crate::constants::ALIVE_PROBABILITY;
use crate::error::LifeResult;
use crate::grid::{CellState, Grid};
use crate::utils::{SimRng, random_cell_state};
use rand::{Rng, SeedableRng};

/// Conway's Game of Life on a bounded, non-wrapping board.
///
/// Holds the current generation plus a scratch buffer of the same shape.
/// `step` reads only from `current`, writes every cell of `scratch`, then
/// swaps the two, so no cell sees another cell's next state mid-step.
///
/// Not synchronized: a driver that mutates the board from one thread while
/// stepping on another must wrap the engine in its own lock.
#[derive(Debug, Clone)]
pub struct LifeEngine {
    current: Grid,
    // Contents are stale between steps and never observed.
    scratch: Grid,
    generation: u64,
    alive_probability: f64,
}

impl LifeEngine {
    pub fn new(rows: usize, cols: usize) -> LifeResult<Self> {
        Grid::new(rows, cols).map(Self::from_grid)
    }

    pub fn from_config(config: &LifeConfig) -> LifeResult<Self> {
        config.validate()?;
        let mut engine = Self::new(config.rows, config.cols)?;
        engine.alive_probability = config.alive_probability;
        Ok(engine)
    }

    /// Starts from an existing board (e.g. a parsed pattern) at generation 0.
    pub fn from_grid(grid: Grid) -> Self {
        let scratch = grid.clone();
        Self {
            current: grid,
            scratch,
            generation: 0,
            alive_probability: ALIVE_PROBABILITY,
        }
    }

    // --- Queries ---

    pub fn get_cell(&self, row: usize, col: usize) -> LifeResult<CellState> {
        self.current.get(row, col)
    }

    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        self.current.dimensions()
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.current
    }

    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.current.population()
    }

    pub fn is_extinct(&self) -> bool {
        self.current.live_cells().next().is_none()
    }

    // --- Mutators ---

    pub fn set_cell(&mut self, row: usize, col: usize, state: CellState) -> LifeResult<()> {
        self.current.set(row, col, state)
    }

    /// Flips one cell and returns its new state.
    pub fn toggle_cell(&mut self, row: usize, col: usize) -> LifeResult<CellState> {
        let state = self.current.get(row, col)?.toggled();
        self.current.set(row, col, state)?;
        Ok(state)
    }

    pub fn clear(&mut self) {
        self.current.fill(CellState::Dead);
        self.generation = 0;
        log::debug!("Cleared {}x{} board", self.current.rows(), self.current.cols());
    }

    /// Rewrites every cell with an independent draw from `rng`.
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let (rows, cols) = self.current.dimensions();
        for row in 0..rows {
            for col in 0..cols {
                self.current
                    .set_at(row, col, random_cell_state(rng, self.alive_probability));
            }
        }
        self.generation = 0;
        log::debug!(
            "Randomized {}x{} board, population {}",
            rows,
            cols,
            self.current.population()
        );
    }

    pub fn randomize_seeded(&mut self, seed: u64) {
        let mut rng = SimRng::seed_from_u64(seed);
        self.randomize(&mut rng);
    }

    // --- Advance ---

    /// Computes the next generation and makes it current.
    pub fn step(&mut self) -> &Grid {
        let (rows, cols) = self.current.dimensions();
        for row in 0..rows {
            for col in 0..cols {
                let alive = self.current.cell_at(row, col).is_alive();
                let neighbors = self.current.count_live_neighbors(row, col);
                let next = matches!((alive, neighbors), (true, 2) | (true, 3) | (false, 3));
                self.scratch.set_at(row, col, CellState::from(next));
            }
        }
        std::mem::swap(&mut self.current, &mut self.scratch);
        self.generation += 1;
        log::trace!(
            "Generation {} population {}",
            self.generation,
            self.current.population()
        );
        &self.current
    }
}
