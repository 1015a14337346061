//! Conway's Game of Life on a fixed-size, non-wrapping grid.
//!
//! [`LifeEngine`] owns the board and advances it one generation per
//! [`LifeEngine::step`]. Pacing, rendering and input belong to the caller.

pub mod config;
pub mod constants;
pub mod error;
pub mod grid;
pub mod simulation;
pub mod utils;

pub use config::LifeConfig;
pub use error::{LifeError, LifeResult};
pub use grid::{CellState, Grid};
pub use simulation::LifeEngine;
