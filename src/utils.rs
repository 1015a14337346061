use crate::grid::CellState;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub type SimRng = StdRng;

// --- Helper Functions ---

// One independent draw: alive with `probability`, dead otherwise.
pub fn random_cell_state<R: Rng + ?Sized>(rng: &mut R, probability: f64) -> CellState {
    CellState::from(rng.gen_bool(probability.clamp(0.0, 1.0)))
}

// Seeded when a seed is given so runs can be replayed, entropy otherwise.
pub fn sim_rng(seed: Option<u64>) -> SimRng {
    match seed {
        Some(seed) => SimRng::seed_from_u64(seed),
        None => SimRng::from_entropy(),
    }
}
