// --- File: constants.rs ---
// --- Board Constants ---
pub const DEFAULT_ROWS: usize = 10;
pub const DEFAULT_COLS: usize = 10;

// --- Pacing ---
// Delay between generations when the driver is playing.
pub const REPRODUCTION_INTERVAL_MS: u64 = 100;

// --- Randomize ---
pub const ALIVE_PROBABILITY: f64 = 0.5;

// --- Text Form ---
pub const LIVE_GLYPH: char = '#';
pub const DEAD_GLYPH: char = '.';

// --- End of File: constants.rs ---
