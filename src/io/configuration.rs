//! Grid constants, search bounds and runtime configuration defaults

// Fixed 3x3 topology
/// Number of rows on the board
pub const ROWS: usize = 3;
/// Number of columns on the board
pub const COLUMNS: usize = 3;
/// Number of cells (and cards) on the board
pub const CELL_COUNT: usize = ROWS * COLUMNS;
/// Row-major index of the center cell
pub const CENTER_INDEX: usize = (ROWS / 2) * COLUMNS + COLUMNS / 2;
/// Number of sides on a card, and of distinct quarter-turn orientations
pub const SIDE_COUNT: usize = 4;

/// `n!` evaluated at compile time, saturating at `u64::MAX`
pub const fn factorial(n: usize) -> u64 {
    let mut result: u64 = 1;
    let mut i: u64 = 2;
    while i <= n as u64 {
        result = result.saturating_mul(i);
        i += 1;
    }
    result
}

// Every id serves as center once, paired with every ordering of the other eight
/// Rearrangements performed before the search space is exhausted
pub const MAX_REARRANGEMENTS: u64 = CELL_COUNT as u64 * factorial(CELL_COUNT - 1);

/// Attempts performed on an unsolvable board (initial arrangement plus every rearrangement)
pub const MAX_ATTEMPTS: u64 = MAX_REARRANGEMENTS + 1;

// Default values for configurable parameters
/// Fixed seed for reproducible shuffles
pub const DEFAULT_SEED: u64 = 42;

// Background solve settings
/// Name given to the solver worker thread
pub const SOLVER_THREAD_NAME: &str = "emotiles-solver";
/// Delay between progress refreshes while a background solve runs
pub const PROGRESS_POLL_INTERVAL_MS: u64 = 50;
/// Width of the attempt progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
