//! Exhaustive solver for the nine-tile rotating emoticon puzzle
//!
//! Nine square cards carry one emoticon half on each edge. The solver
//! places and rotates them on a 3x3 board until every pair of touching
//! edges forms a complete emoticon, or reports that no arrangement does.

#![forbid(unsafe_code)]

/// Alignment, tie handling, rearrangement and the search driver
pub mod algorithm;
/// Input/output operations and error handling
pub mod io;
/// Cards, emoticon parts and the board
pub mod spatial;

pub use io::error::{PuzzleError, Result};
