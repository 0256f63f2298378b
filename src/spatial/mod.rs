//! Board geometry and the pieces placed on it
//!
//! This module contains:
//! - Emoticon halves and their completion rule
//! - Named cells and sides of the 3x3 grid
//! - Rotatable cards
//! - The board arena and its arrangement

/// Board state and arrangement snapshots
pub mod board;
/// Rotatable four-sided cards
pub mod card;
/// Emoticon halves, sides and colors
pub mod emoticon;
/// Named cells and sides of the grid
pub mod position;

pub use board::Board;
