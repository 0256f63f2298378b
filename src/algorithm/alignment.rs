//! Per-card rotation search against neighbor constraints

use crate::io::configuration::SIDE_COUNT;
use crate::spatial::board::Board;
use crate::spatial::position::Position;

/// Whether every inward side of the card at `position` completes its neighbor
pub fn fits_inward(board: &Board, position: Position) -> bool {
    position
        .inward_sides()
        .iter()
        .all(|&side| board.edge_fits(position, side))
}

/// Rotate the card at `position` until its inward sides fit, trying the current orientation first
///
/// After a failure the card has turned a full circle and is back in its
/// original orientation.
pub fn rotate_to_fit(board: &mut Board, position: Position) -> bool {
    for _ in 0..SIDE_COUNT {
        if fits_inward(board, position) {
            return true;
        }
        board.card_mut(position).rotate_right();
    }
    false
}

/// Rotate the card at `position` to the next orientation whose inward sides fit
///
/// The current orientation is tried last, so repeated calls on a card with
/// several fitting orientations cycle through all of them.
pub fn rotate_to_next_fit(board: &mut Board, position: Position) -> bool {
    for _ in 0..SIDE_COUNT {
        board.card_mut(position).rotate_right();
        if fits_inward(board, position) {
            return true;
        }
    }
    false
}

/// Align the four edge-middle cards with the center, stopping at the first that cannot fit
pub fn align_edge_middles(board: &mut Board) -> bool {
    Position::EDGE_MIDDLES
        .into_iter()
        .all(|position| rotate_to_fit(board, position))
}

/// Align the four corner cards with their edge-middle neighbors, stopping at the first failure
pub fn align_corners(board: &mut Board) -> bool {
    Position::CORNERS
        .into_iter()
        .all(|position| rotate_to_fit(board, position))
}
