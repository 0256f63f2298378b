//! Enumeration of tied rotations on edge-middle cards
//!
//! An edge-middle card with repeated parts can meet the center constraint in
//! more than one orientation. Edge alignment commits to the first one found,
//! which may not be the one the corners need. [`TiedRotations`] walks every
//! combination of the tied orientations like an odometer: the last tied card
//! turns fastest and a card that has cycled through all of its choices carries
//! into the one before it.

use log::trace;

use crate::algorithm::alignment::rotate_to_next_fit;
use crate::spatial::board::Board;
use crate::spatial::position::Position;

/// An edge-middle card with more than one fitting orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TiedCard {
    /// Cell holding the card
    pub position: Position,
    /// Number of orientations that fit the center
    pub choices: usize,
    /// Choices stepped past since the first fitting orientation
    pub turns: usize,
}

/// Odometer over the fitting orientations of every tied edge-middle card
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TiedRotations {
    cards: Vec<TiedCard>,
}

impl TiedRotations {
    /// Record every edge-middle card that could fit the center in more than one way
    ///
    /// Expects edge alignment to have succeeded, so each recorded card
    /// currently sits in one of its fitting orientations.
    pub fn collect(board: &Board) -> Self {
        let center = board.center();
        let cards = Position::EDGE_MIDDLES
            .into_iter()
            .filter_map(|position| {
                let side = position.inward_sides().first().copied()?;
                let facing = center.part(side.opposite());
                board
                    .card(position)
                    .has_multiple_emoticon_parts(facing)
                    .map(|choices| TiedCard {
                        position,
                        choices,
                        turns: 0,
                    })
            })
            .collect();
        Self { cards }
    }

    /// Whether no edge-middle card is tied
    pub const fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Tied cards in edge-middle solving order
    pub fn cards(&self) -> &[TiedCard] {
        &self.cards
    }

    /// Number of orientation combinations, including the current one
    pub fn combinations(&self) -> usize {
        self.cards.iter().map(|card| card.choices).product()
    }

    /// Turn the board to the next untried combination
    ///
    /// Returns false once every combination has been visited; the tied cards
    /// are then back in the combination that was current at [`collect`](Self::collect).
    pub fn advance(&mut self, board: &mut Board) -> bool {
        for tied in self.cards.iter_mut().rev() {
            // A tied card always has a next fit: its current orientation fits
            rotate_to_next_fit(board, tied.position);
            tied.turns += 1;
            if tied.turns < tied.choices {
                trace!(
                    "Tied card at {:?} moved to choice {}/{}",
                    tied.position,
                    tied.turns + 1,
                    tied.choices
                );
                return true;
            }
            tied.turns = 0;
        }
        false
    }
}
