//! Board state: nine owned cards and their current arrangement
//!
//! Cards live in a fixed arena owned by the board. The 3x3 arrangement
//! only stores arena slots, so moving cards never clones them and a
//! snapshot of the arrangement still refers to the live cards.

use ndarray::Array2;
use std::collections::HashSet;

use crate::io::configuration::{CELL_COUNT, COLUMNS, ROWS};
use crate::io::error::{Result, invalid_layout};
use crate::spatial::card::{Card, CardId};
use crate::spatial::position::{Position, Side};

/// Arrangement of the board at one instant
///
/// Produced by [`Board::snapshot`]; moves read source cells from a snapshot
/// while writing into the live board so that a batch of moves never observes
/// its own writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardSnapshot {
    slots: Array2<usize>,
}

/// The 3x3 puzzle board
#[derive(Debug, Clone)]
pub struct Board {
    cards: Vec<Card>,
    slots: Array2<usize>,
}

impl Board {
    /// Create a board from nine cards in row-major order
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::InvalidLayout`](crate::PuzzleError::InvalidLayout) if
    /// the card count is not nine, an id is zero, or an id repeats.
    pub fn new(cards: Vec<Card>) -> Result<Self> {
        if cards.len() != CELL_COUNT {
            return Err(invalid_layout(&format!(
                "expected {CELL_COUNT} cards, found {}",
                cards.len()
            )));
        }

        let mut seen = HashSet::with_capacity(CELL_COUNT);
        for card in &cards {
            if card.id() == 0 {
                return Err(invalid_layout(&"card ids must be positive"));
            }
            if !seen.insert(card.id()) {
                return Err(invalid_layout(&format!(
                    "card id {} appears more than once",
                    card.id()
                )));
            }
        }

        let slots = Array2::from_shape_vec((ROWS, COLUMNS), (0..CELL_COUNT).collect())
            .map_err(|e| invalid_layout(&e))?;

        Ok(Self { cards, slots })
    }

    /// Card at a named cell
    // Slots are arena indices created in `new` and only ever permuted
    #[allow(clippy::indexing_slicing)]
    pub fn card(&self, position: Position) -> &Card {
        &self.cards[self.slots[position.coordinates()]]
    }

    /// Mutable card at a named cell, for rotation
    // Same arena invariant as `card`
    #[allow(clippy::indexing_slicing)]
    pub fn card_mut(&mut self, position: Position) -> &mut Card {
        &mut self.cards[self.slots[position.coordinates()]]
    }

    /// Card in the middle of the board
    pub fn center(&self) -> &Card {
        self.card(Position::Center)
    }

    /// Card at a row and column, if inside the grid
    pub fn card_at(&self, row: usize, column: usize) -> Option<&Card> {
        self.slots
            .get((row, column))
            .and_then(|&slot| self.cards.get(slot))
    }

    /// Card ids in row-major order
    pub fn card_ids(&self) -> Vec<CardId> {
        self.cells().map(|(_, card)| card.id()).collect()
    }

    /// Row and column of the card with `id`
    pub fn position_of(&self, id: CardId) -> Option<(usize, usize)> {
        self.cells()
            .find(|(_, card)| card.id() == id)
            .map(|(coordinates, _)| coordinates)
    }

    /// Every cell in row-major order with the card it holds
    pub fn cells(&self) -> impl Iterator<Item = ((usize, usize), &Card)> + '_ {
        self.slots
            .indexed_iter()
            .filter_map(move |(coordinates, &slot)| {
                self.cards.get(slot).map(|card| (coordinates, card))
            })
    }

    /// Capture the current arrangement
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            slots: self.slots.clone(),
        }
    }

    /// Put the card that occupied `from` in `snapshot` onto cell `to`
    ///
    /// Returns false when either cell lies outside the grid.
    pub fn place_from(
        &mut self,
        snapshot: &BoardSnapshot,
        from: (usize, usize),
        to: (usize, usize),
    ) -> bool {
        let Some(&slot) = snapshot.slots.get(from) else {
            return false;
        };
        let Some(target) = self.slots.get_mut(to) else {
            return false;
        };
        *target = slot;
        true
    }

    /// Whether the part on `side` of the card at `position` completes its neighbor
    ///
    /// Always false on the border, where there is no neighbor.
    pub fn edge_fits(&self, position: Position, side: Side) -> bool {
        position.neighbor(side).is_some_and(|neighbor| {
            self.card(position)
                .part(side)
                .completes(self.card(neighbor).part(side.opposite()))
        })
    }

    /// Whether every pair of touching edges forms a complete emoticon
    pub fn is_solved(&self) -> bool {
        self.cells()
            .filter_map(|((row, column), _)| Position::from_coordinates(row, column))
            .all(|position| self.fits_right_and_down(position))
    }

    /// Whether the card at `position` completes its right and lower neighbors
    fn fits_right_and_down(&self, position: Position) -> bool {
        [Side::Right, Side::Down]
            .into_iter()
            .filter(|&side| position.neighbor(side).is_some())
            .all(|side| self.edge_fits(position, side))
    }
}
