//! Layered rearrangement: center choice, then every ordering of the outer ring

use log::debug;

use crate::algorithm::mover::move_cards_by_ids;
use crate::algorithm::permutation::PermutationGenerator;
use crate::io::configuration::{CELL_COUNT, CENTER_INDEX};
use crate::io::error::{PuzzleError, Result};
use crate::spatial::board::Board;
use crate::spatial::card::CardId;

/// Result of asking for the next arrangement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RearrangeStep {
    /// The board holds a new, untried arrangement
    Rearranged,
    /// Every center choice has been paired with every outer ordering
    Exhausted,
}

/// Cursor over the rearrangement search space
///
/// The first call to [`advance`](Self::advance) promotes the first card (in
/// row-major order) into the center and starts enumerating orderings of the
/// eight outer cards. Whenever that enumeration runs out, the next card that
/// has not yet been in the center is swapped in and a fresh enumeration begins.
#[derive(Debug, Clone, Default)]
pub struct Rearranger {
    generator: Option<PermutationGenerator>,
    centers_tried: Vec<CardId>,
    rearrangements: u64,
}

impl Rearranger {
    /// Create a cursor that has not yet touched the board
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the board to the next arrangement of the search space
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::CardNotFound`], [`PuzzleError::CentersExhausted`],
    /// [`PuzzleError::GeneratorMissing`] or [`PuzzleError::PermutationExhausted`]
    /// when the board's id set or the cursor state has been corrupted.
    pub fn advance(&mut self, board: &mut Board) -> Result<RearrangeStep> {
        let needs_new_center = self
            .generator
            .as_ref()
            .is_none_or(PermutationGenerator::all_permutations_generated);

        if needs_new_center {
            if self.centers_tried.len() >= CELL_COUNT {
                debug!(
                    "All {} center choices exhausted after {} rearrangements",
                    self.centers_tried.len(),
                    self.rearrangements
                );
                return Ok(RearrangeStep::Exhausted);
            }
            self.promote_next_center(board)?;
        }

        self.apply_next_permutation(board)?;
        self.rearrangements += 1;
        Ok(RearrangeStep::Rearranged)
    }

    /// Arrangements applied so far
    pub const fn rearrangements(&self) -> u64 {
        self.rearrangements
    }

    /// Ids that have been promoted into the center, in promotion order
    pub fn centers_tried(&self) -> &[CardId] {
        &self.centers_tried
    }

    fn promote_next_center(&mut self, board: &mut Board) -> Result<()> {
        let mut ids = board.card_ids();
        let Some(index) = ids.iter().position(|id| !self.centers_tried.contains(id)) else {
            return Err(PuzzleError::CentersExhausted {
                tried: self.centers_tried.len(),
            });
        };

        ids.swap(index, CENTER_INDEX);
        let promoted = ids.get(CENTER_INDEX).copied().unwrap_or_default();
        move_cards_by_ids(&ids, board)?;
        self.centers_tried.push(promoted);

        let outer = outer_card_ids(board);
        debug!(
            "Card {promoted} promoted to center ({}/{CELL_COUNT}), outer ring {outer:?}",
            self.centers_tried.len()
        );
        self.generator = Some(PermutationGenerator::new(outer));
        Ok(())
    }

    fn apply_next_permutation(&mut self, board: &mut Board) -> Result<()> {
        let generator = self
            .generator
            .as_mut()
            .ok_or(PuzzleError::GeneratorMissing)?;
        let mut target = generator.next_permutation()?;
        target.insert(CENTER_INDEX.min(target.len()), board.center().id());
        move_cards_by_ids(&target, board)?;
        Ok(())
    }
}

/// Ids of the eight cards around the center, in row-major order
pub fn outer_card_ids(board: &Board) -> Vec<CardId> {
    board
        .card_ids()
        .into_iter()
        .enumerate()
        .filter(|&(index, _)| index != CENTER_INDEX)
        .map(|(_, id)| id)
        .collect()
}
