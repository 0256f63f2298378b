//! Relocating cards to match a target id order

use log::debug;
use rand::Rng;
use std::collections::HashSet;

use crate::algorithm::permutation::PermutationGenerator;
use crate::io::configuration::{CELL_COUNT, COLUMNS};
use crate::io::error::{PuzzleError, Result, invalid_layout};
use crate::spatial::board::Board;
use crate::spatial::card::CardId;

/// A single card relocation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CardMove {
    /// Row the card is taken from
    pub from_row: usize,
    /// Column the card is taken from
    pub from_column: usize,
    /// Row the card is placed on
    pub to_row: usize,
    /// Column the card is placed on
    pub to_column: usize,
}

/// Compute the moves that turn the board's row-major ids into `target`
///
/// Cells whose card already matches produce no move.
///
/// # Errors
///
/// Returns [`PuzzleError::CardNotFound`] if a target id is not on the board,
/// or [`PuzzleError::InvalidLayout`] if `target` has the wrong length or
/// repeats an id.
pub fn plan_moves(target: &[CardId], board: &Board) -> Result<Vec<CardMove>> {
    if target.len() != CELL_COUNT {
        return Err(invalid_layout(&format!(
            "move target lists {} ids, expected {CELL_COUNT}",
            target.len()
        )));
    }

    let mut seen = HashSet::with_capacity(CELL_COUNT);
    let mut moves = Vec::new();

    for (index, &id) in target.iter().enumerate() {
        let (from_row, from_column) = board
            .position_of(id)
            .ok_or(PuzzleError::CardNotFound { id })?;

        if !seen.insert(id) {
            return Err(invalid_layout(&format!("move target repeats card id {id}")));
        }

        let to_row = index / COLUMNS;
        let to_column = index % COLUMNS;
        if (from_row, from_column) == (to_row, to_column) {
            continue;
        }

        moves.push(CardMove {
            from_row,
            from_column,
            to_row,
            to_column,
        });
    }

    Ok(moves)
}

/// Apply a batch of moves as one atomic rearrangement
///
/// Every move reads its source cell from the arrangement as it was before
/// the batch started.
pub fn apply_moves(moves: &[CardMove], board: &mut Board) {
    if moves.is_empty() {
        return;
    }

    let snapshot = board.snapshot();
    for card_move in moves {
        board.place_from(
            &snapshot,
            (card_move.from_row, card_move.from_column),
            (card_move.to_row, card_move.to_column),
        );
    }
}

/// Rearrange the board so its row-major ids equal `target`
///
/// Returns the number of moves applied; zero when the board already matches.
///
/// # Errors
///
/// Propagates the errors of [`plan_moves`]; the board is left untouched
/// when planning fails.
pub fn move_cards_by_ids(target: &[CardId], board: &mut Board) -> Result<usize> {
    let moves = plan_moves(target, board)?;
    apply_moves(&moves, board);
    Ok(moves.len())
}

/// Move every card to a uniformly random position
///
/// Picks one ordering among all orderings of the board's ids and applies it.
/// Returns the applied ordering.
///
/// # Errors
///
/// Returns [`PuzzleError::PermutationExhausted`] if the enumeration ends before
/// the chosen ordering, which would mean the generator under-counted.
pub fn move_cards_to_random_positions<R: Rng>(
    board: &mut Board,
    rng: &mut R,
) -> Result<Vec<CardId>> {
    let mut generator = PermutationGenerator::new(board.card_ids());
    let chosen = rng.random_range(0..generator.total());

    let ordering = generator
        .nth(usize::try_from(chosen).unwrap_or(usize::MAX))
        .ok_or_else(|| PuzzleError::PermutationExhausted {
            generated: generator.generated(),
        })?;

    let applied = move_cards_by_ids(&ordering, board)?;
    debug!("Shuffled board into ordering {ordering:?} with {applied} moves");
    Ok(ordering)
}
