//! Search state machine tying alignment, tie cycling and rearrangement together

use log::{info, trace};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::algorithm::alignment::{align_corners, align_edge_middles};
use crate::algorithm::ambiguity::TiedRotations;
use crate::algorithm::rearrange::{RearrangeStep, Rearranger};
use crate::io::error::Result;
use crate::spatial::board::Board;

/// Phase of the search state machine
///
/// One attempt runs `EdgeAlignment`, `AmbiguityResolution` and then
/// `CornerAlignment` (repeated for each tied-rotation combination). Any
/// failure moves to `Rearrange`, which either starts a new attempt or ends
/// the search as `Exhausted`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveState {
    /// Rotating edge-middle cards to fit the center
    EdgeAlignment,
    /// Recording edge-middle cards with more than one fitting rotation
    AmbiguityResolution,
    /// Rotating corner cards to fit both edge-middle neighbors
    CornerAlignment,
    /// Moving the board to the next arrangement
    Rearrange,
    /// Every adjacency forms a complete emoticon
    Solved,
    /// Every arrangement has been attempted without success
    Exhausted,
}

/// Summary of a finished search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SolveReport {
    /// Whether the board ended in a solved arrangement
    pub solved: bool,
    /// Attempts made, counting the caller's original arrangement
    pub attempts: u64,
    /// Arrangements applied by rearrangement
    pub rearrangements: u64,
    /// Extra corner alignments run on alternative tied rotations
    pub tie_retries: u64,
    /// Number of distinct cards promoted into the center
    pub centers_tried: usize,
}

/// Search driver for the 3x3 emoticon puzzle
///
/// The board is borrowed mutably for the whole search and left in the
/// final arrangement: solved on success, the last tried arrangement on
/// exhaustion or error.
#[derive(Debug, Clone, Default)]
pub struct Solver {
    attempt_counter: Option<Arc<AtomicU64>>,
}

impl Solver {
    /// Create a solver
    pub fn new() -> Self {
        Self::default()
    }

    /// Publish the running attempt count to `counter` while solving
    #[must_use]
    pub fn with_attempt_counter(mut self, counter: Arc<AtomicU64>) -> Self {
        self.attempt_counter = Some(counter);
        self
    }

    /// Search for a placement and rotation of every card that completes all emoticons
    ///
    /// Returns a report whose `solved` flag is false when the search space
    /// was exhausted; that is a normal outcome, not an error.
    ///
    /// # Errors
    ///
    /// Propagates invariant violations from rearrangement
    /// ([`PuzzleError::CardNotFound`](crate::PuzzleError::CardNotFound),
    /// [`PuzzleError::GeneratorMissing`](crate::PuzzleError::GeneratorMissing),
    /// [`PuzzleError::PermutationExhausted`](crate::PuzzleError::PermutationExhausted)).
    pub fn solve(&self, board: &mut Board) -> Result<SolveReport> {
        let mut rearranger = Rearranger::new();
        let mut ties = TiedRotations::default();
        let mut report = SolveReport::default();
        let mut state = SolveState::EdgeAlignment;

        loop {
            state = match state {
                SolveState::EdgeAlignment => {
                    report.attempts += 1;
                    self.publish(report.attempts);
                    trace!("Attempt {} on {:?}", report.attempts, board.card_ids());
                    if align_edge_middles(board) {
                        SolveState::AmbiguityResolution
                    } else {
                        SolveState::Rearrange
                    }
                }
                SolveState::AmbiguityResolution => {
                    ties = TiedRotations::collect(board);
                    SolveState::CornerAlignment
                }
                SolveState::CornerAlignment => {
                    if align_corners(board) {
                        SolveState::Solved
                    } else if ties.advance(board) {
                        report.tie_retries += 1;
                        SolveState::CornerAlignment
                    } else {
                        SolveState::Rearrange
                    }
                }
                SolveState::Rearrange => match rearranger.advance(board)? {
                    RearrangeStep::Rearranged => SolveState::EdgeAlignment,
                    RearrangeStep::Exhausted => SolveState::Exhausted,
                },
                SolveState::Solved | SolveState::Exhausted => {
                    report.solved = state == SolveState::Solved;
                    report.rearrangements = rearranger.rearrangements();
                    report.centers_tried = rearranger.centers_tried().len();
                    info!(
                        "Search {} after {} attempts ({} rearrangements, {} tie retries)",
                        if report.solved { "solved" } else { "exhausted" },
                        report.attempts,
                        report.rearrangements,
                        report.tie_retries
                    );
                    return Ok(report);
                }
            };
        }
    }

    fn publish(&self, attempts: u64) {
        if let Some(counter) = &self.attempt_counter {
            counter.store(attempts, Ordering::Relaxed);
        }
    }
}

/// Solve `board` in place, returning whether a solution was reached
///
/// # Errors
///
/// Propagates the invariant violations described on [`Solver::solve`].
pub fn solve_board(board: &mut Board) -> Result<bool> {
    Solver::new().solve(board).map(|report| report.solved)
}
