//! Lazy enumeration of id orderings

use crate::io::configuration::factorial;
use crate::io::error::{PuzzleError, Result};
use crate::spatial::card::CardId;

/// Lazy enumerator over every ordering of a fixed id sequence
///
/// Uses the iterative form of Heap's algorithm: each call performs a
/// single swap, so only the current ordering is ever held in memory.
/// The first ordering produced is the input itself; after that the
/// order is a byproduct of the swap schedule. Exactly `n!` orderings are
/// produced, each distinct when the input ids are distinct.
#[derive(Debug, Clone, Default)]
pub struct PermutationGenerator {
    original: Vec<CardId>,
    current: Vec<CardId>,
    /// Heap's algorithm loop counters, one per position
    counters: Vec<usize>,
    /// Position whose counter is examined on the next step
    cursor_index: usize,
    generated: u64,
    total: u64,
}

impl PermutationGenerator {
    /// Create a generator over all orderings of `ids`
    pub fn new(ids: Vec<CardId>) -> Self {
        let mut generator = Self::default();
        generator.init(ids);
        generator
    }

    /// Restart enumeration over all orderings of `ids`
    ///
    /// Replaces any sequence given earlier, so the orderings produced
    /// after the latest call are exactly the `n!` orderings of `ids`.
    pub fn init(&mut self, ids: Vec<CardId>) {
        self.total = factorial(ids.len());
        self.original = ids;
        self.reset();
    }

    /// Restart enumeration over the same ids
    pub fn reset(&mut self) {
        self.current.clone_from(&self.original);
        self.counters = vec![0; self.original.len()];
        self.cursor_index = 1;
        self.generated = 0;
    }

    /// Produce the next ordering
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::PermutationExhausted`] once all `n!` orderings
    /// have been produced.
    pub fn next_permutation(&mut self) -> Result<Vec<CardId>> {
        if self.all_permutations_generated() {
            return Err(PuzzleError::PermutationExhausted {
                generated: self.generated,
            });
        }

        if self.generated > 0 {
            self.step();
        }
        self.generated += 1;
        Ok(self.current.clone())
    }

    /// Whether every ordering has been produced
    pub const fn all_permutations_generated(&self) -> bool {
        self.generated >= self.total
    }

    /// Number of orderings produced so far
    pub const fn generated(&self) -> u64 {
        self.generated
    }

    /// Number of orderings in the full enumeration
    pub const fn total(&self) -> u64 {
        self.total
    }

    /// Ids the enumeration was initialized with
    pub fn ids(&self) -> &[CardId] {
        &self.original
    }

    /// Advance `current` by one swap
    fn step(&mut self) {
        let len = self.current.len();
        while self.cursor_index < len {
            let i = self.cursor_index;
            let counter = self.counters.get(i).copied().unwrap_or(0);
            if counter < i {
                let partner = if i.is_multiple_of(2) { 0 } else { counter };
                self.current.swap(partner, i);
                if let Some(slot) = self.counters.get_mut(i) {
                    *slot += 1;
                }
                self.cursor_index = 1;
                return;
            }
            if let Some(slot) = self.counters.get_mut(i) {
                *slot = 0;
            }
            self.cursor_index += 1;
        }
    }
}

impl Iterator for PermutationGenerator {
    type Item = Vec<CardId>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_permutation().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.total - self.generated).ok();
        (remaining.unwrap_or(usize::MAX), remaining)
    }
}
