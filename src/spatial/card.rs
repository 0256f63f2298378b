//! Rotatable four-sided cards

use crate::io::configuration::SIDE_COUNT;
use crate::spatial::emoticon::{EmoticonPart, SIGNATURE_COUNT};
use crate::spatial::position::Side;

/// Identifier of a card, unique and non-zero on a board
pub type CardId = u32;

/// Clockwise rotation applied to a card since it was created
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardRotation {
    /// Original orientation
    Rotate0,
    /// One quarter turn
    Rotate90,
    /// Half turn
    Rotate180,
    /// Three quarter turns
    Rotate270,
}

impl CardRotation {
    /// Rotation after `turns` quarter turns to the right
    pub const fn from_quarter_turns(turns: usize) -> Self {
        match turns % SIDE_COUNT {
            0 => Self::Rotate0,
            1 => Self::Rotate90,
            2 => Self::Rotate180,
            _ => Self::Rotate270,
        }
    }

    /// Rotation angle in degrees
    pub const fn degrees(self) -> u16 {
        match self {
            Self::Rotate0 => 0,
            Self::Rotate90 => 90,
            Self::Rotate180 => 180,
            Self::Rotate270 => 270,
        }
    }
}

/// A tile carrying one emoticon half on each side
///
/// Parts are stored by the side they currently occupy. A per-signature
/// count table is kept alongside so that ambiguity checks never have
/// to rescan the parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    id: CardId,
    top: EmoticonPart,
    right: EmoticonPart,
    down: EmoticonPart,
    left: EmoticonPart,
    quarter_turns: usize,
    part_counts: [u8; SIGNATURE_COUNT],
}

impl Card {
    /// Create an unrotated card from its four parts
    pub fn new(
        id: CardId,
        top: EmoticonPart,
        right: EmoticonPart,
        down: EmoticonPart,
        left: EmoticonPart,
    ) -> Self {
        let mut card = Self {
            id,
            top,
            right,
            down,
            left,
            quarter_turns: 0,
            part_counts: [0; SIGNATURE_COUNT],
        };
        card.recount_parts();
        card
    }

    /// Card identifier
    pub const fn id(&self) -> CardId {
        self.id
    }

    /// Part currently on the top side
    pub const fn top(&self) -> EmoticonPart {
        self.top
    }

    /// Part currently on the right side
    pub const fn right(&self) -> EmoticonPart {
        self.right
    }

    /// Part currently on the down side
    pub const fn down(&self) -> EmoticonPart {
        self.down
    }

    /// Part currently on the left side
    pub const fn left(&self) -> EmoticonPart {
        self.left
    }

    /// Part currently on `side`
    pub const fn part(&self, side: Side) -> EmoticonPart {
        match side {
            Side::Top => self.top,
            Side::Right => self.right,
            Side::Down => self.down,
            Side::Left => self.left,
        }
    }

    /// All parts as `[top, right, down, left]`
    pub const fn parts(&self) -> [EmoticonPart; SIDE_COUNT] {
        [self.top, self.right, self.down, self.left]
    }

    /// Replace all four parts, keeping the rotation counter
    pub fn set_parts(
        &mut self,
        top: EmoticonPart,
        right: EmoticonPart,
        down: EmoticonPart,
        left: EmoticonPart,
    ) {
        self.top = top;
        self.right = right;
        self.down = down;
        self.left = left;
        self.recount_parts();
    }

    /// Rotate the card a quarter turn clockwise
    ///
    /// The left part moves to the top, top to right, right to down and
    /// down to left.
    pub const fn rotate_right(&mut self) {
        let previous_top = self.top;
        self.top = self.left;
        self.left = self.down;
        self.down = self.right;
        self.right = previous_top;
        self.quarter_turns = (self.quarter_turns + 1) % SIDE_COUNT;
    }

    /// Net rotation applied to the card, for renderers
    pub const fn right_rotation(&self) -> CardRotation {
        CardRotation::from_quarter_turns(self.quarter_turns)
    }

    /// Number of parts equal to `part`
    pub fn count_parts(&self, part: EmoticonPart) -> usize {
        self.part_counts
            .get(part.signature())
            .map_or(0, |&count| usize::from(count))
    }

    /// Number of parts that would complete `neighbor` when turned towards it
    pub fn matching_part_count(&self, neighbor: EmoticonPart) -> usize {
        self.count_parts(neighbor.complement())
    }

    /// Count of completing parts when more than one rotation would fit `neighbor`
    ///
    /// Returns `None` when at most one rotation completes `neighbor`, so the
    /// first satisfying rotation found is the only one.
    pub fn has_multiple_emoticon_parts(&self, neighbor: EmoticonPart) -> Option<usize> {
        let count = self.matching_part_count(neighbor);
        (count > 1).then_some(count)
    }

    fn recount_parts(&mut self) {
        self.part_counts = [0; SIGNATURE_COUNT];
        for part in self.parts() {
            if let Some(count) = self.part_counts.get_mut(part.signature()) {
                *count += 1;
            }
        }
    }
}
