//! Emoticon halves carried on tile edges

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which half of an emoticon an edge carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmoticonSide {
    /// Upper half (eyes)
    Up,
    /// Lower half (mouth)
    Down,
}

impl EmoticonSide {
    /// The half that completes this one
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
        }
    }

    const fn index(self) -> usize {
        match self {
            Self::Up => 0,
            Self::Down => 1,
        }
    }

    const fn symbol(self) -> char {
        match self {
            Self::Up => '^',
            Self::Down => 'v',
        }
    }
}

/// Emoticon color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmoticonColor {
    /// Red emoticon
    Red,
    /// Yellow emoticon
    Yellow,
    /// Blue emoticon
    Blue,
    /// Green emoticon
    Green,
}

impl EmoticonColor {
    /// Every color, in declaration order
    pub const ALL: [Self; 4] = [Self::Red, Self::Yellow, Self::Blue, Self::Green];

    const fn index(self) -> usize {
        match self {
            Self::Red => 0,
            Self::Yellow => 1,
            Self::Blue => 2,
            Self::Green => 3,
        }
    }

    /// Single-letter symbol used in text renderings
    pub const fn symbol(self) -> char {
        match self {
            Self::Red => 'R',
            Self::Yellow => 'Y',
            Self::Blue => 'B',
            Self::Green => 'G',
        }
    }
}

/// Number of distinct (side, color) signatures
pub const SIGNATURE_COUNT: usize = 2 * EmoticonColor::ALL.len();

/// Half of an emoticon drawn on one tile edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EmoticonPart {
    /// Which half this is
    pub side: EmoticonSide,
    /// Color of the emoticon
    pub color: EmoticonColor,
}

impl EmoticonPart {
    /// Create a part from its half and color
    pub const fn new(side: EmoticonSide, color: EmoticonColor) -> Self {
        Self { side, color }
    }

    /// The part a neighbor needs to complete this one
    #[must_use]
    pub const fn complement(self) -> Self {
        Self {
            side: self.side.opposite(),
            color: self.color,
        }
    }

    /// Whether the two parts form one complete emoticon
    ///
    /// Requires equal colors and opposite halves.
    pub fn completes(self, other: Self) -> bool {
        self.color == other.color && self.side != other.side
    }

    /// Dense index of the (side, color) pair, below [`SIGNATURE_COUNT`]
    pub const fn signature(self) -> usize {
        self.color.index() * 2 + self.side.index()
    }
}

impl fmt::Display for EmoticonPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.color.symbol(), self.side.symbol())
    }
}
