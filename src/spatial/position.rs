//! Named cells and edge geometry of the 3x3 board
//!
//! ```text
//! TopLeft   TopMiddle  TopRight
//! LeftMiddle  Center   RightMiddle
//! DownLeft  DownMiddle DownRight
//! ```

use crate::io::configuration::{COLUMNS, ROWS};

/// Side of a card, relative to the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Edge facing the row above
    Top,
    /// Edge facing the column to the right
    Right,
    /// Edge facing the row below
    Down,
    /// Edge facing the column to the left
    Left,
}

impl Side {
    /// All sides in clockwise order starting at the top
    pub const ALL: [Self; 4] = [Self::Top, Self::Right, Self::Down, Self::Left];

    /// The side of a neighboring card that touches this one
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Top => Self::Down,
            Self::Right => Self::Left,
            Self::Down => Self::Top,
            Self::Left => Self::Right,
        }
    }

    /// Row and column step towards the neighbor across this side
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Self::Top => (-1, 0),
            Self::Right => (0, 1),
            Self::Down => (1, 0),
            Self::Left => (0, -1),
        }
    }
}

/// One of the nine fixed cells of the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    /// Middle cell
    Center,
    /// Edge-middle cell above the center
    TopMiddle,
    /// Edge-middle cell right of the center
    RightMiddle,
    /// Edge-middle cell below the center
    DownMiddle,
    /// Edge-middle cell left of the center
    LeftMiddle,
    /// Upper-left corner
    TopLeft,
    /// Upper-right corner
    TopRight,
    /// Lower-right corner
    DownRight,
    /// Lower-left corner
    DownLeft,
}

impl Position {
    /// Edge-middle cells in solving order
    pub const EDGE_MIDDLES: [Self; 4] = [
        Self::TopMiddle,
        Self::RightMiddle,
        Self::DownMiddle,
        Self::LeftMiddle,
    ];

    /// Corner cells in solving order
    pub const CORNERS: [Self; 4] = [
        Self::TopLeft,
        Self::TopRight,
        Self::DownRight,
        Self::DownLeft,
    ];

    /// Row and column of the cell
    pub const fn coordinates(self) -> (usize, usize) {
        match self {
            Self::TopLeft => (0, 0),
            Self::TopMiddle => (0, 1),
            Self::TopRight => (0, 2),
            Self::LeftMiddle => (1, 0),
            Self::Center => (1, 1),
            Self::RightMiddle => (1, 2),
            Self::DownLeft => (2, 0),
            Self::DownMiddle => (2, 1),
            Self::DownRight => (2, 2),
        }
    }

    /// Row-major index of the cell
    pub const fn index(self) -> usize {
        let (row, column) = self.coordinates();
        row * COLUMNS + column
    }

    /// The named cell at a row and column, if inside the grid
    pub const fn from_coordinates(row: usize, column: usize) -> Option<Self> {
        match (row, column) {
            (0, 0) => Some(Self::TopLeft),
            (0, 1) => Some(Self::TopMiddle),
            (0, 2) => Some(Self::TopRight),
            (1, 0) => Some(Self::LeftMiddle),
            (1, 1) => Some(Self::Center),
            (1, 2) => Some(Self::RightMiddle),
            (2, 0) => Some(Self::DownLeft),
            (2, 1) => Some(Self::DownMiddle),
            (2, 2) => Some(Self::DownRight),
            _ => None,
        }
    }

    /// The cell across `side`, or `None` at the border
    pub fn neighbor(self, side: Side) -> Option<Self> {
        let (row, column) = self.coordinates();
        let (row_step, column_step) = side.offset();
        let row = row.checked_add_signed(row_step).filter(|&r| r < ROWS)?;
        let column = column
            .checked_add_signed(column_step)
            .filter(|&c| c < COLUMNS)?;
        Self::from_coordinates(row, column)
    }

    /// Sides whose constraints are checked when aligning this cell
    ///
    /// Edge-middle cells face the center; corners face their two
    /// edge-middle neighbors; the center itself is never rotated.
    pub const fn inward_sides(self) -> &'static [Side] {
        match self {
            Self::Center => &[],
            Self::TopMiddle => &[Side::Down],
            Self::RightMiddle => &[Side::Left],
            Self::DownMiddle => &[Side::Top],
            Self::LeftMiddle => &[Side::Right],
            Self::TopLeft => &[Side::Down, Side::Right],
            Self::TopRight => &[Side::Left, Side::Down],
            Self::DownRight => &[Side::Top, Side::Left],
            Self::DownLeft => &[Side::Right, Side::Top],
        }
    }
}
