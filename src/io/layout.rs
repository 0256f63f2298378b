//! Board layouts: the built-in nine-card board and TOML layout files

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::io::error::{PuzzleError, Result, WithPath};
use crate::spatial::board::Board;
use crate::spatial::card::{Card, CardId};
use crate::spatial::emoticon::{EmoticonColor, EmoticonPart, EmoticonSide};

/// One card as written in a layout file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardSpec {
    /// Card identifier
    pub id: CardId,
    /// Part on the top side
    pub top: EmoticonPart,
    /// Part on the right side
    pub right: EmoticonPart,
    /// Part on the down side
    pub down: EmoticonPart,
    /// Part on the left side
    pub left: EmoticonPart,
}

/// Layout document: nine cards in row-major order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutFile {
    /// Cards from the top-left cell to the bottom-right cell
    pub cards: Vec<CardSpec>,
}

impl From<&Card> for CardSpec {
    fn from(card: &Card) -> Self {
        Self {
            id: card.id(),
            top: card.top(),
            right: card.right(),
            down: card.down(),
            left: card.left(),
        }
    }
}

impl From<CardSpec> for Card {
    fn from(spec: CardSpec) -> Self {
        Self::new(spec.id, spec.top, spec.right, spec.down, spec.left)
    }
}

impl LayoutFile {
    /// Capture the board's current arrangement and orientations
    pub fn from_board(board: &Board) -> Self {
        Self {
            cards: board
                .cells()
                .map(|(_, card)| CardSpec::from(card))
                .collect(),
        }
    }

    /// Build an unrotated board from the listed cards
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::InvalidLayout`] unless the file lists nine
    /// cards with unique non-zero ids.
    pub fn into_board(self) -> Result<Board> {
        Board::new(self.cards.into_iter().map(Card::from).collect())
    }
}

const fn part((side, color): (EmoticonSide, EmoticonColor)) -> EmoticonPart {
    EmoticonPart::new(side, color)
}

/// The default puzzle: nine cards with ids 1 to 9 in row-major order
///
/// # Errors
///
/// Never fails for the built-in card set; the `Result` comes from
/// [`Board::new`] validation.
pub fn standard_board() -> Result<Board> {
    use EmoticonColor::{Blue, Green, Red, Yellow};
    use EmoticonSide::{Down, Up};

    // [top, right, down, left]
    let parts = [
        [(Down, Red), (Down, Yellow), (Up, Red), (Up, Green)],
        [(Up, Blue), (Up, Yellow), (Down, Blue), (Down, Green)],
        [(Up, Red), (Up, Yellow), (Down, Blue), (Down, Yellow)],
        [(Down, Red), (Up, Blue), (Up, Green), (Down, Red)],
        [(Up, Blue), (Up, Green), (Down, Red), (Down, Yellow)],
        [(Down, Blue), (Down, Yellow), (Up, Red), (Up, Green)],
        [(Down, Blue), (Down, Green), (Up, Yellow), (Up, Blue)],
        [(Up, Blue), (Down, Red), (Down, Blue), (Up, Yellow)],
        [(Up, Yellow), (Down, Red), (Down, Green), (Up, Green)],
    ];
    let cards = (1..)
        .zip(parts)
        .map(|(id, [top, right, down, left])| {
            Card::new(id, part(top), part(right), part(down), part(left))
        })
        .collect();
    Board::new(cards)
}

/// Parse a layout document
///
/// `path` is only used to label errors.
///
/// # Errors
///
/// Returns [`PuzzleError::LayoutParse`] for malformed TOML or unknown
/// sides and colors, and [`PuzzleError::InvalidLayout`] for a wrong card
/// count or bad ids.
pub fn parse_layout(text: &str, path: &Path) -> Result<Board> {
    let parse_error = |source| PuzzleError::LayoutParse {
        path: path.to_path_buf(),
        source,
    };
    toml::from_str::<LayoutFile>(text)
        .map_err(parse_error)?
        .into_board()
}

/// Read and parse a layout file
///
/// # Errors
///
/// Returns [`PuzzleError::FileSystem`] if the file cannot be read, plus the
/// errors of [`parse_layout`].
pub fn load_layout(path: &Path) -> Result<Board> {
    let text = fs::read_to_string(path).with_path(path, "read layout")?;
    parse_layout(&text, path)
}

/// Serialize the board's current arrangement and orientations as a layout document
///
/// # Errors
///
/// Returns [`PuzzleError::LayoutExport`] if serialization fails.
pub fn export_layout(board: &Board) -> Result<String> {
    Ok(toml::to_string(&LayoutFile::from_board(board))?)
}

/// Write the board as a layout file
///
/// # Errors
///
/// Returns [`PuzzleError::FileSystem`] if the file cannot be written, plus
/// the errors of [`export_layout`].
pub fn save_layout(board: &Board, path: &Path) -> Result<()> {
    let text = export_layout(board)?;
    fs::write(path, text).with_path(path, "write layout")
}
