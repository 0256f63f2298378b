//! Plain-text board rendering
//!
//! Each cell is drawn as four text lines: the top part, then the left part,
//! id and right part, then the down part, then the card's rotation in degrees.

use crate::io::configuration::{COLUMNS, ROWS};
use crate::spatial::board::Board;

/// Inner width of one rendered cell
pub const CELL_WIDTH: usize = 11;

/// Render the board as a bordered text grid
pub fn render_board(board: &Board) -> String {
    let separator = separator_line();
    let mut output = separator.clone();

    for row in 0..ROWS {
        let mut lines: [String; 4] = Default::default();
        for column in 0..COLUMNS {
            let Some(card) = board.card_at(row, column) else {
                continue;
            };
            let degrees = format!("{}deg", card.right_rotation().degrees());
            let cells = [
                format!("{:^CELL_WIDTH$}", card.top().to_string()),
                format!("{} {:^5} {}", card.left(), card.id(), card.right()),
                format!("{:^CELL_WIDTH$}", card.down().to_string()),
                format!("{degrees:^CELL_WIDTH$}"),
            ];
            for (line, cell) in lines.iter_mut().zip(cells) {
                line.push_str(&format!("|{cell:^CELL_WIDTH$}"));
            }
        }
        for line in lines {
            output.push_str(&line);
            output.push_str("|\n");
        }
        output.push_str(&separator);
    }

    output
}

fn separator_line() -> String {
    let mut line = String::new();
    for _ in 0..COLUMNS {
        line.push('+');
        line.push_str(&"-".repeat(CELL_WIDTH));
    }
    line.push_str("+\n");
    line
}
