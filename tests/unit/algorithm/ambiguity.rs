//! Tests for collecting and cycling tied edge-middle rotations

#[cfg(test)]
mod tests {
    use crate::fixtures::{quarter_turns, tie_board, uniform_board};
    use emotiles::algorithm::alignment::{align_corners, align_edge_middles};
    use emotiles::algorithm::ambiguity::TiedRotations;
    use emotiles::spatial::position::Position;

    // Tests only edge-middle cards with two or more fitting parts are recorded
    // Verified by recording every edge-middle card
    #[test]
    fn test_collect_finds_tied_cards() {
        let mut board = tie_board();
        assert!(align_edge_middles(&mut board));
        let ties = TiedRotations::collect(&board);

        let positions: Vec<Position> = ties.cards().iter().map(|tied| tied.position).collect();
        assert_eq!(positions, vec![Position::RightMiddle, Position::DownMiddle]);
        assert!(ties.cards().iter().all(|tied| tied.choices == 2));
        assert!(ties.cards().iter().all(|tied| tied.turns == 0));
        assert_eq!(ties.combinations(), 4);
        assert!(!ties.is_empty());
    }

    // Tests the odometer visits each combination once and then restores the board
    // Verified by not resetting turns on carry
    #[test]
    fn test_advance_visits_every_combination() {
        let mut board = tie_board();
        assert!(align_edge_middles(&mut board));
        let aligned = quarter_turns(&board);
        let mut ties = TiedRotations::collect(&board);

        let mut seen = vec![aligned.clone()];
        while ties.advance(&mut board) {
            let turns = quarter_turns(&board);
            assert!(!seen.contains(&turns));
            seen.push(turns);
        }

        assert_eq!(seen.len(), ties.combinations());
        assert_eq!(quarter_turns(&board), aligned);
    }

    // Tests the last tied card turns fastest and unlocks the corners
    // Verified by advancing the first tied card first
    #[test]
    fn test_first_advance_moves_last_tied_card() {
        let mut board = tie_board();
        assert!(align_edge_middles(&mut board));
        let mut ties = TiedRotations::collect(&board);

        assert!(!align_corners(&mut board));
        assert!(ties.advance(&mut board));
        assert_eq!(
            board.card(Position::DownMiddle).right_rotation().degrees(),
            270
        );
        assert_eq!(
            board.card(Position::RightMiddle).right_rotation().degrees(),
            0
        );
        assert!(align_corners(&mut board));
        assert!(board.is_solved());
    }

    // Tests a board without ties cannot advance
    #[test]
    fn test_empty_ties_never_advance() {
        let mut board = uniform_board();
        let mut ties = TiedRotations::default();
        assert!(ties.is_empty());
        assert_eq!(ties.combinations(), 1);
        assert!(!ties.advance(&mut board));
    }
}
