//! Tests for moving cards to a target id order and random shuffles

#[cfg(test)]
mod tests {
    use crate::fixtures::{quarter_turns, unsolvable_board};
    use emotiles::PuzzleError;
    use emotiles::algorithm::mover::{
        CardMove, move_cards_by_ids, move_cards_to_random_positions, plan_moves,
    };
    use emotiles::spatial::position::Position;
    use rand::{Rng, SeedableRng};
    use rand::rngs::StdRng;

    // Tests cells already holding their target card produce no move
    // Verified by emitting moves for unchanged cells
    #[test]
    fn test_plan_skips_cards_in_place() {
        let board = unsolvable_board();
        let moves = plan_moves(&[2, 1, 3, 4, 5, 6, 7, 8, 9], &board).expect("valid target");

        assert_eq!(
            moves,
            vec![
                CardMove {
                    from_row: 0,
                    from_column: 1,
                    to_row: 0,
                    to_column: 0,
                },
                CardMove {
                    from_row: 0,
                    from_column: 0,
                    to_row: 0,
                    to_column: 1,
                },
            ]
        );
    }

    // Tests the board matches the target afterwards and cards keep their rotation
    // Verified by applying moves against the live board instead of a snapshot
    #[test]
    fn test_move_by_ids_reaches_target() {
        let mut board = unsolvable_board();
        board.card_mut(Position::TopLeft).rotate_right();
        let target = [9, 8, 7, 6, 5, 4, 3, 2, 1];

        let applied = move_cards_by_ids(&target, &mut board).expect("valid target");

        assert_eq!(applied, 8);
        assert_eq!(board.card_ids(), target.to_vec());
        assert_eq!(quarter_turns(&board), vec![0, 0, 0, 0, 0, 0, 0, 0, 1]);
    }

    // Tests applying the same target twice changes nothing the second time
    // Verified by not skipping cards that are in place
    #[test]
    fn test_move_by_ids_is_idempotent() {
        let mut board = unsolvable_board();
        let target = [5, 6, 7, 8, 9, 1, 2, 3, 4];

        move_cards_by_ids(&target, &mut board).expect("valid target");
        let applied = move_cards_by_ids(&target, &mut board).expect("valid target");

        assert_eq!(applied, 0);
        assert_eq!(board.card_ids(), target.to_vec());
    }

    // Tests invalid targets are rejected before the board is touched
    // Verified by applying moves while planning
    #[test]
    fn test_invalid_targets_leave_board_untouched() {
        let mut board = unsolvable_board();
        let original = board.card_ids();

        let unknown = move_cards_by_ids(&[2, 1, 3, 4, 5, 6, 7, 8, 42], &mut board);
        assert!(matches!(unknown, Err(PuzzleError::CardNotFound { id: 42 })));

        let repeated = move_cards_by_ids(&[2, 1, 3, 4, 5, 6, 7, 8, 8], &mut board);
        assert!(matches!(repeated, Err(PuzzleError::InvalidLayout { .. })));

        let short = move_cards_by_ids(&[1, 2, 3], &mut board);
        assert!(matches!(short, Err(PuzzleError::InvalidLayout { .. })));
        assert_eq!(board.card_ids(), original);
    }

    // Tests a seeded shuffle is reproducible and always a permutation of the ids
    // Verified by seeding the second generator differently
    #[test]
    fn test_random_positions_are_permutations() {
        let mut seeds = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let seed: u64 = seeds.random();

            let mut first = unsolvable_board();
            let mut second = unsolvable_board();
            let mut first_rng = StdRng::seed_from_u64(seed);
            let mut second_rng = StdRng::seed_from_u64(seed);
            let ordering = move_cards_to_random_positions(&mut first, &mut first_rng)
                .expect("first shuffle");
            move_cards_to_random_positions(&mut second, &mut second_rng).expect("second shuffle");

            assert_eq!(first.card_ids(), ordering);
            assert_eq!(first.card_ids(), second.card_ids());

            let mut sorted = ordering;
            sorted.sort_unstable();
            assert_eq!(sorted, vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
        }
    }
}
