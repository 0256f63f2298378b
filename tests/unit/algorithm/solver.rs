//! Tests for the search state machine and its report

#[cfg(test)]
mod tests {
    use crate::fixtures::{quarter_turns, tie_board, uniform_board};
    use emotiles::algorithm::solver::{SolveReport, Solver, solve_board};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU64, Ordering};

    // Tests a solved board is accepted on the first attempt without changes
    // Verified by rotating edge-middles before checking them
    #[test_log::test]
    fn test_already_solved_board_is_untouched() {
        let mut board = uniform_board();
        let report = Solver::new().solve(&mut board).expect("search succeeds");

        assert_eq!(
            report,
            SolveReport {
                solved: true,
                attempts: 1,
                rearrangements: 0,
                tie_retries: 0,
                centers_tried: 0,
            }
        );
        assert_eq!(board.card_ids(), vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
        assert_eq!(quarter_turns(&board), vec![0; 9]);
    }

    // Tests a success found on a later tie combination is kept
    // Verified by rearranging instead of returning after a tie retry succeeds
    #[test_log::test]
    fn test_tie_retry_success_is_returned() {
        let mut board = tie_board();
        let report = Solver::new().solve(&mut board).expect("search succeeds");

        assert!(report.solved);
        assert_eq!(report.attempts, 1);
        assert_eq!(report.rearrangements, 0);
        assert_eq!(report.tie_retries, 1);
        assert!(board.is_solved());
        assert_eq!(board.card_ids(), vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
        assert_eq!(quarter_turns(&board), vec![0, 1, 2, 3, 0, 0, 3, 3, 2]);
    }

    // Tests the shared counter tracks attempts as they start
    // Verified by never storing into the counter
    #[test]
    fn test_attempt_counter_is_published() {
        let counter = Arc::new(AtomicU64::new(0));
        let mut board = tie_board();
        let report = Solver::new()
            .with_attempt_counter(Arc::clone(&counter))
            .solve(&mut board)
            .expect("search succeeds");

        assert_eq!(counter.load(Ordering::Relaxed), report.attempts);
    }

    #[test]
    fn test_solve_board_returns_flag() {
        let mut board = tie_board();
        assert_eq!(solve_board(&mut board).ok(), Some(true));
    }
}
