//! Tests for solving on a worker thread

#[cfg(test)]
mod tests {
    use crate::fixtures::tie_board;
    use emotiles::PuzzleError;
    use emotiles::algorithm::background::{spawn_search, spawn_solve};
    use emotiles::algorithm::solver::Solver;
    use std::panic;
    use std::thread;
    use std::time::Duration;

    // Tests the worker reports the same outcome as a synchronous search
    // Verified by solving a clone of the board on the worker
    #[test]
    fn test_background_matches_synchronous_solve() {
        let mut expected_board = tie_board();
        let expected = Solver::new()
            .solve(&mut expected_board)
            .expect("search succeeds");

        let task = spawn_solve(tie_board()).expect("worker starts");
        let outcome = task.wait().expect("worker finishes");

        assert_eq!(outcome.report, expected);
        assert_eq!(outcome.board.card_ids(), expected_board.card_ids());
        assert!(outcome.board.is_solved());
    }

    // Tests the attempt count is visible once the worker has finished
    // Verified by publishing attempts only from wait
    #[test]
    fn test_attempts_visible_while_polling() {
        let task = spawn_solve(tie_board()).expect("worker starts");
        while !task.is_finished() {
            thread::sleep(Duration::from_millis(1));
        }

        assert_eq!(task.attempts(), 1);
        let outcome = task.wait().expect("worker finishes");
        assert!(outcome.report.solved);
    }

    // Tests a failing search hands its own error back through wait
    // Verified by discarding the worker's result in wait
    #[test]
    fn test_search_error_propagates_through_wait() {
        let task = spawn_search(tie_board(), |_, _| Err(PuzzleError::GeneratorMissing))
            .expect("worker starts");

        let error = task.wait().expect_err("search fails");
        assert!(matches!(error, PuzzleError::GeneratorMissing));
        assert!(error.is_invariant_violation());
    }

    // Tests a panicking worker is reported as a background task failure
    // Verified by resuming the worker's panic in wait
    #[test]
    fn test_worker_panic_becomes_background_error() {
        let task = spawn_search(tie_board(), |_, _| {
            panic::resume_unwind(Box::new("worker lost the board"))
        })
        .expect("worker starts");

        let error = task.wait().expect_err("worker panicked");
        assert_eq!(
            error.to_string(),
            "Background solve failed: worker lost the board"
        );
        assert!(matches!(error, PuzzleError::BackgroundTask { .. }));
        assert!(!error.is_invariant_violation());
    }
}
