//! Running a search on a dedicated worker thread
//!
//! The board is moved into the worker and handed back when the search ends,
//! so the caller can never observe it mid-search.

use log::debug;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::thread::{self, JoinHandle};

use crate::algorithm::solver::{SolveReport, Solver};
use crate::io::configuration::SOLVER_THREAD_NAME;
use crate::io::error::{Result, background_task_error};
use crate::spatial::board::Board;

/// Final board and report of a background search
#[derive(Debug, Clone)]
pub struct SolveOutcome {
    /// Board in its final arrangement
    pub board: Board,
    /// Statistics of the search
    pub report: SolveReport,
}

/// Handle to a search running on a worker thread
#[derive(Debug)]
pub struct SolveTask {
    handle: JoinHandle<Result<SolveOutcome>>,
    attempts: Arc<AtomicU64>,
}

impl SolveTask {
    /// Whether the worker has finished, successfully or not
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Attempts started so far
    pub fn attempts(&self) -> u64 {
        self.attempts.load(Ordering::Relaxed)
    }

    /// Block until the search ends and take back the board
    ///
    /// # Errors
    ///
    /// Returns the search's own error, or [`PuzzleError::BackgroundTask`](crate::PuzzleError::BackgroundTask)
    /// if the worker panicked.
    pub fn wait(self) -> Result<SolveOutcome> {
        self.handle.join().map_err(|panic| {
            let reason = panic
                .downcast_ref::<&str>()
                .map(ToString::to_string)
                .or_else(|| panic.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "solver thread panicked".to_string());
            background_task_error(&reason)
        })?
    }
}

/// Start solving `board` on a named worker thread
///
/// # Errors
///
/// Returns [`PuzzleError::BackgroundTask`](crate::PuzzleError::BackgroundTask)
/// if the operating system refuses to spawn the thread.
pub fn spawn_solve(board: Board) -> Result<SolveTask> {
    spawn_search(board, |target, attempts| {
        let solver = Solver::new().with_attempt_counter(attempts);
        solver.solve(target)
    })
}

/// Run `search` over `board` on a named worker thread
///
/// `search` receives the counter that [`SolveTask::attempts`] reads.
///
/// # Errors
///
/// Returns [`PuzzleError::BackgroundTask`](crate::PuzzleError::BackgroundTask)
/// if the operating system refuses to spawn the thread.
pub fn spawn_search<F>(board: Board, search: F) -> Result<SolveTask>
where
    F: FnOnce(&mut Board, Arc<AtomicU64>) -> Result<SolveReport> + Send + 'static,
{
    let attempts = Arc::new(AtomicU64::new(0));
    let counter = Arc::clone(&attempts);

    let handle = thread::Builder::new()
        .name(SOLVER_THREAD_NAME.to_string())
        .spawn(move || {
            let mut board = board;
            let report = search(&mut board, counter)?;
            debug!("Background search finished: {report:?}");
            Ok(SolveOutcome { board, report })
        })
        .map_err(|e| background_task_error(&e))?;

    Ok(SolveTask { handle, attempts })
}
