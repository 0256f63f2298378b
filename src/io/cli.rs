//! Command-line interface for loading, shuffling and solving a board

use crate::algorithm::background::spawn_solve;
use crate::algorithm::mover::move_cards_to_random_positions;
use crate::algorithm::solver::SolveReport;
use crate::io::configuration::{DEFAULT_SEED, PROGRESS_POLL_INTERVAL_MS};
use crate::io::error::{Result, WithPath};
use crate::io::layout::{export_layout, load_layout, standard_board};
use crate::io::progress::AttemptProgress;
use crate::io::render::render_board;
use crate::spatial::board::Board;
use clap::Parser;
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

/// Label used for errors writing to the runner's output stream
const OUTPUT_LABEL: &str = "<output>";

#[derive(Parser, Debug, Clone)]
#[command(name = "emotiles")]
#[command(
    author,
    version,
    about = "Solve the nine-tile rotating emoticon puzzle"
)]
/// Command-line arguments for the puzzle solver
pub struct Cli {
    /// Layout file to solve (TOML); the built-in board when omitted
    #[arg(value_name = "LAYOUT")]
    pub layout: Option<PathBuf>,

    /// Move every card to a random cell before solving
    #[arg(short = 'S', long)]
    pub shuffle: bool,

    /// Random seed for reproducible shuffles
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Print the starting board as a layout file and exit
    #[arg(short, long)]
    pub print_layout: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Drives one solver run from parsed arguments
pub struct PuzzleRunner {
    cli: Cli,
    progress: AttemptProgress,
}

impl PuzzleRunner {
    /// Create a runner for the given arguments
    pub fn new(cli: Cli) -> Self {
        let progress = if cli.should_show_progress() {
            AttemptProgress::new()
        } else {
            AttemptProgress::hidden()
        };

        Self { cli, progress }
    }

    /// Run the solver, writing boards and the result to `out`
    ///
    /// Returns `None` when only the layout was printed.
    ///
    /// # Errors
    ///
    /// Returns an error if the layout cannot be loaded, the output cannot be
    /// written, or the search hits an invariant violation
    pub fn run_with_output<W: Write>(&self, out: &mut W) -> Result<Option<SolveReport>> {
        let board = self.prepare_board()?;
        let output = Path::new(OUTPUT_LABEL);

        if self.cli.print_layout {
            write!(out, "{}", export_layout(&board)?).with_path(output, "write layout")?;
            return Ok(None);
        }

        writeln!(out, "Start board:\n{}", render_board(&board)).with_path(output, "write board")?;

        let task = spawn_solve(board)?;
        while !task.is_finished() {
            self.progress.update(task.attempts());
            thread::sleep(Duration::from_millis(PROGRESS_POLL_INTERVAL_MS));
        }
        let outcome = task.wait()?;
        self.progress.update(outcome.report.attempts);
        self.progress.finish(outcome.report.solved);

        writeln!(out, "Final board:\n{}", render_board(&outcome.board))
            .with_path(output, "write board")?;
        let written = if outcome.report.solved {
            writeln!(
                out,
                "Solved after {} attempts ({} rearrangements)",
                outcome.report.attempts, outcome.report.rearrangements
            )
        } else {
            writeln!(out, "Could not be solved.")
        };
        written.with_path(output, "write result")?;

        Ok(Some(outcome.report))
    }

    fn prepare_board(&self) -> Result<Board> {
        let mut board = match &self.cli.layout {
            Some(path) => load_layout(path)?,
            None => standard_board()?,
        };

        if self.cli.shuffle {
            let mut rng = StdRng::seed_from_u64(self.cli.seed);
            let ordering = move_cards_to_random_positions(&mut board, &mut rng)?;
            info!("Shuffled with seed {} into {ordering:?}", self.cli.seed);
        }

        Ok(board)
    }
}
