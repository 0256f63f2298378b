//! CLI entry point for the emoticon puzzle solver

use clap::Parser;
use emotiles::io::cli::{Cli, PuzzleRunner};
use std::io::Write;

fn main() -> emotiles::Result<()> {
    let env = env_logger::Env::default().default_filter_or("warn");
    env_logger::Builder::from_env(env).init();

    let cli = Cli::parse();
    let runner = PuzzleRunner::new(cli);
    let mut stdout = std::io::stdout().lock();
    runner.run_with_output(&mut stdout)?;
    stdout.flush()?;
    Ok(())
}
