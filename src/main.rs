//! CLI entry point for the mini crossword generator

use clap::Parser;
use minicross::io::cli::{Cli, PuzzleRunner};

fn main() -> minicross::Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_level()))
        .init();
    let mut runner = PuzzleRunner::new(cli);
    runner.process()
}
