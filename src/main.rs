mod cli;
mod content;
mod dir_reader;
mod engine;
mod error;
mod logging;
mod paths;
mod tui;
mod workflow;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli_args = cli::Cli::parse();

    workflow::run_explorer(cli_args)
}
