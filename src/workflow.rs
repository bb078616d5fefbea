use crate::{cli, engine::NavigationEngine, logging, tui};
use anyhow::{Context, Result};
use tracing::info;

pub fn run_explorer(cli_args: cli::Cli) -> Result<()> {
    logging::init_logging(cli_args.log_file.as_deref(), cli_args.verbose)?;

    // A start directory that cannot be opened keeps the explorer from starting.
    let engine = NavigationEngine::new(&cli_args.start)
        .with_context(|| format!("cannot start in {}", cli_args.start.display()))?;

    info!(path = %engine.current_path().display(), "explorer started");

    tui::run_tui(engine)
}
