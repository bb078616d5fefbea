use clap::Parser;
use std::path::PathBuf;

/// terminal-file-explorer – browse directories with parent and current panes side by side
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory to start in (defaults to CWD)
    #[arg(value_name = "DIR", default_value = ".")]
    pub start: PathBuf,

    /// Write diagnostic logs to this file. Nothing is logged without it,
    /// since the terminal is taken over by the explorer.
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Log at debug level instead of info
    #[arg(short, long)]
    pub verbose: bool,
}
