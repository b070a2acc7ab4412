//! Terminal front end for the to-do store.
//!
//! # Responsibility
//! - Parse process flags and bootstrap logging.
//! - Run one interactive session over stdin/stdout.

mod command;
mod render;
mod session;

use anyhow::{Context, Result};
use clap::Parser;
use render::OutputFormat;
use session::Session;
use todo_core::{default_log_level, init_logging, normalize_level};

#[derive(Parser, Debug)]
#[command(name = "todo", version, about = "Minimal to-do list in the terminal")]
struct Cli {
    /// Log level: trace|debug|info|warn|error (checked even without --log-dir)
    #[arg(long, env = "TODO_LOG_LEVEL")]
    log_level: Option<String>,

    /// Absolute directory for rolling log files (file logging is off when unset)
    #[arg(long, env = "TODO_LOG_DIR")]
    log_dir: Option<String>,

    /// Print snapshots as JSON
    #[arg(long)]
    json: bool,

    /// Suppress banner and prompt
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let level = resolve_log_level(&cli)?;

    if let Some(log_dir) = cli.log_dir.as_deref() {
        init_logging(level, log_dir)
            .with_context(|| format!("failed to initialize logging in `{log_dir}`"))?;
    }

    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };

    let stdout = std::io::stdout();
    let mut session = Session::new(stdout.lock(), format, cli.quiet);
    session.run(std::io::stdin().lock())
}

/// Checks the requested level up front, even when file logging stays off.
fn resolve_log_level(cli: &Cli) -> Result<&'static str> {
    let requested = cli.log_level.as_deref().unwrap_or(default_log_level());
    normalize_level(requested).context("invalid --log-level")
}
