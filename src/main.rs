//! stagemsg - CLI entry point.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Result, bail};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use stagemsg::{CollectError, RunOptions, RunOutcome, SystemGit, TerminalPrompt};

/// Compose a commit message from staged changes and commit it.
#[derive(Parser, Debug)]
#[command(name = "stagemsg")]
#[command(about = "Compose a conventional commit message from staged changes")]
#[command(version)]
struct Cli {
    /// Run as if started in this directory
    #[arg(short = 'C', long = "path")]
    path: Option<PathBuf>,

    /// Commit without asking for confirmation
    #[arg(short = 'y', long)]
    yes: bool,

    /// Print the generated message without committing
    #[arg(long)]
    dry_run: bool,

    /// Enable debug logging on stderr
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match execute(cli) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            print_error(&e);
            ExitCode::FAILURE
        }
    }
}

fn execute(cli: Cli) -> Result<RunOutcome> {
    if let Some(path) = &cli.path {
        if !path.is_dir() {
            bail!("{} is not a directory", path.display());
        }
    }

    let git = SystemGit::detect(cli.path.as_deref()).map_err(CollectError::RepositoryUnavailable)?;

    let options = RunOptions {
        assume_yes: cli.yes,
        dry_run: cli.dry_run,
    };

    let mut stdout = std::io::stdout();
    let outcome = stagemsg::run(&git, &TerminalPrompt, options, &mut stdout)?;
    tracing::debug!("Run finished: {:?}", outcome);

    Ok(outcome)
}

/// Log to stderr; the level comes from `--verbose` only.
fn init_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(format!("stagemsg={level}")))
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn print_error(error: &anyhow::Error) {
    eprintln!("{}", render_error(error));
}

/// One line: the error followed by its causes, separated by `: `.
fn render_error(error: &anyhow::Error) -> String {
    format!("error: {error:#}")
}
