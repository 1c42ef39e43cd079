//! The single-pass run: collect, analyze, compose, confirm, commit.
//!
//! Nothing before the commit step mutates the repository, so every
//! cancellation point is safe.

use std::io::Write;

use tracing::debug;

use crate::commit::{analyze, commit, compose, get_detailed_diff, get_staged_files};
use crate::error::{CollectError, RunError};
use crate::git::GitRunner;
use crate::interaction::{ConfirmPrompt, Confirmation};

const SEPARATOR_WIDTH: usize = 43;

const CONFIRM_QUESTION: &str = "✅ Do you want to commit with this message? (y/n)";

/// Options for a run, derived from CLI flags.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Commit without asking.
    pub assume_yes: bool,
    /// Print the message and stop.
    pub dry_run: bool,
}

/// How a run that did not fail ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The commit was created; holds git's summary output.
    Committed(String),
    Cancelled,
    DryRun,
}

/// Run the full pipeline, writing operator-facing output to `out`.
pub fn run<G, P, W>(
    git: &G,
    prompt: &P,
    options: RunOptions,
    out: &mut W,
) -> Result<RunOutcome, RunError>
where
    G: GitRunner + ?Sized,
    P: ConfirmPrompt + ?Sized,
    W: Write,
{
    writeln!(out, "📝 Analyzing staged changes...\n").map_err(RunError::Output)?;

    // ── Stage 1: Collect ──
    let files = get_staged_files(git)?;
    if files.is_empty() {
        return Err(CollectError::EmptyStagedSet.into());
    }
    let diff = get_detailed_diff(git);

    // ── Stage 2: Analyze and compose ──
    let analysis = analyze(&files, &diff);
    debug!(
        "{} files, {} added, {} removed, {} tests, {} docs",
        analysis.file_count,
        analysis.added_lines,
        analysis.removed_lines,
        analysis.test_files,
        analysis.doc_files
    );
    let message = compose(&analysis);

    // ── Stage 3: Display ──
    let separator = "═".repeat(SEPARATOR_WIDTH);
    writeln!(out, "{separator}").map_err(RunError::Output)?;
    writeln!(out, "✨ Generated Commit Message:").map_err(RunError::Output)?;
    writeln!(out, "{separator}\n").map_err(RunError::Output)?;
    writeln!(out, "{}", message.format()).map_err(RunError::Output)?;
    writeln!(out, "\n{separator}").map_err(RunError::Output)?;
    writeln!(
        out,
        "Type: {} ({})",
        message.commit_type,
        message.commit_type.description()
    )
    .map_err(RunError::Output)?;

    if options.dry_run {
        return Ok(RunOutcome::DryRun);
    }

    // ── Stage 4: Confirm ──
    if !options.assume_yes {
        writeln!(out).map_err(RunError::Output)?;
        out.flush().map_err(RunError::Output)?;

        match prompt.confirm(CONFIRM_QUESTION)? {
            Confirmation::Accepted => {}
            Confirmation::Declined => {
                writeln!(out, "\nCommit cancelled.").map_err(RunError::Output)?;
                return Ok(RunOutcome::Cancelled);
            }
            Confirmation::Interrupted => {
                debug!("Confirmation interrupted");
                writeln!(out, "\n\nCommit cancelled.").map_err(RunError::Output)?;
                return Ok(RunOutcome::Cancelled);
            }
        }
    }

    // ── Stage 5: Commit ──
    let summary = commit(git, &message)?;
    if !summary.trim().is_empty() {
        writeln!(out, "{}", summary.trim_end()).map_err(RunError::Output)?;
    }
    writeln!(out, "\n✓ Commit created successfully!").map_err(RunError::Output)?;

    Ok(RunOutcome::Committed(summary))
}
