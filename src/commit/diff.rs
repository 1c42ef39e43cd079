//! Collection of staged changes from git.

use tracing::{debug, warn};

use crate::error::CollectError;
use crate::git::{GitCommand, GitRunner};

/// List the staged file paths in the order git reports them.
///
/// Blank lines are dropped and paths are trimmed. An empty result is not an
/// error here; the caller decides what an empty staging area means.
pub fn get_staged_files<G: GitRunner + ?Sized>(git: &G) -> Result<Vec<String>, CollectError> {
    let output = git
        .run(&GitCommand::StagedNames)
        .map_err(CollectError::RepositoryUnavailable)?;

    let files = parse_file_list(&output);
    debug!("Found {} staged files", files.len());
    Ok(files)
}

/// Fetch the unified diff of staged changes.
///
/// Best-effort: a failing diff degrades to an empty string so the run can
/// continue without line statistics.
pub fn get_detailed_diff<G: GitRunner + ?Sized>(git: &G) -> String {
    match git.run(&GitCommand::StagedDiff) {
        Ok(text) => text,
        Err(e) => {
            warn!("Staged diff unavailable, continuing without line counts: {e}");
            String::new()
        }
    }
}

fn parse_file_list(output: &str) -> Vec<String> {
    output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}
