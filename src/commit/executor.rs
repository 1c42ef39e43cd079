//! Commit creation through `git commit`.

use tracing::debug;

use crate::commit::message::CommitMessage;
use crate::error::{CommitError, GitError};
use crate::git::{GitCommand, GitRunner};

/// Create a commit from the staged changes with the given message.
///
/// Returns git's own summary output (e.g. `[main 1a2b3c4] feat: ...`).
/// On failure the error carries git's message verbatim, which covers
/// rejected empty messages and failing hooks.
pub fn commit<G: GitRunner + ?Sized>(
    git: &G,
    message: &CommitMessage,
) -> Result<String, CommitError> {
    let command = GitCommand::Commit {
        message: message.format(),
    };

    debug!("Creating commit: {}", message.subject);

    git.run(&command).map_err(|e| match e {
        GitError::NonZeroExit { message, .. } => CommitError::CommitFailed(message),
        other => CommitError::CommitFailed(other.to_string()),
    })
}
