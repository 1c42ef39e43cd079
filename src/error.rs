//! Error types for stagemsg modules using thiserror.

use thiserror::Error;

/// Errors from invoking the `git` binary.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("git executable not found. Install git and make sure it is on your PATH")]
    NotInstalled,

    #[error("Failed to spawn git: {0}")]
    SpawnFailed(#[source] std::io::Error),

    #[error("git {command} exited with {}: {message}",
             code.map_or("unknown status".to_string(), |c| format!("code {c}")))]
    NonZeroExit {
        command: String,
        code: Option<i32>,
        /// Trimmed stderr, or stdout when git wrote nothing to stderr.
        message: String,
    },
}

/// Errors from collecting staged changes.
#[derive(Error, Debug)]
pub enum CollectError {
    #[error("Not a git repository or git is unavailable")]
    RepositoryUnavailable(#[source] GitError),

    #[error("No staged changes found. Stage your changes first with: git add .")]
    EmptyStagedSet,
}

/// Errors from creating the commit.
#[derive(Error, Debug)]
pub enum CommitError {
    #[error("Failed to create commit: {0}")]
    CommitFailed(String),
}

/// Errors from the confirmation prompt.
#[derive(Error, Debug)]
pub enum PromptError {
    #[error("Failed to read confirmation: {0}")]
    Io(#[source] std::io::Error),

    #[error("Failed to install interrupt handler: {0}")]
    Signal(#[source] ctrlc::Error),
}

/// Errors that end a run with a non-zero exit status.
#[derive(Error, Debug)]
pub enum RunError {
    #[error(transparent)]
    Collect(#[from] CollectError),

    #[error(transparent)]
    Commit(#[from] CommitError),

    #[error(transparent)]
    Prompt(#[from] PromptError),

    #[error("Failed to write output: {0}")]
    Output(#[source] std::io::Error),
}
