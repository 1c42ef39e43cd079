//! Running the system `git` binary.
//!
//! All operations shell out to `git` through [`std::process::Command`],
//! inheriting the user's git config, hooks and identity.

use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::debug;

use crate::error::GitError;

/// The git subcommands this tool runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GitCommand {
    /// `git diff --cached --name-only`, with paths printed unquoted.
    StagedNames,
    /// `git diff --cached`, uncolored whatever `color.ui` says.
    StagedDiff,
    /// `git commit -m <message>`
    Commit { message: String },
}

impl GitCommand {
    /// Command-line arguments passed to `git`.
    pub fn args(&self) -> Vec<&str> {
        match self {
            Self::StagedNames => {
                vec!["-c", "core.quotepath=off", "diff", "--cached", "--name-only"]
            }
            Self::StagedDiff => vec!["diff", "--cached", "--no-color"],
            Self::Commit { message } => vec!["commit", "-m", message.as_str()],
        }
    }
}

impl fmt::Display for GitCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StagedNames => write!(f, "diff --cached --name-only"),
            Self::StagedDiff => write!(f, "diff --cached"),
            // The message can span many lines; keep logs and errors short.
            Self::Commit { .. } => write!(f, "commit"),
        }
    }
}

/// Trait for executing git subcommands.
///
/// This abstraction allows mocking the git subprocess in tests.
#[cfg_attr(test, mockall::automock)]
pub trait GitRunner {
    /// Run a git subcommand and return its stdout.
    ///
    /// A non-zero exit status is an error carrying git's output.
    fn run(&self, command: &GitCommand) -> Result<String, GitError>;
}

/// Runner that calls the real `git` binary.
#[derive(Debug, Clone, Default)]
pub struct SystemGit {
    workdir: Option<PathBuf>,
}

impl SystemGit {
    /// Locate `git` on `PATH` and build a runner for the given directory.
    ///
    /// `None` runs git in the process's current directory.
    pub fn detect(workdir: Option<&Path>) -> Result<Self, GitError> {
        let binary = which::which("git").map_err(|_| GitError::NotInstalled)?;
        debug!("Using git at {}", binary.display());

        Ok(Self {
            workdir: workdir.map(Path::to_path_buf),
        })
    }

    /// Directory git commands run in, if overridden.
    pub fn workdir(&self) -> Option<&Path> {
        self.workdir.as_deref()
    }
}

impl GitRunner for SystemGit {
    fn run(&self, git_command: &GitCommand) -> Result<String, GitError> {
        let mut command = Command::new("git");
        command.args(git_command.args());
        if let Some(dir) = &self.workdir {
            command.current_dir(dir);
        }

        let output = command.output().map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                GitError::NotInstalled
            } else {
                GitError::SpawnFailed(e)
            }
        })?;

        debug!("git {} -> {}", git_command, output.status);

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let message = if stderr.trim().is_empty() {
                String::from_utf8_lossy(&output.stdout).trim().to_string()
            } else {
                stderr.trim().to_string()
            };

            return Err(GitError::NonZeroExit {
                command: git_command.to_string(),
                code: output.status.code(),
                message,
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
