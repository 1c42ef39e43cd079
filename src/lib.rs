//! stagemsg - A CLI tool that composes a commit message from staged changes.
//!
//! # Overview
//!
//! stagemsg reads the staged file list and diff from `git`, classifies the
//! change with a few path and line-count heuristics, renders a
//! conventional-commit style message, and commits it once the operator
//! confirms.

pub mod commit;
pub mod error;
pub mod git;
pub mod interaction;
pub mod run;

// Re-export commonly used types
pub use commit::{ChangeAnalysis, ChangeTag, CommitMessage, CommitType};
pub use error::{CollectError, CommitError, GitError, PromptError, RunError};
pub use git::{GitCommand, GitRunner, SystemGit};
pub use interaction::{ConfirmPrompt, Confirmation, TerminalPrompt};
pub use run::{RunOptions, RunOutcome, run};
