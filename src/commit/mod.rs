//! Commit messages composed from staged changes.

pub mod analysis;
pub mod diff;
pub mod executor;
pub mod kind;
pub mod message;

pub use analysis::{ChangeAnalysis, ChangeTag, analyze};
pub use diff::{get_detailed_diff, get_staged_files};
pub use executor::commit;
pub use kind::CommitType;
pub use message::{CommitMessage, MAX_LISTED_FILES, compose};
