//! Conventional commit types and their descriptions.

use std::fmt;

/// Conventional commit types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommitType {
    Feat,
    Fix,
    Docs,
    Style,
    Refactor,
    Perf,
    Test,
    Chore,
    Ci,
}

impl CommitType {
    /// Every type, in the order they are conventionally listed.
    pub const ALL: [CommitType; 9] = [
        Self::Feat,
        Self::Fix,
        Self::Docs,
        Self::Style,
        Self::Refactor,
        Self::Perf,
        Self::Test,
        Self::Chore,
        Self::Ci,
    ];

    /// The prefix used in a commit subject.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Feat => "feat",
            Self::Fix => "fix",
            Self::Docs => "docs",
            Self::Style => "style",
            Self::Refactor => "refactor",
            Self::Perf => "perf",
            Self::Test => "test",
            Self::Chore => "chore",
            Self::Ci => "ci",
        }
    }

    /// One-line description shown next to the generated message.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Feat => "A new feature",
            Self::Fix => "A bug fix",
            Self::Docs => "Documentation only changes",
            Self::Style => "Changes that don't affect code meaning",
            Self::Refactor => "Code change that neither fixes a bug nor adds a feature",
            Self::Perf => "Code change that improves performance",
            Self::Test => "Adding or updating tests",
            Self::Chore => "Changes to build process or dependencies",
            Self::Ci => "CI configuration changes",
        }
    }
}

impl fmt::Display for CommitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
