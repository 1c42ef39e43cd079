//! Commit message composition from a [`ChangeAnalysis`].
//!
//! Both the commit type and the subject phrase are picked by an ordered list
//! of checks; the first one that matches wins.

use std::path::Path;

use crate::commit::analysis::{ChangeAnalysis, ChangeTag};
use crate::commit::kind::CommitType;

/// Above this many files the body omits the per-file list.
pub const MAX_LISTED_FILES: usize = 5;

/// A composed commit message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitMessage {
    pub commit_type: CommitType,
    /// `"<type>: <phrase>"`, a single line.
    pub subject: String,
    pub body: String,
}

impl CommitMessage {
    /// Format the full commit text for git.
    ///
    /// Produces:
    /// ```text
    /// feat: add new functionality
    ///
    /// Files changed: 2
    /// Lines added: 40
    /// Lines removed: 3
    ///
    /// Modified files:
    /// - src/a.py
    /// - src/b.py
    /// ```
    pub fn format(&self) -> String {
        format!("{}\n\n{}", self.subject, self.body)
    }
}

/// Compose the commit message for an analysis.
pub fn compose(analysis: &ChangeAnalysis) -> CommitMessage {
    let commit_type = select_commit_type(analysis);
    let phrase = select_subject_phrase(analysis);

    CommitMessage {
        commit_type,
        subject: format!("{commit_type}: {phrase}"),
        body: render_body(analysis),
    }
}

fn select_commit_type(analysis: &ChangeAnalysis) -> CommitType {
    if analysis.touches_tests() {
        return CommitType::Test;
    }
    if analysis.is_docs_only() {
        return CommitType::Docs;
    }
    if analysis.has_tag(ChangeTag::Feature) {
        return CommitType::Feat;
    }
    CommitType::Chore
}

fn select_subject_phrase(analysis: &ChangeAnalysis) -> String {
    if analysis.is_docs_only() {
        return "update documentation".to_string();
    }
    if analysis.touches_tests() {
        return "add/update tests".to_string();
    }
    if analysis.added_lines > analysis.removed_lines.saturating_mul(2) {
        return "add new functionality".to_string();
    }
    if analysis.removed_lines > analysis.added_lines {
        return "remove unused code".to_string();
    }
    if analysis.file_count == 1 {
        if let Some(file) = analysis.files.first() {
            return format!("update {}", base_name(file));
        }
    }
    "refactor code structure".to_string()
}

fn render_body(analysis: &ChangeAnalysis) -> String {
    let mut lines = vec![
        format!("Files changed: {}", analysis.file_count),
        format!("Lines added: {}", analysis.added_lines),
        format!("Lines removed: {}", analysis.removed_lines),
    ];

    if analysis.file_count <= MAX_LISTED_FILES {
        lines.push(String::new());
        lines.push("Modified files:".to_string());
        lines.extend(analysis.files.iter().map(|f| format!("- {f}")));
    }

    lines.join("\n")
}

fn base_name(path: &str) -> &str {
    Path::new(path)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(path)
}
