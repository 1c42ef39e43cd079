//! Heuristic classification of a staged change set.
//!
//! Everything here is derived from file paths and a line count over the raw
//! unified diff. There is no structured diff parsing.

use std::collections::BTreeSet;

/// Substrings that mark a path as a test file.
const TEST_MARKERS: &[&str] = &[".test.", ".spec."];

/// Suffixes of documentation files. Matching is case-sensitive.
const DOC_SUFFIXES: &[&str] = &[".md", ".txt", ".rst"];

/// Suffixes of source files. Matching is case-sensitive.
const SOURCE_SUFFIXES: &[&str] = &[".js", ".ts", ".jsx", ".tsx", ".py", ".java"];

/// Dependency manifest names, matched anywhere in the path.
const MANIFEST_MARKERS: &[&str] = &["package.json", "requirements.txt"];

/// Coarse signal found in the staged paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ChangeTag {
    /// A dependency manifest was touched.
    Maintenance,
    /// A source file was touched.
    Feature,
}

/// Summary of a staged change set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeAnalysis {
    /// Staged paths, in the order git reported them.
    pub files: Vec<String>,
    pub file_count: usize,
    /// Lines starting with `+`, minus one header line per file. May be negative.
    pub added_lines: i64,
    /// Lines starting with `-`, minus one header line per file. May be negative.
    pub removed_lines: i64,
    pub test_files: usize,
    pub doc_files: usize,
    pub tags: BTreeSet<ChangeTag>,
}

impl ChangeAnalysis {
    /// Whether every staged file is documentation.
    ///
    /// Vacuously true for an empty file list.
    pub fn is_docs_only(&self) -> bool {
        self.doc_files == self.file_count
    }

    pub fn touches_tests(&self) -> bool {
        self.test_files > 0
    }

    pub fn has_tag(&self, tag: ChangeTag) -> bool {
        self.tags.contains(&tag)
    }
}

/// Analyze staged files and their diff text.
pub fn analyze(files: &[String], diff: &str) -> ChangeAnalysis {
    let (added_lines, removed_lines) = count_changed_lines(diff, files.len());

    let mut tags = BTreeSet::new();
    for file in files {
        if is_manifest(file) {
            tags.insert(ChangeTag::Maintenance);
        }
        if has_suffix(file, SOURCE_SUFFIXES) {
            tags.insert(ChangeTag::Feature);
        }
    }

    ChangeAnalysis {
        files: files.to_vec(),
        file_count: files.len(),
        added_lines,
        removed_lines,
        test_files: files.iter().filter(|f| is_test_file(f)).count(),
        doc_files: files.iter().filter(|f| has_suffix(f, DOC_SUFFIXES)).count(),
        tags,
    }
}

/// Count `+`/`-` lines, offsetting the `+++`/`---` header each file adds.
///
/// The offset is an approximation: binary files, renames and mode-only
/// changes have no header pair, so the result can go negative. An empty diff
/// (git could not produce one) counts as zero on both sides.
fn count_changed_lines(diff: &str, file_count: usize) -> (i64, i64) {
    if diff.is_empty() {
        return (0, 0);
    }

    let mut plus = 0i64;
    let mut minus = 0i64;
    for line in diff.lines() {
        if line.starts_with('+') {
            plus += 1;
        } else if line.starts_with('-') {
            minus += 1;
        }
    }

    let offset = file_count as i64;
    (plus - offset, minus - offset)
}

fn is_test_file(path: &str) -> bool {
    TEST_MARKERS.iter().any(|marker| path.contains(marker))
}

fn is_manifest(path: &str) -> bool {
    MANIFEST_MARKERS.iter().any(|marker| path.contains(marker))
}

fn has_suffix(path: &str, suffixes: &[&str]) -> bool {
    suffixes.iter().any(|suffix| path.ends_with(suffix))
}
