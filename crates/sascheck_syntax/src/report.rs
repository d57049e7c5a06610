//! Scan report: findings grouped by category.
//!
//! A [`Report`] always holds all seven categories. An empty list means "no issues in this category", never "this
//! category was not checked".

use std::fmt;

use sascheck_core::lang::categories::{self, CategoryId, CategoryScope};

/// A finding tied to one source line.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LineFinding {
    /// 1-based line number
    pub line: usize,
    /// Raw line text, untrimmed
    pub text: String,
}

/// A whole-file finding, derived from the scan state after the last line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileIssue {
    /// More `(` than `)` (positive) or the reverse (negative).
    UnmatchedParentheses { remaining: i64 },
    /// The shared quote-parity flag was left set.
    UnmatchedQuotes,
    /// The comment-nesting flag was left set.
    UnclosedComment,
    /// More `do` than `end` lines (positive) or the reverse (negative).
    UnmatchedDoEnd { remaining: i64 },
    /// A `proc`/`data` step opened at `line` was never followed by `run`/`quit`.
    UnterminatedStep { line: usize },
}

impl FileIssue {
    /// Category this issue is reported under.
    pub fn category(&self) -> CategoryId {
        match self {
            FileIssue::UnmatchedParentheses { .. } => CategoryId::UnmatchedParentheses,
            FileIssue::UnmatchedQuotes => CategoryId::UnmatchedQuotes,
            FileIssue::UnclosedComment => CategoryId::UnclosedComments,
            FileIssue::UnmatchedDoEnd { .. } => CategoryId::UnmatchedDoEnd,
            FileIssue::UnterminatedStep { .. } => CategoryId::MissingRunQuit,
        }
    }
}

impl fmt::Display for FileIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileIssue::UnmatchedParentheses { remaining } => {
                write!(f, "Unmatched parentheses found ({remaining} remaining).")
            }
            FileIssue::UnmatchedQuotes => write!(f, "Unmatched quotes found in the file."),
            FileIssue::UnclosedComment => write!(f, "Unclosed comment block found in the file."),
            FileIssue::UnmatchedDoEnd { remaining } => {
                write!(f, "Unmatched DO-END blocks ({remaining} remaining).")
            }
            FileIssue::UnterminatedStep { line } => write!(
                f,
                "PROC or DATA step starting at line {line} is not terminated with RUN or QUIT."
            ),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for FileIssue {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("FileIssue", 1)?;
        state.serialize_field("message", &self.to_string())?;
        state.end()
    }
}

/// A single finding: either a specific line, or a summary for the whole input.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(untagged))]
pub enum Finding {
    Line(LineFinding),
    File(FileIssue),
}

impl Finding {
    /// Line number for per-line findings and unterminated steps.
    pub fn line(&self) -> Option<usize> {
        match self {
            Finding::Line(f) => Some(f.line),
            Finding::File(FileIssue::UnterminatedStep { line }) => Some(*line),
            Finding::File(_) => None,
        }
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Finding::Line(finding) => write!(f, "line {}: {}", finding.line, finding.text),
            Finding::File(issue) => issue.fmt(f),
        }
    }
}

/// Findings for every category, in scan order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    findings: [Vec<Finding>; CategoryId::COUNT],
    lines_scanned: usize,
}

impl Report {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn count_line(&mut self) {
        self.lines_scanned += 1;
    }

    pub(crate) fn push_line(&mut self, category: CategoryId, line: usize, text: &str) {
        debug_assert_eq!(categories::scope(category), CategoryScope::PerLine);
        self.findings[category.index()].push(Finding::Line(LineFinding {
            line,
            text: text.to_string(),
        }));
    }

    pub(crate) fn push_file(&mut self, issue: FileIssue) {
        let slot = &mut self.findings[issue.category().index()];
        debug_assert!(slot.is_empty(), "whole-file category reported twice");
        slot.push(Finding::File(issue));
    }

    /// Findings for one category.
    pub fn get(&self, category: CategoryId) -> &[Finding] {
        &self.findings[category.index()]
    }

    /// All categories with their findings, in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (CategoryId, &[Finding])> {
        CategoryId::ALL
            .into_iter()
            .map(move |category| (category, self.get(category)))
    }

    /// Total number of findings across all categories.
    pub fn total(&self) -> usize {
        self.findings.iter().map(Vec::len).sum()
    }

    /// Whether no category has any finding.
    pub fn is_clean(&self) -> bool {
        self.findings.iter().all(Vec::is_empty)
    }

    /// Number of source lines the scan visited.
    pub fn lines_scanned(&self) -> usize {
        self.lines_scanned
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Report {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(CategoryId::COUNT))?;
        for (category, findings) in self.iter() {
            map.serialize_entry(categories::as_str(category), findings)?;
        }
        map.end()
    }
}
