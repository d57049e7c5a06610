//! Diagnostics for the scanner.
//!
//! - [`ScanError`] is a scan *failure*: the input could not be scanned at all. It is never used for findings.
//! - [`FindingDiagnostic`] wraps one finding as a [`miette::Diagnostic`] so renderers can show it against the source.

use std::fmt;

use miette::{Diagnostic, LabeledSpan, NamedSource, Severity, SourceCode};
use sascheck_core::lang::categories::{self, CategoryId, CategoryScope};
use thiserror::Error;

use crate::report::{FileIssue, Finding};
use crate::source::{SourceLine, SourceLines};

/// Errors that prevent a scan from producing a report
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum ScanError {
    #[error("input is not valid UTF-8 (line {line}, byte {valid_up_to})")]
    #[diagnostic(code(sascheck::invalid_utf8), help("re-save the file as UTF-8 and scan it again"))]
    InvalidUtf8 {
        /// 1-based line containing the first invalid byte
        line: usize,
        /// Length of the valid UTF-8 prefix in bytes
        valid_up_to: usize,
    },
}

impl ScanError {
    pub(crate) fn invalid_utf8(bytes: &[u8], valid_up_to: usize) -> Self {
        let line = bytes[..valid_up_to].iter().filter(|&&b| b == b'\n').count() + 1;
        ScanError::InvalidUtf8 { line, valid_up_to }
    }
}

/// One finding presented as a source-annotated diagnostic.
///
/// Per-line findings and unterminated steps are labelled at their line; the remaining whole-file findings carry no
/// label because the scanner does not know where the imbalance started.
#[derive(Debug)]
pub struct FindingDiagnostic<'a> {
    category: CategoryId,
    finding: &'a Finding,
    source: &'a NamedSource<String>,
    span: Option<(usize, usize)>,
}

impl<'a> FindingDiagnostic<'a> {
    pub fn new(category: CategoryId, finding: &'a Finding, source: &'a NamedSource<String>) -> Self {
        let lines: Vec<SourceLine<'_>> = SourceLines::new(source.inner()).collect();
        Self::with_lines(category, finding, source, &lines)
    }

    /// Like [`FindingDiagnostic::new`], with `source` already split into lines.
    ///
    /// Renderers that build many diagnostics for one source split it once and pass the same slice to each.
    pub fn with_lines(
        category: CategoryId,
        finding: &'a Finding,
        source: &'a NamedSource<String>,
        lines: &[SourceLine<'_>],
    ) -> Self {
        let span = finding
            .line()
            .and_then(|n| lines.get(n.checked_sub(1)?))
            .map(|line| (line.offset, line.text.len()));
        Self {
            category,
            finding,
            source,
            span,
        }
    }

    /// Byte offset and length of the labelled line, if any.
    pub fn span(&self) -> Option<(usize, usize)> {
        self.span
    }
}

impl fmt::Display for FindingDiagnostic<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&finding_message(self.category, self.finding))
    }
}

impl std::error::Error for FindingDiagnostic<'_> {}

impl Diagnostic for FindingDiagnostic<'_> {
    fn code<'b>(&'b self) -> Option<Box<dyn fmt::Display + 'b>> {
        Some(Box::new(format!("sascheck::{}", categories::as_str(self.category))))
    }

    fn severity(&self) -> Option<Severity> {
        match categories::scope(self.category) {
            CategoryScope::PerLine => Some(Severity::Warning),
            CategoryScope::WholeFile => Some(Severity::Error),
        }
    }

    fn help<'b>(&'b self) -> Option<Box<dyn fmt::Display + 'b>> {
        let help = help_for(self.category)?;
        Some(Box::new(help))
    }

    fn source_code(&self) -> Option<&dyn SourceCode> {
        Some(self.source)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let (offset, len) = self.span?;
        let label = match self.finding {
            Finding::File(FileIssue::UnterminatedStep { .. }) => "step starts here",
            _ => "here",
        };
        Some(Box::new(std::iter::once(LabeledSpan::new(
            Some(label.to_string()),
            offset,
            len,
        ))))
    }
}

/// Short message for a finding, without the offending line text.
pub fn finding_message(category: CategoryId, finding: &Finding) -> String {
    match finding {
        Finding::Line(_) => line_message(category).to_string(),
        Finding::File(issue) => issue.to_string(),
    }
}

fn line_message(category: CategoryId) -> &'static str {
    match category {
        CategoryId::MissingSemicolons => "statement does not end with a semicolon",
        CategoryId::LongLines => "line is too long",
        _ => categories::heading(category),
    }
}

/// Suggested fix for a category, where one applies.
pub fn help_for(category: CategoryId) -> Option<&'static str> {
    match category {
        CategoryId::MissingSemicolons => Some("end the statement with `;` (continuation lines are reported too)"),
        CategoryId::MissingRunQuit => Some("close the step with `run;` or `quit;`"),
        CategoryId::UnmatchedDoEnd => Some("every `do` needs a matching `end;`"),
        _ => None,
    }
}
