//! Convert scan findings to LSP diagnostics

use sascheck_core::lang::categories::{self, CategoryId, CategoryScope};
use sascheck_syntax::{Finding, Report, SourceLine, SourceLines, finding_message};
use tower_lsp::lsp_types::{Diagnostic, DiagnosticSeverity, NumberOrString, Position, Range};

/// Value of `Diagnostic::source` for every published diagnostic.
pub const DIAGNOSTIC_SOURCE: &str = "sascheck";

/// A document split into lines once, for anchoring any number of findings.
#[derive(Debug, Clone)]
pub struct DocumentLines<'a> {
    lines: Vec<SourceLine<'a>>,
}

impl<'a> DocumentLines<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            lines: SourceLines::new(source).collect(),
        }
    }

    /// 1-based number of the last line. An empty document has one empty line.
    pub fn last_line(&self) -> usize {
        self.lines.len().max(1)
    }

    /// 1-based line a finding is drawn on.
    ///
    /// Per-line findings and unterminated steps use their own line; other whole-file findings use the last line.
    pub fn anchor_line(&self, finding: &Finding) -> usize {
        finding.line().unwrap_or_else(|| self.last_line())
    }

    /// Range covering the whole of a 1-based source line.
    ///
    /// LSP positions count UTF-16 code units. Lines past the end of the document map to an empty range at that line.
    pub fn line_range(&self, line: usize) -> Range {
        let index = line.saturating_sub(1) as u32;
        let width = line
            .checked_sub(1)
            .and_then(|i| self.lines.get(i))
            .map_or(0, |l| l.text.encode_utf16().count() as u32);
        Range::new(Position::new(index, 0), Position::new(index, width))
    }
}

fn category_to_severity(category: CategoryId) -> DiagnosticSeverity {
    match categories::scope(category) {
        CategoryScope::PerLine => DiagnosticSeverity::WARNING,
        CategoryScope::WholeFile => DiagnosticSeverity::ERROR,
    }
}

/// Convert one finding to an LSP diagnostic.
pub fn finding_to_diagnostic(category: CategoryId, finding: &Finding, lines: &DocumentLines<'_>) -> Diagnostic {
    let range = lines.line_range(lines.anchor_line(finding));

    Diagnostic {
        range,
        severity: Some(category_to_severity(category)),
        code: Some(NumberOrString::String(categories::as_str(category).to_string())),
        code_description: None,
        source: Some(DIAGNOSTIC_SOURCE.to_string()),
        message: finding_message(category, finding),
        related_information: None,
        tags: None,
        data: None,
    }
}

/// Every finding in a report, in canonical category order.
pub fn report_to_diagnostics(report: &Report, source: &str) -> Vec<Diagnostic> {
    let lines = DocumentLines::new(source);
    let mut diagnostics = Vec::with_capacity(report.total());
    for (category, findings) in report.iter() {
        for finding in findings {
            diagnostics.push(finding_to_diagnostic(category, finding, &lines));
        }
    }
    diagnostics
}
