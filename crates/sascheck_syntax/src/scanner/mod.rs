//! The line scanner.
//!
//! ## Module Structure
//!
//! - `rules` - per-line checks (terminator, parens, quotes, comments, length)
//! - `state` - running counters and flags for one scan
//!
//! ## Per-line rule order
//!
//! 1. missing terminator (trimmed line)
//! 2. parenthesis balance (raw line)
//! 3. quote parity (raw line)
//! 4. comment nesting (trimmed line)
//! 5. `do`/`end` nesting (leading keyword)
//! 6. `proc`/`data` vs `run`/`quit` (leading keyword)
//! 7. long line (raw line)
//!
//! Whole-file findings are emitted once, in category order, from the final state.

pub mod rules;
pub mod state;

pub use state::{OpenBlock, ScanState};

use sascheck_core::lang::categories::CategoryId;
use sascheck_core::lang::keywords;

use crate::config::ScanConfig;
use crate::diagnostics::ScanError;
use crate::report::{FileIssue, Report};
use crate::source::{SourceLine, SourceLines};

/// Scan source text with the default configuration.
pub fn scan(source: &str) -> Report {
    scan_with_config(source, &ScanConfig::default())
}

/// Scan source text with a custom configuration.
pub fn scan_with_config(source: &str, config: &ScanConfig) -> Report {
    Scanner::new(config).scan(source)
}

/// Scan raw bytes with the default configuration.
///
/// ## Errors
///
/// Returns [`ScanError::InvalidUtf8`] if the bytes are not UTF-8. No partial report is produced.
pub fn scan_bytes(bytes: &[u8]) -> Result<Report, ScanError> {
    scan_bytes_with_config(bytes, &ScanConfig::default())
}

/// Scan raw bytes with a custom configuration.
pub fn scan_bytes_with_config(bytes: &[u8], config: &ScanConfig) -> Result<Report, ScanError> {
    Ok(scan_with_config(decode(bytes)?, config))
}

/// Decode raw input as UTF-8, reporting the line of the first invalid byte.
pub fn decode(bytes: &[u8]) -> Result<&str, ScanError> {
    std::str::from_utf8(bytes).map_err(|e| ScanError::invalid_utf8(bytes, e.valid_up_to()))
}

/// Single-pass scanner over the lines of one input.
///
/// A scanner is consumed by [`Scanner::scan`]; every scan starts from a fresh [`ScanState`].
#[derive(Debug)]
pub struct Scanner<'a> {
    config: &'a ScanConfig,
    state: ScanState,
    report: Report,
}

impl<'a> Scanner<'a> {
    pub fn new(config: &'a ScanConfig) -> Self {
        Self {
            config,
            state: ScanState::new(),
            report: Report::new(),
        }
    }

    /// Scan every line of `source` and return the completed report.
    pub fn scan(mut self, source: &str) -> Report {
        let _span = tracing::debug_span!("scan", bytes = source.len()).entered();

        for line in SourceLines::new(source) {
            self.scan_line(&line);
        }
        self.finish()
    }

    /// State after the lines fed so far. Exposed for inspection in tests and tooling.
    pub fn state(&self) -> &ScanState {
        &self.state
    }

    /// Feed a single line.
    pub fn scan_line(&mut self, line: &SourceLine<'_>) {
        let trimmed = line.trimmed();
        self.report.count_line();

        if rules::lacks_terminator(trimmed) {
            self.flag_line(CategoryId::MissingSemicolons, line);
        }

        self.state.paren_balance += rules::paren_delta(line.text);

        if rules::flips_quote_parity(line.text) {
            self.state.quote_open = !self.state.quote_open;
        }

        if rules::opens_comment(trimmed) {
            self.state.comment_open = !self.state.comment_open;
        }

        // Block and step tracking share the leading keyword
        if let Some(keyword) = keywords::leading_keyword(trimmed) {
            self.state.apply_keyword(keyword, line.number);
        }

        if rules::exceeds_length(line.text, self.config.max_line_length) {
            self.flag_line(CategoryId::LongLines, line);
        }
    }

    /// Emit whole-file findings from the final state and return the report.
    pub fn finish(self) -> Report {
        let Scanner { state, mut report, .. } = self;

        for issue in file_issues(&state) {
            tracing::trace!(category = %issue.category(), %issue, "whole-file finding");
            report.push_file(issue);
        }

        tracing::debug!(
            lines = report.lines_scanned(),
            findings = report.total(),
            open_blocks = state.open_blocks.len(),
            "scan complete"
        );
        report
    }

    fn flag_line(&mut self, category: CategoryId, line: &SourceLine<'_>) {
        tracing::trace!(%category, line = line.number, "line finding");
        self.report.push_line(category, line.number, line.text);
    }
}

/// Whole-file issues implied by a final scan state, in category order.
pub fn file_issues(state: &ScanState) -> Vec<FileIssue> {
    let mut issues = Vec::new();

    if state.paren_balance != 0 {
        issues.push(FileIssue::UnmatchedParentheses {
            remaining: state.paren_balance,
        });
    }
    if state.quote_open {
        issues.push(FileIssue::UnmatchedQuotes);
    }
    if state.comment_open {
        issues.push(FileIssue::UnclosedComment);
    }
    if state.do_balance != 0 {
        issues.push(FileIssue::UnmatchedDoEnd {
            remaining: state.do_balance,
        });
    }
    if let Some(line) = state.last_open_step {
        issues.push(FileIssue::UnterminatedStep { line });
    }

    issues
}
