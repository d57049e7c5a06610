//! Plain-text checklist rendering

use std::fmt::Write;

use sascheck_core::lang::categories;
use sascheck_syntax::{Finding, Report};

use super::RenderError;

/// Render every category in canonical order, blank-line separated.
///
/// ```text
/// Missing Semicolons:
///      2 |   x = 1
///
/// Unmatched Parentheses:
///   No issues found.
/// ```
pub fn render(report: &Report) -> Result<String, RenderError> {
    let mut out = String::new();

    for (i, (category, findings)) in report.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        writeln!(out, "{}:", categories::heading(category))?;

        if findings.is_empty() {
            writeln!(out, "  No issues found.")?;
        }
        for finding in findings {
            match finding {
                Finding::Line(f) => writeln!(out, "  {:>4} | {}", f.line, f.text)?,
                Finding::File(issue) => writeln!(out, "  {issue}")?,
            }
        }
    }

    Ok(out)
}
