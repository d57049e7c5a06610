//! Graphical diagnostics rendering via `miette`

use miette::{GraphicalReportHandler, GraphicalTheme, NamedSource};
use sascheck_syntax::{FindingDiagnostic, Report, SourceLine, SourceLines};

use super::RenderError;

/// Terminal width the diagnostics are wrapped to.
const RENDER_WIDTH: usize = 100;

/// Render each finding as a source-annotated diagnostic.
///
/// Output is colorless so it stays stable when piped or captured.
pub fn render(report: &Report, name: &str, source: &str) -> Result<String, RenderError> {
    if report.is_clean() {
        return Ok(format!("{name}: no issues found\n"));
    }

    let named = NamedSource::new(name, source.to_string());
    let lines: Vec<SourceLine<'_>> = SourceLines::new(source).collect();
    let handler = GraphicalReportHandler::new_themed(GraphicalTheme::unicode_nocolor()).with_width(RENDER_WIDTH);

    let mut out = String::new();
    for (category, findings) in report.iter() {
        for finding in findings {
            let diagnostic = FindingDiagnostic::with_lines(category, finding, &named, &lines);
            handler.render_report(&mut out, &diagnostic)?;
        }
    }
    Ok(out)
}
