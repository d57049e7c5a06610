//! Report rendering
//!
//! Every renderer is a pure function from a [`Report`] to a `String`; printing is left to the caller.
//!
//! ## Formats
//!
//! - [`OutputFormat::Text`] - one section per category, the classic checklist layout
//! - [`OutputFormat::Pretty`] - graphical `miette` diagnostics annotated against the source
//! - [`OutputFormat::Json`] - the serde representation of the report

pub mod json;
pub mod pretty;
pub mod text;

use std::fmt;

use clap::ValueEnum;
use sascheck_syntax::Report;
use thiserror::Error;

/// Output format selected on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Category headings with line-numbered findings
    #[default]
    Text,
    /// Source-annotated diagnostics
    Pretty,
    /// Machine-readable JSON
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Text => "text",
            OutputFormat::Pretty => "pretty",
            OutputFormat::Json => "json",
        };
        f.write_str(name)
    }
}

/// Errors raised while rendering a report.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to format report")]
    Fmt(#[from] fmt::Error),
    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

/// Render one report.
///
/// `name` labels the input in graphical diagnostics and `source` is the text that was scanned.
pub fn render(format: OutputFormat, report: &Report, name: &str, source: &str) -> Result<String, RenderError> {
    match format {
        OutputFormat::Text => text::render(report),
        OutputFormat::Pretty => pretty::render(report, name, source),
        OutputFormat::Json => json::render_report(report),
    }
}
