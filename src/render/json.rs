//! JSON rendering
//!
//! A single report serializes as an object keyed by category identifier. The CLI wraps reports in [`JsonEntry`]
//! records so several inputs produce one JSON document.

use sascheck_syntax::Report;
use serde::Serialize;

use super::RenderError;

/// One input in a multi-file JSON document.
#[derive(Debug, Serialize)]
pub struct JsonEntry<'a> {
    /// Path as given on the command line, or `<stdin>`
    pub file: &'a str,
    /// `None` when the input was blank and not scanned
    pub issues: Option<&'a Report>,
}

/// Pretty-printed JSON for one report.
pub fn render_report(report: &Report) -> Result<String, RenderError> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Pretty-printed JSON array for several inputs.
pub fn render_entries(entries: &[JsonEntry<'_>]) -> Result<String, RenderError> {
    Ok(serde_json::to_string_pretty(entries)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sascheck_syntax::scan;
    use serde_json::Value;

    #[test]
    fn test_report_json_is_keyed_by_category() {
        let out = render_report(&scan("data a;\n")).unwrap();
        let value: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(
            value["missing_run_quit"][0]["message"],
            "PROC or DATA step starting at line 1 is not terminated with RUN or QUIT."
        );
        assert_eq!(value["long_lines"], Value::Array(Vec::new()));
    }

    #[test]
    fn test_blank_entry_has_null_issues() {
        let report = scan("x = 1");
        let entries = [
            JsonEntry {
                file: "a.sas",
                issues: Some(&report),
            },
            JsonEntry {
                file: "empty.sas",
                issues: None,
            },
        ];
        let value: Value = serde_json::from_str(&render_entries(&entries).unwrap()).unwrap();
        assert_eq!(value[0]["file"], "a.sas");
        assert_eq!(value[0]["issues"]["missing_semicolons"][0]["line"], 1);
        assert_eq!(value[0]["issues"]["missing_semicolons"][0]["text"], "x = 1");
        assert_eq!(value[1]["issues"], Value::Null);
    }
}
