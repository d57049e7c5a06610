//! Snapshot tests for rendered reports
//!
//! Uses insta inline snapshots. Run `cargo insta review` after intentional output changes.

use sascheck::cli::commands::categories_table;
use sascheck::render::{json, text};
use sascheck::scan;

#[test]
fn snapshot_text_report() {
    let report = scan("data a;\n  x = 1\n");
    insta::assert_snapshot!(text::render(&report).unwrap(), @r"
    Missing Semicolons:
         2 |   x = 1

    Unmatched Parentheses:
      No issues found.

    Unmatched Quotes:
      No issues found.

    Unclosed Comments:
      No issues found.

    Unmatched Do End:
      No issues found.

    Missing Run Quit:
      PROC or DATA step starting at line 1 is not terminated with RUN or QUIT.

    Long Lines:
      No issues found.
    ");
}

#[test]
fn snapshot_text_whole_file_findings() {
    let report = scan("proc print data=(x;\ntitle 'oops;\n/* open\ndo;\n");
    insta::assert_snapshot!(text::render(&report).unwrap(), @r"
    Missing Semicolons:
      No issues found.

    Unmatched Parentheses:
      Unmatched parentheses found (1 remaining).

    Unmatched Quotes:
      Unmatched quotes found in the file.

    Unclosed Comments:
      Unclosed comment block found in the file.

    Unmatched Do End:
      Unmatched DO-END blocks (1 remaining).

    Missing Run Quit:
      PROC or DATA step starting at line 1 is not terminated with RUN or QUIT.

    Long Lines:
      No issues found.
    ");
}

#[test]
fn snapshot_json_report() {
    let report = scan("x = (1;\ny = 2\n");
    insta::assert_snapshot!(json::render_report(&report).unwrap(), @r#"
    {
      "missing_semicolons": [
        {
          "line": 2,
          "text": "y = 2"
        }
      ],
      "unmatched_parentheses": [
        {
          "message": "Unmatched parentheses found (1 remaining)."
        }
      ],
      "unmatched_quotes": [],
      "unclosed_comments": [],
      "unmatched_do_end": [],
      "missing_run_quit": [],
      "long_lines": []
    }
    "#);
}

#[test]
fn snapshot_categories_table() {
    insta::assert_snapshot!(categories_table(), @r"
    missing_semicolons     Missing Semicolons     per-line
    unmatched_parentheses  Unmatched Parentheses  whole-file
    unmatched_quotes       Unmatched Quotes       whole-file
    unclosed_comments      Unclosed Comments      whole-file
    unmatched_do_end       Unmatched Do End       whole-file
    missing_run_quit       Missing Run Quit       whole-file
    long_lines             Long Lines             per-line
    ");
}
