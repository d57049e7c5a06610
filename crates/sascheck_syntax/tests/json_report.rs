//! JSON shape of a report (requires the `serde` feature)

#![cfg(feature = "serde")]

use sascheck_syntax::scan;
use serde_json::json;

#[test]
fn report_serializes_every_category() {
    let report = scan("data a;\n  x = (1\n");
    let value = serde_json::to_value(&report).unwrap();

    assert_eq!(
        value,
        json!({
            "missing_semicolons": [{ "line": 2, "text": "  x = (1" }],
            "unmatched_parentheses": [{ "message": "Unmatched parentheses found (1 remaining)." }],
            "unmatched_quotes": [],
            "unclosed_comments": [],
            "unmatched_do_end": [],
            "missing_run_quit": [
                { "message": "PROC or DATA step starting at line 1 is not terminated with RUN or QUIT." }
            ],
            "long_lines": [],
        })
    );
}

#[test]
fn clean_report_serializes_empty_lists() {
    let value = serde_json::to_value(scan("")).unwrap();
    let object = value.as_object().unwrap();
    assert_eq!(object.len(), 7);
    assert!(object.values().all(|v| v.as_array().is_some_and(Vec::is_empty)));
}

#[test]
fn serialized_key_order_is_canonical() {
    let text = serde_json::to_string(&scan("x = 1;")).unwrap();
    let positions: Vec<usize> = [
        "missing_semicolons",
        "unmatched_parentheses",
        "unmatched_quotes",
        "unclosed_comments",
        "unmatched_do_end",
        "missing_run_quit",
        "long_lines",
    ]
    .iter()
    .map(|key| text.find(key).unwrap())
    .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}
