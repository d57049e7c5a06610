//! Property-based tests for the scanner
//!
//! These tests use proptest to check the report invariants across many generated programs.

use proptest::prelude::*;
use sascheck_core::lang::categories;
use sascheck_core::lang::keywords;
use sascheck_syntax::{CategoryId, CategoryScope, FileIssue, Finding, scan};

/// Lines split the way the scanner documents it: on `\n`, dropping one trailing `\r`.
fn reference_lines(source: &str) -> Vec<&str> {
    if source.is_empty() {
        return Vec::new();
    }
    let body = source.strip_suffix('\n').unwrap_or(source);
    body.split('\n').map(|l| l.strip_suffix('\r').unwrap_or(l)).collect()
}

fn sas_noise() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ;()'\"/*%=\\n\\r\\t]{0,300}"
}

fn plain_statement() -> impl Strategy<Value = String> {
    "[a-z]{1,8} = [0-9]{1,4};".prop_filter("Not a keyword", |s| keywords::leading_keyword(s).is_none())
}

proptest! {
    /// Property: scanning is deterministic
    #[test]
    fn scan_is_deterministic(source in sas_noise()) {
        prop_assert_eq!(scan(&source), scan(&source));
    }

    /// Property: all seven categories are present and whole-file categories hold at most one finding
    #[test]
    fn report_categories_are_exhaustive(source in sas_noise()) {
        let report = scan(&source);
        let seen: Vec<CategoryId> = report.iter().map(|(c, _)| c).collect();
        prop_assert_eq!(seen, CategoryId::ALL.to_vec());

        for (category, findings) in report.iter() {
            match categories::scope(category) {
                CategoryScope::WholeFile => {
                    prop_assert!(findings.len() <= 1);
                    prop_assert!(findings.iter().all(|f| matches!(f, Finding::File(_))));
                }
                CategoryScope::PerLine => {
                    prop_assert!(findings.iter().all(|f| matches!(f, Finding::Line(_))));
                }
            }
        }
    }

    /// Property: per-line findings cite the right line, in strictly increasing order
    #[test]
    fn line_numbers_match_source(source in sas_noise()) {
        let report = scan(&source);
        let lines = reference_lines(&source);
        prop_assert_eq!(report.lines_scanned(), lines.len());

        for category in [CategoryId::MissingSemicolons, CategoryId::LongLines] {
            let mut previous = 0;
            for finding in report.get(category) {
                let Finding::Line(f) = finding else {
                    return Err(TestCaseError::fail("per-line category holds a file finding"));
                };
                prop_assert!(f.line > previous);
                prop_assert_eq!(lines.get(f.line - 1).copied(), Some(f.text.as_str()));
                previous = f.line;
            }
        }
    }

    /// Property: the parenthesis summary cites exactly the surplus of `(` over `)`
    #[test]
    fn paren_summary_cites_surplus(counts in prop::collection::vec((0usize..4, 0usize..4), 0..30)) {
        let source: String = counts
            .iter()
            .map(|&(open, close)| format!("x = {}1{};\n", "(".repeat(open), ")".repeat(close)))
            .collect();
        let surplus: i64 = counts.iter().map(|&(o, c)| o as i64 - c as i64).sum();

        let report = scan(&source);
        let findings = report.get(CategoryId::UnmatchedParentheses);
        if surplus == 0 {
            prop_assert!(findings.is_empty());
        } else {
            prop_assert_eq!(
                findings,
                &[Finding::File(FileIssue::UnmatchedParentheses { remaining: surplus })]
            );
        }
    }

    /// Property: even quote counts on every line never leave the quote flag set
    #[test]
    fn even_quotes_are_balanced(pairs in prop::collection::vec((0usize..3, 0usize..3), 0..30)) {
        let source: String = pairs
            .iter()
            .map(|&(singles, doubles)| {
                format!("x = {}{};\n", "'a'".repeat(singles), "\"b\"".repeat(doubles))
            })
            .collect();
        let report = scan(&source);
        prop_assert!(report.get(CategoryId::UnmatchedQuotes).is_empty());
    }

    /// Property: equal numbers of `do` and `end` lines balance, one extra `do` leaves one open
    #[test]
    fn do_end_lines_balance(
        blocks in 0usize..10,
        body in prop::collection::vec(plain_statement(), 0..5),
        upper in any::<bool>(),
    ) {
        let (open, close) = if upper { ("DO;", "END;") } else { ("do;", "end;") };
        let mut lines = Vec::new();
        for _ in 0..blocks {
            lines.push(open.to_string());
            lines.extend(body.iter().cloned());
        }
        for _ in 0..blocks {
            lines.push(close.to_string());
        }

        let balanced = scan(&lines.join("\n"));
        prop_assert!(balanced.get(CategoryId::UnmatchedDoEnd).is_empty());

        lines.insert(0, open.to_string());
        let extra = scan(&lines.join("\n"));
        prop_assert_eq!(
            extra.get(CategoryId::UnmatchedDoEnd),
            &[Finding::File(FileIssue::UnmatchedDoEnd { remaining: 1 })]
        );
    }

    /// Property: a data step is reported unterminated exactly when its `run;` is missing
    #[test]
    fn data_step_needs_run(
        before in prop::collection::vec(plain_statement(), 0..5),
        body in prop::collection::vec(plain_statement(), 0..5),
    ) {
        let mut lines: Vec<String> = before.clone();
        lines.push("data x;".to_string());
        lines.extend(body.iter().cloned());
        let step_line = before.len() + 1;

        let unterminated = scan(&lines.join("\n"));
        prop_assert_eq!(
            unterminated.get(CategoryId::MissingRunQuit),
            &[Finding::File(FileIssue::UnterminatedStep { line: step_line })]
        );

        lines.push("run;".to_string());
        let terminated = scan(&lines.join("\n"));
        prop_assert!(terminated.get(CategoryId::MissingRunQuit).is_empty());
    }

    /// Property: only lines longer than 80 characters are long
    #[test]
    fn long_line_threshold(len in 1usize..200) {
        let line = format!("{};", "x".repeat(len - 1));
        let report = scan(&line);
        let flagged = !report.get(CategoryId::LongLines).is_empty();
        prop_assert_eq!(flagged, len > 80);
    }
}
