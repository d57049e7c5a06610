//! Per-line checks.
//!
//! Each check looks at one line in isolation and reports what that line contributes. The scanner folds these
//! contributions into its running state. Keyword and prefix checks see the trimmed line; character counts and the
//! length check see the raw line.

use sascheck_core::lang::markers::{
    self, CLOSE_PAREN, COMMENT_CLOSE, COMMENT_OPEN, DOUBLE_QUOTE, OPEN_PAREN, SINGLE_QUOTE, STATEMENT_TERMINATOR,
};

/// A non-empty line that neither ends with `;` nor starts with a comment or macro marker.
///
/// Continuation lines of multi-line statements are flagged too; there is no parser to tell them apart.
pub fn lacks_terminator(trimmed: &str) -> bool {
    !trimmed.is_empty() && !trimmed.ends_with(STATEMENT_TERMINATOR) && !markers::is_statement_exempt(trimmed)
}

/// `(` count minus `)` count.
pub fn paren_delta(raw: &str) -> i64 {
    let (open, close) = raw.chars().fold((0i64, 0i64), |(open, close), c| match c {
        OPEN_PAREN => (open + 1, close),
        CLOSE_PAREN => (open, close + 1),
        _ => (open, close),
    });
    open - close
}

/// Whether the line flips the shared quote-parity flag.
///
/// An odd number of `'` flips it once and an odd number of `"` flips it once more, so one of each cancels out.
pub fn flips_quote_parity(raw: &str) -> bool {
    let singles = raw.chars().filter(|&c| c == SINGLE_QUOTE).count();
    let doubles = raw.chars().filter(|&c| c == DOUBLE_QUOTE).count();
    (singles % 2 == 1) ^ (doubles % 2 == 1)
}

/// Whether the line has more `/*` than `*/`. Each such line toggles the comment flag.
pub fn opens_comment(trimmed: &str) -> bool {
    trimmed.matches(COMMENT_OPEN).count() > trimmed.matches(COMMENT_CLOSE).count()
}

/// Whether the raw line is longer than `max` characters.
pub fn exceeds_length(raw: &str, max: usize) -> bool {
    raw.chars().nth(max).is_some()
}
