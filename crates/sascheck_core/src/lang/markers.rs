//! Character and string markers the scanner counts.
//!
//! ## Notes
//! - These are spellings only. Nothing here knows whether a marker sits inside a string literal or a comment; the
//!   scanner counts them blindly.

/// Ends a SAS statement.
pub const STATEMENT_TERMINATOR: char = ';';

/// Opens a block comment.
pub const COMMENT_OPEN: &str = "/*";

/// Closes a block comment.
pub const COMMENT_CLOSE: &str = "*/";

pub const OPEN_PAREN: char = '(';
pub const CLOSE_PAREN: char = ')';
pub const SINGLE_QUOTE: char = '\'';
pub const DOUBLE_QUOTE: char = '"';

/// Line prefixes that exempt a line from the terminator check.
///
/// `*` starts a statement comment, `%` starts a macro statement or call, `/*` starts a block comment.
pub const STATEMENT_EXEMPT_PREFIXES: &[&str] = &["*", "%", COMMENT_OPEN];

/// Whether a trimmed line is exempt from the missing-terminator check.
pub fn is_statement_exempt(trimmed: &str) -> bool {
    STATEMENT_EXEMPT_PREFIXES.iter().any(|p| trimmed.starts_with(p))
}
