//! Define the SAS keywords the scanner tracks.
//!
//! Only the handful of words that open or close a block (`do`/`end`) or a step (`proc`/`data` and `run`/`quit`) are
//! registered here. The scanner never tokenizes SAS; it only asks which of these words a line starts with.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **ASCII case-insensitive**, matching how SAS itself treats keywords.
//! - A keyword only counts as a whole word: `do;` and `DO i = 1 to 3;` start with `do`, `done = 1;` does not.
//!
//! ## Examples
//! ```rust
//! use sascheck_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("Run"), Some(KeywordId::Run));
//! assert_eq!(keywords::leading_keyword("data work.x;"), Some(KeywordId::Data));
//! assert_eq!(keywords::leading_keyword("dataset = 1;"), None);
//! ```

/// Stable identifier for every tracked keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordId {
    Do,
    End,
    Proc,
    Data,
    Run,
    Quit,
}

/// What a keyword does to the scanner's nesting state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordRole {
    /// Opens a `do` block.
    BlockOpen,
    /// Closes the innermost block.
    BlockClose,
    /// Starts a `proc` or `data` step.
    StepOpen,
    /// Terminates the current step.
    StepClose,
}

/// Metadata for a keyword.
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub id: KeywordId,
    pub canonical: &'static str,
    pub role: KeywordRole,
}

/// Registry of all tracked keywords.
pub const KEYWORDS: &[KeywordInfo] = &[
    info(KeywordId::Do, "do", KeywordRole::BlockOpen),
    info(KeywordId::End, "end", KeywordRole::BlockClose),
    info(KeywordId::Proc, "proc", KeywordRole::StepOpen),
    info(KeywordId::Data, "data", KeywordRole::StepOpen),
    info(KeywordId::Run, "run", KeywordRole::StepClose),
    info(KeywordId::Quit, "quit", KeywordRole::StepClose),
];

/// Canonical (lowercase) spelling.
pub fn as_str(id: KeywordId) -> &'static str {
    info_for(id).canonical
}

/// Role of the keyword in block/step tracking.
pub fn role(id: KeywordId) -> KeywordRole {
    info_for(id).role
}

/// Full metadata.
pub fn info_for(id: KeywordId) -> &'static KeywordInfo {
    match id {
        KeywordId::Do => &KEYWORDS[0],
        KeywordId::End => &KEYWORDS[1],
        KeywordId::Proc => &KEYWORDS[2],
        KeywordId::Data => &KEYWORDS[3],
        KeywordId::Run => &KEYWORDS[4],
        KeywordId::Quit => &KEYWORDS[5],
    }
}

/// Lookup by spelling, ignoring ASCII case.
///
/// ## Returns
/// - `Some(KeywordId)` if the whole of `s` is a tracked keyword.
/// - `None` otherwise.
pub fn from_str(s: &str) -> Option<KeywordId> {
    KEYWORDS
        .iter()
        .find(|k| k.canonical.eq_ignore_ascii_case(s))
        .map(|k| k.id)
}

/// Return the keyword a line starts with, if any.
///
/// The leading word is the longest prefix of word characters (alphanumerics and `_`) after any leading whitespace.
/// The line starts with a keyword only when that entire word is the keyword, so `end;` matches but `endsas;` does not.
pub fn leading_keyword(line: &str) -> Option<KeywordId> {
    let line = line.trim_start();
    let end = line
        .char_indices()
        .find(|&(_, c)| !is_word_char(c))
        .map_or(line.len(), |(i, _)| i);
    if end == 0 {
        return None;
    }
    from_str(&line[..end])
}

/// Word characters for whole-word keyword matching.
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

const fn info(id: KeywordId, canonical: &'static str, role: KeywordRole) -> KeywordInfo {
    KeywordInfo { id, canonical, role }
}
