//! Define the fixed set of finding categories.
//!
//! Every report carries all seven categories, always in the order of [`CategoryId::ALL`]. Renderers use the registry
//! for headings so the identifier-to-title conversion lives in one place.
//!
//! ## Examples
//! ```rust
//! use sascheck_core::lang::categories::{self, CategoryId, CategoryScope};
//!
//! assert_eq!(categories::as_str(CategoryId::LongLines), "long_lines");
//! assert_eq!(categories::heading(CategoryId::LongLines), "Long Lines");
//! assert_eq!(categories::scope(CategoryId::LongLines), CategoryScope::PerLine);
//! ```

/// Stable identifier for every finding category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CategoryId {
    MissingSemicolons,
    UnmatchedParentheses,
    UnmatchedQuotes,
    UnclosedComments,
    UnmatchedDoEnd,
    MissingRunQuit,
    LongLines,
}

impl CategoryId {
    /// Number of categories.
    pub const COUNT: usize = 7;

    /// All categories in canonical report order.
    pub const ALL: [CategoryId; Self::COUNT] = [
        CategoryId::MissingSemicolons,
        CategoryId::UnmatchedParentheses,
        CategoryId::UnmatchedQuotes,
        CategoryId::UnclosedComments,
        CategoryId::UnmatchedDoEnd,
        CategoryId::MissingRunQuit,
        CategoryId::LongLines,
    ];

    /// Position of this category in [`CategoryId::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for CategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(as_str(*self))
    }
}

/// Whether a category reports individual lines or one summary for the whole input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoryScope {
    /// One finding per offending line, in line order.
    PerLine,
    /// At most one summary finding, computed after the last line.
    WholeFile,
}

/// Metadata for a category.
#[derive(Debug, Clone, Copy)]
pub struct CategoryInfo {
    pub id: CategoryId,
    /// snake_case identifier used as report key and diagnostic code.
    pub canonical: &'static str,
    /// Human-readable title for rendered output.
    pub heading: &'static str,
    pub scope: CategoryScope,
}

/// Registry of all categories, in canonical order.
pub const CATEGORIES: &[CategoryInfo] = &[
    info(
        CategoryId::MissingSemicolons,
        "missing_semicolons",
        "Missing Semicolons",
        CategoryScope::PerLine,
    ),
    info(
        CategoryId::UnmatchedParentheses,
        "unmatched_parentheses",
        "Unmatched Parentheses",
        CategoryScope::WholeFile,
    ),
    info(
        CategoryId::UnmatchedQuotes,
        "unmatched_quotes",
        "Unmatched Quotes",
        CategoryScope::WholeFile,
    ),
    info(
        CategoryId::UnclosedComments,
        "unclosed_comments",
        "Unclosed Comments",
        CategoryScope::WholeFile,
    ),
    info(
        CategoryId::UnmatchedDoEnd,
        "unmatched_do_end",
        "Unmatched Do End",
        CategoryScope::WholeFile,
    ),
    info(
        CategoryId::MissingRunQuit,
        "missing_run_quit",
        "Missing Run Quit",
        CategoryScope::WholeFile,
    ),
    info(CategoryId::LongLines, "long_lines", "Long Lines", CategoryScope::PerLine),
];

/// Full metadata.
pub fn info_for(id: CategoryId) -> &'static CategoryInfo {
    &CATEGORIES[id.index()]
}

/// snake_case identifier.
pub fn as_str(id: CategoryId) -> &'static str {
    info_for(id).canonical
}

/// Human-readable heading.
pub fn heading(id: CategoryId) -> &'static str {
    info_for(id).heading
}

pub fn scope(id: CategoryId) -> CategoryScope {
    info_for(id).scope
}

/// Lookup by snake_case identifier (case-sensitive).
pub fn from_str(s: &str) -> Option<CategoryId> {
    CATEGORIES.iter().find(|c| c.canonical == s).map(|c| c.id)
}

const fn info(id: CategoryId, canonical: &'static str, heading: &'static str, scope: CategoryScope) -> CategoryInfo {
    CategoryInfo {
        id,
        canonical,
        heading,
        scope,
    }
}
