//! Shared, pure vocabulary for the sascheck linter.
//!
//! This crate is intentionally small and dependency-free. It holds the canonical tables that both the scanner and the
//! presentation tooling (CLI, language server) consult:
//! - the SAS keywords that open and close blocks and steps,
//! - the markers that terminate statements or open comments, and
//! - the fixed set of finding categories with their headings.
//!
//! ## Notes
//!
//! - No IO, no global state, no scanner types. Everything here is `const` data plus lookups.

pub mod lang;
