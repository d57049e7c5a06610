//! Heuristic structural scanner for SAS source text.
//!
//! The scanner makes one forward pass over the lines of a program and keeps a handful of running counters: parenthesis
//! balance, quote parity, comment nesting, `do`/`end` balance, and the most recent unterminated `proc`/`data` step.
//! Per-line findings are recorded as lines go by; whole-file findings are derived from the final state.
//!
//! ## Notes
//! - This is a heuristic, not a parser. It misses some real defects and reports some false positives (continuation
//!   lines without `;`, semicolons or comment markers inside string literals). That approximation is deliberate and
//!   stable: the same input always produces the same [`Report`].
//! - Quote parity and comment nesting are toggles, so two independent odd lines cancel out.
//!
//! ## Examples
//! ```rust
//! use sascheck_syntax::{scan, CategoryId};
//!
//! let report = scan("data a;\n  x = 1\n run;");
//! let missing = report.get(CategoryId::MissingSemicolons);
//! assert_eq!(missing.len(), 1);
//! assert_eq!(missing[0].line(), Some(2));
//! assert!(report.get(CategoryId::MissingRunQuit).is_empty());
//! ```

pub mod config;
pub mod diagnostics;
pub mod report;
pub mod scanner;
pub mod source;

pub use config::ScanConfig;
pub use diagnostics::{FindingDiagnostic, ScanError, finding_message, help_for};
pub use report::{FileIssue, Finding, LineFinding, Report};
pub use sascheck_core::lang::categories::{CategoryId, CategoryScope};
pub use scanner::{Scanner, decode, scan, scan_bytes, scan_bytes_with_config, scan_with_config};
pub use source::{SourceLine, SourceLines};
