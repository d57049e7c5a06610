#![forbid(unsafe_code)]
//! Heuristic structural checker for SAS programs
//!
//! The scanner itself lives in `sascheck_syntax`. This crate provides the tooling around it: the command-line
//! interface, report renderers, and a language server.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.

pub mod cli;
pub mod lsp;
pub mod render;

pub use render::{OutputFormat, RenderError, render};
pub use sascheck_syntax::{CategoryId, Finding, Report, ScanConfig, ScanError, scan, scan_bytes, scan_with_config};
