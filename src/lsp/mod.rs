//! SAS Language Server Protocol (LSP) implementation
//!
//! Provides IDE features:
//! - Real-time diagnostics (one per finding)
//! - Hover details on flagged lines

pub mod backend;
pub mod diagnostics;

pub use backend::SasLanguageServer;
