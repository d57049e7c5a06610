//! SAS vocabulary registries.
//!
//! Callers work with stable IDs (`KeywordId`, `CategoryId`) and look up spellings and metadata via registry tables,
//! instead of comparing string literals at every call site.
//!
//! ## Examples
//! ```rust
//! use sascheck_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("PROC"), Some(KeywordId::Proc));
//! assert_eq!(keywords::as_str(KeywordId::Proc), "proc");
//! ```

pub mod categories;
pub mod keywords;
pub mod markers;
