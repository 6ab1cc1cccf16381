//! Core analysis engine.
//!
//! ## Module Structure
//!
//! - `tokens`: Comment token model and the `TokenStream` seam
//! - `parsers`: swc-based source parsing into a `TokenStream`
//! - `comments`: Ignore/own-line filtering, grouping, validation and synthesis
//! - `options`: Options of the no-line-comments rule
//! - `data`: Source locations for reports
//! - `file_scanner`: Source file discovery
//! - `context`: Per-run `CheckContext`

pub mod comments;
pub mod context;
pub mod data;
pub mod file_scanner;
pub mod options;
pub mod parsers;
pub mod tokens;

pub use context::CheckContext;
pub use data::{SourceContext, SourceLocation};
