//! Core data types shared by rules, reports and fix actions.
//!
//! - `source`: Source code location types (SourceContext, SourceLocation)

pub mod source;

pub use source::{SourceContext, SourceLocation};
