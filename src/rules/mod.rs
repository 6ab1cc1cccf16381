//! Rule implementations for starlint.
//!
//! Each rule takes the `CheckContext` (or a single parsed file) and returns
//! its own issue type.
//!
//! ## Module Structure
//!
//! - `no_line_comments`: Starred-block comment style
//! - `parse_error`: Files that could not be read or parsed

pub mod no_line_comments;
pub mod parse_error;

pub use no_line_comments::{Diagnostic, ReportRange, check_comments, check_no_line_comments_issues};
pub use parse_error::check_parse_error_issues;
