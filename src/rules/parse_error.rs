//! Parse error reporting.
//!
//! Files that fail to read or parse are skipped by every other rule and
//! reported here instead.

use crate::{core::CheckContext, issues::ParseErrorIssue};

pub fn check_parse_error_issues(ctx: &CheckContext) -> Vec<ParseErrorIssue> {
    // Parsing fills the error list as a side effect.
    ctx.parsed_files();
    ctx.parsed_files_errors().clone()
}
