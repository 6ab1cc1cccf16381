use anyhow::Result;

use super::super::{
    args::CheckCommand,
    exit_status::ExitStatus,
    report::{self, print_parse_warning, print_success},
};
use crate::{
    core::CheckContext,
    issues::Issue,
    rules::{check_no_line_comments_issues, check_parse_error_issues},
};

/// Collect every issue of one run, sorted for reporting.
pub fn collect_issues(ctx: &CheckContext) -> Vec<Issue> {
    let mut issues: Vec<Issue> = check_no_line_comments_issues(ctx)
        .into_iter()
        .map(Issue::CommentStyle)
        .collect();
    issues.extend(check_parse_error_issues(ctx).into_iter().map(Issue::ParseError));
    issues.sort();
    issues
}

pub fn check(cmd: CheckCommand, verbose: bool) -> Result<ExitStatus> {
    let ctx = CheckContext::new(&cmd.common)?;
    let issues = collect_issues(&ctx);

    if issues.is_empty() {
        print_success(ctx.files.len());
    } else {
        report::report(&issues);
    }

    print_parse_warning(ctx.parsed_files_errors().len(), verbose);

    Ok(ExitStatus::for_issues(&issues))
}
