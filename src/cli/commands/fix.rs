//! Fix command - rewrite reported comments as starred blocks.
//!
//! Only issues carrying a fix are rewritten. Fixes are computed when the
//! `noLineComments.fixable` option is on; a group whose content cannot be
//! safely re-wrapped (empty, or containing `*/`) has no fix and is reported
//! instead.
//!
//! Use `--apply` to actually rewrite files (default is dry-run mode).

use std::collections::HashSet;

use anyhow::Result;
use colored::Colorize;

use super::super::{
    actions::{Action, ReplaceComment},
    args::FixCommand,
    exit_status::ExitStatus,
    report::{self, print_parse_warning, print_success},
};
use crate::{
    config::CONFIG_FILE_NAME,
    core::CheckContext,
    issues::{CommentStyleIssue, Issue},
    rules::{check_no_line_comments_issues, check_parse_error_issues},
};

pub fn fix(cmd: FixCommand, verbose: bool) -> Result<ExitStatus> {
    let ctx = CheckContext::new(&cmd.common)?;
    let apply = cmd.apply;

    let (mut fixable, mut unfixable): (Vec<CommentStyleIssue>, Vec<CommentStyleIssue>) =
        check_no_line_comments_issues(&ctx)
            .into_iter()
            .partition(|issue| issue.fix.is_some());
    fixable.sort_by(|a, b| a.context.location.cmp(&b.context.location));
    unfixable.sort_by(|a, b| a.context.location.cmp(&b.context.location));

    let parse_errors = check_parse_error_issues(&ctx);

    if !ctx.rule_options().fixable && !unfixable.is_empty() {
        println!(
            "Note: fixes are disabled; set {} in {} to enable them.",
            "\"noLineComments\": { \"fixable\": true }".cyan(),
            CONFIG_FILE_NAME
        );
        println!();
    }

    // Issues that need manual changes are reported like `check` does.
    let mut remaining: Vec<Issue> = unfixable.iter().cloned().map(Issue::CommentStyle).collect();
    remaining.extend(parse_errors.iter().cloned().map(Issue::ParseError));
    report::report(&remaining);

    if !fixable.is_empty() {
        let file_count = fixable
            .iter()
            .map(|issue| issue.context.file_path())
            .collect::<HashSet<_>>()
            .len();

        if apply {
            let stats = ReplaceComment::run(&fixable)?;
            println!(
                "{} {} comment(s) in {} file(s).",
                "Rewrote".green().bold(),
                stats.changes_applied,
                stats.files_modified
            );
            if stats.skipped > 0 {
                println!(
                    "  - skipped: {} comment(s) changed since analysis or overlapping",
                    stats.skipped
                );
            }
        } else {
            ReplaceComment::preview(&fixable);
            println!(
                "{} {} comment(s) in {} file(s).",
                "Would rewrite".yellow().bold(),
                fixable.len(),
                file_count
            );
            println!("Run with {} to rewrite these comments.", "--apply".cyan());
        }
    } else if remaining.is_empty() {
        print_success(ctx.files.len());
    }

    print_parse_warning(parse_errors.len(), verbose);

    // In dry-run mode pending fixes count as issues, so the run signals that
    // there is work to do.
    if !parse_errors.is_empty() {
        Ok(ExitStatus::Error)
    } else if !unfixable.is_empty() || (!apply && !fixable.is_empty()) {
        Ok(ExitStatus::Failure)
    } else {
        Ok(ExitStatus::Success)
    }
}
