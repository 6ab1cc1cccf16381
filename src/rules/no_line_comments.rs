//! No-line-comments rule.
//!
//! Requires every own-line comment to be a starred block:
//!
//! ```text
//! /**
//!  * like this
//!  */
//! ```
//!
//! `check_comments` is the pure engine entry point working on any
//! [`TokenStream`]; the other functions turn its diagnostics into issues for
//! parsed files.

use rayon::prelude::*;

use crate::{
    core::{
        CheckContext, SourceContext, SourceLocation,
        comments::{
            Classification, CommentGroup, candidate_comments, classify, group_comments,
            synthesize,
        },
        options::RuleOptions,
        parsers::source::ParsedSource,
        tokens::{CommentKind, Position, Span, TokenStream},
    },
    issues::{CommentFix, CommentStyleIssue},
};

/// Where a diagnostic points in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportRange {
    pub start: Position,
    pub end: Position,
}

/// One non-conforming comment group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub classification: Classification,
    pub report_range: ReportRange,
    /// From the first member's opening delimiter to the last member's end.
    pub fix_range: Span,
    /// Replacement for `fix_range`; absent unless fixes are enabled and safe.
    pub fix_text: Option<String>,
}

/// Run the rule over one token stream.
///
/// Every group that is not `Valid` yields exactly one diagnostic, in source
/// order.
pub fn check_comments<S: TokenStream>(stream: &S, options: &RuleOptions) -> Vec<Diagnostic> {
    let candidates = candidate_comments(stream, options);

    group_comments(stream, &candidates)
        .iter()
        .filter_map(|group| {
            let classification = classify(group);
            if classification.is_valid() {
                return None;
            }

            let fix_text = if options.fixable {
                synthesize(group, stream.indent_of(group.first()), options)
            } else {
                None
            };

            Some(Diagnostic {
                classification,
                report_range: report_range(group),
                fix_range: group.span(),
                fix_text,
            })
        })
        .collect()
}

/// Block problems point at the opening delimiter, line groups cover every member.
fn report_range(group: &CommentGroup<'_>) -> ReportRange {
    let start = group.first().start;
    let end = match group.kind() {
        CommentKind::Block => Position::new(start.line, start.column + 2),
        CommentKind::Line => group.last().end,
    };
    ReportRange { start, end }
}

/// Convert the diagnostics of one parsed file into issues.
pub fn comment_style_issues(parsed: &ParsedSource, options: &RuleOptions) -> Vec<CommentStyleIssue> {
    let tokens = &parsed.tokens;

    check_comments(tokens, options)
        .into_iter()
        .map(|diagnostic| {
            let start = diagnostic.report_range.start;
            let location = SourceLocation::new(&parsed.file_path, start.line, start.column + 1);
            // Fix ranges address the file on disk, which still carries any BOM.
            let fix = diagnostic.fix_text.map(|replacement| CommentFix {
                range: diagnostic.fix_range.shifted(parsed.bom_len),
                original: tokens.source_text()[diagnostic.fix_range.range()].to_string(),
                replacement,
            });

            CommentStyleIssue {
                context: SourceContext::new(location, tokens.line_text(start.line)),
                classification: diagnostic.classification,
                fix,
            }
        })
        .collect()
}

pub fn check_no_line_comments_issues(ctx: &CheckContext) -> Vec<CommentStyleIssue> {
    let options = ctx.rule_options();

    ctx.parsed_files()
        .par_iter()
        .flat_map_iter(|(_, parsed)| comment_style_issues(parsed, options))
        .collect()
}
