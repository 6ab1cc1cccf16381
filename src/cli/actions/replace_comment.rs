//! ReplaceComment action - rewrites comment groups as starred blocks.

use super::{operation::Operation, traits::Action};
use crate::issues::CommentStyleIssue;

/// Replaces each fixable comment group with its synthesized form.
///
/// Issues without a fix are skipped.
pub struct ReplaceComment;

impl Action<CommentStyleIssue> for ReplaceComment {
    fn to_operations(issues: &[CommentStyleIssue]) -> Vec<Operation> {
        issues
            .iter()
            .filter_map(|issue| {
                let fix = issue.fix.as_ref()?;
                Some(Operation::ReplaceRange {
                    file_path: issue.context.file_path().to_string(),
                    line: issue.context.line(),
                    range: fix.range,
                    original: fix.original.clone(),
                    text: fix.replacement.clone(),
                })
            })
            .collect()
    }
}
