use crate::core::tokens::{CommentToken, PrecedingToken};

/// True when no token (code or comment) precedes the comment on its start line.
///
/// Trailing comments such as `foo(); // note` are never checked.
pub fn is_own_line(comment: &CommentToken, before: Option<&PrecedingToken>) -> bool {
    before.is_none_or(|token| token.end.line < comment.start.line)
}
