//! Classifies a comment group against the starred-block style.
//!
//! Line groups are always violations. A block comment is checked for three
//! independent problems, first failure wins:
//!
//! 1. spacing, for single-line blocks: `/* text */` needs whitespace on both sides
//! 2. star prefix, for multi-line blocks: every non-blank line starts with `*`
//! 3. offset, for multi-line blocks: the closing ` */` sits one column inside
//!    the opener and every interior line is indented like the closing line

use crate::core::comments::grouper::CommentGroup;
use crate::core::tokens::{CommentKind, CommentToken, is_js_whitespace, split_lines};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Classification {
    Valid,
    /// A single `//` comment.
    NoLine,
    /// Several adjacent `//` comments.
    NoLineMultiple,
    MissingStar,
    InvalidOffset,
    InvalidSpacing,
}

impl Classification {
    pub fn is_valid(&self) -> bool {
        matches!(self, Classification::Valid)
    }

    /// Stable identifier used in reports.
    pub fn id(&self) -> &'static str {
        match self {
            Classification::Valid => "valid",
            Classification::NoLine => "no-line",
            Classification::NoLineMultiple => "no-line-multiple",
            Classification::MissingStar => "missing-star",
            Classification::InvalidOffset => "invalid-offset",
            Classification::InvalidSpacing => "invalid-spacing",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Classification::Valid => "Comment follows the starred-block style",
            Classification::NoLine => "Expected a starred block comment instead of a line comment",
            Classification::NoLineMultiple => {
                "Expected a starred block comment instead of multiple-line comments"
            }
            Classification::MissingStar => {
                "Expected a '*' symbol at the start of each line of the starred-block comment"
            }
            Classification::InvalidOffset => {
                "Expected all lines to be aligned with the start of the comment"
            }
            Classification::InvalidSpacing => {
                "Expected space both after '/*' and before '*/' in comment"
            }
        }
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

pub fn classify(group: &CommentGroup<'_>) -> Classification {
    match group.kind() {
        CommentKind::Line if group.len() > 1 => Classification::NoLineMultiple,
        CommentKind::Line => Classification::NoLine,
        CommentKind::Block => classify_block(group.first()),
    }
}

pub fn classify_block(comment: &CommentToken) -> Classification {
    if !comment.is_multiline() {
        if has_invalid_spacing(&comment.text) {
            return Classification::InvalidSpacing;
        }
        return Classification::Valid;
    }

    if has_missing_star(&comment.text) {
        Classification::MissingStar
    } else if has_invalid_offset(comment) {
        Classification::InvalidOffset
    } else {
        Classification::Valid
    }
}

/// `/*text */` and `/* text*/` are both invalid.
pub fn has_invalid_spacing(text: &str) -> bool {
    !text.starts_with(is_js_whitespace) || !text.ends_with(is_js_whitespace)
}

pub fn has_missing_star(text: &str) -> bool {
    split_lines(text).iter().any(|line| {
        let line = line.trim();
        !line.is_empty() && !line.starts_with('*')
    })
}

pub fn has_invalid_offset(comment: &CommentToken) -> bool {
    if comment.end.column != comment.start.column + 3 {
        return true;
    }

    let lines = split_lines(&comment.text);
    let Some((last, rest)) = lines.split_last() else {
        return false;
    };
    let expected = leading_whitespace(last);

    rest.iter()
        .skip(1)
        .any(|line| leading_whitespace(line) != expected)
}

fn leading_whitespace(line: &str) -> usize {
    line.chars().take_while(|c| is_js_whitespace(*c)).count()
}
