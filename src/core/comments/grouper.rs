//! Folds filtered comments into groups that read as one logical comment.
//!
//! Consecutive `//` comments on adjacent lines form one group, but only when
//! nothing sits between them in the real token stream: a blank line, a code
//! token or an ignored comment all break the run. Block comments always stand
//! alone.

use crate::core::tokens::{CommentKind, CommentToken, PrecedingToken, Span, TokenStream};

/// An ordered, non-empty run of comments treated as one comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentGroup<'a> {
    comments: Vec<&'a CommentToken>,
}

impl<'a> CommentGroup<'a> {
    pub fn new(first: &'a CommentToken) -> Self {
        Self {
            comments: vec![first],
        }
    }

    pub fn comments(&self) -> &[&'a CommentToken] {
        &self.comments
    }

    pub fn first(&self) -> &'a CommentToken {
        self.comments[0]
    }

    pub fn last(&self) -> &'a CommentToken {
        self.comments[self.comments.len() - 1]
    }

    /// The first member decides how the whole group is validated.
    pub fn kind(&self) -> CommentKind {
        self.first().kind
    }

    pub fn len(&self) -> usize {
        self.comments.len()
    }

    /// Always false; groups are created with one member.
    pub fn is_empty(&self) -> bool {
        self.comments.is_empty()
    }

    /// From the first member's opening delimiter to the last member's end.
    pub fn span(&self) -> Span {
        Span::new(self.first().span.start, self.last().span.end)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupingDecision {
    AppendToPrevious,
    StartNew,
}

/// Decide whether `current` continues the group holding `previous`.
///
/// `previous` is the preceding candidate with its index in the full comment
/// list; `before` is the token directly before `current` in the full stream.
pub fn grouping_decision(
    previous: Option<(usize, &CommentToken)>,
    current: &CommentToken,
    before: Option<&PrecedingToken>,
) -> GroupingDecision {
    let Some((prev_index, prev)) = previous else {
        return GroupingDecision::StartNew;
    };

    let adjacent = before.is_some_and(|token| {
        token.comment == Some(prev_index) && token.end.line + 1 == current.start.line
    });

    if prev.kind == CommentKind::Line && current.kind == CommentKind::Line && adjacent {
        GroupingDecision::AppendToPrevious
    } else {
        GroupingDecision::StartNew
    }
}

/// Group the candidate comments (indices into `stream.comments()`, in source order).
pub fn group_comments<'a, S: TokenStream>(
    stream: &'a S,
    candidates: &[usize],
) -> Vec<CommentGroup<'a>> {
    let comments = stream.comments();
    let mut groups: Vec<CommentGroup<'a>> = Vec::new();
    let mut previous: Option<usize> = None;

    for &index in candidates {
        let current = &comments[index];
        let before = stream.token_before(index);
        let decision = grouping_decision(
            previous.map(|i| (i, &comments[i])),
            current,
            before.as_ref(),
        );

        match (decision, groups.last_mut()) {
            (GroupingDecision::AppendToPrevious, Some(group)) => group.comments.push(current),
            _ => groups.push(CommentGroup::new(current)),
        }
        previous = Some(index);
    }

    groups
}
