//! Comment normalization engine.
//!
//! Stages, in the order comments flow through them:
//!
//! - `ignore`: drops tool directives and user-ignored comments
//! - `own_line`: drops comments that follow another token on their line
//! - `grouper`: folds adjacent `//` comments into one group
//! - `validator`: classifies each group
//! - `synthesizer`: renders the canonical replacement for a group

pub mod grouper;
pub mod ignore;
pub mod own_line;
pub mod synthesizer;
pub mod validator;

pub use grouper::{CommentGroup, GroupingDecision, group_comments, grouping_decision};
pub use ignore::should_ignore;
pub use own_line::is_own_line;
pub use synthesizer::synthesize;
pub use validator::{Classification, classify};

use crate::core::options::RuleOptions;
use crate::core::tokens::TokenStream;

/// Indices of the comments that take part in grouping, in source order.
///
/// Filtering happens before grouping, so an ignored comment neither joins a
/// group nor hides the gap it leaves behind.
pub fn candidate_comments<S: TokenStream>(stream: &S, options: &RuleOptions) -> Vec<usize> {
    stream
        .comments()
        .iter()
        .enumerate()
        .filter(|(_, comment)| !should_ignore(comment, &options.ignore))
        .filter(|(index, comment)| is_own_line(comment, stream.token_before(*index).as_ref()))
        .map(|(index, _)| index)
        .collect()
}
