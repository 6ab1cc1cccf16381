//! Comments exempt from every style check.

use regex::Regex;
use std::sync::LazyLock;

use crate::core::options::IgnoreOptions;
use crate::core::tokens::CommentToken;

/// Tool directives (eslint, jshint, istanbul, ...) and triple-slash
/// `reference`/`amd-module` directives.
static DIRECTIVE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^\s*(?:eslint[- ]|jshint\s+|jslint\s+|istanbul\s+|globals?\s+|exported\s+|jscs|ts-prune\s+)|/\s?<(?:reference|amd).+",
    )
    .unwrap()
});

pub fn is_directive(text: &str) -> bool {
    DIRECTIVE_REGEX.is_match(text)
}

/// Whether the trimmed comment text starts with or contains a user pattern.
pub fn matches_user_pattern(text: &str, ignore: &IgnoreOptions) -> bool {
    let text = text.trim();
    ignore.starts_with.iter().any(|p| text.starts_with(p.as_str()))
        || ignore.includes.iter().any(|p| text.contains(p.as_str()))
}

pub fn should_ignore(comment: &CommentToken, ignore: &IgnoreOptions) -> bool {
    is_directive(&comment.text) || matches_user_pattern(&comment.text, ignore)
}
