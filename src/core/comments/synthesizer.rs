//! Renders a comment group in canonical starred-block form.

use crate::core::comments::grouper::CommentGroup;
use crate::core::options::RuleOptions;
use crate::core::tokens::{CommentKind, is_js_whitespace, split_lines};

/// Replacement text for `group`, delimiters included.
///
/// `indent` is the exact text before the group's first comment on its line; it
/// prefixes every line after the opener. Returns `None` when no safe fix exists:
/// the group has no content, or a content line contains `*/`.
pub fn synthesize(group: &CommentGroup<'_>, indent: &str, options: &RuleOptions) -> Option<String> {
    let lines = content_lines(group);

    if lines.is_empty() || lines.iter().any(|line| line.contains("*/")) {
        return None;
    }

    if lines.len() == 1 && options.single_line_to_single_line_block && is_single_line(group) {
        return Some(format!("/* {} */", lines[0].trim()));
    }

    let mut out = String::from("/**");
    for line in &lines {
        out.push('\n');
        out.push_str(indent);
        out.push_str(" *");
        if !line.starts_with(is_js_whitespace) {
            out.push(' ');
        }
        out.push_str(line);
    }
    out.push('\n');
    out.push_str(indent);
    out.push_str(" */");

    Some(out)
}

/// A lone `//` comment, or a block comment on one physical line.
fn is_single_line(group: &CommentGroup<'_>) -> bool {
    group.len() == 1 && (group.kind() == CommentKind::Line || !group.first().is_multiline())
}

/// Raw content lines of the group, without star prefixes, uniform leading
/// space, trailing whitespace or blank lines.
pub fn content_lines(group: &CommentGroup<'_>) -> Vec<String> {
    let raw: Vec<&str> = match group.kind() {
        CommentKind::Line => group.comments().iter().map(|c| c.text.as_str()).collect(),
        CommentKind::Block => split_lines(&group.first().text)
            .into_iter()
            .map(strip_star_prefix)
            .collect(),
    };

    let dedented = raw
        .iter()
        .filter(|line| !line.trim().is_empty())
        .all(|line| line.starts_with(' '));

    raw.into_iter()
        .map(|line| {
            let line = if dedented {
                line.strip_prefix(' ').unwrap_or(line)
            } else {
                line
            };
            line.trim_end_matches(is_js_whitespace)
        })
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Drop leading whitespace and any `*` prefix from a block comment line.
fn strip_star_prefix(line: &str) -> &str {
    line.trim_start_matches(is_js_whitespace)
        .trim_start_matches('*')
}
