//! Comment token model shared by every stage of the comment engine.
//!
//! The engine never tokenizes source text itself. A host hands it a
//! [`TokenStream`]: the source text, every comment in source order, and a way to
//! find the token (code or comment) directly before a given comment.
//! [`SourceTokens`] is the stream built from a parsed file.

use std::ops::Range;

/// Lexical kind of a comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommentKind {
    /// `// comment`
    Line,
    /// `/* comment */`, possibly spanning several physical lines.
    Block,
}

/// Line/column position. Lines are 1-based, columns are 0-based char offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// Half-open byte range into the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// The same range moved `by` bytes to the right.
    pub fn shifted(&self, by: usize) -> Self {
        Self::new(self.start + by, self.end + by)
    }
}

/// One lexical comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentToken {
    pub kind: CommentKind,
    /// Content between the delimiters.
    pub text: String,
    /// Range covering the delimiters as well.
    pub span: Span,
    pub start: Position,
    pub end: Position,
}

impl CommentToken {
    /// True if the comment body spans more than one physical line.
    pub fn is_multiline(&self) -> bool {
        self.text.contains(is_line_break)
    }
}

/// The token right before a comment, comments included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrecedingToken {
    pub end: Position,
    /// Index into [`TokenStream::comments`] when the preceding token is a comment.
    pub comment: Option<usize>,
}

/// Read-only view of a tokenized source, consumed by the engine.
pub trait TokenStream {
    fn source_text(&self) -> &str;

    /// All comments, in source order.
    fn comments(&self) -> &[CommentToken];

    /// The token before the comment at `index`, or `None` at the start of the file.
    fn token_before(&self, index: usize) -> Option<PrecedingToken>;

    /// Text between the start of the comment's line and its opening delimiter.
    fn indent_of(&self, comment: &CommentToken) -> &str {
        let before = &self.source_text()[..comment.span.start];
        let line_start = before.rfind(is_line_break).map_or(0, |i| {
            i + before[i..].chars().next().map_or(1, char::len_utf8)
        });
        &before[line_start..]
    }
}

// ============================================================
// Line breaks
// ============================================================

/// Characters that terminate a line (`\r\n` is handled as a pair by callers).
pub fn is_line_break(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// Split text into physical lines on `\r\n`, `\r`, `\n`, U+2028 and U+2029.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if !is_line_break(c) {
            continue;
        }
        lines.push(&text[start..i]);
        let mut next = i + c.len_utf8();
        if c == '\r'
            && let Some((j, '\n')) = chars.peek().copied()
        {
            chars.next();
            next = j + 1;
        }
        start = next;
    }

    lines.push(&text[start..]);
    lines
}

/// ECMAScript WhiteSpace and LineTerminator code points.
pub fn is_js_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\u{b}' | '\u{c}' | ' ' | '\u{a0}' | '\u{feff}'
            | '\u{1680}' | '\u{2000}'..='\u{200a}' | '\u{202f}' | '\u{205f}' | '\u{3000}'
    ) || is_line_break(c)
}

// ============================================================
// Line index
// ============================================================

/// Maps byte offsets to [`Position`]s.
#[derive(Debug, Clone)]
pub struct LineIndex {
    line_starts: Vec<usize>,
}

impl LineIndex {
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![0];
        let mut chars = text.char_indices().peekable();

        while let Some((i, c)) = chars.next() {
            if !is_line_break(c) {
                continue;
            }
            if c == '\r' && matches!(chars.peek(), Some((_, '\n'))) {
                continue;
            }
            line_starts.push(i + c.len_utf8());
        }

        Self { line_starts }
    }

    pub fn position(&self, text: &str, offset: usize) -> Position {
        let line = self.line_starts.partition_point(|&s| s <= offset).max(1);
        let start = self.line_starts[line - 1];
        let column = text[start..offset].chars().count();
        Position::new(line, column)
    }

    /// Full text of a 1-based line, without its terminator.
    pub fn line_text<'a>(&self, text: &'a str, line: usize) -> &'a str {
        let Some(&start) = self.line_starts.get(line.wrapping_sub(1)) else {
            return "";
        };
        let end = self.line_starts.get(line).copied().unwrap_or(text.len());
        text[start..end].trim_end_matches(is_line_break)
    }
}

// ============================================================
// Source tokens
// ============================================================

/// A comment as reported by a tokenizer: its kind and byte range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawComment {
    pub kind: CommentKind,
    pub span: Span,
}

/// [`TokenStream`] over a source text and its comment ranges.
///
/// Code tokens are not stored: any non-whitespace text outside a comment is
/// part of some code token, so the token before a comment is found by skipping
/// whitespace backwards from the comment start.
#[derive(Debug, Clone)]
pub struct SourceTokens {
    text: String,
    line_index: LineIndex,
    comments: Vec<CommentToken>,
    preceding: Vec<Option<PrecedingToken>>,
}

impl SourceTokens {
    pub fn new(text: impl Into<String>, mut raw: Vec<RawComment>) -> Self {
        let text = text.into();
        let line_index = LineIndex::new(&text);

        raw.sort_by_key(|c| c.span.start);
        raw.dedup_by_key(|c| c.span.start);

        let comments: Vec<CommentToken> = raw
            .iter()
            .map(|c| {
                let Span { start, end } = c.span;
                let body = match c.kind {
                    CommentKind::Line => &text[start + 2..end],
                    CommentKind::Block => &text[start + 2..end.saturating_sub(2).max(start + 2)],
                };
                CommentToken {
                    kind: c.kind,
                    text: body.to_string(),
                    span: c.span,
                    start: line_index.position(&text, start),
                    end: line_index.position(&text, end),
                }
            })
            .collect();

        let preceding = (0..comments.len())
            .map(|i| find_preceding(&text, &line_index, &comments, i))
            .collect();

        Self {
            text,
            line_index,
            comments,
            preceding,
        }
    }

    /// Text of a 1-based source line, for report context.
    pub fn line_text(&self, line: usize) -> &str {
        self.line_index.line_text(&self.text, line)
    }
}

impl TokenStream for SourceTokens {
    fn source_text(&self) -> &str {
        &self.text
    }

    fn comments(&self) -> &[CommentToken] {
        &self.comments
    }

    fn token_before(&self, index: usize) -> Option<PrecedingToken> {
        self.preceding.get(index).copied().flatten()
    }
}

fn find_preceding(
    text: &str,
    line_index: &LineIndex,
    comments: &[CommentToken],
    index: usize,
) -> Option<PrecedingToken> {
    let start = comments[index].span.start;
    let end = text[..start].trim_end_matches(is_js_whitespace).len();

    if end == 0 {
        return None;
    }

    // Trailing whitespace inside a line comment belongs to the comment.
    if let Some(prev) = index.checked_sub(1).map(|i| &comments[i])
        && end <= prev.span.end
    {
        return Some(PrecedingToken {
            end: prev.end,
            comment: Some(index - 1),
        });
    }

    Some(PrecedingToken {
        end: line_index.position(text, end),
        comment: None,
    })
}
