use anyhow::{Result, anyhow};
use std::path::Path;
use std::sync::Arc;
use swc_common::{
    FileName, Globals, SourceMap,
    comments::{CommentKind as SwcCommentKind, SingleThreadedComments},
};
use swc_ecma_parser::{EsSyntax, Parser, StringInput, Syntax, TsSyntax};

use crate::core::tokens::{CommentKind, RawComment, SourceTokens, Span};

const BOM: char = '\u{feff}';

/// A parsed JS/TS file: its path and comment token stream.
#[derive(Debug, Clone)]
pub struct ParsedSource {
    pub file_path: String,
    /// Token stream over the file text without its byte order mark.
    pub tokens: SourceTokens,
    /// Bytes stripped from the start of the file (a UTF-8 BOM, or nothing).
    /// Add it to a token span to address the file on disk.
    pub bom_len: usize,
}

/// Pick the swc syntax for a file from its extension.
///
/// `.ts` files are parsed without JSX so that `<T>expr` assertions and generic
/// arrow functions keep working.
pub fn syntax_for_path(file_path: &str) -> Syntax {
    match Path::new(file_path).extension().and_then(|e| e.to_str()) {
        Some("ts" | "mts" | "cts") => Syntax::Typescript(TsSyntax::default()),
        Some("tsx") => Syntax::Typescript(TsSyntax {
            tsx: true,
            ..Default::default()
        }),
        _ => Syntax::Es(EsSyntax {
            jsx: true,
            ..Default::default()
        }),
    }
}

/// Parse a JS/TS source string and collect its comments.
///
/// Accepts a shared SourceMap for thread-safe parallel parsing. A leading
/// BOM is removed before parsing so spans and text share one coordinate space.
pub fn parse_source(
    code: String,
    file_path: &str,
    source_map: Arc<SourceMap>,
) -> Result<ParsedSource> {
    use swc_common::GLOBALS;

    GLOBALS.set(&Globals::new(), || {
        let bom_len = if code.starts_with(BOM) { BOM.len_utf8() } else { 0 };
        let text = code[bom_len..].to_string();
        let source_file =
            source_map.new_source_file(FileName::Real(file_path.into()).into(), text.clone());
        let base = source_file.start_pos.0;

        let comments = SingleThreadedComments::default();
        let mut parser = Parser::new(
            syntax_for_path(file_path),
            StringInput::from(&*source_file),
            Some(&comments),
        );

        parser
            .parse_module()
            .map_err(|e| anyhow!("Failed to parse {}: {:?}", file_path, e))?;

        // Extract comments immediately (before SingleThreadedComments drops)
        let (leading, trailing) = comments.borrow_all();
        let raw: Vec<RawComment> = leading
            .values()
            .chain(trailing.values())
            .flatten()
            .map(|cmt| RawComment {
                kind: match cmt.kind {
                    SwcCommentKind::Line => CommentKind::Line,
                    SwcCommentKind::Block => CommentKind::Block,
                },
                span: Span::new(
                    (cmt.span.lo.0 - base) as usize,
                    (cmt.span.hi.0 - base) as usize,
                ),
            })
            .collect();

        Ok(ParsedSource {
            file_path: file_path.to_string(),
            tokens: SourceTokens::new(text, raw),
            bom_len,
        })
    })
}
