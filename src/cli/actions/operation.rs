//! Low-level file operations produced by actions.

use std::{fs, io::Write};

use anyhow::{Context, Result};
use colored::Colorize;

use crate::core::tokens::Span;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// Replace `original` at `range` of a source file with `text`.
    ReplaceRange {
        file_path: String,
        /// 1-based line of `range.start`, for previews.
        line: usize,
        range: Span,
        original: String,
        text: String,
    },
}

/// Outcome of applying the operations of one file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FileApplyResult {
    pub applied: usize,
    pub skipped: usize,
}

impl Operation {
    pub fn file_path(&self) -> &str {
        match self {
            Operation::ReplaceRange { file_path, .. } => file_path,
        }
    }

    /// Print the change this operation would make.
    pub fn preview(&self) {
        let _ = self.preview_to(&mut std::io::stdout().lock());
    }

    pub fn preview_to<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        let Operation::ReplaceRange {
            file_path,
            line,
            original,
            text,
            ..
        } = self;

        writeln!(writer, "{}:{}:", file_path.bold(), line)?;
        for before in original.lines() {
            writeln!(writer, "  {}", format!("- {}", before).red())?;
        }
        for after in text.lines() {
            writeln!(writer, "  {}", format!("+ {}", after).green())?;
        }
        writeln!(writer)
    }

    /// Apply replacements to `content`, highest offset first so earlier ranges
    /// stay valid.
    ///
    /// A replacement is skipped when it overlaps one already applied or when
    /// the text at its range no longer matches `original`.
    pub fn apply_replacements(content: &mut String, ops: &[&Operation]) -> FileApplyResult {
        let mut ordered: Vec<&Operation> = ops.to_vec();
        ordered.sort_by_key(|op| match op {
            Operation::ReplaceRange { range, .. } => std::cmp::Reverse(range.start),
        });

        let mut result = FileApplyResult::default();
        let mut floor = content.len();

        for op in ordered {
            let Operation::ReplaceRange {
                range,
                original,
                text,
                ..
            } = op;

            let matches = content.get(range.range()) == Some(original.as_str());
            if range.end > floor || !matches {
                result.skipped += 1;
                continue;
            }

            content.replace_range(range.range(), text);
            floor = range.start;
            result.applied += 1;
        }

        result
    }

    /// Apply all operations of one file and write it back if anything changed.
    pub fn apply_to_file(file_path: &str, ops: &[&Operation]) -> Result<FileApplyResult> {
        let mut content = fs::read_to_string(file_path)
            .with_context(|| format!("Failed to read file: {}", file_path))?;

        let result = Self::apply_replacements(&mut content, ops);

        if result.applied > 0 {
            fs::write(file_path, content)
                .with_context(|| format!("Failed to write file: {}", file_path))?;
        }

        Ok(result)
    }
}
