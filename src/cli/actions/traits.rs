//! Action trait definition.
//!
//! Actions convert Issues into Operations. Each Action can be implemented
//! for multiple Issue types.

use std::collections::BTreeMap;

use anyhow::Result;

use super::operation::Operation;

/// Statistics from running an action.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionStats {
    /// Number of operations processed.
    pub processed: usize,
    /// Number of operations skipped (overlapping or stale ranges).
    pub skipped: usize,
    /// Number of changes actually applied to files.
    pub changes_applied: usize,
    /// Number of files modified.
    pub files_modified: usize,
}

impl std::ops::AddAssign for ActionStats {
    fn add_assign(&mut self, other: Self) {
        self.processed += other.processed;
        self.skipped += other.skipped;
        self.changes_applied += other.changes_applied;
        self.files_modified += other.files_modified;
    }
}

/// Action trait - converts Issues into Operations and executes them.
///
/// ```ignore
/// if apply {
///     ReplaceComment::run(&issues)?;
/// } else {
///     ReplaceComment::preview(&issues);
/// }
/// ```
pub trait Action<I> {
    /// Convert issues to low-level operations.
    fn to_operations(issues: &[I]) -> Vec<Operation>;

    /// Execute the action (modify files).
    fn run(issues: &[I]) -> Result<ActionStats> {
        let ops = Self::to_operations(issues);
        execute_operations(&ops)
    }

    /// Preview the action (dry-run mode).
    fn preview(issues: &[I]) {
        for op in Self::to_operations(issues) {
            op.preview();
        }
    }
}

/// Apply operations file by file, in path order.
pub(crate) fn execute_operations(ops: &[Operation]) -> Result<ActionStats> {
    let mut by_file: BTreeMap<&str, Vec<&Operation>> = BTreeMap::new();
    for op in ops {
        by_file.entry(op.file_path()).or_default().push(op);
    }

    let mut stats = ActionStats {
        processed: ops.len(),
        ..Default::default()
    };

    for (file_path, file_ops) in by_file {
        let result = Operation::apply_to_file(file_path, &file_ops)?;
        stats.changes_applied += result.applied;
        stats.skipped += result.skipped;
        if result.applied > 0 {
            stats.files_modified += 1;
        }
    }

    Ok(stats)
}
