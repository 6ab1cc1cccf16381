use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use colored::Colorize;
use glob::{Pattern, glob};
use walkdir::WalkDir;

use crate::config::TEST_FILE_PATTERNS;

/// Extensions of the JS/TS sources starlint checks.
pub const SOURCE_EXTENSIONS: &[&str] = &["js", "jsx", "mjs", "cjs", "ts", "tsx", "mts", "cts"];

/// Check if a pattern contains glob wildcards (* or ?).
/// Patterns without wildcards are treated as literal paths.
pub fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

/// Result of scanning files.
pub struct ScanResult {
    pub files: HashSet<String>,
    pub skipped_count: usize,
}

fn warn(verbose: bool, message: impl std::fmt::Display) {
    if verbose {
        eprintln!("{} {}", "warning:".bold().yellow(), message);
    }
}

/// Paths excluded from a scan: literal prefixes plus glob patterns.
struct IgnoreSet {
    prefixes: Vec<PathBuf>,
    patterns: Vec<Pattern>,
}

impl IgnoreSet {
    fn new(base_dir: &Path, ignores: &[String], ignore_test_files: bool, verbose: bool) -> Self {
        let mut prefixes = Vec::new();
        let mut patterns = Vec::new();

        for ignore in ignores {
            if !is_glob_pattern(ignore) {
                prefixes.push(base_dir.join(ignore));
                continue;
            }
            match Pattern::new(ignore) {
                Ok(pattern) => patterns.push(pattern),
                Err(e) => warn(verbose, format!("Invalid ignore pattern '{}': {}", ignore, e)),
            }
        }

        if ignore_test_files {
            patterns.extend(TEST_FILE_PATTERNS.iter().filter_map(|p| Pattern::new(p).ok()));
        }

        Self { prefixes, patterns }
    }

    fn is_ignored(&self, path: &Path) -> bool {
        self.prefixes.iter().any(|prefix| path.starts_with(prefix))
            || self
                .patterns
                .iter()
                .any(|pattern| pattern.matches_path(path))
    }
}

/// Directories (or files) to walk. An empty `includes` means the whole base dir.
fn scan_roots(base_dir: &Path, includes: &[String], verbose: bool) -> Vec<PathBuf> {
    if includes.is_empty() {
        return vec![base_dir.to_path_buf()];
    }

    let mut roots = Vec::new();
    for include in includes {
        let path = base_dir.join(include);
        if !is_glob_pattern(include) {
            if path.exists() {
                roots.push(path);
            } else {
                warn(verbose, format!("Include path does not exist: {}", path.display()));
            }
            continue;
        }

        match glob(&path.to_string_lossy()) {
            Ok(entries) => roots.extend(entries.flatten()),
            Err(e) => warn(verbose, format!("Invalid glob pattern '{}': {}", include, e)),
        }
    }
    roots
}

pub fn scan_files(
    base_dir: &str,
    includes: &[String],
    ignores: &[String],
    ignore_test_files: bool,
    verbose: bool,
) -> ScanResult {
    let base = Path::new(base_dir);
    let ignore_set = IgnoreSet::new(base, ignores, ignore_test_files, verbose);

    let mut files = HashSet::new();
    let mut skipped_count = 0;

    for root in scan_roots(base, includes, verbose) {
        let walker = WalkDir::new(root)
            .into_iter()
            .filter_entry(|entry| !ignore_set.is_ignored(entry.path()));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    skipped_count += 1;
                    warn(verbose, format!("Cannot access path: {}", e));
                    continue;
                }
            };

            if entry.file_type().is_file() && is_source_file(entry.path()) {
                files.insert(entry.path().to_string_lossy().into_owned());
            }
        }
    }

    ScanResult {
        files,
        skipped_count,
    }
}

pub fn is_source_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| SOURCE_EXTENSIONS.contains(&ext))
}
