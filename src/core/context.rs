use std::{
    cell::OnceCell,
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::{Context as _, Result, anyhow};
use colored::Colorize;
use rayon::prelude::*;
use swc_common::SourceMap;

use crate::{
    cli::args::CommonArgs,
    config::{CONFIG_FILE_NAME, Config, load_config},
    core::{
        file_scanner::scan_files,
        options::RuleOptions,
        parsers::source::{ParsedSource, parse_source},
    },
    issues::ParseErrorIssue,
};

/// Analysis context shared by every rule in one run.
///
/// Holds the merged configuration and the scanned file list. Files are read
/// and parsed lazily, in parallel, on first access; files that fail to read
/// or parse are kept aside as [`ParseErrorIssue`]s.
///
/// # Configuration Priority
///
/// 1. CLI arguments (`--source-root`)
/// 2. `.starlintrc.json` config file
/// 3. Built-in defaults
pub struct CheckContext {
    /// Merged configuration (CLI args > config file > defaults).
    pub config: Config,

    /// Directory the files were scanned from.
    pub root_dir: PathBuf,

    /// All source files to analyze.
    pub files: HashSet<String>,

    /// Whether to print verbose diagnostic messages.
    pub verbose: bool,

    parsed_files: OnceCell<HashMap<String, ParsedSource>>,
    parsed_files_errors: OnceCell<Vec<ParseErrorIssue>>,
}

impl CheckContext {
    /// Load configuration and scan source files.
    ///
    /// The config file is searched from `--source-root` (or the current
    /// directory) upwards. Files are scanned from `--source-root` when given,
    /// else from the config's `sourceRoot`.
    pub fn new(common_args: &CommonArgs) -> Result<Self> {
        let verbose = common_args.verbose;

        let search_dir = common_args
            .source_root
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));
        let config_result = load_config(&search_dir)?;

        if verbose && !config_result.from_file {
            eprintln!(
                "Note: No {} found, using default configuration",
                CONFIG_FILE_NAME
            );
        }

        let config = config_result.config;
        let root_dir = common_args
            .source_root
            .clone()
            .unwrap_or_else(|| PathBuf::from(&config.source_root));

        if !root_dir.is_dir() {
            return Err(anyhow!(
                "Source root is not a directory: {}",
                root_dir.display()
            ));
        }

        let path = root_dir
            .to_str()
            .with_context(|| anyhow!("Invalid path: {:?}", root_dir))?;

        let scan_result = scan_files(
            path,
            &config.includes,
            &config.ignores,
            config.ignore_test_files,
            verbose,
        );

        if scan_result.skipped_count > 0 {
            eprintln!(
                "{} {} path(s) skipped due to access errors{}",
                "warning:".bold().yellow(),
                scan_result.skipped_count,
                if verbose { "" } else { " (use -v for details)" }
            );
        }

        Ok(Self {
            config,
            root_dir,
            files: scan_result.files,
            verbose,
            parsed_files: OnceCell::new(),
            parsed_files_errors: OnceCell::new(),
        })
    }

    /// Options of the no-line-comments rule.
    pub fn rule_options(&self) -> &RuleOptions {
        &self.config.no_line_comments
    }

    /// Parsed comment streams for all source files (lazy initialization).
    ///
    /// Reading and parsing run on the rayon pool, one `SourceMap` per file.
    pub fn parsed_files(&self) -> &HashMap<String, ParsedSource> {
        self.parsed_files.get_or_init(|| {
            let results: Vec<(String, Result<ParsedSource>)> = self
                .files
                .par_iter()
                .map(|file_path| (file_path.clone(), read_and_parse(file_path)))
                .collect();

            let mut parsed = HashMap::new();
            let mut errors = Vec::new();

            for (file_path, result) in results {
                match result {
                    Ok(source) => {
                        parsed.insert(file_path, source);
                    }
                    Err(e) => {
                        if self.verbose {
                            eprintln!(
                                "{} {} - {:#}",
                                "warning:".bold().yellow(),
                                file_path,
                                e
                            );
                        }
                        errors.push(ParseErrorIssue {
                            file_path,
                            error: format!("{:#}", e),
                        });
                    }
                }
            }

            errors.sort_by(|a, b| a.file_path.cmp(&b.file_path));
            let _ = self.parsed_files_errors.set(errors);
            parsed
        })
    }

    /// Files that could not be read or parsed.
    ///
    /// Populated when `parsed_files()` is first called.
    pub fn parsed_files_errors(&self) -> &Vec<ParseErrorIssue> {
        self.parsed_files_errors.get_or_init(Vec::new)
    }
}

fn read_and_parse(file_path: &str) -> Result<ParsedSource> {
    let code = std::fs::read_to_string(Path::new(file_path))
        .with_context(|| format!("Failed to read file: {}", file_path))?;
    let source_map = Arc::new(SourceMap::default());
    parse_source(code, file_path, source_map)
}
