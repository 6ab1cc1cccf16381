//! Options for the no-line-comments rule.
//!
//! Built once per run and passed by reference to every engine stage. Unknown
//! keys and non-string ignore entries are rejected while deserializing;
//! [`RuleOptions::validate`] catches the rest before analysis starts.

use std::collections::HashSet;

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RuleOptions {
    /// Compute replacement text for reported comments.
    #[serde(default)]
    pub fixable: bool,
    /// Turn a lone `// text` into `/* text */` instead of a three-line starred block.
    #[serde(default)]
    pub single_line_to_single_line_block: bool,
    #[serde(default)]
    pub ignore: IgnoreOptions,
}

/// Comments whose trimmed text matches any of these are skipped entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct IgnoreOptions {
    #[serde(default)]
    pub starts_with: Vec<String>,
    #[serde(default)]
    pub includes: Vec<String>,
}

impl RuleOptions {
    pub fn validate(&self) -> Result<()> {
        check_patterns("ignore.startsWith", &self.ignore.starts_with)?;
        check_patterns("ignore.includes", &self.ignore.includes)?;
        Ok(())
    }
}

fn check_patterns(field: &str, patterns: &[String]) -> Result<()> {
    let mut seen = HashSet::new();
    for pattern in patterns {
        if pattern.is_empty() {
            bail!("Empty pattern in '{}' would ignore every comment", field);
        }
        if !seen.insert(pattern.as_str()) {
            bail!("Duplicate pattern in '{}': \"{}\"", field, pattern);
        }
    }
    Ok(())
}
