use std::process::ExitCode;

use crate::issues::{Issue, Severity};

/// Exit status for CLI commands, following common conventions for linter tools.
///
/// - `Success` (0): no issues found
/// - `Failure` (1): issues found
/// - `Error` (2): a file could not be parsed, or the run itself failed
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl ExitStatus {
    /// Status for a finished run that reported `issues`.
    pub fn for_issues(issues: &[Issue]) -> Self {
        if issues.iter().any(|i| i.severity() == Severity::Error) {
            ExitStatus::Error
        } else if issues.is_empty() {
            ExitStatus::Success
        } else {
            ExitStatus::Failure
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
