use crate::inventory::domain::ReportOutcome;
use crate::shared::Result;

/// How the build that precedes the finalizer ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildStatus {
    Succeeded,
    /// `exit_code` is `None` when the build was killed by a signal or never started
    Failed { exit_code: Option<i32> },
}

impl BuildStatus {
    pub fn from_exit_code(code: Option<i32>) -> Self {
        match code {
            Some(0) => BuildStatus::Succeeded,
            other => BuildStatus::Failed { exit_code: other },
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, BuildStatus::Succeeded)
    }
}

/// A build together with the report that ran after it.
#[derive(Debug)]
pub struct FinalizedBuild {
    pub build: BuildStatus,
    pub report: Result<ReportOutcome>,
}
