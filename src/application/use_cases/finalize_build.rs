use crate::application::use_cases::ReportInventoryUseCase;
use crate::inventory::domain::{BuildStatus, CollectorConfig, FinalizedBuild, InventoryItem};
use crate::ports::outbound::{CollectorClient, ReportLog};
use crate::shared::Result;

/// FinalizeBuildUseCase - runs a build, then reports the inventory record
///
/// The report always runs exactly once after the build, whether the build
/// passed, failed, or could not be started at all.
pub struct FinalizeBuildUseCase<C, L> {
    reporter: ReportInventoryUseCase<C, L>,
}

impl<C, L> FinalizeBuildUseCase<C, L>
where
    C: CollectorClient,
    L: ReportLog,
{
    pub fn new(reporter: ReportInventoryUseCase<C, L>) -> Self {
        Self { reporter }
    }

    pub fn run<F>(&self, build: F, item: &InventoryItem, config: &CollectorConfig) -> FinalizedBuild
    where
        F: FnOnce() -> Result<BuildStatus>,
    {
        let log = self.reporter.report_log();

        let build = match build() {
            Ok(status) => status,
            Err(e) => {
                log.error(&format!("Build could not be run: {:#}", e));
                BuildStatus::Failed { exit_code: None }
            }
        };

        match build {
            BuildStatus::Succeeded => log.info("Build finished successfully; running inventory report"),
            BuildStatus::Failed {
                exit_code: Some(code),
            } => log.warn(&format!(
                "Build failed with exit code {}; running inventory report anyway",
                code
            )),
            BuildStatus::Failed { exit_code: None } => {
                log.warn("Build did not complete; running inventory report anyway")
            }
        }

        let report = self.reporter.execute(item, config);
        FinalizedBuild { build, report }
    }
}
