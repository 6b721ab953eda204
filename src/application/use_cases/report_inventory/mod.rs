use crate::inventory::domain::{CollectorConfig, InventoryItem, ReportOutcome};
use crate::inventory::services::{CollectorRequestFactory, PayloadBuilder};
use crate::ports::outbound::{CollectorClient, ReportLog};
use crate::shared::Result;

/// ReportInventoryUseCase - sends one inventory record to the collector
///
/// # Type Parameters
/// * `C` - CollectorClient implementation
/// * `L` - ReportLog implementation
pub struct ReportInventoryUseCase<C, L> {
    collector_client: C,
    report_log: L,
}

impl<C, L> ReportInventoryUseCase<C, L>
where
    C: CollectorClient,
    L: ReportLog,
{
    pub fn new(collector_client: C, report_log: L) -> Self {
        Self {
            collector_client,
            report_log,
        }
    }

    pub fn report_log(&self) -> &L {
        &self.report_log
    }

    /// Builds the payload, posts it once and logs how the collector answered.
    ///
    /// Any HTTP status is `Ok`: a rejected record never fails the caller.
    ///
    /// # Errors
    /// Returns an error only if the exchange itself fails (malformed URL,
    /// connection refused, broken pipe, ...). Nothing is retried.
    pub fn execute(&self, item: &InventoryItem, config: &CollectorConfig) -> Result<ReportOutcome> {
        let payload = PayloadBuilder::build(item)?;
        if payload.is_empty_record() {
            self.report_log
                .warn("commonName is not set; the inventory record is sent as an empty object");
        }

        let request = CollectorRequestFactory::create(config, payload);
        self.report_log.info(&format!(
            "Inventory Collector - posting {} byte(s) to {}",
            request.content_length, request.url
        ));

        let response = self.collector_client.send(&request)?;

        let outcome = ReportOutcome::from_status(response.status, response.reason);
        self.report_log.info(&outcome.log_message());
        Ok(outcome)
    }
}
