/// Mock implementations for testing
mod mock_collector_client;
mod mock_report_log;

pub use mock_collector_client::MockCollectorClient;
pub use mock_report_log::MockReportLog;
