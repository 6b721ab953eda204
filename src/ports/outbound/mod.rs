/// Outbound ports (Driven ports) - Infrastructure interfaces
pub mod collector_client;
pub mod job_config_reader;
pub mod report_log;
pub mod settings_store;

pub use collector_client::{CollectorClient, CollectorResponse};
pub use job_config_reader::JobConfigReader;
pub use report_log::ReportLog;
pub use settings_store::SettingsStore;
