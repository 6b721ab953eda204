pub mod build_status;
pub mod collector_config;
pub mod inventory_item;
pub mod report_outcome;

pub use build_status::{BuildStatus, FinalizedBuild};
pub use collector_config::CollectorConfig;
pub use inventory_item::{InventoryItem, InventoryItemBuilder};
pub use report_outcome::ReportOutcome;
