//! inventory-reporter - report project inventory metadata after a build
//!
//! After a build finishes, a fixed set of descriptive fields about the
//! project is serialized to JSON and posted once to an inventory
//! collector, authenticated with a bearer token. The collector's status
//! code is logged; only transport failures are errors.
//!
//! # Architecture
//!
//! - **Inventory Layer** (`inventory`): the record, collector settings,
//!   outcome classification, payload and request building
//! - **Application Layer** (`application`): report and build-finalizer use cases
//! - **Ports** (`ports`): interfaces for the collector, log sink and config stores
//! - **Adapters** (`adapters`): reqwest client, YAML/TOML files, stderr log
//! - **Shared** (`shared`): error types and file safety checks
//!
//! # Example
//!
//! ```no_run
//! use inventory_reporter::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let item = InventoryItem::builder()
//!     .common_name("PaymentsService")
//!     .primary_owner("team-pay")
//!     .num_users(1200)
//!     .build()?;
//! let config = CollectorConfig::new("https://collector.example.com", "token");
//!
//! let use_case = ReportInventoryUseCase::new(HttpCollectorClient::new()?, StderrReportLog::new());
//! let outcome = use_case.execute(&item, &config)?;
//! println!("{}", outcome.log_message());
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod inventory;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrReportLog;
    pub use crate::adapters::outbound::filesystem::{JobConfigFile, SettingsFile};
    pub use crate::adapters::outbound::network::HttpCollectorClient;
    pub use crate::application::use_cases::{FinalizeBuildUseCase, ReportInventoryUseCase};
    pub use crate::inventory::domain::{
        BuildStatus, CollectorConfig, FinalizedBuild, InventoryItem, InventoryItemBuilder,
        ReportOutcome,
    };
    pub use crate::inventory::services::{
        CollectorRequest, CollectorRequestFactory, InventoryPayload, PayloadBuilder,
    };
    pub use crate::ports::outbound::{
        CollectorClient, CollectorResponse, JobConfigReader, ReportLog, SettingsStore,
    };
    pub use crate::shared::Result;
}
