/// Use cases module containing application business logic orchestration
mod finalize_build;
mod report_inventory;

pub use finalize_build::FinalizeBuildUseCase;
pub use report_inventory::ReportInventoryUseCase;
