/// Type alias for Result with anyhow::Error as the error type.
/// Typed failures are `InventoryError` values wrapped in the anyhow chain.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
