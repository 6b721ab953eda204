/// Application layer - Use cases
///
/// Orchestrates the inventory services and reaches infrastructure only
/// through ports.
pub mod use_cases;
