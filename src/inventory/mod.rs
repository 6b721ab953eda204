/// Inventory layer - the record being reported and the pure logic that
/// turns it into a collector request.
pub mod domain;
pub mod services;
