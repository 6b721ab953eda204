use crate::inventory::domain::InventoryItem;
use crate::shared::Result;
use std::path::Path;

/// JobConfigReader port - binds a job's saved configuration to an inventory item
pub trait JobConfigReader {
    /// Reads the configuration at `path` and builds the item.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file does not exist or is not a regular file
    /// - The content cannot be parsed
    /// - The item fails its presence checks
    fn read_inventory_item(&self, path: &Path) -> Result<InventoryItem>;
}
