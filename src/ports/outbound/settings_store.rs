use crate::inventory::domain::CollectorConfig;
use crate::shared::Result;

/// SettingsStore port - process-wide collector settings
///
/// Load and save always move the whole object.
pub trait SettingsStore {
    /// Loads the stored settings, or the empty default if nothing was saved yet.
    fn load(&self) -> Result<CollectorConfig>;

    fn save(&self, config: &CollectorConfig) -> Result<()>;
}
