use crate::inventory::domain::CollectorConfig;
use crate::ports::outbound::SettingsStore;
use crate::shared::error::InventoryError;
use crate::shared::security::{validate_config_file, validate_write_target};
use crate::shared::Result;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Default collector settings file
pub const SETTINGS_FILENAME: &str = "inventory-collector.toml";

/// SettingsFile adapter storing collector settings as TOML
///
/// ```toml
/// collector_url = "https://collector.example.com"
/// collector_api_token = "..."
/// ```
pub struct SettingsFile {
    path: PathBuf,
}

impl SettingsFile {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_error(&self, details: impl Into<String>) -> anyhow::Error {
        InventoryError::SettingsWriteError {
            path: self.path.clone(),
            details: details.into(),
        }
        .into()
    }

    fn parent_directory(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }
}

impl SettingsStore for SettingsFile {
    fn load(&self) -> Result<CollectorConfig> {
        if fs::symlink_metadata(&self.path).is_err() {
            return Ok(CollectorConfig::default());
        }

        validate_config_file(&self.path, "collector settings")?;

        let content = fs::read_to_string(&self.path).map_err(|e| {
            InventoryError::SettingsReadError {
                path: self.path.clone(),
                details: e.to_string(),
            }
        })?;

        let config = toml::from_str(&content).map_err(|e| InventoryError::SettingsReadError {
            path: self.path.clone(),
            details: e.to_string(),
        })?;
        Ok(config)
    }

    /// Replaces the whole file. The new content lands in a temp file in the
    /// same directory first, so readers never see a half-written file and
    /// the token file keeps the temp file's owner-only permissions.
    fn save(&self, config: &CollectorConfig) -> Result<()> {
        validate_write_target(&self.path)?;

        let parent = self.parent_directory();
        if !parent.is_dir() {
            return Err(self.write_error(format!(
                "Parent directory does not exist: {}",
                parent.display()
            )));
        }

        let content = toml::to_string(config).map_err(|e| self.write_error(e.to_string()))?;

        let mut temp = NamedTempFile::new_in(parent).map_err(|e| self.write_error(e.to_string()))?;
        temp.write_all(content.as_bytes())
            .map_err(|e| self.write_error(e.to_string()))?;
        temp.as_file()
            .sync_all()
            .map_err(|e| self.write_error(e.to_string()))?;
        temp.persist(&self.path)
            .map_err(|e| self.write_error(e.error.to_string()))?;

        Ok(())
    }
}
