use crate::shared::error::InventoryError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Upper bound for job configuration and settings files (1 MiB)
pub const MAX_CONFIG_FILE_SIZE: u64 = 1024 * 1024;

/// Checks that `path` is a regular file small enough to be a config file.
///
/// Uses `symlink_metadata()` so a symlink is rejected rather than followed.
pub fn validate_config_file(path: &Path, file_description: &str) -> Result<()> {
    let metadata = fs::symlink_metadata(path).map_err(|e| {
        anyhow::anyhow!(
            "Failed to read {} metadata for {}: {}",
            file_description,
            path.display(),
            e
        )
    })?;

    if metadata.is_symlink() {
        return Err(InventoryError::SecurityError {
            path: path.to_path_buf(),
            reason: format!("{} is a symbolic link", file_description),
            hint: "Point to the regular file the link resolves to".to_string(),
        }
        .into());
    }

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    if metadata.len() > MAX_CONFIG_FILE_SIZE {
        return Err(InventoryError::SecurityError {
            path: path.to_path_buf(),
            reason: format!(
                "{} is too large ({} bytes, maximum {} bytes)",
                file_description,
                metadata.len(),
                MAX_CONFIG_FILE_SIZE
            ),
            hint: "Configuration files only hold a handful of fields".to_string(),
        }
        .into());
    }

    Ok(())
}

/// Refuses to write through a symlink. A missing path is fine.
pub fn validate_write_target(path: &Path) -> Result<()> {
    match fs::symlink_metadata(path) {
        Ok(metadata) if metadata.is_symlink() => Err(InventoryError::SecurityError {
            path: path.to_path_buf(),
            reason: "Output path is a symbolic link".to_string(),
            hint: "Writing through symbolic links is not allowed".to_string(),
        }
        .into()),
        _ => Ok(()),
    }
}
