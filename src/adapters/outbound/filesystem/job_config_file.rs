use crate::inventory::domain::InventoryItem;
use crate::ports::outbound::JobConfigReader;
use crate::shared::error::InventoryError;
use crate::shared::security::validate_config_file;
use crate::shared::Result;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Default job configuration looked up in the working directory
pub const JOB_CONFIG_FILENAME: &str = "inventory.config.yml";

/// Job configuration schema. Keys are the collector's field names.
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct JobConfigDocument {
    common_name: Option<String>,
    /// Older configurations name the project `appName`.
    app_name: Option<String>,
    primary_owner: Option<String>,
    aliases: Option<String>,
    description: Option<String>,
    code_repo_url: Option<String>,
    binary_repo_url: Option<String>,
    primary_language: Option<String>,
    secondary_languages: Option<String>,
    #[serde(rename = "type")]
    item_type: Option<String>,
    secondary_owners: Option<String>,
    business_unit: Option<String>,
    exposure: Option<String>,
    num_users: Option<i64>,
    data_classification: Option<String>,
    deployment_env: Option<String>,
    deployment_env_url: Option<String>,
    risk_level: Option<String>,
    regulations: Option<String>,
    chat_channel: Option<String>,
    agile_scrum_board_url: Option<String>,
    build_server_url: Option<String>,
    age: Option<String>,
    lifecycle_stage: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl JobConfigDocument {
    fn into_item(self) -> Result<InventoryItem> {
        let mut builder = InventoryItem::builder();
        if let Some(common_name) = self.common_name.or(self.app_name) {
            builder = builder.common_name(common_name);
        }
        if let Some(primary_owner) = self.primary_owner {
            builder = builder.primary_owner(primary_owner);
        }

        builder
            .aliases(self.aliases.unwrap_or_default())
            .description(self.description.unwrap_or_default())
            .code_repo_url(self.code_repo_url.unwrap_or_default())
            .binary_repo_url(self.binary_repo_url.unwrap_or_default())
            .primary_language(self.primary_language.unwrap_or_default())
            .secondary_languages(self.secondary_languages.unwrap_or_default())
            .item_type(self.item_type.unwrap_or_default())
            .secondary_owners(self.secondary_owners.unwrap_or_default())
            .business_unit(self.business_unit.unwrap_or_default())
            .exposure(self.exposure.unwrap_or_default())
            .num_users(self.num_users.unwrap_or_default())
            .data_classification(self.data_classification.unwrap_or_default())
            .deployment_env(self.deployment_env.unwrap_or_default())
            .deployment_env_url(self.deployment_env_url.unwrap_or_default())
            .risk_level(self.risk_level.unwrap_or_default())
            .regulations(self.regulations.unwrap_or_default())
            .chat_channel(self.chat_channel.unwrap_or_default())
            .agile_scrum_board_url(self.agile_scrum_board_url.unwrap_or_default())
            .build_server_url(self.build_server_url.unwrap_or_default())
            .age(self.age.unwrap_or_default())
            .lifecycle_stage(self.lifecycle_stage.unwrap_or_default())
            .build()
    }
}

/// JobConfigFile adapter reading a YAML job configuration
///
/// This adapter implements the JobConfigReader port.
pub struct JobConfigFile;

impl JobConfigFile {
    pub fn new() -> Self {
        Self
    }

    /// Default configuration path inside `dir`
    pub fn default_path(dir: &Path) -> PathBuf {
        dir.join(JOB_CONFIG_FILENAME)
    }

    fn parse(path: &Path, content: &str) -> Result<JobConfigDocument> {
        // An empty file is a job with nothing configured.
        if content.trim().is_empty() {
            return Ok(JobConfigDocument::default());
        }

        let document =
            serde_yaml_ng::from_str(content).map_err(|e| InventoryError::JobConfigParseError {
                path: path.to_path_buf(),
                details: e.to_string(),
            })?;
        Ok(document)
    }

    fn warn_unknown_fields(document: &JobConfigDocument) {
        let mut keys: Vec<&String> = document.unknown_fields.keys().collect();
        keys.sort();
        for key in keys {
            eprintln!(
                "⚠️  Warning: Unknown job config field '{}' will be ignored.",
                key
            );
        }
    }
}

impl Default for JobConfigFile {
    fn default() -> Self {
        Self::new()
    }
}

impl JobConfigReader for JobConfigFile {
    fn read_inventory_item(&self, path: &Path) -> Result<InventoryItem> {
        if !path.exists() {
            return Err(InventoryError::JobConfigNotFound {
                path: path.to_path_buf(),
                suggestion: format!(
                    "Create {} in the job workspace or pass --job <PATH>",
                    JOB_CONFIG_FILENAME
                ),
            }
            .into());
        }

        validate_config_file(path, "job configuration")?;

        let content =
            fs::read_to_string(path).map_err(|e| InventoryError::JobConfigParseError {
                path: path.to_path_buf(),
                details: e.to_string(),
            })?;

        let document = Self::parse(path, &content)?;
        Self::warn_unknown_fields(&document);
        document.into_item()
    }
}
