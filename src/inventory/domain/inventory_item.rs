use crate::shared::error::InventoryError;
use crate::shared::Result;
use serde::Serialize;

/// Descriptive metadata about one software project.
///
/// Field order and serialized names are the collector's wire contract.
/// Values are free text and are never validated; URLs are passed through
/// untouched.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    common_name: String,
    primary_owner: String,
    aliases: String,
    description: String,
    code_repo_url: String,
    binary_repo_url: String,
    primary_language: String,
    secondary_languages: String,
    #[serde(rename = "type")]
    item_type: String,
    secondary_owners: String,
    business_unit: String,
    exposure: String,
    num_users: i64,
    data_classification: String,
    deployment_env: String,
    deployment_env_url: String,
    risk_level: String,
    regulations: String,
    chat_channel: String,
    agile_scrum_board_url: String,
    build_server_url: String,
    age: String,
    lifecycle_stage: String,
}

impl InventoryItem {
    pub fn builder() -> InventoryItemBuilder {
        InventoryItemBuilder::default()
    }

    /// A record without a common name is reported as an empty object.
    pub fn has_common_name(&self) -> bool {
        !self.common_name.is_empty()
    }

    pub fn common_name(&self) -> &str {
        &self.common_name
    }

    pub fn primary_owner(&self) -> &str {
        &self.primary_owner
    }

    pub fn aliases(&self) -> &str {
        &self.aliases
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn code_repo_url(&self) -> &str {
        &self.code_repo_url
    }

    pub fn binary_repo_url(&self) -> &str {
        &self.binary_repo_url
    }

    pub fn primary_language(&self) -> &str {
        &self.primary_language
    }

    pub fn secondary_languages(&self) -> &str {
        &self.secondary_languages
    }

    pub fn item_type(&self) -> &str {
        &self.item_type
    }

    pub fn secondary_owners(&self) -> &str {
        &self.secondary_owners
    }

    pub fn business_unit(&self) -> &str {
        &self.business_unit
    }

    pub fn exposure(&self) -> &str {
        &self.exposure
    }

    pub fn num_users(&self) -> i64 {
        self.num_users
    }

    pub fn data_classification(&self) -> &str {
        &self.data_classification
    }

    pub fn deployment_env(&self) -> &str {
        &self.deployment_env
    }

    pub fn deployment_env_url(&self) -> &str {
        &self.deployment_env_url
    }

    pub fn risk_level(&self) -> &str {
        &self.risk_level
    }

    pub fn regulations(&self) -> &str {
        &self.regulations
    }

    pub fn chat_channel(&self) -> &str {
        &self.chat_channel
    }

    pub fn agile_scrum_board_url(&self) -> &str {
        &self.agile_scrum_board_url
    }

    pub fn build_server_url(&self) -> &str {
        &self.build_server_url
    }

    pub fn age(&self) -> &str {
        &self.age
    }

    pub fn lifecycle_stage(&self) -> &str {
        &self.lifecycle_stage
    }
}

/// Builder standing in for form binding: every value comes from whatever
/// configuration source the caller reads.
#[derive(Debug, Clone, Default)]
pub struct InventoryItemBuilder {
    item: InventoryItem,
    primary_owner_set: bool,
}

macro_rules! text_setters {
    ($($field:ident),* $(,)?) => {
        $(
            pub fn $field(mut self, value: impl Into<String>) -> Self {
                self.item.$field = value.into();
                self
            }
        )*
    };
}

impl InventoryItemBuilder {
    text_setters!(
        common_name,
        aliases,
        description,
        code_repo_url,
        binary_repo_url,
        primary_language,
        secondary_languages,
        item_type,
        secondary_owners,
        business_unit,
        exposure,
        data_classification,
        deployment_env,
        deployment_env_url,
        risk_level,
        regulations,
        chat_channel,
        agile_scrum_board_url,
        build_server_url,
        age,
        lifecycle_stage,
    );

    /// An explicitly empty owner still counts as supplied.
    pub fn primary_owner(mut self, value: impl Into<String>) -> Self {
        self.item.primary_owner = value.into();
        self.primary_owner_set = true;
        self
    }

    pub fn num_users(mut self, value: i64) -> Self {
        self.item.num_users = value;
        self
    }

    /// Builds the item.
    ///
    /// # Errors
    /// Returns a validation error if a common name is set but no primary
    /// owner was supplied.
    pub fn build(self) -> Result<InventoryItem> {
        if self.item.has_common_name() && !self.primary_owner_set {
            return Err(InventoryError::Validation {
                message: format!(
                    "primaryOwner is required when commonName is set (commonName: {})",
                    self.item.common_name
                ),
            }
            .into());
        }
        Ok(self.item)
    }
}
