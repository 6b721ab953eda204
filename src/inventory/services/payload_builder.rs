use crate::inventory::domain::InventoryItem;
use crate::shared::Result;
use serde_json::{Map, Value};

/// Serialized JSON body for one inventory record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryPayload {
    json: String,
}

impl InventoryPayload {
    pub fn as_str(&self) -> &str {
        &self.json
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.json.as_bytes()
    }

    /// UTF-8 byte length of the body
    pub fn content_length(&self) -> usize {
        self.json.len()
    }

    pub fn is_empty_record(&self) -> bool {
        self.json == "{}"
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.json.into_bytes()
    }
}

/// PayloadBuilder - turns an inventory item into the collector's JSON body
pub struct PayloadBuilder;

impl PayloadBuilder {
    /// Builds the payload for `item`.
    ///
    /// Without a common name the body is `{}` and the other fields are
    /// dropped, even when populated.
    pub fn build(item: &InventoryItem) -> Result<InventoryPayload> {
        let json = if item.has_common_name() {
            serde_json::to_string(item)?
        } else {
            serde_json::to_string(&Value::Object(Map::new()))?
        };
        Ok(InventoryPayload { json })
    }
}
