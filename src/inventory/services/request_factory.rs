use crate::inventory::domain::CollectorConfig;
use crate::inventory::services::InventoryPayload;

/// Everything needed to issue the POST, computed before any I/O.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectorRequest {
    pub url: String,
    pub content_type: &'static str,
    pub content_length: usize,
    pub authorization: String,
    pub body: Vec<u8>,
}

/// CollectorRequestFactory - derives the create-item request from the
/// global settings and a payload
pub struct CollectorRequestFactory;

impl CollectorRequestFactory {
    pub const CREATE_PATH: &'static str = "/inventoryItem/create";
    pub const CONTENT_TYPE: &'static str = "application/json";
    pub const AUTH_SCHEME: &'static str = "Bearer ";

    /// Plain concatenation: no slash normalization, no escaping.
    pub fn endpoint_url(config: &CollectorConfig) -> String {
        format!("{}{}", config.collector_url(), Self::CREATE_PATH)
    }

    pub fn authorization(config: &CollectorConfig) -> String {
        format!("{}{}", Self::AUTH_SCHEME, config.collector_api_token())
    }

    pub fn create(config: &CollectorConfig, payload: InventoryPayload) -> CollectorRequest {
        CollectorRequest {
            url: Self::endpoint_url(config),
            content_type: Self::CONTENT_TYPE,
            content_length: payload.content_length(),
            authorization: Self::authorization(config),
            body: payload.into_bytes(),
        }
    }
}
