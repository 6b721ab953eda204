use serde::{Deserialize, Serialize};
use std::fmt;

/// Where inventory records go and how to authenticate.
///
/// Neither value is validated: an empty URL or token is sent as-is and the
/// transport or the collector decides what happens.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectorConfig {
    #[serde(default)]
    collector_url: String,
    #[serde(default)]
    collector_api_token: String,
}

impl CollectorConfig {
    pub fn new(collector_url: impl Into<String>, collector_api_token: impl Into<String>) -> Self {
        Self {
            collector_url: collector_url.into(),
            collector_api_token: collector_api_token.into(),
        }
    }

    pub fn collector_url(&self) -> &str {
        &self.collector_url
    }

    pub fn collector_api_token(&self) -> &str {
        &self.collector_api_token
    }

    /// Returns a copy with the given values replacing the stored ones.
    pub fn with_overrides(&self, url: Option<String>, token: Option<String>) -> Self {
        Self {
            collector_url: url.unwrap_or_else(|| self.collector_url.clone()),
            collector_api_token: token.unwrap_or_else(|| self.collector_api_token.clone()),
        }
    }
}

impl fmt::Debug for CollectorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = if self.collector_api_token.is_empty() {
            "<empty>"
        } else {
            "<redacted>"
        };
        f.debug_struct("CollectorConfig")
            .field("collector_url", &self.collector_url)
            .field("collector_api_token", &token)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        let config = CollectorConfig::default();
        assert_eq!(config.collector_url(), "");
        assert_eq!(config.collector_api_token(), "");
    }

    #[test]
    fn test_debug_redacts_token() {
        let config = CollectorConfig::new("https://collector.example.com", "s3cr3t");
        let debug = format!("{:?}", config);
        assert!(debug.contains("https://collector.example.com"));
        assert!(debug.contains("<redacted>"));
        assert!(!debug.contains("s3cr3t"));
    }

    #[test]
    fn test_with_overrides_replaces_only_given_values() {
        let config = CollectorConfig::new("https://stored", "stored-token");

        let url_only = config.with_overrides(Some("https://override".to_string()), None);
        assert_eq!(url_only.collector_url(), "https://override");
        assert_eq!(url_only.collector_api_token(), "stored-token");

        let unchanged = config.with_overrides(None, None);
        assert_eq!(unchanged, config);
    }
}
