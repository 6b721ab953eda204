use crate::inventory::services::CollectorRequest;
use crate::ports::outbound::{CollectorClient, CollectorResponse};
use crate::shared::error::InventoryError;
use crate::shared::Result;
use hyper::ext::ReasonPhrase;
use reqwest::blocking::{Client, Response};
use reqwest::header::{AUTHORIZATION, CONTENT_LENGTH, CONTENT_TYPE};
use std::error::Error as StdError;
use std::time::Duration;

/// HttpCollectorClient adapter posting inventory records over HTTP
///
/// Uses the blocking reqwest client: the calling thread waits for the
/// whole exchange. `send()` hands the body to reqwest, which writes and
/// finishes the request before the status line is read.
///
/// # Timeouts
/// No timeout unless one is asked for. A hung collector blocks the caller
/// for as long as the platform's socket defaults allow.
pub struct HttpCollectorClient {
    client: Client,
}

impl HttpCollectorClient {
    /// Creates a client that waits indefinitely for the collector
    pub fn new() -> Result<Self> {
        Self::build(None)
    }

    /// Creates a client that gives up after `timeout`
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        Self::build(Some(timeout))
    }

    fn build(timeout: Option<Duration>) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("inventory-reporter/{}", version);
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self { client })
    }
}

impl CollectorClient for HttpCollectorClient {
    fn send(&self, request: &CollectorRequest) -> Result<CollectorResponse> {
        let response = self
            .client
            .post(&request.url)
            .header(CONTENT_TYPE, request.content_type)
            .header(CONTENT_LENGTH, request.content_length)
            .header(AUTHORIZATION, &request.authorization)
            .body(request.body.clone())
            .send()
            .map_err(|e| InventoryError::Transport {
                url: request.url.clone(),
                details: error_chain(&e),
            })?;

        let status = response.status();
        Ok(CollectorResponse::new(status.as_u16(), reason_phrase(&response)))
    }
}

/// The phrase the server sent. hyper only keeps it in the extensions when
/// it differs from the canonical one.
fn reason_phrase(response: &Response) -> String {
    match response.extensions().get::<ReasonPhrase>() {
        Some(phrase) => String::from_utf8_lossy(phrase.as_bytes()).into_owned(),
        None => response
            .status()
            .canonical_reason()
            .unwrap_or("")
            .to_string(),
    }
}

/// reqwest's top-level message hides the interesting part in `source()`
fn error_chain(error: &reqwest::Error) -> String {
    let mut details = error.to_string();
    let mut source = error.source();
    while let Some(err) = source {
        details.push_str(": ");
        details.push_str(&err.to_string());
        source = err.source();
    }
    details
}
