use crate::inventory::services::CollectorRequest;
use crate::shared::Result;

/// Status line of the collector's reply. The body is never consulted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectorResponse {
    pub status: u16,
    pub reason: String,
}

impl CollectorResponse {
    pub fn new(status: u16, reason: impl Into<String>) -> Self {
        Self {
            status,
            reason: reason.into(),
        }
    }
}

/// CollectorClient port for the single request/response exchange
///
/// Implementations block until the status line arrives. The request body
/// must be fully written and the write side released before the status is
/// read.
pub trait CollectorClient {
    /// Sends `request` once.
    ///
    /// # Errors
    /// Returns an error for transport faults only (malformed URL, connection
    /// refused, write or read failure). Every HTTP status, including 4xx and
    /// 5xx, is `Ok`.
    fn send(&self, request: &CollectorRequest) -> Result<CollectorResponse>;
}
