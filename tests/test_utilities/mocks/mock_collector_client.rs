use inventory_reporter::prelude::*;
use inventory_reporter::shared::error::InventoryError;
use std::sync::{Arc, Mutex};

/// Mock CollectorClient that records requests and answers with a fixed status
#[derive(Clone)]
pub struct MockCollectorClient {
    status: u16,
    reason: String,
    unreachable: bool,
    pub requests: Arc<Mutex<Vec<CollectorRequest>>>,
}

impl MockCollectorClient {
    pub fn new() -> Self {
        Self::with_status(200, "OK")
    }

    pub fn with_status(status: u16, reason: &str) -> Self {
        Self {
            status,
            reason: reason.to_string(),
            unreachable: false,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Every send fails as if the connection was refused
    pub fn unreachable() -> Self {
        Self {
            unreachable: true,
            ..Self::new()
        }
    }

    pub fn sent_requests(&self) -> Vec<CollectorRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_body_json(&self) -> serde_json::Value {
        let requests = self.requests.lock().unwrap();
        let request = requests.last().expect("no request was sent");
        serde_json::from_slice(&request.body).unwrap()
    }
}

impl CollectorClient for MockCollectorClient {
    fn send(&self, request: &CollectorRequest) -> Result<CollectorResponse> {
        self.requests.lock().unwrap().push(request.clone());
        if self.unreachable {
            return Err(InventoryError::Transport {
                url: request.url.clone(),
                details: "Connection refused (os error 111)".to_string(),
            }
            .into());
        }
        Ok(CollectorResponse::new(self.status, self.reason.clone()))
    }
}
