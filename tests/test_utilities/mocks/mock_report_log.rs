use inventory_reporter::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock ReportLog for testing that captures messages
#[derive(Default, Clone)]
pub struct MockReportLog {
    pub messages: Arc<Mutex<Vec<String>>>,
}

impl MockReportLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.get_messages().iter().any(|m| m.contains(needle))
    }
}

impl ReportLog for MockReportLog {
    fn info(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }

    fn warn(&self, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push(format!("Warning: {}", message));
    }

    fn error(&self, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push(format!("Error: {}", message));
    }
}
