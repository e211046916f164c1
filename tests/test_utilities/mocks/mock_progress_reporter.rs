use app_catalog::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock ProgressReporter that records every message it is given
#[derive(Default, Clone)]
pub struct MockProgressReporter {
    pub messages: Arc<Mutex<Vec<String>>>,
}

impl MockProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }

    pub fn has_message_containing(&self, needle: &str) -> bool {
        self.get_messages().iter().any(|m| m.contains(needle))
    }

    fn push(&self, message: String) {
        self.messages.lock().unwrap().push(message);
    }
}

impl ProgressReporter for MockProgressReporter {
    fn report(&self, message: &str) {
        self.push(message.to_string());
    }

    fn report_progress(&self, current: usize, total: usize, message: Option<&str>) {
        match message {
            Some(m) => self.push(format!("Step {}/{}: {}", current, total, m)),
            None => self.push(format!("Step {}/{}", current, total)),
        }
    }

    fn report_error(&self, message: &str) {
        self.push(format!("Warning: {}", message));
    }

    fn report_completion(&self, message: &str) {
        self.push(format!("Done: {}", message));
    }
}
