use std::sync::{Arc, Mutex};

use super::data::LogMessage;

/// Mock implementation of the Log actor for testing purposes.
///
/// Messages are recorded synchronously so tests can inspect them right away.
#[derive(Debug, Clone, Default)]
pub struct Mock {
    messages: Arc<Mutex<Vec<LogMessage>>>,
}

impl Mock {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn log(&self, message: LogMessage) {
        if let Ok(mut messages) = self.messages.lock() {
            messages.push(message);
        }
    }

    pub fn flush(&self) {}

    pub fn messages(&self) -> Vec<LogMessage> {
        self.messages
            .lock()
            .map(|messages| messages.clone())
            .unwrap_or_default()
    }
}
