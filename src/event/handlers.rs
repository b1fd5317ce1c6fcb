use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::Arc;

use crate::event::{EventHandler, SessionEvent};

/// Keeps a short, human-readable trail of session changes for display.
#[derive(Debug, Clone)]
pub struct ActivityLog {
    entries: Arc<Mutex<VecDeque<String>>>,
    capacity: usize,
}

impl ActivityLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Arc::new(Mutex::new(VecDeque::with_capacity(capacity))),
            capacity,
        }
    }

    /// Newest entry first.
    pub fn entries(&self) -> Vec<String> {
        self.entries.lock().iter().rev().cloned().collect()
    }

    fn push(&self, line: String) {
        let mut entries = self.entries.lock();
        if entries.len() == self.capacity {
            entries.pop_front();
        }
        entries.push_back(line);
    }
}

impl EventHandler for ActivityLog {
    fn handle_event(&mut self, event: &SessionEvent) {
        let line = match event {
            SessionEvent::Committed { shape, .. } => format!("Drew {}", shape.kind_name()),
            SessionEvent::Replaced { shape, .. } => format!("Replaced with {}", shape.kind_name()),
            SessionEvent::Edited { shape, .. } => format!("Edited {}", shape.kind_name()),
            SessionEvent::Cleared { .. } => "Cleared selection".to_owned(),
        };
        self.push(line);
    }
}
