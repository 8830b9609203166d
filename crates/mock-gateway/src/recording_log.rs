//! Event-log double that records appended lines.

use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;

use event_core::{EventError, EventLog};

/// An `EventLog` that collects appended lines in memory.
#[derive(Debug, Default)]
pub struct RecordingLog {
    lines: Mutex<Vec<String>>,
}

impl RecordingLog {
    /// Create an empty recording log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines appended so far, oldest first.
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl EventLog for RecordingLog {
    async fn append(&self, line: &str) -> Result<(), EventError> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(line.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_lines_are_recorded_in_order() {
        let log = RecordingLog::new();
        log.append("first").await.unwrap();
        log.append("second").await.unwrap();
        assert_eq!(log.lines(), vec!["first", "second"]);
    }
}
