use async_trait::async_trait;

use crate::EventError;

/// Destination for the one-line-per-event operational log.
#[async_trait]
pub trait EventLog: Send + Sync {
    /// Append one line to the event log stream.
    async fn append(&self, line: &str) -> Result<(), EventError>;
}

/// Destination for rendered notification messages.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Publish one notification message.
    async fn publish(&self, message: &str) -> Result<(), EventError>;
}
