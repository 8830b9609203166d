//! Inventory double that fails every lookup.

use async_trait::async_trait;

use event_core::{EventError, SourceInventory, SourceServerRecord};

/// A `SourceInventory` that fails every lookup with a gateway error.
///
/// Useful for testing that transport failures propagate with their message
/// unchanged.
#[derive(Debug, Clone)]
pub struct FailingInventory {
    message: String,
}

impl FailingInventory {
    /// Create an inventory that fails with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Default for FailingInventory {
    fn default() -> Self {
        Self::new("inventory unavailable")
    }
}

#[async_trait]
impl SourceInventory for FailingInventory {
    async fn describe_source_server(
        &self,
        _account_id: &str,
        _region: &str,
        _source_server_id: &str,
    ) -> Result<Vec<SourceServerRecord>, EventError> {
        Err(EventError::Gateway(self.message.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_failure_carries_the_configured_message() {
        let inventory = FailingInventory::new("connection reset by peer");
        let err = inventory
            .describe_source_server("111122223333", "us-east-1", "s-abc")
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "connection reset by peer");
    }
}
