//! In-memory collaborator doubles for the MGN event pipeline.
//!
//! This crate provides test implementations of the `event-core` trait seams:
//! - `StaticInventory` - Returns a configured list of inventory records
//! - `FailingInventory` - Fails every lookup with a gateway error
//! - `RecordingLog` - Collects appended log lines in memory
//! - `RecordingNotifier` - Collects published messages in memory
//!
//! For the AWS-backed implementations, use the `aws-gateway` crate instead.
//!
//! # Example
//!
//! ```rust
//! use mock_gateway::{LifecycleState, SourceInventory, StaticInventory};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), mock_gateway::EventError> {
//!     let inventory = StaticInventory::with_state("s-abc", LifecycleState::Discovered);
//!
//!     let records = inventory
//!         .describe_source_server("111122223333", "us-east-1", "s-abc")
//!         .await?;
//!     assert_eq!(records.len(), 1);
//!     Ok(())
//! }
//! ```

// Mock implementations
mod failing_inventory;
mod recording_log;
mod recording_notifier;
mod static_inventory;

// Re-export event-core types for convenience
pub use event_core::{
    async_trait, EventError, EventLog, LifecycleState, Notifier, SourceInventory,
    SourceServerRecord,
};

// Export mock implementations
pub use failing_inventory::FailingInventory;
pub use recording_log::RecordingLog;
pub use recording_notifier::RecordingNotifier;
pub use static_inventory::StaticInventory;
