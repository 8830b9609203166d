//! Processing pipeline for MGN operational events.
//!
//! This crate ties the `event-core` stages together: classify a raw payload,
//! resolve the source server against the cross-account inventory, apply the
//! lifecycle suppression rule, and deliver the processed record to the event
//! log and the notifier.
//!
//! # Example
//!
//! ```no_run
//! use event_processor::{EventProcessor, ProcessOutcome};
//! use serde_json::json;
//!
//! # async fn example() -> Result<(), event_core::EventError> {
//! let processor = EventProcessor::from_env().await?;
//!
//! let raw = json!({
//!     "detail-type": "MGN Source Server Data Replication Stalled",
//!     "account": "111122223333",
//!     "region": "us-east-1",
//!     "time": "2023-04-11T08:05:00Z",
//!     "resources": ["arn:aws:mgn:us-east-1:111122223333:source-server/s-abc"],
//!     "detail": { "state": "STALLED" }
//! });
//!
//! match processor.process(&raw).await? {
//!     ProcessOutcome::Published { message, .. } => println!("published: {message}"),
//!     ProcessOutcome::Suppressed { state, .. } => println!("suppressed in {state}"),
//! }
//! # Ok(())
//! # }
//! ```

mod processor;
mod resolver;

pub use processor::{EventProcessor, ProcessOutcome};
pub use resolver::{resolve_source, Resolution};

// Re-export the pipeline error type for convenience
pub use event_core::EventError;

/// Crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
