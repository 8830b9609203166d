//! Core types and trait seams for the MGN operational event pipeline.
//!
//! This crate provides the shared vocabulary for every stage of the
//! pipeline. It defines:
//!
//! - [`classify`] / [`Notice`] - Turning a raw JSON payload into a typed event
//! - [`ProcessedEvent`] - The uniform record emitted for every event
//! - [`SeverityMap`] - The kind-to-severity policy table
//! - [`LifecycleState`] - Source-server lifecycle states and the suppression rule
//! - [`SourceInventory`] / [`EventLog`] / [`Notifier`] - Traits the pipeline's
//!   collaborators implement
//! - [`EventError`] - Error types for classification, resolution, and delivery
//!
//! # Example
//!
//! ```rust
//! use event_core::{classify, EventKind};
//! use serde_json::json;
//!
//! let raw = json!({
//!     "detail-type": "MGN Source Server Data Replication Stalled",
//!     "account": "111122223333",
//!     "region": "us-east-1",
//!     "time": "2023-04-11T08:05:00Z",
//!     "resources": ["arn:aws:mgn:us-east-1:111122223333:source-server/s-1234567890abcdef0"],
//!     "detail": { "state": "STALLED" }
//! });
//!
//! let notice = classify(&raw).unwrap();
//! assert_eq!(notice.kind(), EventKind::Stalled);
//! assert_eq!(notice.source_server_id(), "s-1234567890abcdef0");
//! ```

mod error;
mod format;
mod inventory;
mod kind;
mod lifecycle;
mod notice;
mod processed;
mod severity;
mod sink;

pub use error::EventError;
pub use format::format_message;
pub use inventory::{SourceInventory, SourceServerRecord};
pub use kind::EventKind;
pub use lifecycle::LifecycleState;
pub use notice::{classify, AlarmNotice, DisconnectNotice, Notice, StalledNotice};
pub use processed::ProcessedEvent;
pub use severity::{level_prefix, SeverityMap};
pub use sink::{EventLog, Notifier};

// Re-export async_trait for convenience
pub use async_trait::async_trait;
