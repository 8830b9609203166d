//! AWS-backed collaborators for the MGN event pipeline.
//!
//! This crate provides the production implementations of the `event-core`
//! trait seams:
//!
//! - [`MgnInventory`] - Cross-account source-server lookups (STS assume-role
//!   followed by a filtered DescribeSourceServers call)
//! - [`CloudWatchEventLog`] - One-line-per-event writes to a CloudWatch Logs
//!   stream, creating the stream on first use
//! - [`SnsNotifier`] - Notification delivery to an SNS topic
//!
//! # Example
//!
//! ```no_run
//! use aws_gateway::{connect, GatewayConfig};
//!
//! # async fn example() -> Result<(), aws_gateway::GatewayError> {
//! let config = GatewayConfig::from_env()?;
//! let (inventory, event_log, notifier) = connect(config).await;
//! # let _ = (inventory, event_log, notifier);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod inventory;
pub mod logs;
pub mod notify;

pub use config::GatewayConfig;
pub use error::GatewayError;
pub use inventory::MgnInventory;
pub use logs::CloudWatchEventLog;
pub use notify::SnsNotifier;

use aws_config::BehaviorVersion;

/// Build the three AWS-backed collaborators from one shared load of the
/// ambient AWS environment (credentials, default region, profile).
pub async fn connect(config: GatewayConfig) -> (MgnInventory, CloudWatchEventLog, SnsNotifier) {
    let base = aws_config::load_defaults(BehaviorVersion::latest()).await;
    let inventory = MgnInventory::new(aws_sdk_sts::Client::new(&base), &config);
    let event_log = CloudWatchEventLog::new(aws_sdk_cloudwatchlogs::Client::new(&base), &config);
    let notifier = SnsNotifier::new(aws_sdk_sns::Client::new(&base), &config);
    (inventory, event_log, notifier)
}

/// Crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
