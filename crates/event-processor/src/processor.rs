use std::env;

use serde_json::Value;
use tracing::{error, info, warn};

use aws_gateway::{
    connect, CloudWatchEventLog, GatewayConfig, GatewayError, MgnInventory, SnsNotifier,
};
use event_core::{
    classify, format_message, level_prefix, EventError, EventLog, LifecycleState, Notifier,
    ProcessedEvent, SeverityMap, SourceInventory,
};

use crate::resolver::resolve_source;

/// Default path of the severity table file.
pub const DEFAULT_SEVERITY_FILE: &str = "event_severity.json";

/// Outcome of processing one event payload.
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessOutcome {
    /// The event was processed, logged, and published.
    Published {
        event: ProcessedEvent,
        message: String,
    },
    /// The server's lifecycle state suppressed the event. Nothing was
    /// logged to the event log and nothing was published.
    Suppressed {
        source_server_id: String,
        state: LifecycleState,
    },
}

/// The event pipeline: classify, resolve, gate, assemble, deliver.
///
/// Generic over its collaborators so tests can run it against in-memory
/// doubles and the binary against the AWS-backed implementations.
pub struct EventProcessor<I, L, N> {
    severity: SeverityMap,
    inventory: I,
    event_log: L,
    notifier: N,
}

impl<I, L, N> EventProcessor<I, L, N>
where
    I: SourceInventory,
    L: EventLog,
    N: Notifier,
{
    /// Create a processor from a severity table and three collaborators.
    pub fn new(severity: SeverityMap, inventory: I, event_log: L, notifier: N) -> Self {
        Self {
            severity,
            inventory,
            event_log,
            notifier,
        }
    }

    /// Process one raw event payload.
    ///
    /// Suppression is a normal outcome, not an error. Failures are logged
    /// before propagation; nothing is retried.
    pub async fn process(&self, raw: &Value) -> Result<ProcessOutcome, EventError> {
        let notice = match classify(raw) {
            Ok(notice) => notice,
            Err(e) => {
                error!(error = %e, "Rejected event payload");
                return Err(e);
            }
        };
        let kind = notice.kind();
        info!(
            kind = %kind,
            source_server_id = notice.source_server_id(),
            account_id = notice.account_id(),
            "Classified incoming event"
        );

        let resolution = match resolve_source(
            &self.inventory,
            notice.account_id(),
            notice.region(),
            notice.source_server_id(),
        )
        .await
        {
            Ok(resolution) => resolution,
            Err(e) => {
                error!(error = %e, "Failed to resolve source server");
                return Err(e);
            }
        };

        if kind.state_gated() && !resolution.state.should_process() {
            warn!(
                source_server_id = notice.source_server_id(),
                state = %resolution.state,
                "Source server is in a suppressed lifecycle state, event will not be processed"
            );
            return Ok(ProcessOutcome::Suppressed {
                source_server_id: notice.source_server_id().to_string(),
                state: resolution.state,
            });
        }

        let severity = self.severity.severity(kind);
        let event = ProcessedEvent::assemble(&notice, resolution.fqdn, severity);
        let message = match format_message(&event) {
            Ok(message) => message,
            Err(e) => {
                error!(error = %e, "Failed to render the notification message");
                return Err(e);
            }
        };

        let line = match log_line(&event) {
            Ok(line) => line,
            Err(e) => {
                error!(error = %e, "Failed to serialize the event record");
                return Err(e);
            }
        };
        if let Err(e) = self.event_log.append(&line).await {
            error!(error = %e, "Failed to append event to the event log");
            return Err(e);
        }
        if let Err(e) = self.notifier.publish(&message).await {
            error!(error = %e, "Failed to publish notification");
            return Err(e);
        }

        info!(kind = %kind, severity, "Event logged and published");
        Ok(ProcessOutcome::Published { event, message })
    }

    /// The event log collaborator.
    pub fn event_log(&self) -> &L {
        &self.event_log
    }

    /// The notifier collaborator.
    pub fn notifier(&self) -> &N {
        &self.notifier
    }
}

impl EventProcessor<MgnInventory, CloudWatchEventLog, SnsNotifier> {
    /// Build the AWS-backed processor from environment variables.
    ///
    /// Reads the gateway configuration, loads the severity table from
    /// `MGN_EVENTS_SEVERITY_FILE` (default [`DEFAULT_SEVERITY_FILE`]), and
    /// connects the three AWS collaborators.
    pub async fn from_env() -> Result<Self, EventError> {
        let config = GatewayConfig::from_env().map_err(|e| match e {
            GatewayError::Config(msg) => EventError::Config(msg),
            other => EventError::Gateway(other.to_string()),
        })?;
        let severity_file = env::var("MGN_EVENTS_SEVERITY_FILE")
            .unwrap_or_else(|_| DEFAULT_SEVERITY_FILE.to_string());
        let severity = SeverityMap::load(&severity_file)?;
        let (inventory, event_log, notifier) = connect(config).await;
        Ok(Self::new(severity, inventory, event_log, notifier))
    }
}

/// Severity-prefixed serialized record written to the event log.
fn log_line(event: &ProcessedEvent) -> Result<String, EventError> {
    let record = serde_json::to_string(event)?;
    Ok(format!("{}: {}", level_prefix(&event.severity), record))
}
