use tracing::info;

use event_core::{EventError, LifecycleState, SourceInventory};

/// Result of resolving a source server against the inventory.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    /// Current lifecycle state of the server.
    pub state: LifecycleState,
    /// Full ARN of the server.
    pub arn: String,
    /// Hostname reported by the replication agent.
    pub fqdn: String,
}

/// Look up a source server and require exactly one inventory match.
///
/// Zero matches means the event names a server the target account does not
/// have; more than one means the id is ambiguous and acting on any single
/// record would be a guess. Both are errors.
pub async fn resolve_source<I: SourceInventory>(
    inventory: &I,
    account_id: &str,
    region: &str,
    source_server_id: &str,
) -> Result<Resolution, EventError> {
    let mut records = inventory
        .describe_source_server(account_id, region, source_server_id)
        .await?;
    let record = match records.len() {
        0 => return Err(EventError::ServerNotFound(source_server_id.to_string())),
        1 => records.remove(0),
        count => {
            return Err(EventError::AmbiguousServer {
                id: source_server_id.to_string(),
                count,
            })
        }
    };
    info!(
        arn = %record.arn,
        state = %record.lifecycle_state,
        "Resolved source server"
    );
    let fqdn = record.fqdn.ok_or(EventError::IncompleteRecord {
        id: source_server_id.to_string(),
        field: "fqdn",
    })?;
    Ok(Resolution {
        state: record.lifecycle_state,
        arn: record.arn,
        fqdn,
    })
}
