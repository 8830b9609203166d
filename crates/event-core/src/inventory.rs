use async_trait::async_trait;

use crate::{EventError, LifecycleState};

/// One row of the migration service's source-server inventory.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceServerRecord {
    /// Source server identifier (`s-` prefixed).
    pub source_server_id: String,
    /// Full ARN of the source server.
    pub arn: String,
    /// Current lifecycle state.
    pub lifecycle_state: LifecycleState,
    /// FQDN identification hint, when the replication agent reported one.
    pub fqdn: Option<String>,
}

/// Read access to the migration service's source-server inventory.
///
/// Implementations run the query in the account and region named by the
/// event, filtered to the single server id. The full matching list is
/// returned so the caller can enforce that exactly one record matched.
#[async_trait]
pub trait SourceInventory: Send + Sync {
    async fn describe_source_server(
        &self,
        account_id: &str,
        region: &str,
        source_server_id: &str,
    ) -> Result<Vec<SourceServerRecord>, EventError>;
}
