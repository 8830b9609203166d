use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_mgn::types::{DescribeSourceServersRequestFilters, SourceServer};
use tracing::{debug, info};

use event_core::{EventError, LifecycleState, SourceInventory, SourceServerRecord};

use crate::error::sdk_detail;
use crate::{GatewayConfig, GatewayError};

/// Cross-account source-server lookups against the migration service.
///
/// Each lookup assumes the monitoring role in the event's account, builds a
/// regional MGN client from the temporary credentials, and queries the
/// inventory filtered to the one server id.
#[derive(Debug, Clone)]
pub struct MgnInventory {
    sts: aws_sdk_sts::Client,
    config: GatewayConfig,
}

impl MgnInventory {
    /// Create an inventory client from an STS client and configuration.
    pub fn new(sts: aws_sdk_sts::Client, config: &GatewayConfig) -> Self {
        Self {
            sts,
            config: config.clone(),
        }
    }

    /// Query the target account's inventory for one server id.
    ///
    /// Returns every matching record; callers enforce how many matches they
    /// accept.
    pub async fn lookup(
        &self,
        account_id: &str,
        region: &str,
        source_server_id: &str,
    ) -> Result<Vec<SourceServerRecord>, GatewayError> {
        let client = self.mgn_client(account_id, region).await?;
        debug!(source_server_id, region, "Querying source-server inventory");
        let filters = DescribeSourceServersRequestFilters::builder()
            .source_server_ids(source_server_id)
            .build();
        let response = client
            .describe_source_servers()
            .filters(filters)
            .send()
            .await
            .map_err(|e| GatewayError::DescribeSourceServers(sdk_detail(&e)))?;
        response.items().iter().map(record_from_item).collect()
    }

    /// Build a regional MGN client from credentials for the target account.
    async fn mgn_client(
        &self,
        account_id: &str,
        region: &str,
    ) -> Result<aws_sdk_mgn::Client, GatewayError> {
        let credentials = self.assume_role(account_id).await?;
        let provider = aws_sdk_mgn::config::Credentials::new(
            credentials.access_key_id(),
            credentials.secret_access_key(),
            Some(credentials.session_token().to_string()),
            None,
            "mgn-event-monitoring",
        );
        let config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(region.to_string()))
            .credentials_provider(provider)
            .load()
            .await;
        Ok(aws_sdk_mgn::Client::new(&config))
    }

    /// Assume the monitoring role in the target account.
    async fn assume_role(
        &self,
        account_id: &str,
    ) -> Result<aws_sdk_sts::types::Credentials, GatewayError> {
        let role_arn = self.config.role_arn(account_id);
        info!(role_arn = %role_arn, "Assuming monitoring role in target account");
        let response = self
            .sts
            .assume_role()
            .role_arn(&role_arn)
            .role_session_name(self.config.session_name(account_id))
            .send()
            .await
            .map_err(|e| GatewayError::AssumeRole {
                role_arn: role_arn.clone(),
                message: sdk_detail(&e),
            })?;
        response
            .credentials()
            .cloned()
            .ok_or(GatewayError::MissingCredentials(role_arn))
    }
}

fn record_from_item(item: &SourceServer) -> Result<SourceServerRecord, GatewayError> {
    let source_server_id = item
        .source_server_id()
        .ok_or(GatewayError::Item("sourceServerID"))?
        .to_string();
    let arn = item.arn().ok_or(GatewayError::Item("arn"))?.to_string();
    let state = item
        .life_cycle()
        .and_then(|lc| lc.state())
        .ok_or(GatewayError::Item("lifeCycle.state"))?;
    let fqdn = item
        .source_properties()
        .and_then(|p| p.identification_hints())
        .and_then(|h| h.fqdn())
        .map(str::to_string);
    Ok(SourceServerRecord {
        source_server_id,
        arn,
        lifecycle_state: LifecycleState::parse(state.as_str()),
        fqdn,
    })
}

#[async_trait]
impl SourceInventory for MgnInventory {
    async fn describe_source_server(
        &self,
        account_id: &str,
        region: &str,
        source_server_id: &str,
    ) -> Result<Vec<SourceServerRecord>, EventError> {
        self.lookup(account_id, region, source_server_id)
            .await
            .map_err(|e| EventError::Gateway(e.to_string()))
    }
}
