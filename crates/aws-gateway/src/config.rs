use std::env;

use crate::GatewayError;

/// Default IAM role assumed in each monitored account.
pub const DEFAULT_ROLE_NAME: &str = "MGN-Monitoring-Generic-Central-Account-Lambda-Role";

/// Configuration for the AWS-backed collaborators.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// CloudWatch Logs group that holds the event log stream.
    pub log_group: String,
    /// SNS topic that receives notification messages.
    pub topic_arn: String,
    /// Name of the IAM role assumed in the target account.
    pub role_name: String,
}

impl GatewayConfig {
    /// Create a configuration with the default role name.
    pub fn new(log_group: impl Into<String>, topic_arn: impl Into<String>) -> Self {
        Self {
            log_group: log_group.into(),
            topic_arn: topic_arn.into(),
            role_name: DEFAULT_ROLE_NAME.to_string(),
        }
    }

    /// Override the assumed role name.
    pub fn with_role_name(mut self, role_name: impl Into<String>) -> Self {
        self.role_name = role_name.into();
        self
    }

    /// Build the configuration from environment variables.
    ///
    /// `MGN_EVENTS_LOG_GROUP` and `MGN_EVENTS_TOPIC_ARN` are required;
    /// `MGN_EVENTS_ROLE_NAME` falls back to [`DEFAULT_ROLE_NAME`].
    pub fn from_env() -> Result<Self, GatewayError> {
        let log_group = env::var("MGN_EVENTS_LOG_GROUP")
            .map_err(|_| GatewayError::Config("MGN_EVENTS_LOG_GROUP not set".to_string()))?;
        let topic_arn = env::var("MGN_EVENTS_TOPIC_ARN")
            .map_err(|_| GatewayError::Config("MGN_EVENTS_TOPIC_ARN not set".to_string()))?;
        let role_name =
            env::var("MGN_EVENTS_ROLE_NAME").unwrap_or_else(|_| DEFAULT_ROLE_NAME.to_string());
        Ok(Self {
            log_group,
            topic_arn,
            role_name,
        })
    }

    /// ARN of the role to assume in `account_id`.
    pub fn role_arn(&self, account_id: &str) -> String {
        format!("arn:aws:iam::{}:role/{}", account_id, self.role_name)
    }

    /// Session name used for the assume-role call into `account_id`.
    pub fn session_name(&self, account_id: &str) -> String {
        format!("mgn-event-session{account_id}")
    }

    /// Name of the event log stream inside the configured log group.
    pub fn log_stream_name(&self) -> String {
        format!("{}-MGN-Events", self.log_group)
    }
}
