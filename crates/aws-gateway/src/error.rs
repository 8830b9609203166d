use aws_sdk_sts::error::ProvideErrorMetadata;
use thiserror::Error;

/// Errors from the AWS-backed collaborators.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// STS refused or failed the assume-role call.
    #[error("Failed to assume role {role_arn}: {message}")]
    AssumeRole { role_arn: String, message: String },

    /// STS accepted the call but returned no credentials.
    #[error("STS returned no credentials for {0}")]
    MissingCredentials(String),

    /// The inventory query failed.
    #[error("DescribeSourceServers failed: {0}")]
    DescribeSourceServers(String),

    /// An inventory item came back without a field the record needs.
    #[error("Inventory item is missing {0}")]
    Item(&'static str),

    /// A CloudWatch Logs call failed.
    #[error("CloudWatch Logs {op} failed: {message}")]
    Logs { op: &'static str, message: String },

    /// The SNS publish failed.
    #[error("SNS publish failed: {0}")]
    Publish(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Flatten an SDK error to its service code and message.
pub(crate) fn sdk_detail(err: &impl ProvideErrorMetadata) -> String {
    format!(
        "({}) {}",
        err.code().unwrap_or("unknown"),
        err.message().unwrap_or("no message")
    )
}
