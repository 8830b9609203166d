use async_trait::async_trait;
use tracing::info;

use event_core::{EventError, Notifier};

use crate::error::sdk_detail;
use crate::{GatewayConfig, GatewayError};

/// Notification delivery to an SNS topic.
#[derive(Debug, Clone)]
pub struct SnsNotifier {
    client: aws_sdk_sns::Client,
    topic_arn: String,
}

impl SnsNotifier {
    /// Create a notifier publishing to the configured topic.
    pub fn new(client: aws_sdk_sns::Client, config: &GatewayConfig) -> Self {
        Self {
            client,
            topic_arn: config.topic_arn.clone(),
        }
    }

    /// Publish one message to the topic.
    pub async fn send(&self, message: &str) -> Result<(), GatewayError> {
        let response = self
            .client
            .publish()
            .topic_arn(&self.topic_arn)
            .message(message)
            .send()
            .await
            .map_err(|e| GatewayError::Publish(sdk_detail(&e)))?;
        info!(
            topic_arn = %self.topic_arn,
            message_id = response.message_id().unwrap_or("unknown"),
            "Published notification"
        );
        Ok(())
    }
}

#[async_trait]
impl Notifier for SnsNotifier {
    async fn publish(&self, message: &str) -> Result<(), EventError> {
        self.send(message)
            .await
            .map_err(|e| EventError::Gateway(e.to_string()))
    }
}
