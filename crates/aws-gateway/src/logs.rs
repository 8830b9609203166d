use async_trait::async_trait;
use aws_sdk_cloudwatchlogs::types::InputLogEvent;
use chrono::Utc;
use tracing::{debug, info};

use event_core::{EventError, EventLog};

use crate::error::sdk_detail;
use crate::{GatewayConfig, GatewayError};

/// One-line-per-event writes to a CloudWatch Logs stream.
///
/// The stream is looked up before every write to pick up its current upload
/// sequence token, and created on first use.
#[derive(Debug, Clone)]
pub struct CloudWatchEventLog {
    client: aws_sdk_cloudwatchlogs::Client,
    log_group: String,
    log_stream: String,
}

impl CloudWatchEventLog {
    /// Create an event log writing to the configured group and stream.
    pub fn new(client: aws_sdk_cloudwatchlogs::Client, config: &GatewayConfig) -> Self {
        Self {
            client,
            log_group: config.log_group.clone(),
            log_stream: config.log_stream_name(),
        }
    }

    /// Append one line to the event stream, stamped with the current time.
    pub async fn write(&self, line: &str) -> Result<(), GatewayError> {
        let sequence_token = self.prepare_stream().await?;
        let event = InputLogEvent::builder()
            .timestamp(Utc::now().timestamp_millis())
            .message(line)
            .build()
            .map_err(|e| GatewayError::Logs {
                op: "PutLogEvents",
                message: e.to_string(),
            })?;
        let mut request = self
            .client
            .put_log_events()
            .log_group_name(&self.log_group)
            .log_stream_name(&self.log_stream)
            .log_events(event);
        if let Some(token) = sequence_token {
            request = request.sequence_token(token);
        }
        request.send().await.map_err(|e| GatewayError::Logs {
            op: "PutLogEvents",
            message: sdk_detail(&e),
        })?;
        debug!(stream = %self.log_stream, "Appended event log line");
        Ok(())
    }

    /// Find the stream's current sequence token, creating the stream when it
    /// does not exist yet.
    async fn prepare_stream(&self) -> Result<Option<String>, GatewayError> {
        let response = self
            .client
            .describe_log_streams()
            .log_group_name(&self.log_group)
            .log_stream_name_prefix(&self.log_stream)
            .send()
            .await
            .map_err(|e| GatewayError::Logs {
                op: "DescribeLogStreams",
                message: sdk_detail(&e),
            })?;
        let existing = response
            .log_streams()
            .iter()
            .find(|s| s.log_stream_name() == Some(self.log_stream.as_str()));
        match existing {
            Some(stream) => Ok(stream.upload_sequence_token().map(str::to_string)),
            None => {
                info!(
                    group = %self.log_group,
                    stream = %self.log_stream,
                    "Creating event log stream"
                );
                self.client
                    .create_log_stream()
                    .log_group_name(&self.log_group)
                    .log_stream_name(&self.log_stream)
                    .send()
                    .await
                    .map_err(|e| GatewayError::Logs {
                        op: "CreateLogStream",
                        message: sdk_detail(&e),
                    })?;
                Ok(None)
            }
        }
    }
}

#[async_trait]
impl EventLog for CloudWatchEventLog {
    async fn append(&self, line: &str) -> Result<(), EventError> {
        self.write(line)
            .await
            .map_err(|e| EventError::Gateway(e.to_string()))
    }
}
