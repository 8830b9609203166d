use crate::{EventError, ProcessedEvent};

/// Render the notification message for a processed event.
///
/// The template is selected by substring match on the event-type label, in
/// the order Stalled, LagDuration, ElapsedReplicationDuration,
/// DisconnectFromService. Rendering is deterministic; a label matching none
/// of the four is an error, never a default template.
pub fn format_message(event: &ProcessedEvent) -> Result<String, EventError> {
    let condition = if event.event_type.contains("Stalled") {
        "is experiencing stalled data replication"
    } else if event.event_type.contains("LagDuration") {
        "is experiencing lag in replication"
    } else if event.event_type.contains("ElapsedReplicationDuration") {
        "has exceeded the replication threshold of 90 days"
    } else if event.event_type.contains("DisconnectFromService") {
        "has been disconnected from the AWS MGN service"
    } else {
        return Err(EventError::UnknownEventKind(event.event_type.clone()));
    };
    Ok(format!(
        "Hello,\n\nThe Hostname {} in AWS Account {} in the region {} {}.\nThis is a {} event which occurred on {}.",
        event.fqdn, event.account_id, event.region, condition, event.severity, event.timestamp
    ))
}
