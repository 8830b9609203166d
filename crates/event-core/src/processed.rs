use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::notice::{AlarmNotice, DisconnectNotice, Notice, StalledNotice};

/// The uniform record emitted for every processed event.
///
/// Every field is populated at construction and the record is never mutated
/// afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessedEvent {
    /// AWS account the event originated in.
    pub account_id: String,
    /// Region the event originated in.
    pub region: String,
    /// Event-type label: the detail-type, the detail-type joined with the
    /// alarm metric, or the API event name.
    pub event_type: String,
    /// Timestamp as reported by the source payload.
    pub timestamp: String,
    /// Source server the event concerns.
    pub source_server_id: String,
    /// Hostname of the source server, from the inventory lookup.
    pub fqdn: String,
    /// Kind-specific detail map.
    pub detail: Map<String, Value>,
    /// Severity assigned from the severity table.
    pub severity: String,
}

impl ProcessedEvent {
    /// Build the record from a classified notice, the resolved FQDN, and
    /// the severity the table assigns to the notice's kind.
    pub fn assemble(
        notice: &Notice,
        fqdn: impl Into<String>,
        severity: impl Into<String>,
    ) -> Self {
        match notice {
            Notice::Stalled(n) => Self::from_stalled(n, fqdn.into(), severity.into()),
            Notice::LagDuration(n) | Notice::ElapsedReplicationDuration(n) => {
                Self::from_alarm(n, fqdn.into(), severity.into())
            }
            Notice::Disconnect(n) => Self::from_disconnect(n, fqdn.into(), severity.into()),
        }
    }

    fn from_stalled(n: &StalledNotice, fqdn: String, severity: String) -> Self {
        let mut detail = Map::new();
        detail.insert("state".to_string(), Value::String(n.state.clone()));
        Self {
            account_id: n.account_id.clone(),
            region: n.region.clone(),
            event_type: n.detail_type.clone(),
            timestamp: n.time.clone(),
            source_server_id: n.source_server_id.clone(),
            fqdn,
            detail,
            severity,
        }
    }

    fn from_alarm(n: &AlarmNotice, fqdn: String, severity: String) -> Self {
        let mut detail = Map::new();
        detail.insert("alarm_name".to_string(), Value::String(n.alarm_name.clone()));
        detail.insert("resources".to_string(), Value::String(n.alarm_arn.clone()));
        detail.insert("state".to_string(), n.state.clone());
        detail.insert("previous_state".to_string(), n.previous_state.clone());
        Self {
            account_id: n.account_id.clone(),
            region: n.region.clone(),
            event_type: format!("{} : {}", n.detail_type, n.metric_name),
            timestamp: n.time.clone(),
            source_server_id: n.source_server_id.clone(),
            fqdn,
            detail,
            severity,
        }
    }

    fn from_disconnect(n: &DisconnectNotice, fqdn: String, severity: String) -> Self {
        let mut detail = Map::new();
        detail.insert(
            "state".to_string(),
            Value::String(n.lifecycle_state.clone()),
        );
        Self {
            account_id: n.account_id.clone(),
            region: n.region.clone(),
            event_type: n.event_name.clone(),
            timestamp: n.time.clone(),
            source_server_id: n.source_server_id.clone(),
            fqdn,
            detail,
            severity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn stalled_notice() -> Notice {
        Notice::Stalled(StalledNotice {
            detail_type: "MGN Source Server Data Replication Stalled".to_string(),
            account_id: "111122223333".to_string(),
            region: "us-east-1".to_string(),
            time: "2023-04-11T08:05:00Z".to_string(),
            resource_arn: "arn:aws:mgn:us-east-1:111122223333:source-server/s-abc".to_string(),
            source_server_id: "s-abc".to_string(),
            state: "STALLED".to_string(),
        })
    }

    fn lag_notice() -> Notice {
        Notice::LagDuration(AlarmNotice {
            detail_type: "CloudWatch Alarm State Change".to_string(),
            account_id: "111122223333".to_string(),
            region: "eu-west-1".to_string(),
            time: "2023-04-11T09:00:00Z".to_string(),
            alarm_arn: "arn:aws:cloudwatch:eu-west-1:111122223333:alarm:lag".to_string(),
            alarm_name: "lag".to_string(),
            metric_name: "LagDuration".to_string(),
            source_server_id: "s-def".to_string(),
            state: json!({ "value": "ALARM" }),
            previous_state: json!({ "value": "OK" }),
        })
    }

    #[test]
    fn test_stalled_record_uses_the_detail_type_as_event_type() {
        let event = ProcessedEvent::assemble(&stalled_notice(), "web01.corp.example", "Critical");
        assert_eq!(
            event.event_type,
            "MGN Source Server Data Replication Stalled"
        );
        assert_eq!(event.fqdn, "web01.corp.example");
        assert_eq!(event.severity, "Critical");
        assert_eq!(event.detail["state"], json!("STALLED"));
    }

    #[test]
    fn test_alarm_record_joins_detail_type_and_metric() {
        let event = ProcessedEvent::assemble(&lag_notice(), "db02.corp.example", "Major");
        assert_eq!(
            event.event_type,
            "CloudWatch Alarm State Change : LagDuration"
        );
        assert_eq!(event.detail["alarm_name"], json!("lag"));
        assert_eq!(event.detail["previous_state"], json!({ "value": "OK" }));
    }

    #[test]
    fn test_disconnect_record_uses_the_event_name() {
        let notice = Notice::Disconnect(DisconnectNotice {
            event_name: "DisconnectFromService".to_string(),
            account_id: "444455556666".to_string(),
            region: "us-west-2".to_string(),
            time: "2023-04-12T15:30:00Z".to_string(),
            source_server_id: "s-xyz".to_string(),
            lifecycle_state: "DISCONNECTED".to_string(),
        });
        let event = ProcessedEvent::assemble(&notice, "app03.corp.example", "Major");
        assert_eq!(event.event_type, "DisconnectFromService");
        assert_eq!(event.account_id, "444455556666");
        assert_eq!(event.detail["state"], json!("DISCONNECTED"));
    }

    #[test]
    fn test_records_serialize_to_json() {
        let event = ProcessedEvent::assemble(&stalled_notice(), "web01", "Critical");
        let line = serde_json::to_string(&event).unwrap();
        let back: ProcessedEvent = serde_json::from_str(&line).unwrap();
        assert_eq!(back, event);
    }
}
