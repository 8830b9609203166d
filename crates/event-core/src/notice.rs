use serde_json::Value;

use crate::{EventError, EventKind};

const DETAIL_TYPE: &str = "/detail-type";
const EVENT_NAME: &str = "/eventName";
const METRIC_NAME: &str = "/detail/configuration/metrics/0/metricStat/metric/name";
const METRIC_SERVER_ID: &str =
    "/detail/configuration/metrics/0/metricStat/metric/dimensions/SourceServerID";

/// Label used in errors for alarm payloads before the metric name has
/// decided which of the two alarm kinds they are.
const ALARM_SHAPE: &str = "CloudWatchAlarm";

/// A classified event with every required field already extracted.
///
/// Parsing the raw payload into a `Notice` concentrates all field-presence
/// checks in one place; downstream stages only touch typed fields.
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    Stalled(StalledNotice),
    LagDuration(AlarmNotice),
    ElapsedReplicationDuration(AlarmNotice),
    Disconnect(DisconnectNotice),
}

/// An EventBridge notification that data replication has stalled.
#[derive(Debug, Clone, PartialEq)]
pub struct StalledNotice {
    pub detail_type: String,
    pub account_id: String,
    pub region: String,
    pub time: String,
    /// ARN of the affected source server.
    pub resource_arn: String,
    /// Server id, the portion of the ARN after its first `/`.
    pub source_server_id: String,
    pub state: String,
}

/// A CloudWatch alarm state change for one of the replication metrics.
#[derive(Debug, Clone, PartialEq)]
pub struct AlarmNotice {
    pub detail_type: String,
    pub account_id: String,
    pub region: String,
    pub time: String,
    /// ARN of the alarm itself.
    pub alarm_arn: String,
    pub alarm_name: String,
    /// Metric name, the discriminator between the two alarm kinds.
    pub metric_name: String,
    /// Server id from the metric's `SourceServerID` dimension.
    pub source_server_id: String,
    /// The alarm's new state, kept as the raw JSON object.
    pub state: Value,
    /// The alarm's previous state, kept as the raw JSON object.
    pub previous_state: Value,
}

/// A CloudTrail-style API event recording a disconnect from the service.
#[derive(Debug, Clone, PartialEq)]
pub struct DisconnectNotice {
    pub event_name: String,
    pub account_id: String,
    pub region: String,
    pub time: String,
    pub source_server_id: String,
    /// Lifecycle state from the API response element.
    pub lifecycle_state: String,
}

impl Notice {
    pub fn kind(&self) -> EventKind {
        match self {
            Notice::Stalled(_) => EventKind::Stalled,
            Notice::LagDuration(_) => EventKind::LagDuration,
            Notice::ElapsedReplicationDuration(_) => EventKind::ElapsedReplicationDuration,
            Notice::Disconnect(_) => EventKind::DisconnectFromService,
        }
    }

    pub fn account_id(&self) -> &str {
        match self {
            Notice::Stalled(n) => &n.account_id,
            Notice::LagDuration(n) | Notice::ElapsedReplicationDuration(n) => &n.account_id,
            Notice::Disconnect(n) => &n.account_id,
        }
    }

    pub fn region(&self) -> &str {
        match self {
            Notice::Stalled(n) => &n.region,
            Notice::LagDuration(n) | Notice::ElapsedReplicationDuration(n) => &n.region,
            Notice::Disconnect(n) => &n.region,
        }
    }

    pub fn source_server_id(&self) -> &str {
        match self {
            Notice::Stalled(n) => &n.source_server_id,
            Notice::LagDuration(n) | Notice::ElapsedReplicationDuration(n) => &n.source_server_id,
            Notice::Disconnect(n) => &n.source_server_id,
        }
    }
}

/// Classify a raw payload into a typed [`Notice`].
///
/// Payloads carrying a `detail-type` are EventBridge events: a detail-type
/// containing `Stalled` is a stalled-replication notice, anything else must
/// be a CloudWatch alarm whose metric name selects `LagDuration` or
/// `ElapsedReplicationDuration`. Payloads without a `detail-type` but with
/// an `eventName` are disconnect API events. Everything else is rejected.
pub fn classify(raw: &Value) -> Result<Notice, EventError> {
    if let Some(detail_type) = raw.pointer(DETAIL_TYPE).and_then(Value::as_str) {
        if detail_type.contains("Stalled") {
            return StalledNotice::from_raw(raw).map(Notice::Stalled);
        }
        let alarm = AlarmNotice::from_raw(raw)?;
        if alarm.metric_name.contains("LagDuration") {
            Ok(Notice::LagDuration(alarm))
        } else if alarm.metric_name.contains("ElapsedReplicationDuration") {
            Ok(Notice::ElapsedReplicationDuration(alarm))
        } else {
            Err(EventError::Unparsable(format!(
                "unrecognized alarm metric `{}`",
                alarm.metric_name
            )))
        }
    } else if raw.pointer(EVENT_NAME).is_some() {
        DisconnectNotice::from_raw(raw).map(Notice::Disconnect)
    } else {
        Err(EventError::Unparsable(
            "payload carries neither `detail-type` nor `eventName`".to_string(),
        ))
    }
}

impl StalledNotice {
    fn from_raw(raw: &Value) -> Result<Self, EventError> {
        let kind = EventKind::Stalled.label();
        let resource_arn = required_str(raw, kind, "/resources/0")?.to_string();
        let source_server_id = resource_arn
            .split_once('/')
            .map(|(_, id)| id.to_string())
            .ok_or(EventError::Malformed {
                kind,
                field: "/resources/0",
            })?;
        Ok(Self {
            detail_type: required_str(raw, kind, DETAIL_TYPE)?.to_string(),
            account_id: required_str(raw, kind, "/account")?.to_string(),
            region: required_str(raw, kind, "/region")?.to_string(),
            time: required_str(raw, kind, "/time")?.to_string(),
            resource_arn,
            source_server_id,
            state: required_str(raw, kind, "/detail/state")?.to_string(),
        })
    }
}

impl AlarmNotice {
    fn from_raw(raw: &Value) -> Result<Self, EventError> {
        Ok(Self {
            detail_type: required_str(raw, ALARM_SHAPE, DETAIL_TYPE)?.to_string(),
            account_id: required_str(raw, ALARM_SHAPE, "/account")?.to_string(),
            region: required_str(raw, ALARM_SHAPE, "/region")?.to_string(),
            time: required_str(raw, ALARM_SHAPE, "/time")?.to_string(),
            alarm_arn: required_str(raw, ALARM_SHAPE, "/resources/0")?.to_string(),
            alarm_name: required_str(raw, ALARM_SHAPE, "/detail/alarmName")?.to_string(),
            metric_name: required_str(raw, ALARM_SHAPE, METRIC_NAME)?.to_string(),
            source_server_id: required_str(raw, ALARM_SHAPE, METRIC_SERVER_ID)?.to_string(),
            state: required_value(raw, ALARM_SHAPE, "/detail/state")?,
            previous_state: required_value(raw, ALARM_SHAPE, "/detail/previousState")?,
        })
    }
}

impl DisconnectNotice {
    fn from_raw(raw: &Value) -> Result<Self, EventError> {
        let kind = EventKind::DisconnectFromService.label();
        Ok(Self {
            event_name: required_str(raw, kind, EVENT_NAME)?.to_string(),
            account_id: required_str(raw, kind, "/userIdentity/accountId")?.to_string(),
            region: required_str(raw, kind, "/awsRegion")?.to_string(),
            time: required_str(raw, kind, "/eventTime")?.to_string(),
            source_server_id: required_str(raw, kind, "/requestParameters/sourceServerID")?
                .to_string(),
            lifecycle_state: required_str(raw, kind, "/responseElements/lifeCycle/state")?
                .to_string(),
        })
    }
}

fn required_str<'a>(
    raw: &'a Value,
    kind: &'static str,
    field: &'static str,
) -> Result<&'a str, EventError> {
    raw.pointer(field)
        .and_then(Value::as_str)
        .ok_or(EventError::Malformed { kind, field })
}

fn required_value(
    raw: &Value,
    kind: &'static str,
    field: &'static str,
) -> Result<Value, EventError> {
    raw.pointer(field)
        .cloned()
        .ok_or(EventError::Malformed { kind, field })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn stalled_payload() -> Value {
        json!({
            "detail-type": "MGN Source Server Data Replication Stalled",
            "account": "111122223333",
            "region": "us-east-1",
            "time": "2023-04-11T08:05:00Z",
            "resources": [
                "arn:aws:mgn:us-east-1:111122223333:source-server/s-1234567890abcdef0"
            ],
            "detail": { "state": "STALLED" }
        })
    }

    fn alarm_payload(metric: &str) -> Value {
        json!({
            "detail-type": "CloudWatch Alarm State Change",
            "account": "111122223333",
            "region": "eu-west-1",
            "time": "2023-04-11T09:00:00Z",
            "resources": [
                "arn:aws:cloudwatch:eu-west-1:111122223333:alarm:mgn-lag-s-abc"
            ],
            "detail": {
                "alarmName": "mgn-lag-s-abc",
                "state": { "value": "ALARM", "reason": "Threshold Crossed" },
                "previousState": { "value": "OK" },
                "configuration": {
                    "metrics": [{
                        "metricStat": {
                            "metric": {
                                "name": metric,
                                "dimensions": { "SourceServerID": "s-0fedcba0987654321" }
                            }
                        }
                    }]
                }
            }
        })
    }

    fn disconnect_payload() -> Value {
        json!({
            "eventName": "DisconnectFromService",
            "eventTime": "2023-04-12T15:30:00Z",
            "awsRegion": "us-west-2",
            "userIdentity": { "accountId": "444455556666" },
            "requestParameters": { "sourceServerID": "s-1111222233334444a" },
            "responseElements": {
                "arn": "arn:aws:mgn:us-west-2:444455556666:source-server/s-1111222233334444a",
                "lifeCycle": { "state": "DISCONNECTED" }
            }
        })
    }

    #[test]
    fn test_classifies_stalled_events() {
        let notice = classify(&stalled_payload()).unwrap();
        assert_eq!(notice.kind(), EventKind::Stalled);
        assert_eq!(notice.account_id(), "111122223333");
        assert_eq!(notice.region(), "us-east-1");
        assert_eq!(notice.source_server_id(), "s-1234567890abcdef0");
        match notice {
            Notice::Stalled(n) => assert_eq!(n.state, "STALLED"),
            other => panic!("expected stalled notice, got {other:?}"),
        }
    }

    #[test]
    fn test_classifies_lag_duration_alarms() {
        let notice = classify(&alarm_payload("LagDuration")).unwrap();
        assert_eq!(notice.kind(), EventKind::LagDuration);
        assert_eq!(notice.source_server_id(), "s-0fedcba0987654321");
    }

    #[test]
    fn test_classifies_elapsed_replication_duration_alarms() {
        let notice = classify(&alarm_payload("ElapsedReplicationDuration")).unwrap();
        assert_eq!(notice.kind(), EventKind::ElapsedReplicationDuration);
        match notice {
            Notice::ElapsedReplicationDuration(n) => {
                assert_eq!(n.alarm_name, "mgn-lag-s-abc");
                assert_eq!(n.state["value"], "ALARM");
            }
            other => panic!("expected elapsed notice, got {other:?}"),
        }
    }

    #[test]
    fn test_classifies_disconnect_events() {
        let notice = classify(&disconnect_payload()).unwrap();
        assert_eq!(notice.kind(), EventKind::DisconnectFromService);
        assert_eq!(notice.account_id(), "444455556666");
        assert_eq!(notice.region(), "us-west-2");
        match notice {
            Notice::Disconnect(n) => assert_eq!(n.lifecycle_state, "DISCONNECTED"),
            other => panic!("expected disconnect notice, got {other:?}"),
        }
    }

    #[test]
    fn test_rejects_payloads_without_a_discriminator() {
        let err = classify(&json!({ "foo": "bar" })).unwrap_err();
        assert!(matches!(err, EventError::Unparsable(_)));
    }

    #[test]
    fn test_rejects_alarms_with_unrecognized_metrics() {
        let err = classify(&alarm_payload("CPUUtilization")).unwrap_err();
        match err {
            EventError::Unparsable(msg) => assert!(msg.contains("CPUUtilization")),
            other => panic!("expected unparsable, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_alarm_dimension_is_malformed() {
        let mut payload = alarm_payload("LagDuration");
        payload["detail"]["configuration"]["metrics"][0]["metricStat"]["metric"]["dimensions"] =
            json!({});
        let err = classify(&payload).unwrap_err();
        match err {
            EventError::Malformed { field, .. } => assert_eq!(field, METRIC_SERVER_ID),
            other => panic!("expected malformed, got {other:?}"),
        }
    }

    #[test]
    fn test_stalled_resource_without_separator_is_malformed() {
        let mut payload = stalled_payload();
        payload["resources"][0] = json!("not-an-arn");
        let err = classify(&payload).unwrap_err();
        assert!(matches!(
            err,
            EventError::Malformed {
                kind: "Stalled",
                field: "/resources/0"
            }
        ));
    }

    #[test]
    fn test_missing_disconnect_response_state_is_malformed() {
        let mut payload = disconnect_payload();
        payload["responseElements"] = json!({ "arn": "arn:aws:mgn:..." });
        let err = classify(&payload).unwrap_err();
        assert!(matches!(
            err,
            EventError::Malformed {
                field: "/responseElements/lifeCycle/state",
                ..
            }
        ));
    }
}
