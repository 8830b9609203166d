//! Inventory double backed by a fixed list of records.

use async_trait::async_trait;

use event_core::{EventError, LifecycleState, SourceInventory, SourceServerRecord};

/// A `SourceInventory` that answers from a fixed list of records.
///
/// Matching mirrors the real service: only records whose id equals the
/// queried id are returned, so an inventory can hold servers for several
/// tests at once.
#[derive(Debug, Clone, Default)]
pub struct StaticInventory {
    records: Vec<SourceServerRecord>,
}

impl StaticInventory {
    /// Create an inventory with no records.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create an inventory holding the given records.
    pub fn with_records(records: Vec<SourceServerRecord>) -> Self {
        Self { records }
    }

    /// Create an inventory holding one record.
    pub fn with_record(record: SourceServerRecord) -> Self {
        Self::with_records(vec![record])
    }

    /// Create an inventory holding one plausible record for `id` in `state`,
    /// with an FQDN of `<id>.corp.example`.
    pub fn with_state(id: impl Into<String>, state: LifecycleState) -> Self {
        let id = id.into();
        Self::with_record(SourceServerRecord {
            arn: format!("arn:aws:mgn:us-east-1:111122223333:source-server/{id}"),
            fqdn: Some(format!("{id}.corp.example")),
            source_server_id: id,
            lifecycle_state: state,
        })
    }
}

#[async_trait]
impl SourceInventory for StaticInventory {
    async fn describe_source_server(
        &self,
        _account_id: &str,
        _region: &str,
        source_server_id: &str,
    ) -> Result<Vec<SourceServerRecord>, EventError> {
        Ok(self
            .records
            .iter()
            .filter(|record| record.source_server_id == source_server_id)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, state: LifecycleState) -> SourceServerRecord {
        SourceServerRecord {
            source_server_id: id.to_string(),
            arn: format!("arn:aws:mgn:us-east-1:111122223333:source-server/{id}"),
            lifecycle_state: state,
            fqdn: Some(format!("{id}.corp.example")),
        }
    }

    #[tokio::test]
    async fn test_empty_inventory_matches_nothing() {
        let inventory = StaticInventory::empty();
        let records = inventory
            .describe_source_server("111122223333", "us-east-1", "s-abc")
            .await
            .unwrap();
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn test_matching_is_filtered_by_id() {
        let inventory = StaticInventory::with_records(vec![
            record("s-abc", LifecycleState::Testing),
            record("s-def", LifecycleState::Discovered),
        ]);
        let records = inventory
            .describe_source_server("111122223333", "us-east-1", "s-def")
            .await
            .unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].source_server_id, "s-def");
        assert_eq!(records[0].fqdn.as_deref(), Some("s-def.corp.example"));
    }

    #[tokio::test]
    async fn test_duplicate_ids_are_all_returned() {
        let inventory = StaticInventory::with_records(vec![
            record("s-abc", LifecycleState::Discovered),
            record("s-abc", LifecycleState::Discovered),
        ]);
        let records = inventory
            .describe_source_server("111122223333", "us-east-1", "s-abc")
            .await
            .unwrap();
        assert_eq!(records.len(), 2);
    }

    #[tokio::test]
    async fn test_with_state_fabricates_a_full_record() {
        let inventory = StaticInventory::with_state("s-abc", LifecycleState::Cutover);
        let records = inventory
            .describe_source_server("111122223333", "us-east-1", "s-abc")
            .await
            .unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].lifecycle_state, LifecycleState::Cutover);
        assert_eq!(records[0].fqdn.as_deref(), Some("s-abc.corp.example"));
    }
}
