use thiserror::Error;

/// Errors that can occur while classifying, resolving, or delivering an
/// operational event.
#[derive(Debug, Error)]
pub enum EventError {
    /// The payload matches none of the recognized event shapes.
    #[error("Unparsable event: {0}")]
    Unparsable(String),

    /// A recognized payload shape is missing a required field. `field` is
    /// the JSON Pointer path that failed to resolve.
    #[error("Malformed {kind} event: missing required field `{field}`")]
    Malformed {
        kind: &'static str,
        field: &'static str,
    },

    /// The inventory lookup returned no record for the server id.
    #[error("Source server {0} not found in the migration service inventory")]
    ServerNotFound(String),

    /// The inventory lookup returned more than one record for the server id.
    #[error("Ambiguous source server {id}: {count} inventory records matched")]
    AmbiguousServer { id: String, count: usize },

    /// An inventory record is missing a field the pipeline needs.
    #[error("Inventory record for {id} has no {field}")]
    IncompleteRecord { id: String, field: &'static str },

    /// The formatter was handed an event type outside the known set.
    #[error("Unknown event type: {0}")]
    UnknownEventKind(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Transport or service failure from a collaborator, message passed
    /// through unchanged.
    #[error("{0}")]
    Gateway(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_names_the_pointer_path() {
        let err = EventError::Malformed {
            kind: "Stalled",
            field: "/detail/state",
        };
        assert_eq!(
            err.to_string(),
            "Malformed Stalled event: missing required field `/detail/state`"
        );
    }

    #[test]
    fn test_gateway_passes_the_message_through_unchanged() {
        let err = EventError::Gateway("connection reset by peer".to_string());
        assert_eq!(err.to_string(), "connection reset by peer");
    }
}
