use std::fmt;

/// The four operational event kinds the pipeline recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// Data replication on a source server has stalled.
    Stalled,
    /// A replication-lag alarm changed state.
    LagDuration,
    /// A replication-age alarm changed state.
    ElapsedReplicationDuration,
    /// A source server was disconnected from the migration service.
    DisconnectFromService,
}

impl EventKind {
    /// Every kind, in classification order.
    pub const ALL: [EventKind; 4] = [
        EventKind::Stalled,
        EventKind::LagDuration,
        EventKind::ElapsedReplicationDuration,
        EventKind::DisconnectFromService,
    ];

    /// Stable label used as the severity-table key and in display output.
    pub fn label(&self) -> &'static str {
        match self {
            EventKind::Stalled => "Stalled",
            EventKind::LagDuration => "LagDuration",
            EventKind::ElapsedReplicationDuration => "ElapsedReplicationDuration",
            EventKind::DisconnectFromService => "DisconnectFromService",
        }
    }

    /// Whether events of this kind are gated on the server's live lifecycle
    /// state.
    ///
    /// Disconnect events always report a server that is already
    /// `DISCONNECTED`, a suppressed state, so the gate does not apply to
    /// them.
    pub fn state_gated(&self) -> bool {
        !matches!(self, EventKind::DisconnectFromService)
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
