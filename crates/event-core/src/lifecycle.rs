use std::fmt;

/// Lifecycle phase of a source server in the migration service.
///
/// The service grows new states over time; values this crate does not know
/// are preserved in [`LifecycleState::Other`] rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LifecycleState {
    Stopped,
    NotReady,
    ReadyForTest,
    Testing,
    ReadyForCutover,
    CuttingOver,
    Cutover,
    Disconnected,
    Discovered,
    Other(String),
}

impl LifecycleState {
    /// Parse the service's SCREAMING_SNAKE_CASE state string.
    pub fn parse(value: &str) -> Self {
        match value {
            "STOPPED" => LifecycleState::Stopped,
            "NOT_READY" => LifecycleState::NotReady,
            "READY_FOR_TEST" => LifecycleState::ReadyForTest,
            "TESTING" => LifecycleState::Testing,
            "READY_FOR_CUTOVER" => LifecycleState::ReadyForCutover,
            "CUTTING_OVER" => LifecycleState::CuttingOver,
            "CUTOVER" => LifecycleState::Cutover,
            "DISCONNECTED" => LifecycleState::Disconnected,
            "DISCOVERED" => LifecycleState::Discovered,
            other => LifecycleState::Other(other.to_string()),
        }
    }

    /// The service's string representation of this state.
    pub fn as_str(&self) -> &str {
        match self {
            LifecycleState::Stopped => "STOPPED",
            LifecycleState::NotReady => "NOT_READY",
            LifecycleState::ReadyForTest => "READY_FOR_TEST",
            LifecycleState::Testing => "TESTING",
            LifecycleState::ReadyForCutover => "READY_FOR_CUTOVER",
            LifecycleState::CuttingOver => "CUTTING_OVER",
            LifecycleState::Cutover => "CUTOVER",
            LifecycleState::Disconnected => "DISCONNECTED",
            LifecycleState::Discovered => "DISCOVERED",
            LifecycleState::Other(value) => value,
        }
    }

    /// Whether an event for a server in this state should be processed.
    ///
    /// Returns `false` for exactly `TESTING`, `READY_FOR_CUTOVER`,
    /// `CUTTING_OVER`, `CUTOVER`, and `DISCONNECTED`; `true` for every other
    /// state, including ones this crate does not know.
    pub fn should_process(&self) -> bool {
        !matches!(
            self,
            LifecycleState::Testing
                | LifecycleState::ReadyForCutover
                | LifecycleState::CuttingOver
                | LifecycleState::Cutover
                | LifecycleState::Disconnected
        )
    }
}

impl fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
