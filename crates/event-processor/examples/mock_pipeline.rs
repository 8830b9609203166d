//! Runs the event pipeline against the in-memory doubles.
//!
//! This example feeds a stalled-replication payload through the processor
//! twice: once for a server that is actively replicating (published) and
//! once for the same server mid-cutover (suppressed). No AWS access is
//! needed.
//!
//! Run with: cargo run -p event-processor --example mock_pipeline

use event_core::SeverityMap;
use event_processor::{EventProcessor, ProcessOutcome};
use mock_gateway::{LifecycleState, RecordingLog, RecordingNotifier, StaticInventory};
use serde_json::{json, Value};

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

async fn run_once(state: LifecycleState) -> Result<(), Box<dyn std::error::Error>> {
    let processor = EventProcessor::new(
        SeverityMap::default(),
        StaticInventory::with_state("s-1234567890abcdef0", state),
        RecordingLog::new(),
        RecordingNotifier::new(),
    );

    match processor.process(&stalled_payload()).await? {
        ProcessOutcome::Published { message, .. } => {
            println!("Published notification:\n{message}\n");
            println!("Event log lines:");
            for line in processor.event_log().lines() {
                println!("  {line}");
            }
        }
        ProcessOutcome::Suppressed {
            source_server_id,
            state,
        } => {
            println!("Suppressed: {source_server_id} is in lifecycle state {state}");
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    // An actively replicating server: the event is logged and published.
    run_once(LifecycleState::Other("CONTINUOUS".to_string())).await?;

    println!();

    // The same server mid-cutover: the event is suppressed.
    run_once(LifecycleState::Cutover).await?;

    Ok(())
}
