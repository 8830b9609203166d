use std::fs;
use std::io::Read;

use clap::Parser;
use event_processor::{EventProcessor, ProcessOutcome};
use serde_json::Value;
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "mgn-monitor")]
#[command(about = "Process one AWS MGN operational event: classify, enrich, log, notify")]
struct Args {
    /// Path to the JSON event payload, or `-` to read it from stdin.
    #[arg(long, default_value = "-")]
    event: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let raw = read_event(&args.event)?;

    let processor = EventProcessor::from_env().await?;
    match processor.process(&raw).await? {
        ProcessOutcome::Published { event, message } => {
            info!(
                event_type = %event.event_type,
                severity = %event.severity,
                "Event published"
            );
            println!("{}", message);
        }
        ProcessOutcome::Suppressed {
            source_server_id,
            state,
        } => {
            println!(
                "Suppressed: source server {} is in lifecycle state {}",
                source_server_id, state
            );
        }
    }

    Ok(())
}

fn read_event(path: &str) -> Result<Value, Box<dyn std::error::Error>> {
    let text = if path == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        fs::read_to_string(path)?
    };

    Ok(serde_json::from_str(&text)?)
}
