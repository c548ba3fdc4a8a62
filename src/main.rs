use anyhow::Result;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

use ghostline::editor::{self, InMemoryDocument};
use ghostline::{config, CompletionClient, RequestScheduler};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = config::load_config()?;
    let client = CompletionClient::from_config(&config)?;

    if !client.health_check().await {
        eprintln!(
            "Warning: no generation backend reachable at {}",
            config.ollama_url
        );
    }

    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut scheduler =
        RequestScheduler::new(client, Duration::from_millis(config.debounce_ms), tx);

    println!(
        "Type a line of code; a suggestion appears {} ms after you stop. Ctrl-D exits.",
        config.debounce_ms
    );

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                let document = InMemoryDocument::new(&line);
                if let Some(event) = editor::trigger_at(&document, 0, line.chars().count()) {
                    scheduler.on_trigger(event);
                }
            }
            Some(candidates) = rx.recv() => {
                if candidates.is_empty() {
                    println!("(no suggestion)");
                } else {
                    for (index, candidate) in candidates.iter().enumerate() {
                        println!("[{index}] {}", candidate.text);
                    }
                }
            }
        }
    }

    scheduler.shutdown();

    Ok(())
}
