mod core;
mod driver;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use driver::config::RunConfig;
use driver::handler::{self, Event};

/// Local/container runner around the event-shaped report handler.
#[derive(Parser)]
#[command(
    name = "costline",
    about = "Daily AWS cost report with per-service trend sparklines",
    version
)]
struct Cli {
    /// Invocation event JSON file (defaults to an empty event)
    #[arg(short, long)]
    event: Option<PathBuf>,

    /// Build and print the report without writing to S3 or the webhook
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let event = match &cli.event {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read event file {}", path.display()))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("failed to parse event file {}", path.display()))?
        }
        None => Event::default(),
    };
    let cfg = RunConfig::from_env()?;

    let report = handler::run(event, &cfg, cli.dry_run).await?;
    if cli.dry_run {
        println!("{}\n\n{}", report.summary, report.table);
    }
    Ok(())
}
