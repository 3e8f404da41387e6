use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::debug;

use jobdeck::config::AppConfig;
use jobdeck::storage::FileBackend;
use jobdeck::{telemetry, AppError, ServiceRegistry};

use crate::demo;

#[derive(Parser, Debug)]
#[command(
    name = "jobdeck",
    about = "Browse, post, and apply to jobs from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Walk a company and a candidate through the full flow (default command)
    Demo,
    /// Print per-collection record counts
    Counts,
    /// Clear every store and re-seed the default data
    Reset,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();

    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    debug!(data_dir = %config.storage.data_dir.display(), "opening storage");

    let backend = Arc::new(FileBackend::new(&config.storage.data_dir)?);
    let registry = ServiceRegistry::new(backend, config.latency.to_latency());
    registry.coordinator().initialize().await?;

    match cli.command.unwrap_or(Command::Demo) {
        Command::Demo => demo::run(&registry).await,
        Command::Counts => {
            let counts = registry.coordinator().counts().await;
            match serde_json::to_string_pretty(&counts) {
                Ok(json) => println!("{json}"),
                Err(err) => println!("counts unavailable: {err}"),
            }
            Ok(())
        }
        Command::Reset => {
            registry.coordinator().reset().await?;
            println!("stores reset to the default datasets");
            Ok(())
        }
    }
}
