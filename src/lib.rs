pub mod cli;
pub mod core;
pub mod providers;

use anyhow::Result;
use tracing::{debug, info};

/// Commands that talk to the reporting service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppCommand {
    Dashboard { year: Option<u32>, json: bool },
    Kpis { year: Option<u32> },
    Ranking { year: Option<u32> },
    Dependency,
    Health,
}

/// Loads configuration, builds the service client and runs `command`.
///
/// `base_url` overrides the configured service address when given.
pub async fn run_command(
    command: AppCommand,
    config_path: Option<&str>,
    base_url: Option<&str>,
) -> Result<()> {
    info!("Observatorio starting...");

    let config = match config_path {
        Some(path) => core::config::AppConfig::load_from_path(path)?,
        None => core::config::AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    let base_url = base_url.unwrap_or(&config.api.base_url);
    let client = providers::ApiClient::new(base_url)?;
    debug!(base_url = %client.base_url(), ?command, "Running command");

    let order = config.dependency.order();
    let bar_width = config.chart.bar_width;

    match command {
        AppCommand::Dashboard { year, json } => {
            cli::dashboard::run(&client, year, order, bar_width, json).await
        }
        AppCommand::Kpis { year } => cli::kpis::run(&client, year).await,
        AppCommand::Ranking { year } => cli::ranking::run(&client, year, bar_width).await,
        AppCommand::Dependency => cli::dependency::run(&client, order).await,
        AppCommand::Health => cli::health::run(&client).await,
    }
}
