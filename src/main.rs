use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use observatorio::core::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    /// Override the reporting service address from the configuration
    #[arg(short, long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl From<Commands> for observatorio::AppCommand {
    fn from(cmd: Commands) -> observatorio::AppCommand {
        match cmd {
            Commands::Dashboard { year, json } => observatorio::AppCommand::Dashboard { year, json },
            Commands::Kpis { year } => observatorio::AppCommand::Kpis { year },
            Commands::Ranking { year } => observatorio::AppCommand::Ranking { year },
            Commands::Dependency => observatorio::AppCommand::Dependency,
            Commands::Health => observatorio::AppCommand::Health,
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Display the full dashboard: KPIs, country ranking and China dependency
    Dashboard {
        /// Restrict the aggregation to a single year
        #[arg(short, long)]
        year: Option<u32>,
        /// Print the assembled view as JSON instead of rendering it
        #[arg(long)]
        json: bool,
    },
    /// Display the KPI cards
    Kpis {
        /// Restrict the aggregation to a single year
        #[arg(short, long)]
        year: Option<u32>,
    },
    /// Display the per-country ranking chart
    Ranking {
        /// Restrict the aggregation to a single year
        #[arg(short, long)]
        year: Option<u32>,
    },
    /// Display the top products by China share
    Dependency,
    /// Check that the reporting service is up
    Health,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => observatorio::cli::setup::setup(),
        Some(cmd) => {
            observatorio::run_command(
                cmd.into(),
                cli.config_path.as_deref(),
                cli.base_url.as_deref(),
            )
            .await
        }
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
