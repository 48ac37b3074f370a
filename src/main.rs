use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use rendezvous_planner::adapters::inbound::FilesystemScenarioSource;
use rendezvous_planner::adapters::outbound::{init_combined_logger, render, ReportFormat};
use rendezvous_planner::application::PathPlanningService;
use rendezvous_planner::Config;

/// Path planning for a fleet of robots meeting at one rendezvous cell
#[derive(Parser, Debug)]
#[command(name = "rendezvous-planner", version, about)]
struct Cli {
    /// Scenario file, absolute or relative to the scenario directory
    input_file: String,

    /// TOML configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Plan robots concurrently
    #[arg(long)]
    parallel: bool,

    /// Give up on a robot after closing this many cells
    #[arg(long)]
    max_expansions: Option<usize>,

    /// Reject robots or rendezvous placed off-grid or on obstacles
    #[arg(long)]
    strict: bool,

    /// Output format
    #[arg(long, value_enum)]
    format: Option<Format>,

    /// Also write domain logs to this file
    #[arg(long)]
    log_file: Option<String>,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum Format {
    Text,
    Json,
}

impl From<Format> for ReportFormat {
    fn from(f: Format) -> Self {
        match f {
            Format::Text => ReportFormat::Text,
            Format::Json => ReportFormat::Json,
        }
    }
}

async fn load_config(cli: &Cli) -> Result<Config> {
    if !cli.config.exists() {
        info!("No configuration at {}, using defaults", cli.config.display());
    }
    let mut config = Config::load_or_default(&cli.config).await?;

    if cli.parallel {
        config.planner.parallel = true;
    }
    if cli.max_expansions.is_some() {
        config.planner.max_expansions = cli.max_expansions;
    }
    if cli.strict {
        config.planner.validate_positions = true;
    }
    if let Some(format) = cli.format {
        config.output.format = format.into();
    }
    if cli.log_file.is_some() {
        config.logging.file = cli.log_file.clone();
    }
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    // set_global_default leaves the `log` facade free for the fast_log file logger
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();
    let config = load_config(&cli).await?;

    let logger = init_combined_logger(config.logging.file.as_deref(), &config.logging.level);
    let source = FilesystemScenarioSource::new(config.scenarios.data_dir.as_ref().map(PathBuf::from))
        .with_validation(config.planner.validation());
    let service = PathPlanningService::new(Arc::new(source), logger, config.planner.clone());

    let run = match service.run(&cli.input_file).await {
        Ok(run) => run,
        Err(e) => {
            error!("Planning failed: {}", e);
            return Err(e.into());
        }
    };

    print!("{}", render(config.output.format, &run.scenario, &run.plans)?);
    Ok(())
}
