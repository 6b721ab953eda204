use clap::{Parser, Subcommand};
use inventory_reporter::adapters::outbound::filesystem::SETTINGS_FILENAME;
use std::path::PathBuf;

/// Report project inventory metadata to an inventory collector
#[derive(Parser, Debug)]
#[command(name = "inventory-reporter")]
#[command(version)]
#[command(about = "Report project inventory metadata to an inventory collector", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Save the global collector URL and API token
    Configure(ConfigureArgs),
    /// Send the inventory record once
    Report(ReportArgs),
    /// Run a build command, then send the inventory record whatever its result
    Run(RunArgs),
    /// Print the JSON body that would be sent
    Payload(PayloadArgs),
}

#[derive(clap::Args, Debug)]
pub struct SettingsArgs {
    /// Collector settings file
    #[arg(
        long,
        value_name = "PATH",
        env = "INVENTORY_REPORTER_SETTINGS",
        default_value = SETTINGS_FILENAME
    )]
    pub settings: PathBuf,
}

#[derive(clap::Args, Debug)]
pub struct ConfigureArgs {
    #[command(flatten)]
    pub settings: SettingsArgs,

    /// Base URL of the collector (keeps the stored value if omitted)
    #[arg(long, value_name = "URL")]
    pub collector_url: Option<String>,

    /// Bearer token for the collector (keeps the stored value if omitted)
    #[arg(long, value_name = "TOKEN")]
    pub collector_api_token: Option<String>,
}

#[derive(clap::Args, Debug)]
pub struct ReportArgs {
    /// Job configuration file (defaults to ./inventory.config.yml)
    #[arg(short, long, value_name = "PATH")]
    pub job: Option<PathBuf>,

    #[command(flatten)]
    pub settings: SettingsArgs,

    /// Overrides the stored collector URL for this run
    #[arg(long, value_name = "URL", env = "INVENTORY_COLLECTOR_URL")]
    pub collector_url: Option<String>,

    /// Overrides the stored API token for this run
    #[arg(
        long,
        value_name = "TOKEN",
        env = "INVENTORY_COLLECTOR_API_TOKEN",
        hide_env_values = true
    )]
    pub collector_api_token: Option<String>,

    /// Give up on the collector after this many seconds (default: wait indefinitely)
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,
}

#[derive(clap::Args, Debug)]
pub struct RunArgs {
    #[command(flatten)]
    pub report: ReportArgs,

    /// Build command and its arguments, after `--`
    #[arg(last = true, required = true, value_name = "BUILD_COMMAND")]
    pub command: Vec<String>,
}

#[derive(clap::Args, Debug)]
pub struct PayloadArgs {
    /// Job configuration file (defaults to ./inventory.config.yml)
    #[arg(short, long, value_name = "PATH")]
    pub job: Option<PathBuf>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
