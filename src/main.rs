mod cli;

use anyhow::Context;
use cli::{Args, Command, ConfigureArgs, PayloadArgs, ReportArgs, RunArgs};
use inventory_reporter::prelude::*;
use inventory_reporter::shared::error::ExitCode;
use std::path::Path;
use std::process;
use std::time::Duration;

fn main() {
    let args = Args::parse_args();

    let exit_code = match run(args) {
        Ok(code) => code,
        Err(e) => {
            print_error(&e);
            ExitCode::ApplicationError
        }
    };

    process::exit(exit_code.as_i32());
}

fn print_error(e: &anyhow::Error) {
    eprintln!("\n❌ An error occurred:\n");
    eprintln!("{}", e);

    // Display error chain
    for cause in e.chain().skip(1) {
        eprintln!("\nCaused by: {}", cause);
    }

    eprintln!();
}

fn run(args: Args) -> Result<ExitCode> {
    match args.command {
        Command::Configure(args) => configure(args),
        Command::Report(args) => report(args),
        Command::Run(args) => run_build(args),
        Command::Payload(args) => print_payload(args),
    }
}

fn configure(args: ConfigureArgs) -> Result<ExitCode> {
    let store = SettingsFile::new(args.settings.settings);

    let current = store.load()?;
    let updated = current.with_overrides(args.collector_url, args.collector_api_token);
    store.save(&updated)?;

    eprintln!("✅ Collector settings saved: {}", store.path().display());
    Ok(ExitCode::Success)
}

fn report(args: ReportArgs) -> Result<ExitCode> {
    let item = read_item(args.job.as_deref())?;
    let config = load_config(&args)?;

    let use_case = ReportInventoryUseCase::new(create_client(args.timeout)?, StderrReportLog::new());
    use_case.execute(&item, &config)?;

    Ok(ExitCode::Success)
}

fn run_build(args: RunArgs) -> Result<ExitCode> {
    // Bind the configuration before the build so a broken job file fails fast.
    let item = read_item(args.report.job.as_deref())?;
    let config = load_config(&args.report)?;

    let finalizer = FinalizeBuildUseCase::new(ReportInventoryUseCase::new(
        create_client(args.report.timeout)?,
        StderrReportLog::new(),
    ));
    let finalized = finalizer.run(|| run_command(&args.command), &item, &config);

    if let Err(e) = &finalized.report {
        print_error(e);
    }

    Ok(finalized_exit_code(&finalized))
}

/// A failed build wins over a failed report.
fn finalized_exit_code(finalized: &FinalizedBuild) -> ExitCode {
    if !finalized.build.is_success() {
        ExitCode::BuildFailed
    } else if finalized.report.is_err() {
        ExitCode::ApplicationError
    } else {
        ExitCode::Success
    }
}

fn print_payload(args: PayloadArgs) -> Result<ExitCode> {
    let item = read_item(args.job.as_deref())?;
    let payload = PayloadBuilder::build(&item)?;
    println!("{}", payload.as_str());
    Ok(ExitCode::Success)
}

fn read_item(job: Option<&Path>) -> Result<InventoryItem> {
    let path = job
        .map(Path::to_path_buf)
        .unwrap_or_else(|| JobConfigFile::default_path(Path::new(".")));
    JobConfigFile::new().read_inventory_item(&path)
}

fn load_config(args: &ReportArgs) -> Result<CollectorConfig> {
    let stored = SettingsFile::new(args.settings.settings.clone()).load()?;
    Ok(stored.with_overrides(args.collector_url.clone(), args.collector_api_token.clone()))
}

fn create_client(timeout: Option<u64>) -> Result<HttpCollectorClient> {
    match timeout {
        Some(secs) => HttpCollectorClient::with_timeout(Duration::from_secs(secs)),
        None => HttpCollectorClient::new(),
    }
}

fn run_command(command: &[String]) -> Result<BuildStatus> {
    let (program, rest) = command
        .split_first()
        .context("No build command given")?;

    let status = process::Command::new(program)
        .args(rest)
        .status()
        .with_context(|| format!("Failed to start build command '{}'", program))?;

    Ok(BuildStatus::from_exit_code(status.code()))
}
