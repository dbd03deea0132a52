use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use brightsync::{BrightSyncBuilder, BrightSyncConfig, BrightSyncError};
use clap::Parser;
use log::{error, info, warn};

/// Exit code used when startup or the initial test cycle fails.
const EXIT_INIT_FAILURE: u8 = 1;
/// Exit code used when the watch loop dies on an unrecoverable fault.
const EXIT_FAULT: u8 = 2;

/// Keep display brightness in sync with a kernel backlight brightness file
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Brightness file to watch
    #[arg(long, value_name = "path")]
    file: Option<PathBuf>,

    /// Output name handed to the display control tool
    #[arg(long, value_name = "name")]
    output: Option<String>,

    /// Display control tool to invoke
    #[arg(long, value_name = "command")]
    tool: Option<String>,

    /// Poll interval of the fallback watcher, in seconds
    #[arg(long, value_name = "seconds", default_value_t = 2)]
    poll_interval: u64,

    /// Log every observed event and applied value
    #[arg(short, long)]
    verbose: bool,
}

/// Failures that terminate the daemon, mapped to distinct exit codes.
#[derive(Debug)]
enum Failure {
    /// Startup or the initial test cycle failed.
    Init(BrightSyncError),
    /// The watch loop hit an unrecoverable fault.
    Fault(BrightSyncError),
}

impl Failure {
    fn exit_code(&self) -> u8 {
        match self {
            Failure::Init(_) => EXIT_INIT_FAILURE,
            Failure::Fault(_) => EXIT_FAULT,
        }
    }

    fn error(&self) -> &BrightSyncError {
        match self {
            Failure::Init(e) | Failure::Fault(e) => e,
        }
    }
}

async fn run(args: Args) -> Result<(), Failure> {
    info!("starting");
    let mut config = BrightSyncConfig::new().await.map_err(Failure::Init)?;
    if let Some(file) = args.file {
        config.brightness_file = file;
    }
    if let Some(output) = args.output {
        config.output = output;
    }
    if let Some(tool) = args.tool {
        config.tool = tool;
    }
    let brightness_file = config.brightness_file.clone();

    let mut sync = BrightSyncBuilder::new()
        .with_config(config)
        .with_poll_interval(Duration::from_secs(args.poll_interval))
        .build()
        .await
        .map_err(Failure::Init)?;

    // The first cycle doubles as a startup test. An unreadable brightness
    // file at this point is fatal, a failing display tool is not.
    info!("testing brightness control");
    let raw = sync.read().await.map_err(Failure::Init)?;
    info!("found brightness {raw}");
    match sync.apply(raw).await {
        Ok(normalized) => info!("applied initial brightness {normalized:.2}"),
        Err(e) => warn!("could not apply initial brightness: {e}"),
    }

    info!("watching {}", brightness_file.display());
    loop {
        tokio::select! {
            res = tokio::signal::ctrl_c() => {
                res.map_err(|e| Failure::Fault(e.into()))?;
                info!("interrupted, stopping");
                return Ok(());
            }
            res = sync.next() => {
                res.map_err(Failure::Fault)?;
                info!("brightness file modified, updating");
                match sync.sync().await {
                    Ok(normalized) => info!("brightness set to {normalized:.2}"),
                    Err(e) => warn!("update skipped: {e}"),
                }
            }
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(if args.verbose { "debug" } else { "info" }),
    )
    .init();

    match run(args).await {
        Ok(()) => {
            info!("exiting");
            ExitCode::SUCCESS
        }
        Err(failure) => {
            error!("{}", failure.error());
            ExitCode::from(failure.exit_code())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_categories_map_to_distinct_exit_codes() {
        let init = Failure::Init(BrightSyncError::Other("boom".into()));
        let fault = Failure::Fault(BrightSyncError::Other("boom".into()));

        assert_eq!(init.exit_code(), EXIT_INIT_FAILURE);
        assert_eq!(fault.exit_code(), EXIT_FAULT);
        assert_ne!(init.exit_code(), 0);
        assert_ne!(fault.exit_code(), 0);
        assert_ne!(init.exit_code(), fault.exit_code());
    }
}
