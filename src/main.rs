//! colo-status main entry point
//!
//! This is the command-line interface for colo-status.

use clap::Parser;
use colo_status::config::load_config_or_default;
use colo_status::page::{build_http_client, get_colo_status};
use colo_status::output::render_extraction;
use colo_status::{OutputFormat, StatusError};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

/// colo-status: show Cloudflare data centers that are not fully operational
///
/// Fetches the Cloudflare status page and prints every data center whose
/// status is anything other than operational.
#[derive(Parser, Debug)]
#[command(name = "colo-status")]
#[command(version)]
#[command(about = "Show Cloudflare data centers that are not fully operational", long_about = None)]
struct Cli {
    /// Show results in an ascii table
    #[arg(long)]
    table: bool,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress everything but errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
///
/// Logs go to stderr; stdout carries only the rendered records.
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("colo_status=warn,error"),
            1 => EnvFilter::new("colo_status=info,warn"),
            2 => EnvFilter::new("colo_status=debug,info"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Fetches, extracts and renders the status records
///
/// Records from containers with a group name are rendered even when other
/// containers are missing one; the missing names are then returned as the
/// error so the process still exits non-zero.
async fn run(cli: &Cli) -> colo_status::Result<()> {
    let config = load_config_or_default(cli.config.as_deref())?;
    if let Some(path) = &cli.config {
        tracing::info!("Configuration loaded from: {}", path.display());
    }

    let client = build_http_client(&config.source).map_err(StatusError::HttpClient)?;

    let cancel = CancellationToken::new();
    let interrupt = tokio::spawn({
        let cancel = cancel.clone();
        async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::warn!("Interrupted, cancelling request");
                cancel.cancel();
            }
        }
    });

    tracing::info!("Fetching status page: {}", config.source.url);
    let result = get_colo_status(&client, &config.source, &cancel).await;
    interrupt.abort();

    let extraction = result?;
    tracing::info!(
        "Found {} components that are not operational",
        extraction.records.len()
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    render_extraction(extraction, OutputFormat::from_table_flag(cli.table), &mut out)
}
