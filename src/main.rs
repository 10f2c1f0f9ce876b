//! Loglens API Server
//!
//! # Configuration
//!
//! Loaded from a TOML file (see `--config`, or the default locations),
//! with environment variable overrides:
//! - `LOGLENS_LOG_DIR`: Directory of .log source files (default: logs)
//! - `LOGLENS_API_HOST`: Host to bind to (default: 0.0.0.0)
//! - `LOGLENS_API_PORT`: Port to listen on (default: 8000)
//! - `LOGLENS_DEFAULT_PAGE_SIZE`: Page size when unspecified (default: 50)
//! - `LOGLENS_MAX_PAGE_SIZE`: Hard page size cap (default: 200)
//! - `LOGLENS_LOG_LEVEL` / `LOGLENS_LOG_FORMAT`: Logging (default: info, pretty)
//! - `RUST_LOG`: Overrides the log filter entirely

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use loglens::api::{serve, ApiConfig, AppState};
use loglens::config::Config;
use loglens::store::LogStore;

#[derive(Debug, Parser)]
#[command(name = "loglens", version, about = "Log file data access and analysis API")]
struct Args {
    /// Path to a TOML config file (defaults to the standard locations)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory of .log source files (overrides config)
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// Port to listen on (overrides config)
    #[arg(long)]
    port: Option<u16>,

    /// Print a default config file to stdout and exit
    #[arg(long)]
    print_config: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.print_config {
        print!("{}", loglens::config::generate_default_config());
        return Ok(());
    }

    let mut config = match &args.config {
        Some(path) => Config::load_with_env(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::load_default(),
    };
    if let Some(log_dir) = &args.log_dir {
        config.ingest.log_dir = log_dir.to_string_lossy().to_string();
    }
    if let Some(port) = args.port {
        config.api.port = port;
    }

    init_tracing(&config);

    tracing::info!("Starting loglens v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Log directory: {}", config.ingest.log_dir);

    let (store, report) = LogStore::open(&config.ingest.log_dir)
        .with_context(|| format!("loading logs from {}", config.ingest.log_dir))?;
    tracing::info!(
        files = report.files_scanned,
        records = report.records_loaded,
        skipped_lines = report.lines_skipped,
        skipped_files = report.files_skipped,
        "initial log load complete"
    );

    let api_config = ApiConfig::from_config(&config.api);
    let state = AppState::new(Arc::new(store), api_config.clone());

    serve(state, &api_config).await?;

    tracing::info!("Loglens stopped");
    Ok(())
}

/// Initialize the tracing subscriber from the logging config
fn init_tracing(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("loglens={},tower_http=info", config.logging.level).into()
    });

    let registry = tracing_subscriber::registry().with(filter);

    if config.logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
