// NewsGrid - terminal reader for NewsAPI headlines
//
// Architecture:
// - News client (reqwest): one GET per fetch ticket, classified into success or failure
// - Feed controller: per-route pagination state machine with generation tokens
// - Shell: routes, shared search term, scroll subscriptions, progress signal
// - TUI (ratatui): card grid, search, modals, diagnostics panel
// - Event system: fetches run on tokio tasks and report back over mpsc

mod cli;
mod config;
mod events;
mod feed;
mod headless;
mod logging;
mod news;
mod shell;
mod startup;
mod tui;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, RunMode};
use config::{Config, LogRotation, LoggingConfig};
use feed::FeedContext;
use logging::{LogBuffer, TuiLogLayer};
use news::NewsClient;
use shell::Shell;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

#[tokio::main]
async fn main() -> Result<()> {
    // Config subcommands are handled inside the CLI module
    let Some(mode) = Cli::parse().into_run_mode() else {
        return Ok(());
    };

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let tui_mode = matches!(mode, RunMode::Tui { .. });
    let log_buffer = LogBuffer::new();

    // The guard must outlive the program so buffered file logs flush
    let _file_guard = init_tracing(&config.logging, tui_mode, &log_buffer);

    if tui_mode {
        startup::log_startup(&config);
    } else {
        startup::print_startup(&config);
        if !config.has_api_key() {
            tracing::warn!("No NewsAPI key configured; requests will be rejected");
        }
    }

    let client = NewsClient::new(&config).context("Failed to build HTTP client")?;
    let shell = Shell::new(FeedContext::from_config(&config));

    match mode {
        RunMode::Tui { route } => {
            tracing::info!(route = %route, "Starting TUI");
            if let Err(e) = tui::run_tui(config, client, shell, log_buffer, route).await {
                tracing::error!("TUI error: {:?}", e);
                return Err(e);
            }
        }
        RunMode::Headless {
            route,
            search,
            pages,
        } => {
            tracing::info!(route = %route, pages, "TUI disabled, running in headless mode");
            headless::run(&client, shell, route, search.as_deref(), pages).await?;
        }
    }

    tracing::info!("Shutdown complete");
    Ok(())
}

/// Install the global subscriber
///
/// Precedence: RUST_LOG env var > config file > default "info".
/// TUI mode captures events into the log buffer (keeps the display clean);
/// headless mode writes them to stderr. File logging is JSON and optional.
fn init_tracing(
    logging: &LoggingConfig,
    tui_mode: bool,
    log_buffer: &LogBuffer,
) -> Option<WorkerGuard> {
    let default_filter = format!("newsgrid={}", logging.level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    let display_layer = if tui_mode {
        TuiLogLayer::new(log_buffer.clone()).boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .boxed()
    };

    let (file_layer, guard) = if logging.file_enabled {
        match std::fs::create_dir_all(&logging.file_dir) {
            Ok(()) => {
                let appender = match logging.file_rotation {
                    LogRotation::Hourly => {
                        tracing_appender::rolling::hourly(&logging.file_dir, &logging.file_prefix)
                    }
                    LogRotation::Daily => {
                        tracing_appender::rolling::daily(&logging.file_dir, &logging.file_prefix)
                    }
                    LogRotation::Never => {
                        tracing_appender::rolling::never(&logging.file_dir, &logging.file_prefix)
                    }
                };
                let (non_blocking, guard) = tracing_appender::non_blocking(appender);
                let layer = tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(non_blocking)
                    .with_ansi(false);
                (Some(layer), Some(guard))
            }
            Err(e) => {
                eprintln!(
                    "Warning: Could not create log directory {:?}: {}",
                    logging.file_dir, e
                );
                (None, None)
            }
        }
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(display_layer)
        .with(file_layer)
        .init();

    guard
}
