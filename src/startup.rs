// Startup module - banner and configuration diagnostics
//
// Headless runs print the banner to stderr so stdout carries only cards.
// In TUI mode the same checks go through tracing into the diagnostics panel.
// The API key is only ever reported as present or missing.

use crate::config::{Config, VERSION};

/// ANSI color codes for terminal output
mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const MAGENTA: &str = "\x1b[35m";
}

/// One startup check for display
pub struct StartupCheck {
    pub name: &'static str,
    pub ok: bool,
    pub detail: String,
}

/// Checks shown at startup
pub fn startup_checks(config: &Config) -> Vec<StartupCheck> {
    vec![
        StartupCheck {
            name: "api key",
            ok: config.has_api_key(),
            detail: if config.has_api_key() {
                "configured".to_string()
            } else {
                "missing (set NEWS_API_KEY or api_key in config)".to_string()
            },
        },
        StartupCheck {
            name: "endpoint",
            ok: true,
            detail: config.api_url.to_string(),
        },
        StartupCheck {
            name: "country",
            ok: true,
            detail: config.feed.country.clone(),
        },
        StartupCheck {
            name: "file logs",
            ok: config.logging.file_enabled,
            detail: if config.logging.file_enabled {
                config.logging.file_dir.display().to_string()
            } else {
                "disabled".to_string()
            },
        },
    ]
}

/// Print the startup banner to stderr
pub fn print_startup(config: &Config) {
    use colors::*;

    eprintln!();
    eprintln!("  {BOLD}{CYAN}{}{RESET} {DIM}v{VERSION}{RESET}", config.title);
    eprintln!("  {DIM}Terminal news reader for NewsAPI{RESET}");
    eprintln!();

    if let Some(path) = Config::config_path() {
        if path.exists() {
            eprintln!("  {DIM}Config:{RESET} {GREEN}✓{RESET} {}", path.display());
        } else {
            eprintln!("  {DIM}Config:{RESET} {DIM}(using defaults){RESET}");
        }
    }
    eprintln!();

    for check in startup_checks(config) {
        let icon = if check.ok {
            format!("{GREEN}✓{RESET}")
        } else if check.name == "api key" {
            format!("{YELLOW}!{RESET}")
        } else {
            format!("{DIM}○{RESET}")
        };
        eprintln!("    {icon} {:<12} {DIM}{}{RESET}", check.name, check.detail);
    }

    eprintln!();
    eprintln!("  {MAGENTA}▸{RESET} Fetching headlines");
    eprintln!();
}

/// Write the startup checks to the log (shown in the diagnostics panel)
pub fn log_startup(config: &Config) {
    tracing::info!("{} v{}", config.title, VERSION);
    for check in startup_checks(config) {
        let icon = if check.ok { "✓" } else { "○" };
        tracing::info!("  {} {} - {}", icon, check.name, check.detail);
    }
    if !config.has_api_key() {
        tracing::warn!("No NewsAPI key configured; requests will be rejected");
    }
}
