// CLI module - command-line argument parsing and handlers
//
// Subcommands:
// - headlines: print feed cards as plain text (no TUI)
// - config --show|--path|--reset|--edit: configuration management
//
// With no subcommand the TUI starts on `--route` (default `/`).

use crate::config::{Config, VERSION};
use crate::shell::Route;
use clap::{Parser, Subcommand};
use std::io::Write;
use std::process::Command;

/// Terminal news reader for NewsAPI headlines
#[derive(Parser, Debug)]
#[command(name = "newsgrid")]
#[command(version = VERSION)]
#[command(about = "Terminal news reader for NewsAPI headlines", long_about = None)]
pub struct Cli {
    /// Initial route (/, /business, /entertainment, /sports, /health, /science, /technology, /about)
    #[arg(long, global = true, value_name = "PATH")]
    pub route: Option<Route>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print headlines to stdout without starting the TUI
    Headlines {
        /// Search term applied to the feed
        #[arg(long, value_name = "TERM")]
        search: Option<String>,

        /// Number of pages to fetch
        #[arg(long, default_value_t = 1, value_name = "N")]
        pages: u32,
    },

    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Reset config file to defaults
        #[arg(long)]
        reset: bool,

        /// Open config file in $EDITOR
        #[arg(long)]
        edit: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,
    },
}

/// What `main` should run once the CLI has been dealt with
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunMode {
    Tui {
        route: Route,
    },
    Headless {
        route: Route,
        search: Option<String>,
        pages: u32,
    },
}

impl Cli {
    /// Resolve the run mode. `None` means a config command was handled here.
    pub fn into_run_mode(self) -> Option<RunMode> {
        let route = self.route.unwrap_or_default();
        match self.command {
            None => Some(RunMode::Tui { route }),
            Some(Commands::Headlines { search, pages }) => Some(RunMode::Headless {
                route,
                search,
                pages: pages.max(1),
            }),
            Some(Commands::Config {
                show,
                reset,
                edit,
                path,
            }) => {
                if path {
                    handle_config_path();
                } else if show {
                    handle_config_show();
                } else if reset {
                    handle_config_reset();
                } else if edit {
                    handle_config_edit();
                } else {
                    println!("Usage: newsgrid config [--show|--reset|--edit|--path]");
                    println!();
                    println!("Options:");
                    println!("  --show    Display effective configuration");
                    println!("  --reset   Reset config file to defaults");
                    println!("  --edit    Open config file in $EDITOR");
                    println!("  --path    Show config file path");
                }
                None
            }
        }
    }
}

fn handle_config_path() {
    match Config::config_path() {
        Some(path) => println!("{}", path.display()),
        None => {
            eprintln!("Error: Could not determine config path");
            std::process::exit(1);
        }
    }
}

fn handle_config_show() {
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    println!("# Effective configuration (env > file > defaults)");
    println!();
    // The key itself is never printed
    println!(
        "api_key = {}",
        if config.has_api_key() {
            "\"(set)\""
        } else {
            "\"\""
        }
    );
    println!("api_url = {:?}", config.api_url.as_str());
    println!("title = {:?}", config.title);
    println!("theme = {:?}", config.theme);
    println!("request_timeout_secs = {}", config.request_timeout_secs);
    println!();
    println!("[feed]");
    println!("country = {:?}", config.feed.country);
    println!("page_size = {}", config.feed.page_size);
    println!("scroll_threshold = {}", config.feed.scroll_threshold);
    println!();
    println!("[logging]");
    println!("level = {:?}", config.logging.level);
    println!("file_enabled = {}", config.logging.file_enabled);
    println!(
        "file_dir = {:?}",
        config.logging.file_dir.display().to_string()
    );
    println!("file_rotation = {:?}", config.logging.file_rotation.as_str());
    println!("file_prefix = {:?}", config.logging.file_prefix);

    println!();
    if let Some(path) = Config::config_path() {
        if path.exists() {
            println!("# Source: {}", path.display());
        } else {
            println!("# Source: defaults (no config file)");
        }
    }
}

fn handle_config_reset() {
    let Some(path) = Config::config_path() else {
        eprintln!("Error: Could not determine config path");
        std::process::exit(1);
    };

    if path.exists() {
        eprint!(
            "Config file exists at {}. Overwrite? [y/N] ",
            path.display()
        );
        let _ = std::io::stderr().flush();

        let mut input = String::new();
        if std::io::stdin().read_line(&mut input).is_err()
            || !input.trim().eq_ignore_ascii_case("y")
        {
            println!("Aborted.");
            return;
        }
    }

    if let Some(parent) = path.parent() {
        if let Err(e) = std::fs::create_dir_all(parent) {
            eprintln!("Error creating directory: {}", e);
            std::process::exit(1);
        }
    }

    if let Err(e) = std::fs::write(&path, Config::default().to_toml()) {
        eprintln!("Error writing config: {}", e);
        std::process::exit(1);
    }

    println!("Config reset to defaults: {}", path.display());
}

fn handle_config_edit() {
    let Some(path) = Config::config_path() else {
        eprintln!("Error: Could not determine config path");
        std::process::exit(1);
    };

    if !path.exists() {
        Config::ensure_config_exists();
        println!("Created new config file: {}", path.display());
    }

    let editor = std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(windows) {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        });

    println!("Opening {} with {}", path.display(), editor);

    match Command::new(&editor).arg(&path).status() {
        Ok(s) if s.success() => {}
        Ok(s) => {
            eprintln!("Editor exited with status: {}", s);
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Failed to launch editor '{}': {}", editor, e);
            eprintln!("Set $EDITOR environment variable to your preferred editor");
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn no_subcommand_starts_tui_on_home() {
        let mode = parse(&["newsgrid"]).into_run_mode();
        assert_eq!(mode, Some(RunMode::Tui { route: Route::Home }));
    }

    #[test]
    fn route_flag_selects_initial_route() {
        let mode = parse(&["newsgrid", "--route", "/sports"]).into_run_mode();
        assert_eq!(
            mode,
            Some(RunMode::Tui {
                route: Route::Sports
            })
        );
    }

    #[test]
    fn headlines_takes_route_search_and_pages() {
        let mode = parse(&[
            "newsgrid",
            "headlines",
            "--route",
            "/business",
            "--search",
            "election",
            "--pages",
            "3",
        ])
        .into_run_mode();
        assert_eq!(
            mode,
            Some(RunMode::Headless {
                route: Route::Business,
                search: Some("election".to_string()),
                pages: 3,
            })
        );
    }

    #[test]
    fn zero_pages_still_fetches_one() {
        let mode = parse(&["newsgrid", "headlines", "--pages", "0"]).into_run_mode();
        assert!(matches!(mode, Some(RunMode::Headless { pages: 1, .. })));
    }

    #[test]
    fn unknown_route_is_rejected() {
        assert!(Cli::try_parse_from(["newsgrid", "--route", "/weather"]).is_err());
    }
}
