#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use gymcoach_core::{default_data_dir, CoachConfig};

/// Global data directory, set from command line
static DATA_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Endpoint configuration, resolved once at startup
static CONFIG: OnceLock<CoachConfig> = OnceLock::new();

/// Get the data directory (set from command line or default)
pub fn get_data_dir() -> PathBuf {
    DATA_DIR.get().cloned().unwrap_or_else(default_data_dir)
}

pub fn get_config() -> CoachConfig {
    CONFIG.get().cloned().unwrap_or_default()
}

/// Visual AI Gym Coach - exercise form analysis
#[derive(Parser, Debug)]
#[command(name = "gymcoach-desktop")]
#[command(about = "Visual AI Gym Coach - AI-powered exercise form analysis")]
struct Args {
    /// Data directory for the session and history database (default: ~/.gymcoach/data)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Override GYMCOACH_ANALYZE_URL
    #[arg(long)]
    analyze_url: Option<String>,

    /// Override GYMCOACH_GENERATE_URL
    #[arg(long)]
    generate_url: Option<String>,

    /// Override GYMCOACH_CHAT_URL
    #[arg(long)]
    chat_url: Option<String>,

    /// Override GYMCOACH_LOGIN_URL
    #[arg(long)]
    login_url: Option<String>,
}

impl Args {
    fn apply_overrides(&self, mut config: CoachConfig) -> CoachConfig {
        if let Some(url) = &self.analyze_url {
            config = config.with_analyze_url(url);
        }
        if let Some(url) = &self.generate_url {
            config = config.with_generate_url(url);
        }
        if let Some(url) = &self.chat_url {
            config = config.with_chat_url(url);
        }
        if let Some(url) = &self.login_url {
            config = config.with_login_url(url);
        }
        config
    }
}

fn main() {
    let args = Args::parse();
    let data_dir = args.data_dir.clone().unwrap_or_else(default_data_dir);

    // The desktop app logs at info by default, one level above the CLI.
    let verbosity = args.verbose.saturating_add(1);
    gymcoach_core::logging::init_with_file(verbosity, data_dir.join("logs"), "desktop");

    let config = match CoachConfig::from_env() {
        Ok(config) => args.apply_overrides(config),
        Err(e) => {
            tracing::error!("Invalid GYMCOACH_* environment: {}", e);
            eprintln!("Invalid GYMCOACH_* environment: {e}");
            std::process::exit(2);
        }
    };

    tracing::info!(
        data_dir = ?data_dir,
        analyze_url = %config.endpoints.analyze_url,
        "Starting Visual AI Gym Coach"
    );

    // Store globals for the app root
    let _ = DATA_DIR.set(data_dir);
    let _ = CONFIG.set(config);

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Visual AI Gym Coach")
            .with_inner_size(dioxus::desktop::LogicalSize::new(1200.0, 900.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
