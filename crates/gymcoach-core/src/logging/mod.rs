//! Logging setup shared by the desktop app and the CLI.
//!
//! Console output goes through `tracing_subscriber::fmt`. The desktop app
//! also mirrors events into `<data_dir>/logs/<date>_desktop.jsonl`:
//!
//! ```bash
//! jq 'select(.level == "error")' ~/.local/share/gymcoach/logs/*.jsonl
//! ```
//!
//! `RUST_LOG` always takes precedence over the verbosity level.

pub mod entry;
pub mod layer;
pub mod writer;

use std::path::Path;

use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

pub use entry::LogEntry;
pub use layer::JsonlLayer;
pub use writer::{read_entries, LogWriter};

/// Default filter directive for a `-v` count.
pub fn filter_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Console-only logging on stderr, keeping stdout for command output.
pub fn init(verbosity: u8) {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(filter_for(verbosity)))
        .with_writer(std::io::stderr)
        .init();
}

/// Console plus JSONL file logging.
///
/// Falls back to console only if the log directory cannot be created.
pub fn init_with_file(verbosity: u8, logs_dir: impl AsRef<Path>, app: &str) {
    let registry = tracing_subscriber::registry()
        .with(env_filter(filter_for(verbosity)))
        .with(tracing_subscriber::fmt::layer());

    match JsonlLayer::new(logs_dir.as_ref(), app) {
        Ok(layer) => {
            let path = layer.log_path().to_path_buf();
            registry.with(layer).init();
            tracing::info!("Writing logs to {:?}", path);
        }
        Err(e) => {
            registry.init();
            tracing::warn!("File logging disabled: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(filter_for(0), "warn");
        assert_eq!(filter_for(1), "info");
        assert_eq!(filter_for(2), "debug");
        assert_eq!(filter_for(9), "trace");
    }
}
