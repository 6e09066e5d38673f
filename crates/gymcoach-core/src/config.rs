//! Runtime configuration loaded from the environment.

use std::env;
use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use tracing::{info, warn};

use crate::error::{CoachError, CoachResult};
use crate::scroll_stack::StackConfig;

pub const ANALYZE_URL_VAR: &str = "GYMCOACH_ANALYZE_URL";
pub const GENERATE_URL_VAR: &str = "GYMCOACH_GENERATE_URL";
pub const CHAT_URL_VAR: &str = "GYMCOACH_CHAT_URL";
pub const LOGIN_URL_VAR: &str = "GYMCOACH_LOGIN_URL";
pub const TIMEOUT_VAR: &str = "GYMCOACH_TIMEOUT_SECS";
pub const SHRINK_STEP_VAR: &str = "GYMCOACH_SHRINK_STEP";

pub const DEFAULT_ANALYZE_URL: &str = "http://127.0.0.1:8000/analyze_movement";
pub const DEFAULT_CHAT_URL: &str = "http://127.0.0.1:8000/chat";

/// Data directory shared by the desktop app and the CLI (`~/.gymcoach/data`).
pub fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".gymcoach")
        .join("data")
}

/// Five minutes, enough for large video uploads.
pub const DEFAULT_TIMEOUT_SECS: u64 = 300;

/// Inference endpoint URLs. Requests go straight to each URL, no path appending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub analyze_url: String,
    pub generate_url: Option<String>,
    pub chat_url: String,
    /// When unset, login is a local placeholder.
    pub login_url: Option<String>,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            analyze_url: DEFAULT_ANALYZE_URL.to_string(),
            generate_url: None,
            chat_url: DEFAULT_CHAT_URL.to_string(),
            login_url: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CoachConfig {
    pub endpoints: Endpoints,
    pub request_timeout: Duration,
    pub stack: StackConfig,
}

impl Default for CoachConfig {
    fn default() -> Self {
        Self {
            endpoints: Endpoints::default(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            stack: StackConfig::default(),
        }
    }
}

impl CoachConfig {
    /// Load from `GYMCOACH_*` variables, falling back to defaults.
    pub fn from_env() -> CoachResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load using an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> CoachResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let endpoints = Endpoints {
            analyze_url: load_or(&lookup, ANALYZE_URL_VAR, DEFAULT_ANALYZE_URL),
            generate_url: load_unset_ok(&lookup, GENERATE_URL_VAR),
            chat_url: load_or(&lookup, CHAT_URL_VAR, DEFAULT_CHAT_URL),
            login_url: load_unset_ok(&lookup, LOGIN_URL_VAR),
        };

        let timeout_secs: u64 = parse_or(&lookup, TIMEOUT_VAR, DEFAULT_TIMEOUT_SECS)?;
        let shrink_step: f64 = parse_or(
            &lookup,
            SHRINK_STEP_VAR,
            crate::scroll_stack::DEFAULT_SHRINK_STEP,
        )?;

        let config = Self {
            endpoints,
            request_timeout: Duration::from_secs(timeout_secs),
            stack: StackConfig::default().with_shrink_step(shrink_step),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> CoachResult<()> {
        if self.request_timeout.is_zero() {
            return Err(CoachError::InvalidInput(format!(
                "{TIMEOUT_VAR} must be greater than zero"
            )));
        }
        self.stack.validate()
    }

    pub fn with_analyze_url(mut self, url: impl Into<String>) -> Self {
        self.endpoints.analyze_url = url.into();
        self
    }

    pub fn with_generate_url(mut self, url: impl Into<String>) -> Self {
        self.endpoints.generate_url = Some(url.into());
        self
    }

    pub fn with_chat_url(mut self, url: impl Into<String>) -> Self {
        self.endpoints.chat_url = url.into();
        self
    }

    pub fn with_login_url(mut self, url: impl Into<String>) -> Self {
        self.endpoints.login_url = Some(url.into());
        self
    }
}

fn load_optional<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Optional value with no default; logs once when unset.
fn load_unset_ok<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    let value = load_optional(lookup, key);
    if value.is_none() {
        info!("{key} not set");
    }
    value
}

fn load_or<F>(lookup: &F, key: &str, default: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    load_optional(lookup, key).unwrap_or_else(|| {
        info!("{key} using default: {default}");
        default.to_string()
    })
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> CoachResult<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + Display,
    T::Err: Display,
{
    match load_optional(lookup, key) {
        None => {
            info!("{key} using default: {default}");
            Ok(default)
        }
        Some(raw) => raw.parse().map_err(|e: T::Err| {
            warn!("Invalid {key} value '{raw}': {e}");
            CoachError::InvalidInput(format!("invalid {key} value '{raw}': {e}"))
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = CoachConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, CoachConfig::default());
        assert!(config.endpoints.generate_url.is_none());
        assert_eq!(config.request_timeout, Duration::from_secs(300));
    }

    #[test]
    fn test_overrides() {
        let config = CoachConfig::from_lookup(lookup(&[
            (ANALYZE_URL_VAR, "https://coach.example/analyze"),
            (GENERATE_URL_VAR, "https://coach.example/generate"),
            (TIMEOUT_VAR, "30"),
            (SHRINK_STEP_VAR, "0.1"),
        ]))
        .unwrap();
        assert_eq!(config.endpoints.analyze_url, "https://coach.example/analyze");
        assert_eq!(
            config.endpoints.generate_url.as_deref(),
            Some("https://coach.example/generate")
        );
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(config.stack.shrink_step, 0.1);
    }

    #[derive(Clone, Default)]
    struct Captured(std::sync::Arc<parking_lot::Mutex<Vec<u8>>>);

    impl std::io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_each_unset_variable_logs_once() {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            CoachConfig::from_lookup(lookup(&[])).unwrap();
        });

        let output = String::from_utf8(captured.0.lock().clone()).unwrap();
        for key in [
            ANALYZE_URL_VAR,
            GENERATE_URL_VAR,
            CHAT_URL_VAR,
            LOGIN_URL_VAR,
            TIMEOUT_VAR,
            SHRINK_STEP_VAR,
        ] {
            assert_eq!(output.matches(key).count(), 1, "{key} in:\n{output}");
        }
    }

    #[test]
    fn test_default_data_dir_is_shared_location() {
        assert!(default_data_dir().ends_with(".gymcoach/data"));
    }

    #[test]
    fn test_blank_values_count_as_unset() {
        let config = CoachConfig::from_lookup(lookup(&[(GENERATE_URL_VAR, "   ")])).unwrap();
        assert!(config.endpoints.generate_url.is_none());
    }

    #[test]
    fn test_invalid_values_are_errors() {
        assert!(CoachConfig::from_lookup(lookup(&[(TIMEOUT_VAR, "soon")])).is_err());
        assert!(CoachConfig::from_lookup(lookup(&[(TIMEOUT_VAR, "0")])).is_err());
        assert!(CoachConfig::from_lookup(lookup(&[(SHRINK_STEP_VAR, "-1")])).is_err());
    }
}
