use std::env;
use std::fmt;
use std::num::ParseIntError;
use std::path::PathBuf;
use std::time::Duration;

use crate::services::SimulatedLatency;

/// Distinguishes runtime behavior for different stages of the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the engine and its binary.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub storage: StorageConfig,
    pub latency: LatencyConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let data_dir = env::var("APP_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_data_dir());

        let latency_enabled = env::var("APP_LATENCY")
            .map(|value| !matches!(value.trim().to_ascii_lowercase().as_str(), "off" | "false" | "0"))
            .unwrap_or(true);
        let read_ms = delay_from_env("APP_READ_DELAY_MS", 300)?;
        let write_ms = delay_from_env("APP_WRITE_DELAY_MS", 600)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            storage: StorageConfig { data_dir },
            latency: LatencyConfig {
                enabled: latency_enabled,
                read_ms,
                write_ms,
            },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

fn delay_from_env(var: &'static str, default_ms: u64) -> Result<u64, ConfigError> {
    match env::var(var) {
        Ok(value) => value
            .trim()
            .parse::<u64>()
            .map_err(|source| ConfigError::InvalidDelay { var, source }),
        Err(_) => Ok(default_ms),
    }
}

fn default_data_dir() -> PathBuf {
    match directories::ProjectDirs::from("", "", "jobdeck") {
        Some(dirs) => dirs.data_dir().to_path_buf(),
        None => PathBuf::from("jobdeck-data"),
    }
}

/// Where the file backend keeps its per-collection files.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
}

/// Simulated request latency applied by every service method.
#[derive(Debug, Clone)]
pub struct LatencyConfig {
    pub enabled: bool,
    pub read_ms: u64,
    pub write_ms: u64,
}

impl LatencyConfig {
    pub fn to_latency(&self) -> SimulatedLatency {
        if !self.enabled {
            return SimulatedLatency::disabled();
        }
        SimulatedLatency::new(
            Duration::from_millis(self.read_ms),
            Duration::from_millis(self.write_ms),
        )
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidDelay {
        var: &'static str,
        source: ParseIntError,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidDelay { var, .. } => {
                write!(f, "{var} must be a whole number of milliseconds")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidDelay { source, .. } => Some(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        env::remove_var("APP_ENV");
        env::remove_var("APP_DATA_DIR");
        env::remove_var("APP_LATENCY");
        env::remove_var("APP_READ_DELAY_MS");
        env::remove_var("APP_WRITE_DELAY_MS");
        env::remove_var("APP_LOG_LEVEL");
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();

        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert!(config.latency.enabled);
        assert_eq!(config.latency.read_ms, 300);
        assert_eq!(config.latency.write_ms, 600);
        assert_eq!(config.telemetry.log_level, "info");
    }

    #[test]
    fn latency_can_be_switched_off() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_LATENCY", "off");

        let config = AppConfig::load().expect("config loads");
        assert!(!config.latency.enabled);
    }

    #[test]
    fn invalid_delay_is_rejected() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_READ_DELAY_MS", "soon");

        let error = AppConfig::load().expect_err("bad delay rejected");
        assert!(error.to_string().contains("APP_READ_DELAY_MS"));
        reset_env();
    }

    #[test]
    fn data_dir_override_wins() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_DATA_DIR", "/tmp/jobdeck-test-data");

        let config = AppConfig::load().expect("config loads");
        assert_eq!(
            config.storage.data_dir,
            PathBuf::from("/tmp/jobdeck-test-data")
        );
        reset_env();
    }
}
