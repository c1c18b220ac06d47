//! Runtime configuration.
//!
//! Values come from, in order of priority: the process environment, a `.env`
//! file, a `.env.example` file, then built-in defaults.

use std::path::{Path, PathBuf};
use std::time::Duration;

use url::Url;

use super::alerts::{AlertConfig, DEFAULT_SOUND_HIGH_THRESHOLD, DEFAULT_SOUND_MEDIUM_THRESHOLD};
use super::poller::{PollerConfig, DEFAULT_FANOUT};
use crate::error::{Result, ShakeError};

pub const DEFAULT_URL: &str = "https://api.raspberryshake.org/query/objects.json";
pub const DEFAULT_LOG_FILE: &str = "sensor.log";
pub const DEFAULT_SENSOR_ID: &str = "AM.R1B7B";
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 1000;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct MonitorConfig {
    pub url: String,
    pub log_file: PathBuf,
    pub sensor_id: String,
    pub sound_high_threshold: f64,
    pub sound_medium_threshold: f64,
    /// Redundant fetches per cycle
    pub fanout: usize,
    pub poll_interval_ms: u64,
    pub request_timeout_secs: u64,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            sensor_id: DEFAULT_SENSOR_ID.to_string(),
            sound_high_threshold: DEFAULT_SOUND_HIGH_THRESHOLD,
            sound_medium_threshold: DEFAULT_SOUND_MEDIUM_THRESHOLD,
            fanout: DEFAULT_FANOUT,
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl MonitorConfig {
    /// Load `.env` (or `.env.example`) from the working directory, then read
    /// the process environment.
    pub fn load() -> Self {
        load_dotenv(Path::new("."));
        Self::from_env()
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; missing keys use defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            url: lookup("URL").unwrap_or(defaults.url),
            log_file: lookup("LOG_FILE")
                .map(PathBuf::from)
                .unwrap_or(defaults.log_file),
            sensor_id: lookup("SENSOR_ID").unwrap_or(defaults.sensor_id),
            sound_high_threshold: parse_or(
                &lookup,
                "SOUND_HIGH_THRESHOLD",
                defaults.sound_high_threshold,
            ),
            sound_medium_threshold: parse_or(
                &lookup,
                "SOUND_MEDIUM_THRESHOLD",
                defaults.sound_medium_threshold,
            ),
            fanout: parse_or(&lookup, "FANOUT", defaults.fanout),
            poll_interval_ms: parse_or(&lookup, "POLL_INTERVAL_MS", defaults.poll_interval_ms),
            request_timeout_secs: parse_or(
                &lookup,
                "REQUEST_TIMEOUT_SECS",
                defaults.request_timeout_secs,
            ),
        }
    }

    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.url)
            .map_err(|e| ShakeError::config(format!("URL '{}' is invalid: {}", self.url, e)))?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(ShakeError::config(format!(
                "URL must use http or https, got '{}'",
                url.scheme()
            )));
        }

        if self.sensor_id.trim().is_empty() {
            return Err(ShakeError::config("SENSOR_ID cannot be empty"));
        }

        if self.fanout == 0 {
            return Err(ShakeError::config("FANOUT must be at least 1"));
        }

        if self.poll_interval_ms == 0 {
            return Err(ShakeError::config("POLL_INTERVAL_MS must be at least 1"));
        }

        if self.request_timeout_secs == 0 {
            return Err(ShakeError::config("REQUEST_TIMEOUT_SECS must be at least 1"));
        }

        for (name, value) in [
            ("SOUND_HIGH_THRESHOLD", self.sound_high_threshold),
            ("SOUND_MEDIUM_THRESHOLD", self.sound_medium_threshold),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ShakeError::config(format!(
                    "{} must be a positive number, got {}",
                    name, value
                )));
            }
        }

        if self.sound_medium_threshold >= self.sound_high_threshold {
            return Err(ShakeError::config(format!(
                "SOUND_MEDIUM_THRESHOLD ({}) must be below SOUND_HIGH_THRESHOLD ({})",
                self.sound_medium_threshold, self.sound_high_threshold
            )));
        }

        Ok(())
    }

    pub fn alert_config(&self) -> AlertConfig {
        AlertConfig {
            high_threshold: self.sound_high_threshold,
            medium_threshold: self.sound_medium_threshold,
        }
    }

    pub fn poller_config(&self) -> PollerConfig {
        PollerConfig {
            fanout: self.fanout,
            interval: Duration::from_millis(self.poll_interval_ms),
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Load `.env` from `dir`, falling back to `.env.example`.
///
/// Variables already set in the process environment are never overridden.
/// Returns the file that was loaded, if any.
pub fn load_dotenv(dir: &Path) -> Option<PathBuf> {
    for name in [".env", ".env.example"] {
        let path = dir.join(name);
        if path.is_file() {
            if let Err(e) = dotenvy::from_path(&path) {
                log::warn!("Failed to load {}: {}", path.display(), e);
            }
            return Some(path);
        }
    }
    None
}

fn parse_or<T, F>(lookup: &F, key: &str, default: T) -> T
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            log::warn!("Ignoring invalid {}={:?}, using default", key, raw);
            default
        }),
        None => default,
    }
}
