//! HTTP fetch of the data source and per-sensor selection.

use std::sync::Arc;
use std::time::Duration;

use super::error_log::ErrorLog;
use super::reading::{Reading, ResponseEnvelope};
use crate::error::{Result, ShakeError};

/// Something that can produce the latest reading for one sensor.
///
/// The poll cycle calls this from several worker threads at once.
pub trait ReadingSource: Send + Sync {
    /// `None` means no usable reading this attempt; failures are already
    /// recorded by the source.
    fn fetch_reading(&self) -> Option<Reading>;
}

/// Blocking GET against the data source.
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
    url: String,
    error_log: Arc<ErrorLog>,
}

impl HttpFetcher {
    pub fn new(url: &str, timeout: Duration, error_log: Arc<ErrorLog>) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("shakewatch/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            url: url.to_string(),
            error_log,
        })
    }

    /// Fetch and parse one envelope. Fail-soft: every error is logged and
    /// becomes `None`.
    pub fn fetch(&self) -> Option<ResponseEnvelope> {
        match self.try_fetch() {
            Ok(envelope) => Some(envelope),
            Err(e) => {
                self.error_log.record(&e.to_string());
                None
            }
        }
    }

    fn try_fetch(&self) -> Result<ResponseEnvelope> {
        let response = self.client.get(&self.url).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(ShakeError::HttpStatus(status.as_u16()));
        }

        let body = response
            .text()
            .map_err(|e| ShakeError::body_read(e.to_string()))?;

        parse_envelope(&body)
    }
}

pub fn parse_envelope(body: &str) -> Result<ResponseEnvelope> {
    Ok(serde_json::from_str(body)?)
}

/// Fetcher plus selector for the configured sensor.
pub struct SensorFeed {
    fetcher: HttpFetcher,
    sensor_id: String,
}

impl SensorFeed {
    pub fn new(fetcher: HttpFetcher, sensor_id: &str) -> Self {
        Self {
            fetcher,
            sensor_id: sensor_id.to_string(),
        }
    }
}

impl ReadingSource for SensorFeed {
    fn fetch_reading(&self) -> Option<Reading> {
        let reading = self.fetcher.fetch()?.select(&self.sensor_id);
        if reading.is_none() {
            log::debug!("Sensor {} not present in response", self.sensor_id);
        }
        reading
    }
}
