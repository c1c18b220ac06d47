//! Audible alerts for admitted readings.
//!
//! Acceleration is bucketed with the sound threshold table and the level is
//! handed to an [`AlertSink`]. The dispatcher itself knows nothing about the
//! host platform.

use std::sync::Arc;

use super::classifier::{sound_tiers, AlertLevel, ThresholdTable};
use super::error_log::ErrorLog;
use super::reading::Reading;
use crate::error::Result;

/// Default acceleration above which the high alert plays (µm/s²)
pub const DEFAULT_SOUND_HIGH_THRESHOLD: f64 = 3500.0;

/// Default acceleration above which the medium alert plays (µm/s²)
pub const DEFAULT_SOUND_MEDIUM_THRESHOLD: f64 = 350.0;

/// Alert thresholds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlertConfig {
    pub high_threshold: f64,
    pub medium_threshold: f64,
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self {
            high_threshold: DEFAULT_SOUND_HIGH_THRESHOLD,
            medium_threshold: DEFAULT_SOUND_MEDIUM_THRESHOLD,
        }
    }
}

/// "Play alert at level L" capability.
pub trait AlertSink: Send + Sync {
    fn play(&self, level: AlertLevel) -> Result<()>;
}

/// Sink that never makes a sound.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentSink;

impl AlertSink for SilentSink {
    fn play(&self, _level: AlertLevel) -> Result<()> {
        Ok(())
    }
}

pub struct AlertDispatcher {
    tiers: ThresholdTable<AlertLevel>,
    sink: Box<dyn AlertSink>,
    error_log: Arc<ErrorLog>,
}

impl AlertDispatcher {
    pub fn new(config: AlertConfig, sink: Box<dyn AlertSink>, error_log: Arc<ErrorLog>) -> Self {
        Self {
            tiers: sound_tiers(config.medium_threshold, config.high_threshold),
            sink,
            error_log,
        }
    }

    pub fn level_for(&self, reading: &Reading) -> AlertLevel {
        self.tiers.classify(reading.acceleration)
    }

    /// Play the alert for `reading` and return the level chosen.
    ///
    /// Sink failures are recorded in the error log and otherwise ignored.
    pub fn dispatch(&self, reading: &Reading) -> AlertLevel {
        let level = self.level_for(reading);

        if let Err(e) = self.sink.play(level) {
            self.error_log.record(&e.to_string());
        }

        level
    }
}
