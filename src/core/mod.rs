// Core monitoring logic: fetch, select, dedup, classify, alert

pub mod alerts;
pub mod classifier;
pub mod config;
pub mod error_log;
pub mod fetcher;
pub mod poll_state;
pub mod poller;
pub mod reading;

// Re-export commonly used items
pub use alerts::{AlertConfig, AlertDispatcher, AlertSink, SilentSink};
pub use classifier::{acceleration_colors, sound_tiers, velocity_colors, AlertLevel, ThresholdTable};
pub use config::MonitorConfig;
pub use error_log::ErrorLog;
pub use fetcher::{HttpFetcher, ReadingSource, SensorFeed};
pub use poll_state::PollState;
pub use poller::{Poller, PollerConfig};
pub use reading::{Reading, ResponseEnvelope};
