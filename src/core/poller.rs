//! Poll cycle: redundant concurrent fetches, first-admitted-wins.
//!
//! Each cycle spawns `fanout` fetch tasks on the runtime's blocking pool.
//! Every task owns a clone of the sender of a channel sized to the fan-out,
//! so the channel closes by itself once the last task finishes. The control
//! loop drains readings in arrival order and stops at the first one the
//! [`PollState`] admits. Tasks still in flight are left to finish; their
//! sends fail quietly once the receiver is gone.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;

use super::fetcher::ReadingSource;
use super::poll_state::PollState;
use super::reading::Reading;
use crate::error::Result;

/// Default number of redundant fetches per cycle
pub const DEFAULT_FANOUT: usize = 5;

/// Default pause between cycles
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(1);

#[derive(Debug, Clone)]
pub struct PollerConfig {
    pub fanout: usize,
    pub interval: Duration,
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self {
            fanout: DEFAULT_FANOUT,
            interval: DEFAULT_POLL_INTERVAL,
        }
    }
}

pub struct Poller {
    source: Arc<dyn ReadingSource>,
    state: Arc<PollState>,
    config: PollerConfig,
    runtime: tokio::runtime::Runtime,
}

impl Poller {
    pub fn new(
        source: Arc<dyn ReadingSource>,
        state: Arc<PollState>,
        config: PollerConfig,
    ) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_time()
            .thread_name("poll-worker")
            .build()?;

        Ok(Self {
            source,
            state,
            config,
            runtime,
        })
    }

    pub fn state(&self) -> &Arc<PollState> {
        &self.state
    }

    /// Run one cycle and return the reading it admitted, if any.
    pub fn run_cycle(&self) -> Option<Reading> {
        let fanout = self.config.fanout.max(1);
        let (tx, mut rx) = mpsc::channel::<Reading>(fanout);

        for _ in 0..fanout {
            let tx = tx.clone();
            let source = Arc::clone(&self.source);
            self.runtime.spawn_blocking(move || {
                if let Some(reading) = source.fetch_reading() {
                    // Err only when the cycle already admitted a reading
                    let _ = tx.blocking_send(reading);
                }
            });
        }
        // The channel closes once every task has dropped its sender.
        drop(tx);

        while let Some(reading) = rx.blocking_recv() {
            if self.state.admit(&reading) {
                log::debug!(
                    "Admitted reading {} at {}",
                    reading.id,
                    reading.timestamp_millis
                );
                return Some(reading);
            }
            log::trace!("Discarded stale reading at {}", reading.timestamp_millis);
        }

        None
    }

    /// Poll until `shutdown` is set, handing each admitted reading to
    /// `on_reading`.
    pub fn run<F>(&self, shutdown: &AtomicBool, mut on_reading: F)
    where
        F: FnMut(&Reading),
    {
        log::info!(
            "Polling with fan-out {} every {:?}",
            self.config.fanout,
            self.config.interval
        );

        while !shutdown.load(Ordering::Relaxed) {
            if let Some(reading) = self.run_cycle() {
                on_reading(&reading);
            }
            std::thread::sleep(self.config.interval);
        }

        log::info!("Poll loop stopped");
    }
}
