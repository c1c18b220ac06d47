//! Append-only failure log with a size cap.
//!
//! Every message opens the file, appends one timestamped line and closes it
//! again, all under the log's own lock so lines from concurrent fetch tasks
//! never interleave. Once the file grows past the cap it is deleted and the
//! next write starts a fresh one.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Local;
use parking_lot::Mutex;

use crate::error::{Result, ShakeError};

/// Default size cap (100 MiB)
pub const MAX_LOG_SIZE: u64 = 100 * 1024 * 1024;

#[derive(Debug)]
pub struct ErrorLog {
    path: PathBuf,
    max_size: u64,
    lock: Mutex<()>,
}

impl ErrorLog {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self::with_max_size(path, MAX_LOG_SIZE)
    }

    pub fn with_max_size<P: Into<PathBuf>>(path: P, max_size: u64) -> Self {
        Self {
            path: path.into(),
            max_size,
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Record a failure message.
    ///
    /// Never fails: if the log itself cannot be written, the problem is
    /// reported on stderr through the `log` facade instead.
    pub fn record(&self, message: &str) {
        log::debug!("{}", message);

        if let Err(e) = self.append(message) {
            log::error!("{} (message was: {})", e, message);
        }
    }

    fn append(&self, message: &str) -> Result<()> {
        let _guard = self.lock.lock();

        self.truncate_if_oversized();

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| ShakeError::log_write(format!("{}: {}", self.path.display(), e)))?;

        writeln!(
            file,
            "{} {}",
            Local::now().format("%Y/%m/%d %H:%M:%S"),
            message
        )
        .map_err(|e| ShakeError::log_write(format!("{}: {}", self.path.display(), e)))?;

        Ok(())
    }

    fn truncate_if_oversized(&self) {
        let oversized = fs::metadata(&self.path)
            .map(|meta| meta.len() > self.max_size)
            .unwrap_or(false);

        if oversized {
            if let Err(e) = fs::remove_file(&self.path) {
                log::warn!("Failed to rotate {}: {}", self.path.display(), e);
            }
        }
    }
}
