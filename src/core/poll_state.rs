//! Last-displayed timestamp guard shared by every fetch of every cycle.

use parking_lot::Mutex;

use super::reading::Reading;

/// Remembers the newest reading timestamp ever admitted.
///
/// Shared as `Arc<PollState>`; the stored value never decreases.
#[derive(Debug, Default)]
pub struct PollState {
    last_timestamp_millis: Mutex<i64>,
}

impl PollState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Admit `reading` if it is strictly newer than anything admitted before.
    ///
    /// Compare and update happen under one lock, so two callers racing with
    /// the same timestamp cannot both be admitted.
    pub fn admit(&self, reading: &Reading) -> bool {
        let mut last = self.last_timestamp_millis.lock();
        if reading.timestamp_millis > *last {
            *last = reading.timestamp_millis;
            true
        } else {
            false
        }
    }

    pub fn last_timestamp_millis(&self) -> i64 {
        *self.last_timestamp_millis.lock()
    }
}
