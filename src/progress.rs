//! Download progress reporting
//!
//! The fetcher reports accumulated byte counts through a [`ProgressSink`]
//! while a download streams to disk, throttled so the host is poked at
//! most every [`REPORT_INTERVAL`], then once more on completion with the
//! total.

use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Minimum spacing between two progress reports
pub const REPORT_INTERVAL: Duration = Duration::from_millis(500);

/// Receiver of download progress events
pub trait ProgressSink: Send + Sync {
    /// Bytes accumulated so far; called at most every [`REPORT_INTERVAL`]
    fn on_progress(&self, bytes: u64);

    /// Final report with the total byte count
    fn on_complete(&self, total: u64);
}

/// Default sink that reports through tracing
#[derive(Debug, Default, Clone, Copy)]
pub struct LogProgress;

impl ProgressSink for LogProgress {
    fn on_progress(&self, bytes: u64) {
        debug!("downloaded {bytes} bytes");
    }

    fn on_complete(&self, total: u64) {
        info!("download complete: {total} bytes");
    }
}

/// Time-based gate for periodic reporting
#[derive(Debug)]
pub struct Throttle {
    interval: Duration,
    last: Option<Instant>,
}

impl Throttle {
    /// Create a throttle with the given minimum spacing
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last: None,
        }
    }

    /// True when enough time has passed since the last accepted tick.
    /// The first call is always accepted.
    pub fn ready(&mut self) -> bool {
        match self.last {
            Some(last) if last.elapsed() < self.interval => false,
            _ => {
                self.last = Some(Instant::now());
                true
            }
        }
    }
}
