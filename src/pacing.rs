//! Injectable pauses for retry backoff and progressive printing.
//!
//! Both the HTTP retry loop and the typing effect need to wait. They go
//! through a [`Pacer`] so production code sleeps for real while tests run
//! instantly and can inspect every requested pause.

use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Source of blocking pauses (Strategy pattern).
pub trait Pacer: Send + Sync {
    /// Block the calling thread for `duration`.
    fn pause(&self, duration: Duration);
}

/// Sleeps on the calling thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct RealTimePacer;

impl Pacer for RealTimePacer {
    fn pause(&self, duration: Duration) {
        if !duration.is_zero() {
            std::thread::sleep(duration);
        }
    }
}

/// Never waits. Used for `--no-animate` and in tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct InstantPacer;

impl Pacer for InstantPacer {
    fn pause(&self, _duration: Duration) {}
}

/// Never waits, but remembers every pause it was asked for.
///
/// Clones share the same log, so a test can keep one handle and give the
/// other to the component under test.
#[derive(Debug, Clone, Default)]
pub struct RecordingPacer {
    pauses: Arc<Mutex<Vec<Duration>>>,
}

impl RecordingPacer {
    pub fn new() -> Self {
        Self::default()
    }

    /// All pauses requested so far, in order.
    pub fn pauses(&self) -> Vec<Duration> {
        self.pauses
            .lock()
            .map(|p| p.clone())
            .unwrap_or_default()
    }

    /// Sum of all requested pauses.
    pub fn total(&self) -> Duration {
        self.pauses().iter().sum()
    }
}

impl Pacer for RecordingPacer {
    fn pause(&self, duration: Duration) {
        if let Ok(mut pauses) = self.pauses.lock() {
            pauses.push(duration);
        }
    }
}
