//! # Time Source Abstraction
//!
//! All timing conditions in the control plane (attestation windows,
//! staleness, self-pause cooldowns, escalation deadlines) are evaluated by
//! comparing stored timestamps against "now" at execution time. There is NO
//! background scheduler: a deadline only takes effect when someone calls the
//! relevant permissionless check function. Routing "now" through this trait
//! keeps every timer lazily evaluated and deterministic under test.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::entities::Timestamp;

/// Source of the current time for lazy timer evaluation.
pub trait TimeSource: Send + Sync {
    /// Current unix timestamp in seconds.
    fn now(&self) -> Timestamp;
}

/// Default time source backed by the system clock.
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now(&self) -> Timestamp {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    }
}

/// Manually driven clock for deterministic timer tests.
#[derive(Default)]
pub struct ManualTimeSource {
    now: AtomicU64,
}

impl ManualTimeSource {
    #[must_use]
    pub fn new(start: Timestamp) -> Self {
        Self {
            now: AtomicU64::new(start),
        }
    }

    /// Jump the clock to an absolute timestamp.
    pub fn set(&self, now: Timestamp) {
        self.now.store(now, Ordering::SeqCst);
    }

    /// Advance the clock by `secs`.
    pub fn advance(&self, secs: u64) {
        self.now.fetch_add(secs, Ordering::SeqCst);
    }
}

impl TimeSource for ManualTimeSource {
    fn now(&self) -> Timestamp {
        self.now.load(Ordering::SeqCst)
    }
}
