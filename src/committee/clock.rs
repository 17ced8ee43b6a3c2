// Clock - external monotonic time source
use crate::types::Timestamp;
use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonically non-decreasing time source (network block time).
///
/// The engine reads the clock exactly once per mutating call and never
/// advances it. Time moves only between calls, under the control of the
/// execution environment.
pub trait Clock: Send + Sync {
    fn now(&self) -> Timestamp;
}

/// Test clock advanced explicitly by the harness.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: AtomicU64,
}

impl ManualClock {
    pub fn new(start: Timestamp) -> Self {
        Self {
            now: AtomicU64::new(start),
        }
    }

    pub fn advance(&self, secs: u64) {
        self.now.fetch_add(secs, Ordering::SeqCst);
    }

    pub fn set(&self, now: Timestamp) {
        self.now.store(now, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        self.now.load(Ordering::SeqCst)
    }
}
