use std::cell::Cell;
use std::time::Instant;

use chrono::{DateTime, Duration, Utc};

/// Where views read the time from.
pub trait TimeSource {
    /// Current wall-clock time.
    fn now(&self) -> DateTime<Utc>;

    /// Monotonic milliseconds since the source was created.
    fn elapsed_ms(&self) -> u64;
}

pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSource for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn elapsed_ms(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }
}

/// Time that only moves when told to. Wall and monotonic time advance together.
pub struct ManualClock {
    wall: Cell<DateTime<Utc>>,
    elapsed_ms: Cell<u64>,
}

impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            wall: Cell::new(start),
            elapsed_ms: Cell::new(0),
        }
    }

    pub fn advance_ms(&self, ms: u64) {
        self.elapsed_ms.set(self.elapsed_ms.get() + ms);
        self.wall.set(self.wall.get() + Duration::milliseconds(ms as i64));
    }
}

impl TimeSource for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        self.wall.get()
    }

    fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms.get()
    }
}
