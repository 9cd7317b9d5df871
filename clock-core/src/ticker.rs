/// A periodic task that can be started and cancelled.
///
/// Views drive their refresh through this so tests can deliver ticks by hand.
pub trait Ticker {
    fn start(&mut self, interval_ms: u64);
    fn stop(&mut self);
    fn is_running(&self) -> bool;
}

/// Records start/stop requests without scheduling anything.
#[derive(Debug, Default)]
pub struct ManualTicker {
    pub interval_ms: Option<u64>,
    pub starts: usize,
    pub stops: usize,
}

impl Ticker for ManualTicker {
    fn start(&mut self, interval_ms: u64) {
        if self.interval_ms.is_none() {
            self.interval_ms = Some(interval_ms);
            self.starts += 1;
        }
    }

    fn stop(&mut self) {
        if self.interval_ms.take().is_some() {
            self.stops += 1;
        }
    }

    fn is_running(&self) -> bool {
        self.interval_ms.is_some()
    }
}
