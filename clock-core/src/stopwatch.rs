#[derive(Clone, Copy, PartialEq, Debug)]
pub enum RunState {
    Stopped,
    Running,
}

/// Elapsed-time and lap bookkeeping. All times are monotonic milliseconds
/// supplied by the caller.
///
/// While running the true elapsed time is `now - start_epoch_ms`; while
/// stopped `elapsed_ms` holds it.
pub struct Stopwatch {
    pub state: RunState,
    start_epoch_ms: u64,
    elapsed_ms: u64,
    laps: Vec<u64>,
}

impl Stopwatch {
    pub fn new() -> Self {
        Self {
            state: RunState::Stopped,
            start_epoch_ms: 0,
            elapsed_ms: 0,
            laps: Vec::new(),
        }
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    pub fn start(&mut self, now_ms: u64) {
        if self.is_running() {
            return;
        }
        self.start_epoch_ms = now_ms.saturating_sub(self.elapsed_ms);
        self.state = RunState::Running;
    }

    pub fn stop(&mut self, now_ms: u64) {
        if !self.is_running() {
            return;
        }
        self.elapsed_ms = now_ms.saturating_sub(self.start_epoch_ms);
        self.state = RunState::Stopped;
    }

    pub fn elapsed_ms(&self, now_ms: u64) -> u64 {
        match self.state {
            RunState::Running => now_ms.saturating_sub(self.start_epoch_ms),
            RunState::Stopped => self.elapsed_ms,
        }
    }

    /// Close the current lap: elapsed time minus the laps already recorded.
    /// Returns `None` when stopped.
    pub fn lap(&mut self, now_ms: u64) -> Option<u64> {
        if !self.is_running() {
            return None;
        }
        let recorded: u64 = self.laps.iter().sum();
        let lap = self.elapsed_ms(now_ms).saturating_sub(recorded);
        self.laps.push(lap);
        Some(lap)
    }

    /// Stopped: clear everything. Running: restart from zero and keep running.
    /// Laps are cleared in both cases so they always sum to the elapsed time
    /// at the last lap.
    pub fn reset(&mut self, now_ms: u64) {
        self.elapsed_ms = 0;
        self.laps.clear();
        self.start_epoch_ms = match self.state {
            RunState::Running => now_ms,
            RunState::Stopped => 0,
        };
    }

    pub fn laps(&self) -> &[u64] {
        &self.laps
    }
}

impl Default for Stopwatch {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stopwatch_basic() {
        let mut sw = Stopwatch::new();
        assert_eq!(sw.state, RunState::Stopped);
        assert_eq!(sw.elapsed_ms(0), 0);

        sw.start(1000);
        assert_eq!(sw.state, RunState::Running);
        assert_eq!(sw.elapsed_ms(1500), 500);
        assert_eq!(sw.elapsed_ms(2000), 1000);

        sw.stop(2000);
        assert_eq!(sw.state, RunState::Stopped);
        assert_eq!(sw.elapsed_ms(5000), 1000); // Frozen while stopped

        sw.start(5000);
        assert_eq!(sw.elapsed_ms(5500), 1500);
    }

    #[test]
    fn test_elapsed_accumulates_across_pauses() {
        let mut sw = Stopwatch::new();
        let runs = [(100, 350), (1_000, 1_020), (7_000, 10_600)];
        let mut expected = 0;
        for (start, stop) in runs {
            sw.start(start);
            sw.stop(stop);
            expected += stop - start;
            assert_eq!(sw.elapsed_ms(stop + 12_345), expected);
        }
        assert_eq!(expected, 3_870);
    }

    #[test]
    fn test_start_and_stop_are_idempotent() {
        let mut sw = Stopwatch::new();
        sw.start(0);
        sw.start(400); // Already running, must not re-baseline
        assert_eq!(sw.elapsed_ms(1000), 1000);
        sw.stop(1000);
        sw.stop(3000);
        assert_eq!(sw.elapsed_ms(3000), 1000);
    }

    #[test]
    fn test_laps_partition_elapsed() {
        let mut sw = Stopwatch::new();
        sw.start(0);
        assert_eq!(sw.lap(5000), Some(5000));
        assert_eq!(sw.lap(8000), Some(3000));
        sw.stop(9000);
        sw.start(20_000);
        // 1s before the pause plus 2s after it
        assert_eq!(sw.lap(22_000), Some(3000));

        let total: u64 = sw.laps().iter().sum();
        assert_eq!(total, sw.elapsed_ms(22_000));
        assert_eq!(sw.laps(), &[5000, 3000, 3000]);
    }

    #[test]
    fn test_lap_while_stopped_is_noop() {
        let mut sw = Stopwatch::new();
        assert_eq!(sw.lap(1000), None);
        sw.start(0);
        sw.lap(500);
        sw.stop(800);
        assert_eq!(sw.lap(900), None);
        assert_eq!(sw.laps(), &[500]);
    }

    #[test]
    fn test_reset_while_stopped_clears() {
        let mut sw = Stopwatch::new();
        sw.start(0);
        sw.lap(1000);
        sw.stop(1500);
        sw.reset(2000);
        assert_eq!(sw.state, RunState::Stopped);
        assert_eq!(sw.elapsed_ms(2000), 0);
        assert!(sw.laps().is_empty());

        sw.start(3000);
        assert_eq!(sw.elapsed_ms(3250), 250);
    }

    #[test]
    fn test_reset_while_running_keeps_running() {
        let mut sw = Stopwatch::new();
        sw.start(0);
        sw.lap(4000);
        sw.reset(10_000);
        assert_eq!(sw.state, RunState::Running);
        assert_eq!(sw.elapsed_ms(10_000), 0);
        assert_eq!(sw.elapsed_ms(12_500), 2500);
        assert!(sw.laps().is_empty());

        assert_eq!(sw.lap(13_000), Some(3000));
        let total: u64 = sw.laps().iter().sum();
        assert_eq!(total, sw.elapsed_ms(13_000));
    }
}
