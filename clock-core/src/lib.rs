//! Pure clock logic with no terminal dependencies.
//! Testable on host; the application only adds pumps and drawing.

mod error;
mod stopwatch;
mod ticker;
mod time_source;
mod world;

pub use error::ConfigError;
pub use stopwatch::{RunState, Stopwatch};
pub use ticker::{ManualTicker, Ticker};
pub use time_source::{ManualClock, SystemClock, TimeSource};
pub use chrono_tz::Tz;
pub use world::{default_cities, resolve_all, CityClock, WallZone, WorldClockEntry};

/// Format milliseconds as "HH:MM:SS". Hours are not wrapped at 24.
pub fn format_hms(ms: u64) -> String {
    let total_secs = ms / 1000;
    let h = total_secs / 3600;
    let m = (total_secs % 3600) / 60;
    let s = total_secs % 60;
    format!("{:02}:{:02}:{:02}", h, m, s)
}

/// Render laps as "Lap i: HH:MM:SS", one per line, 1-based.
pub fn format_laps(laps: &[u64]) -> String {
    laps.iter()
        .enumerate()
        .map(|(i, lap)| format!("Lap {}: {}", i + 1, format_hms(*lap)))
        .collect::<Vec<_>>()
        .join("\n")
}
