use chrono::{DateTime, Local, Utc};
use chrono_tz::Tz;

use crate::error::ConfigError;

const TIME_FORMAT: &str = "%H:%M:%S";

/// A configured (city, timezone identifier) pair, before validation.
#[derive(Clone, Debug, PartialEq)]
pub struct WorldClockEntry {
    pub city: String,
    pub zone: String,
}

impl WorldClockEntry {
    pub fn new(city: &str, zone: &str) -> Self {
        Self {
            city: city.to_string(),
            zone: zone.to_string(),
        }
    }
}

/// The built-in city list, in display order.
pub fn default_cities() -> Vec<WorldClockEntry> {
    [
        ("New York", "America/New_York"),
        ("London", "Europe/London"),
        ("Tokyo", "Asia/Tokyo"),
        ("Moscow", "Europe/Moscow"),
        ("Istanbul", "Europe/Istanbul"),
        ("Berlin", "Europe/Berlin"),
    ]
    .iter()
    .map(|(city, zone)| WorldClockEntry::new(city, zone))
    .collect()
}

/// A city bound to its resolved timezone.
#[derive(Clone, Debug)]
pub struct CityClock {
    pub city: String,
    pub tz: Tz,
}

impl CityClock {
    pub fn resolve(entry: &WorldClockEntry) -> Result<Self, ConfigError> {
        let tz = entry
            .zone
            .parse::<Tz>()
            .map_err(|_| ConfigError::UnknownTimezone {
                city: entry.city.clone(),
                zone: entry.zone.clone(),
            })?;
        Ok(Self {
            city: entry.city.clone(),
            tz,
        })
    }

    pub fn time_at(&self, now: DateTime<Utc>) -> String {
        now.with_timezone(&self.tz).format(TIME_FORMAT).to_string()
    }

    /// "<city>: HH:MM:SS"
    pub fn label_at(&self, now: DateTime<Utc>) -> String {
        format!("{}: {}", self.city, self.time_at(now))
    }
}

/// Resolve every entry, failing on the first unknown zone.
pub fn resolve_all(entries: &[WorldClockEntry]) -> Result<Vec<CityClock>, ConfigError> {
    entries.iter().map(CityClock::resolve).collect()
}

/// The zone a plain clock face renders in.
#[derive(Clone, Copy, Debug)]
pub enum WallZone {
    Local,
    Named(Tz),
}

impl WallZone {
    pub fn format(&self, now: DateTime<Utc>) -> String {
        match self {
            WallZone::Local => now.with_timezone(&Local).format(TIME_FORMAT).to_string(),
            WallZone::Named(tz) => now.with_timezone(tz).format(TIME_FORMAT).to_string(),
        }
    }
}
