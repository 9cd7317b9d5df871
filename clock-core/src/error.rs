use thiserror::Error;

/// Startup configuration problems. Everything after startup is infallible.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("unknown timezone `{zone}` configured for {city}")]
    UnknownTimezone { city: String, zone: String },

    #[error("{name} tick interval must be non-zero")]
    ZeroInterval { name: &'static str },
}
