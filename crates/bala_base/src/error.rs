//! Error types for strength calculations.

use thiserror::Error;

use crate::graha::Graha;
use crate::rashi::Rashi;

/// Errors from strength base calculations.
///
/// Only structurally invalid input is an error. Missing planets, missing
/// almanac data and out-of-range sub-scores are handled by fallbacks.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BalaError {
    /// House number outside 1..=12.
    #[error("invalid house number {0}, expected 1..=12")]
    InvalidHouse(u8),
    /// Longitude is NaN or infinite.
    #[error("non-finite longitude for {0}")]
    NonFiniteLongitude(&'static str),
    /// Longitude outside [0, 360).
    #[error("longitude {longitude} for {body} outside [0, 360)")]
    LongitudeOutOfRange { body: &'static str, longitude: f64 },
    /// Stored rashi disagrees with the rashi of the stored longitude.
    #[error("{} placed in {} but its longitude lies in {}", .graha.english_name(), .rashi.name(), .expected.name())]
    RashiMismatch {
        graha: Graha,
        rashi: Rashi,
        expected: Rashi,
    },
    /// Invalid geographic location parameter.
    #[error("invalid location: {0}")]
    InvalidLocation(&'static str),
    /// Julian day outside the representable date range.
    #[error("julian day {0} is not a representable instant")]
    InvalidJulianDay(f64),
    /// Sun window boundaries are not strictly increasing.
    #[error("sun window out of order: expected previous sunset < sunrise < sunset < next sunrise")]
    InvalidSunWindow,
    /// The same graha appears twice in one chart snapshot.
    #[error("duplicate position for {}", .0.english_name())]
    DuplicatePlanet(Graha),
    /// Configuration values are out of range or inconsistent.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    /// Configuration text could not be parsed.
    #[error("failed to parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),
}
