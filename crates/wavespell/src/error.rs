use crate::ephemeris::Body;
use thiserror::Error;

/// Errors raised by the calendar and chart calculators
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WavespellError {
    #[error("Invalid date '{input}': {message}")]
    InvalidDate { input: String, message: String },
    #[error("Invalid time '{input}': expected HH:MM in 24-hour format")]
    InvalidTime { input: String },
    #[error("Kin {0} is outside the 260-day cycle (expected 1..=260)")]
    InvalidKin(u16),
    #[error("Invalid location: {message}")]
    InvalidLocation { message: String },
    #[error("Longitude {0} left the [0, 360) range")]
    InvalidLongitude(f64),
    #[error("{0} is missing from the planet list")]
    MissingBody(Body),
}

pub type Result<T> = std::result::Result<T, WavespellError>;
