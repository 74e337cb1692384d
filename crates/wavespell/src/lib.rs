pub mod angles;
pub mod aspects;
pub mod chart;
pub mod dreamspell;
pub mod ephemeris;
pub mod error;
pub mod vedic;
pub mod western;

pub use chart::{BirthData, SiderealCalculator, SiderealChart};
pub use dreamspell::{DreamspellCalendar, GalacticSignature, Kin, Oracle};
pub use error::{Result, WavespellError};

/// Chart with the default mean-motion model and direct-motion policy.
pub fn generate_chart(birth: &BirthData) -> Result<SiderealChart> {
    SiderealCalculator::new().generate_chart(birth)
}

/// Signature for a `YYYY-MM-DD` date on the default calendar.
pub fn signature_for(date: &str) -> Result<GalacticSignature> {
    DreamspellCalendar::default().signature_for_str(date)
}
