//! Linear Lahiri-style ayanamsa.

use crate::angles::normalize_degrees;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

pub const LAHIRI_AYANAMSA_1900: f64 = 22.46;
pub const AYANAMSA_ANNUAL_RATE: f64 = 0.0136;

/// `base + rate * (year - base_year)`, evaluated on the calendar year only.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearAyanamsa {
    pub base: f64,
    pub rate: f64,
    pub base_year: i32,
}

impl Default for LinearAyanamsa {
    fn default() -> Self {
        Self {
            base: LAHIRI_AYANAMSA_1900,
            rate: AYANAMSA_ANNUAL_RATE,
            base_year: 1900,
        }
    }
}

impl LinearAyanamsa {
    pub fn ayanamsa_for(&self, date: NaiveDate) -> f64 {
        self.base + self.rate * (date.year() - self.base_year) as f64
    }

    /// Shift a tropical longitude into the sidereal frame, in [0, 360).
    pub fn to_sidereal(&self, tropical_longitude: f64, date: NaiveDate) -> f64 {
        normalize_degrees(tropical_longitude - self.ayanamsa_for(date))
    }
}

pub fn ayanamsa_for(date: NaiveDate) -> f64 {
    LinearAyanamsa::default().ayanamsa_for(date)
}

pub fn to_sidereal(tropical_longitude: f64, date: NaiveDate) -> f64 {
    LinearAyanamsa::default().to_sidereal(tropical_longitude, date)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, 6, 1).unwrap()
    }

    #[test]
    fn test_ayanamsa_linear_in_year() {
        assert_eq!(ayanamsa_for(date(1900)), 22.46);
        assert!((ayanamsa_for(date(2000)) - 23.82).abs() < 1e-9);
        assert!((ayanamsa_for(date(1800)) - 21.10).abs() < 1e-9);
    }

    #[test]
    fn test_to_sidereal_wraps() {
        let d = date(1900);
        assert!((to_sidereal(100.0, d) - 77.54).abs() < 1e-9);
        assert!((to_sidereal(10.0, d) - 347.54).abs() < 1e-9);
        assert!((to_sidereal(-700.0, d) - normalize_degrees(-722.46)).abs() < 1e-9);
    }
}
