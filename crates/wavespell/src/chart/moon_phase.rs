//! Moon phase from a mean synodic month.

use crate::ephemeris::julian_day_number;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const SYNODIC_MONTH: f64 = 29.530588853;
/// Julian Day of the new moon the cycle is counted from (6 Jan 2000).
pub const REFERENCE_NEW_MOON_JD: f64 = 2451550.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PhaseName {
    #[serde(rename = "New Moon")]
    NewMoon,
    #[serde(rename = "Waxing Crescent")]
    WaxingCrescent,
    #[serde(rename = "First Quarter")]
    FirstQuarter,
    #[serde(rename = "Waxing Gibbous")]
    WaxingGibbous,
    #[serde(rename = "Full Moon")]
    FullMoon,
    #[serde(rename = "Waning Gibbous")]
    WaningGibbous,
    #[serde(rename = "Last Quarter")]
    LastQuarter,
    #[serde(rename = "Waning Crescent")]
    WaningCrescent,
}

impl PhaseName {
    pub fn as_str(self) -> &'static str {
        match self {
            PhaseName::NewMoon => "New Moon",
            PhaseName::WaxingCrescent => "Waxing Crescent",
            PhaseName::FirstQuarter => "First Quarter",
            PhaseName::WaxingGibbous => "Waxing Gibbous",
            PhaseName::FullMoon => "Full Moon",
            PhaseName::WaningGibbous => "Waning Gibbous",
            PhaseName::LastQuarter => "Last Quarter",
            PhaseName::WaningCrescent => "Waning Crescent",
        }
    }
}

impl fmt::Display for PhaseName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MoonPhase {
    pub phase: PhaseName,
    /// Lit fraction in percent, 0-100
    pub illumination: f64,
    /// Days since the last mean new moon
    pub age: f64,
}

/// Phase at a Julian Day.
pub fn moon_phase_for_jd(jd: f64) -> MoonPhase {
    let cycles = (jd - REFERENCE_NEW_MOON_JD) / SYNODIC_MONTH;
    let age = (cycles - cycles.floor()) * SYNODIC_MONTH;

    let (phase, illumination) = if age < 1.0 {
        (PhaseName::NewMoon, 0.0)
    } else if age < 7.0 {
        (PhaseName::WaxingCrescent, age * 14.3)
    } else if age < 8.0 {
        (PhaseName::FirstQuarter, 50.0)
    } else if age < 14.0 {
        (PhaseName::WaxingGibbous, 50.0 + (age - 7.0) * 7.1)
    } else if age < 15.0 {
        (PhaseName::FullMoon, 100.0)
    } else if age < 22.0 {
        (PhaseName::WaningGibbous, 100.0 - (age - 14.0) * 7.1)
    } else if age < 23.0 {
        (PhaseName::LastQuarter, 50.0)
    } else {
        (PhaseName::WaningCrescent, 50.0 - (age - 22.0) * 7.1)
    };

    MoonPhase {
        phase,
        illumination: illumination.clamp(0.0, 100.0),
        age,
    }
}

/// Phase at the Julian Day Number of a civil date.
pub fn moon_phase_for(date: NaiveDate) -> MoonPhase {
    moon_phase_for_jd(julian_day_number(date) as f64)
}
