//! Dreamspell value types.

use crate::error::{Result, WavespellError};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const KIN_CYCLE: u16 = 260;
pub const TONE_COUNT: u16 = 13;
pub const SEAL_COUNT: u16 = 20;

/// Position in the 260-day cycle, always in 1..=260.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Kin(u16);

impl Kin {
    pub const FIRST: Kin = Kin(1);
    pub const LAST: Kin = Kin(KIN_CYCLE);

    pub fn new(value: u16) -> Result<Self> {
        if (1..=KIN_CYCLE).contains(&value) {
            Ok(Kin(value))
        } else {
            Err(WavespellError::InvalidKin(value))
        }
    }

    /// Wrap any signed offset from kin 1 back into the cycle.
    pub(crate) fn from_offset(offset: i64) -> Self {
        Kin(offset.rem_euclid(KIN_CYCLE as i64) as u16 + 1)
    }

    pub fn get(self) -> u16 {
        self.0
    }

    /// Galactic tone id, 1..=13
    pub fn tone(self) -> u8 {
        ((self.0 - 1) % TONE_COUNT + 1) as u8
    }

    /// Solar seal id, 1..=20
    pub fn seal(self) -> u8 {
        ((self.0 - 1) % SEAL_COUNT + 1) as u8
    }

    /// Wavespell number, 1..=20
    pub fn wavespell(self) -> u8 {
        ((self.0 - 1) / TONE_COUNT + 1) as u8
    }

    /// Iterate the whole cycle in order.
    pub fn all() -> impl Iterator<Item = Kin> {
        (1..=KIN_CYCLE).map(Kin)
    }
}

impl TryFrom<u16> for Kin {
    type Error = WavespellError;

    fn try_from(value: u16) -> Result<Self> {
        Kin::new(value)
    }
}

impl From<Kin> for u16 {
    fn from(kin: Kin) -> u16 {
        kin.0
    }
}

impl fmt::Display for Kin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Kin {}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SealColor {
    Red,
    White,
    Blue,
    Yellow,
}

impl SealColor {
    pub fn as_str(self) -> &'static str {
        match self {
            SealColor::Red => "red",
            SealColor::White => "white",
            SealColor::Blue => "blue",
            SealColor::Yellow => "yellow",
        }
    }
}

impl fmt::Display for SealColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One of the 20 day archetypes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolarSeal {
    pub id: u8,
    pub name: String,
    pub color: SealColor,
    pub essence: String,
    pub power: String,
    pub action: String,
}

/// One of the 13 tones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalacticTone {
    pub id: u8,
    pub name: String,
    pub essence: String,
    pub action: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToneAndSeal {
    pub tone: u8,
    pub seal: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalacticSignature {
    pub kin: Kin,
    #[serde(rename = "solarSeal")]
    pub solar_seal: SolarSeal,
    #[serde(rename = "galacticTone")]
    pub galactic_tone: GalacticTone,
    pub wavespell: u8,
    pub color: SealColor,
}

impl fmt::Display for GalacticSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.galactic_tone.name, self.solar_seal.name)
    }
}

/// Counterpart kins of a destiny kin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Oracle {
    pub destiny: Kin,
    pub guide: Kin,
    pub analog: Kin,
    pub antipode: Kin,
    pub occult: Kin,
}

/// Everything derived for one day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KinReading {
    pub signature: GalacticSignature,
    pub oracle: Oracle,
    pub harmonic_family: Vec<Kin>,
    pub wavespell_family: Vec<Kin>,
    pub color_family: Vec<u8>,
}
