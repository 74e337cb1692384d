use crate::dreamspell::families;
use crate::dreamspell::oracle::oracle_for;
use crate::dreamspell::tables::{galactic_tone, solar_seal};
use crate::dreamspell::types::{GalacticSignature, Kin, KinReading, ToneAndSeal};
use crate::error::{Result, WavespellError};
use chrono::NaiveDate;

/// Correlation date of the calendar: 26 July 1987.
pub const DREAMSPELL_EPOCH: (i32, u32, u32) = (1987, 7, 26);
/// Kin assigned to the epoch date.
pub const EPOCH_KIN: u16 = 8;

/// Parse a `YYYY-MM-DD` calendar date.
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|e| WavespellError::InvalidDate {
        input: input.to_string(),
        message: e.to_string(),
    })
}

/// Tone and seal projection of a kin.
pub fn kin_to_tone_and_seal(kin: Kin) -> ToneAndSeal {
    ToneAndSeal {
        tone: kin.tone(),
        seal: kin.seal(),
    }
}

/// Wavespell (1..=20) a kin belongs to.
pub fn wavespell_of(kin: Kin) -> u8 {
    kin.wavespell()
}

/// Maps Gregorian dates onto the 260-day cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DreamspellCalendar {
    epoch: NaiveDate,
    anchor: Kin,
}

impl DreamspellCalendar {
    pub fn new(epoch: NaiveDate, anchor: Kin) -> Self {
        Self { epoch, anchor }
    }

    pub fn epoch(&self) -> NaiveDate {
        self.epoch
    }

    pub fn anchor(&self) -> Kin {
        self.anchor
    }

    /// Kin of a calendar date; dates before the epoch wrap backwards.
    pub fn date_to_kin(&self, date: NaiveDate) -> Kin {
        let days = date.signed_duration_since(self.epoch).num_days();
        Kin::from_offset(self.anchor.get() as i64 - 1 + days)
    }

    pub fn kin_for_str(&self, input: &str) -> Result<Kin> {
        Ok(self.date_to_kin(parse_date(input)?))
    }

    pub fn signature_for(&self, date: NaiveDate) -> GalacticSignature {
        let kin = self.date_to_kin(date);
        let signature = signature_for_kin(kin);
        log::debug!("{} -> {} ({})", date, kin, signature);
        signature
    }

    pub fn signature_for_str(&self, input: &str) -> Result<GalacticSignature> {
        Ok(self.signature_for(parse_date(input)?))
    }

    /// Signature, oracle and family groupings for one date.
    pub fn reading_for(&self, date: NaiveDate) -> KinReading {
        let signature = self.signature_for(date);
        let kin = signature.kin;
        KinReading {
            oracle: oracle_for(kin),
            harmonic_family: families::harmonic_family(kin),
            wavespell_family: families::wavespell_family(kin),
            color_family: families::color_family(kin),
            signature,
        }
    }

    pub fn reading_for_str(&self, input: &str) -> Result<KinReading> {
        Ok(self.reading_for(parse_date(input)?))
    }
}

impl Default for DreamspellCalendar {
    fn default() -> Self {
        let (year, month, day) = DREAMSPELL_EPOCH;
        Self {
            epoch: NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default(),
            anchor: Kin::new(EPOCH_KIN).unwrap_or(Kin::FIRST),
        }
    }
}

/// Build the signature record for a kin, cloning the reference rows.
pub fn signature_for_kin(kin: Kin) -> GalacticSignature {
    let solar_seal = solar_seal(kin.seal()).clone();
    let galactic_tone = galactic_tone(kin.tone()).clone();
    GalacticSignature {
        kin,
        color: solar_seal.color,
        wavespell: kin.wavespell(),
        solar_seal,
        galactic_tone,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_epoch_is_anchor_kin() {
        let calendar = DreamspellCalendar::default();
        assert_eq!(calendar.date_to_kin(date(1987, 7, 26)).get(), 8);
        assert_eq!(calendar.date_to_kin(date(1987, 7, 27)).get(), 9);
        assert_eq!(calendar.date_to_kin(date(1987, 7, 18)).get(), 260);
        assert_eq!(calendar.date_to_kin(date(1987, 7, 19)).get(), 1);
    }

    #[test]
    fn test_parse_date_rejects_garbage() {
        assert!(parse_date("1987-07-26").is_ok());
        assert!(matches!(parse_date("1987-13-01"), Err(WavespellError::InvalidDate { .. })));
        assert!(matches!(parse_date("yesterday"), Err(WavespellError::InvalidDate { .. })));
        assert!(parse_date("2023-02-29").is_err());
    }

    #[test]
    fn test_custom_anchor() {
        let calendar = DreamspellCalendar::new(date(2000, 1, 1), Kin::new(260).unwrap());
        assert_eq!(calendar.date_to_kin(date(2000, 1, 1)).get(), 260);
        assert_eq!(calendar.date_to_kin(date(2000, 1, 2)).get(), 1);
    }
}
