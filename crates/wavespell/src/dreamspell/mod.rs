//! Dreamspell calendar: 260-day cycle of 13 tones and 20 solar seals.

pub mod calendar;
pub mod families;
pub mod oracle;
pub mod tables;
pub mod types;

pub use calendar::{
    kin_to_tone_and_seal, parse_date, signature_for_kin, wavespell_of, DreamspellCalendar,
    DREAMSPELL_EPOCH, EPOCH_KIN,
};
pub use families::{
    color_family, harmonic_family, is_wavespell_end, is_wavespell_start, kin_color,
    wavespell_family,
};
pub use oracle::{oracle_for, tone_and_seal_to_kin};
pub use tables::{GALACTIC_TONES, SOLAR_SEALS};
pub use types::{
    GalacticSignature, GalacticTone, Kin, KinReading, Oracle, SealColor, SolarSeal, ToneAndSeal,
};
