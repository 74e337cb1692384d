//! Oracle counterparts of a kin.
//!
//! Counterparts are rebuilt from a (tone, seal) pair with the linear mapping
//! `((tone-1)*20 + (seal-1)) mod 260 + 1` rather than the traditional
//! Tzolkin matrix, so the rebuilt kin does not always keep the tone.

use crate::dreamspell::tables::{solar_seal, seals_of_color};
use crate::dreamspell::types::{Kin, Oracle, KIN_CYCLE, SEAL_COUNT};

pub fn oracle_for(kin: Kin) -> Oracle {
    Oracle {
        destiny: kin,
        guide: guide_of(kin),
        analog: analog_of(kin),
        antipode: antipode_of(kin),
        occult: occult_of(kin),
    }
}

/// Same tone, seal picked from the kin's color family by tone position.
pub fn guide_of(kin: Kin) -> Kin {
    let tone = kin.tone();
    let family = seals_of_color(solar_seal(kin.seal()).color);
    let guide_seal = family[(tone as usize - 1) % family.len()];
    tone_and_seal_to_kin(tone, guide_seal)
}

/// Same tone, the seal nine places ahead.
pub fn analog_of(kin: Kin) -> Kin {
    let seal = (kin.seal() as u16 + 9) % SEAL_COUNT + 1;
    tone_and_seal_to_kin(kin.tone(), seal as u8)
}

/// Shares the analog formula; canonical Dreamspell uses a distinct rule here.
pub fn antipode_of(kin: Kin) -> Kin {
    let seal = (kin.seal() as u16 + 9) % SEAL_COUNT + 1;
    tone_and_seal_to_kin(kin.tone(), seal as u8)
}

pub fn occult_of(kin: Kin) -> Kin {
    let mut occult = KIN_CYCLE + 1 - kin.get();
    if occult > KIN_CYCLE {
        occult -= KIN_CYCLE;
    }
    Kin::from_offset(occult as i64 - 1)
}

pub fn tone_and_seal_to_kin(tone: u8, seal: u8) -> Kin {
    let offset = (tone as i64 - 1) * SEAL_COUNT as i64 + (seal as i64 - 1);
    Kin::from_offset(offset)
}
