use crate::dreamspell::tables::{seals_of_color, solar_seal};
use crate::dreamspell::types::{Kin, SealColor, KIN_CYCLE, TONE_COUNT};

/// The block of four consecutive kins (counted from kin 1) containing `kin`.
pub fn harmonic_family(kin: Kin) -> Vec<Kin> {
    let start = (kin.get() - 1) / 4 * 4 + 1;
    (start..start + 4)
        .filter(|k| *k <= KIN_CYCLE)
        .filter_map(|k| Kin::new(k).ok())
        .collect()
}

/// All 13 kins of the wavespell containing `kin`.
pub fn wavespell_family(kin: Kin) -> Vec<Kin> {
    let start = (kin.wavespell() as u16 - 1) * TONE_COUNT + 1;
    (start..start + TONE_COUNT)
        .filter_map(|k| Kin::new(k).ok())
        .collect()
}

/// Seal ids sharing the color of the kin's seal.
pub fn color_family(kin: Kin) -> Vec<u8> {
    seals_of_color(kin_color(kin))
}

pub fn kin_color(kin: Kin) -> SealColor {
    solar_seal(kin.seal()).color
}

pub fn is_wavespell_start(kin: Kin) -> bool {
    (kin.get() - 1) % TONE_COUNT == 0
}

pub fn is_wavespell_end(kin: Kin) -> bool {
    kin.get() % TONE_COUNT == 0
}
