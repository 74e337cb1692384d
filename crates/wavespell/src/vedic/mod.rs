pub mod ayanamsa;
pub mod nakshatra;

pub use ayanamsa::{ayanamsa_for, to_sidereal, LinearAyanamsa};
pub use nakshatra::{
    nakshatra_for, Gana, Nakshatra, NakshatraPlacement, NAKSHATRAS, NAKSHATRA_SEGMENT_SIZE,
    PADA_SIZE,
};
