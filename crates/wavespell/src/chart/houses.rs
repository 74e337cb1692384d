//! Equal-house system anchored on the ascendant sign's in-sign degree.

use crate::angles::normalize_degrees;
use crate::ephemeris::Planet;
use crate::western::{sign_for, sign_index, SignPlacement};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct House {
    /// 1..=12
    pub number: u8,
    pub sign: SignPlacement,
    /// Longitude where the house begins
    pub cusp: f64,
    pub planets: Vec<Planet>,
}

/// Twelve houses with cusps at `ascendant.degrees * 30 + i * 30`.
///
/// A planet belongs to a house when both fall in the same 30° sign bucket.
pub fn houses_for(ascendant: &SignPlacement, planets: &[Planet]) -> Vec<House> {
    (0..12u8)
        .map(|i| {
            let cusp = normalize_degrees(ascendant.degrees * 30.0 + i as f64 * 30.0);
            let bucket = sign_index(cusp);
            House {
                number: i + 1,
                sign: sign_for(cusp),
                cusp,
                planets: planets
                    .iter()
                    .filter(|p| sign_index(p.longitude) == bucket)
                    .cloned()
                    .collect(),
            }
        })
        .collect()
}

/// House number whose bucket holds `longitude`.
pub fn house_of(houses: &[House], longitude: f64) -> Option<u8> {
    let bucket = sign_index(longitude);
    houses
        .iter()
        .find(|h| sign_index(h.cusp) == bucket)
        .map(|h| h.number)
}
