//! Linear mean-motion longitudes.
//!
//! Each body moves at a constant rate from its J2000.0 mean longitude. This is
//! far from a real ephemeris (no equation of centre, no geocentric correction
//! for the planets), so any `LongitudeModel` backed by proper orbital
//! elements can replace it without touching the sign, house or aspect code.

use crate::ephemeris::julian::J2000;
use crate::ephemeris::types::Body;

/// Source of tropical ecliptic longitudes.
pub trait LongitudeModel: Send + Sync {
    /// Tropical longitude in degrees for `body` at Julian Day `jd`.
    /// The result need not be normalized.
    fn tropical_longitude(&self, body: Body, jd: f64) -> f64;
}

// (body, mean longitude at J2000.0, degrees per day)
const MEAN_ELEMENTS: &[(Body, f64, f64)] = &[
    (Body::Sun, 280.460, 0.9856474),
    (Body::Moon, 218.316, 13.176396),
    (Body::Mercury, 252.251, 1.3833),
    (Body::Venus, 181.979, 0.6151),
    (Body::Mars, 355.433, 0.524),
    (Body::Jupiter, 34.351, 0.083),
    (Body::Saturn, 50.077, 0.034),
    (Body::Rahu, 125.044, -0.053),
];

/// Default longitude model.
#[derive(Debug, Clone, Copy, Default)]
pub struct MeanMotionModel;

impl MeanMotionModel {
    pub fn new() -> Self {
        Self
    }

    /// Mean elements `(longitude at J2000.0, daily motion)` for a body.
    pub fn elements(body: Body) -> (f64, f64) {
        match body {
            Body::Ketu => {
                let (lon, rate) = Self::elements(Body::Rahu);
                (lon + 180.0, rate)
            }
            _ => MEAN_ELEMENTS
                .iter()
                .find(|(b, _, _)| *b == body)
                .map(|(_, lon, rate)| (*lon, *rate))
                .unwrap_or((0.0, 0.0)),
        }
    }
}

impl LongitudeModel for MeanMotionModel {
    fn tropical_longitude(&self, body: Body, jd: f64) -> f64 {
        let (epoch_lon, rate) = Self::elements(body);
        (epoch_lon + rate * (jd - J2000)) % 360.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epoch_longitudes() {
        let model = MeanMotionModel::new();
        assert_eq!(model.tropical_longitude(Body::Sun, J2000), 280.460);
        assert_eq!(model.tropical_longitude(Body::Rahu, J2000), 125.044);
        assert!((model.tropical_longitude(Body::Ketu, J2000) - 305.044).abs() < 1e-9);
    }

    #[test]
    fn test_rahu_moves_backwards() {
        let model = MeanMotionModel::new();
        let now = model.tropical_longitude(Body::Rahu, J2000);
        let later = model.tropical_longitude(Body::Rahu, J2000 + 10.0);
        assert!(later < now);
    }

    #[test]
    fn test_every_body_has_elements() {
        for body in Body::ALL {
            let (_, rate) = MeanMotionModel::elements(body);
            assert!(rate != 0.0, "{} has no daily motion", body);
        }
    }
}
