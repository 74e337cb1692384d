//! Retrograde flags for bodies whose direction the mean-motion model cannot
//! derive (Mercury through Saturn).

use crate::ephemeris::types::Body;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};

/// Decides whether a planet is retrograde at a Julian Day.
///
/// Only called for Mercury, Venus, Mars, Jupiter and Saturn: the luminaries
/// are always direct and the lunar nodes always retrograde.
pub trait RetrogradePolicy: Send + Sync {
    fn is_retrograde(&self, body: Body, jd: f64) -> bool;
}

/// Every planet moves direct.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectMotion;

impl RetrogradePolicy for DirectMotion {
    fn is_retrograde(&self, _body: Body, _jd: f64) -> bool {
        false
    }
}

/// Uniform draw per (seed, day, body) compared against a fixed threshold.
///
/// The generator is re-seeded for each call, so a chart for a given date is
/// reproducible regardless of call order.
#[derive(Debug, Clone, Copy)]
pub struct SeededDraw {
    seed: u64,
}

impl SeededDraw {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Draws above this value mark the planet retrograde.
    pub fn threshold(body: Body) -> Option<f64> {
        match body {
            Body::Mercury => Some(0.8),
            Body::Venus => Some(0.9),
            Body::Mars => Some(0.85),
            Body::Jupiter => Some(0.8),
            Body::Saturn => Some(0.7),
            _ => None,
        }
    }

    fn draw(&self, body: Body, jd: f64) -> f64 {
        let mix = self
            .seed
            .wrapping_mul(0x9E37_79B9_7F4A_7C15)
            ^ jd.to_bits().rotate_left(17)
            ^ body as u64;
        let mut rng = ChaCha20Rng::seed_from_u64(mix);
        rng.gen::<f64>()
    }
}

impl RetrogradePolicy for SeededDraw {
    fn is_retrograde(&self, body: Body, jd: f64) -> bool {
        match Self::threshold(body) {
            Some(threshold) => self.draw(body, jd) > threshold,
            None => false,
        }
    }
}

/// Serializable choice of policy, used by configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum RetrogradeMode {
    #[default]
    Direct,
    Seeded { seed: u64 },
}

impl RetrogradeMode {
    pub fn build(self) -> Box<dyn RetrogradePolicy> {
        match self {
            RetrogradeMode::Direct => Box::new(DirectMotion),
            RetrogradeMode::Seeded { seed } => Box::new(SeededDraw::new(seed)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direct_motion_never_retrograde() {
        for body in Body::ALL {
            assert!(!DirectMotion.is_retrograde(body, 2451545.0));
        }
    }

    #[test]
    fn test_seeded_draw_is_reproducible() {
        let a = SeededDraw::new(42);
        let b = SeededDraw::new(42);
        for day in 0..50 {
            let jd = 2451545.0 + day as f64;
            for body in [Body::Mercury, Body::Venus, Body::Mars, Body::Jupiter, Body::Saturn] {
                assert_eq!(a.is_retrograde(body, jd), b.is_retrograde(body, jd));
            }
        }
    }

    #[test]
    fn test_seeded_draw_flags_some_days() {
        let policy = SeededDraw::new(7);
        let flagged = (0..1000)
            .filter(|day| policy.is_retrograde(Body::Saturn, 2451545.0 + *day as f64))
            .count();
        // Saturn's threshold is 0.7, so roughly 30% of days
        assert!(flagged > 150 && flagged < 450, "flagged {}", flagged);
    }

    #[test]
    fn test_seeded_draw_ignores_luminaries() {
        let policy = SeededDraw::new(1);
        assert!(!policy.is_retrograde(Body::Sun, 2451545.0));
        assert!(!policy.is_retrograde(Body::Moon, 2451545.0));
    }
}
