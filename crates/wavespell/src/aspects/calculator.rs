use crate::angles::angular_separation;
use crate::aspects::types::{Aspect, AspectKind, AspectOrbs};
use crate::ephemeris::Planet;

/// Orb at or below which an aspect counts as exact
pub const DEFAULT_EXACT_ORB: f64 = 1.0;

/// Aspect calculator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AspectCalculator {
    orbs: AspectOrbs,
    exact_orb: f64,
}

impl AspectCalculator {
    /// Create a new aspect calculator with the default orbs
    pub fn new() -> Self {
        Self::with_orbs(AspectOrbs::default(), DEFAULT_EXACT_ORB)
    }

    pub fn with_orbs(orbs: AspectOrbs, exact_orb: f64) -> Self {
        Self { orbs, exact_orb }
    }

    pub fn orbs(&self) -> &AspectOrbs {
        &self.orbs
    }

    /// Classify the separation of two longitudes, returning the aspect and its orb.
    pub fn calculate_aspect(&self, lon1: f64, lon2: f64) -> Option<(AspectKind, f64)> {
        let angle_diff = angular_separation(lon1, lon2);

        AspectKind::CHECK_ORDER.iter().find_map(|kind| {
            let orb = (angle_diff - kind.exact_angle()).abs();
            (orb <= self.orbs.orb_for(*kind)).then_some((*kind, orb))
        })
    }

    /// Aspects between every unordered pair of planets
    pub fn aspects_for(&self, planets: &[Planet]) -> Vec<Aspect> {
        let mut aspects = Vec::new();
        for i in 0..planets.len() {
            for j in (i + 1)..planets.len() {
                let p1 = &planets[i];
                let p2 = &planets[j];

                if let Some((kind, orb)) = self.calculate_aspect(p1.longitude, p2.longitude) {
                    log::trace!("{} {} {} (orb {:.2})", p1.name, kind, p2.name, orb);
                    aspects.push(Aspect {
                        planet1: p1.name.clone(),
                        planet2: p2.name.clone(),
                        kind,
                        orb,
                        exact: orb <= self.exact_orb,
                    });
                }
            }
        }
        aspects
    }
}

impl Default for AspectCalculator {
    fn default() -> Self {
        Self::new()
    }
}
