pub mod calculator;
pub mod types;

pub use calculator::{AspectCalculator, DEFAULT_EXACT_ORB};
pub use types::{Aspect, AspectKind, AspectOrbs};

use crate::ephemeris::Planet;

/// Aspects between every unordered pair, using the default orbs.
pub fn aspects_for(planets: &[Planet]) -> Vec<Aspect> {
    AspectCalculator::new().aspects_for(planets)
}
