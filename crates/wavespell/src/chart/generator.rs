use crate::angles::{checked_longitude, normalize_degrees};
use crate::aspects::{Aspect, AspectCalculator};
use crate::chart::birth::BirthData;
use crate::chart::houses::{house_of, houses_for, House};
use crate::chart::moon_phase::{moon_phase_for, MoonPhase};
use crate::ephemeris::{
    julian_day_number, Body, DirectMotion, LongitudeModel, MeanMotionModel, Planet,
    RetrogradePolicy,
};
use crate::error::{Result, WavespellError};
use crate::vedic::{nakshatra_for, LinearAyanamsa, NakshatraPlacement};
use crate::western::{sign_for, SignPlacement};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Fixed ascendant longitude used until a sidereal-time model is wired in.
pub const PLACEHOLDER_ASCENDANT: f64 = 30.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NakshatraInfo {
    pub sun: NakshatraPlacement,
    pub moon: NakshatraPlacement,
    pub ascendant: NakshatraPlacement,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiderealChart {
    pub ascendant: SignPlacement,
    pub midheaven: SignPlacement,
    pub planets: Vec<Planet>,
    pub houses: Vec<House>,
    pub aspects: Vec<Aspect>,
    pub moon_phase: MoonPhase,
    pub nakshatras: NakshatraInfo,
}

/// Builds sidereal charts from birth data.
///
/// The longitude model and the retrograde policy are strategies; the rest of
/// the pipeline (signs, houses, aspects, nakshatras) does not depend on them.
pub struct SiderealCalculator {
    model: Box<dyn LongitudeModel>,
    retrograde: Box<dyn RetrogradePolicy>,
    ayanamsa: LinearAyanamsa,
    aspects: AspectCalculator,
}

impl SiderealCalculator {
    pub fn new() -> Self {
        Self {
            model: Box::new(MeanMotionModel::new()),
            retrograde: Box::new(DirectMotion),
            ayanamsa: LinearAyanamsa::default(),
            aspects: AspectCalculator::new(),
        }
    }

    pub fn with_model(mut self, model: Box<dyn LongitudeModel>) -> Self {
        self.model = model;
        self
    }

    pub fn with_retrograde_policy(mut self, policy: Box<dyn RetrogradePolicy>) -> Self {
        self.retrograde = policy;
        self
    }

    pub fn with_ayanamsa(mut self, ayanamsa: LinearAyanamsa) -> Self {
        self.ayanamsa = ayanamsa;
        self
    }

    pub fn with_aspect_calculator(mut self, aspects: AspectCalculator) -> Self {
        self.aspects = aspects;
        self
    }

    pub fn ayanamsa_for(&self, date: NaiveDate) -> f64 {
        self.ayanamsa.ayanamsa_for(date)
    }

    pub fn to_sidereal(&self, tropical_longitude: f64, date: NaiveDate) -> f64 {
        self.ayanamsa.to_sidereal(tropical_longitude, date)
    }

    /// Sidereal placements of the nine bodies, in `Body::ALL` order.
    pub fn planet_longitudes(&self, date: NaiveDate) -> Result<Vec<Planet>> {
        let jd = julian_day_number(date) as f64;
        let mut planets = Vec::with_capacity(Body::ALL.len());
        let mut rahu = None;

        for body in Body::ALL {
            let longitude = match (body, rahu) {
                (Body::Ketu, Some(rahu_lon)) => normalize_degrees(rahu_lon + 180.0),
                _ => self.to_sidereal(self.model.tropical_longitude(body, jd), date),
            };
            let longitude = checked_longitude(longitude)?;
            if body == Body::Rahu {
                rahu = Some(longitude);
            }

            let retrograde = if body.is_luminary() {
                false
            } else if body.is_lunar_node() {
                true
            } else {
                self.retrograde.is_retrograde(body, jd)
            };
            log::trace!("{} at {:.4} (retrograde: {})", body, longitude, retrograde);

            planets.push(Planet {
                body,
                name: body.name().to_string(),
                symbol: body.symbol().to_string(),
                longitude,
                sign: sign_for(longitude),
                house: None,
                retrograde,
            });
        }
        Ok(planets)
    }

    /// Ascendant sign. Birth time and location are not used yet.
    pub fn ascendant_for(&self, _birth: &BirthData) -> SignPlacement {
        sign_for(PLACEHOLDER_ASCENDANT)
    }

    pub fn midheaven_for(&self, ascendant: &SignPlacement) -> SignPlacement {
        sign_for(ascendant.degrees * 30.0 + 90.0)
    }

    pub fn houses_for(&self, ascendant: &SignPlacement, planets: &[Planet]) -> Vec<House> {
        houses_for(ascendant, planets)
    }

    pub fn aspects_for(&self, planets: &[Planet]) -> Vec<Aspect> {
        self.aspects.aspects_for(planets)
    }

    pub fn moon_phase_for(&self, date: NaiveDate) -> MoonPhase {
        moon_phase_for(date)
    }

    /// Nakshatras of the Sun and Moon; the ascendant's is taken at 0°.
    pub fn nakshatras_for(&self, planets: &[Planet]) -> Result<NakshatraInfo> {
        let find = |body: Body| {
            planets
                .iter()
                .find(|p| p.body == body)
                .ok_or(WavespellError::MissingBody(body))
        };
        Ok(NakshatraInfo {
            sun: nakshatra_for(find(Body::Sun)?.longitude),
            moon: nakshatra_for(find(Body::Moon)?.longitude),
            ascendant: nakshatra_for(0.0),
        })
    }

    pub fn generate_chart(&self, birth: &BirthData) -> Result<SiderealChart> {
        let mut planets = self.planet_longitudes(birth.date)?;
        let ascendant = self.ascendant_for(birth);
        let midheaven = self.midheaven_for(&ascendant);
        let aspects = self.aspects_for(&planets);
        let nakshatras = self.nakshatras_for(&planets)?;

        let bare_houses = self.houses_for(&ascendant, &planets);
        for planet in planets.iter_mut() {
            planet.house = house_of(&bare_houses, planet.longitude);
        }
        let houses = self.houses_for(&ascendant, &planets);

        log::debug!(
            "chart for {}: ascendant {}, {} aspects",
            birth.date,
            ascendant.sign.name,
            aspects.len()
        );

        Ok(SiderealChart {
            ascendant,
            midheaven,
            planets,
            houses,
            aspects,
            moon_phase: self.moon_phase_for(birth.date),
            nakshatras,
        })
    }
}

impl Default for SiderealCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SiderealCalculator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SiderealCalculator")
            .field("ayanamsa", &self.ayanamsa)
            .field("aspects", &self.aspects)
            .finish_non_exhaustive()
    }
}
