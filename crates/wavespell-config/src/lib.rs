use chrono::NaiveDate;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use wavespell::aspects::{AspectCalculator, AspectOrbs, DEFAULT_EXACT_ORB};
use wavespell::dreamspell::{parse_date, DREAMSPELL_EPOCH, EPOCH_KIN};
use wavespell::ephemeris::RetrogradeMode;
use wavespell::vedic::LinearAyanamsa;
use wavespell::{DreamspellCalendar, Kin, SiderealCalculator};

/// Validated engine settings; build calculators from them.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineSettings {
    pub epoch: NaiveDate,
    pub anchor_kin: Kin,
    pub ayanamsa: LinearAyanamsa,
    pub orbs: AspectOrbs,
    pub exact_orb: f64,
    pub retrograde: RetrogradeMode,
}

impl EngineSettings {
    pub fn calendar(&self) -> DreamspellCalendar {
        DreamspellCalendar::new(self.epoch, self.anchor_kin)
    }

    pub fn sidereal_calculator(&self) -> SiderealCalculator {
        SiderealCalculator::new()
            .with_ayanamsa(self.ayanamsa)
            .with_aspect_calculator(AspectCalculator::with_orbs(self.orbs, self.exact_orb))
            .with_retrograde_policy(self.retrograde.build())
    }
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            epoch: DreamspellCalendar::default().epoch(),
            anchor_kin: DreamspellCalendar::default().anchor(),
            ayanamsa: LinearAyanamsa::default(),
            orbs: AspectOrbs::default(),
            exact_orb: DEFAULT_EXACT_ORB,
            retrograde: RetrogradeMode::Direct,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RootConfigToml {
    #[serde(default)]
    dreamspell: DreamspellToml,
    #[serde(default)]
    sidereal: SiderealToml,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct DreamspellToml {
    #[serde(default)]
    epoch: Option<String>,
    #[serde(default)]
    anchor_kin: Option<u16>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct SiderealToml {
    #[serde(default)]
    ayanamsa_base: Option<f64>,
    #[serde(default)]
    ayanamsa_rate: Option<f64>,
    #[serde(default)]
    ayanamsa_base_year: Option<i32>,
    #[serde(default)]
    exact_orb: Option<f64>,
    #[serde(default)]
    orbs: Option<AspectOrbs>,
    #[serde(default)]
    retrograde: Option<RetrogradeMode>,
}

/// Try the common relative paths for `configs/wavespell.toml`.
pub fn read_config_toml_text() -> anyhow::Result<String> {
    let paths = ["configs/wavespell.toml", "../../configs/wavespell.toml"];
    for p in &paths {
        if let Ok(c) = fs::read_to_string(p) {
            return Ok(c);
        }
    }
    anyhow::bail!("Could not load wavespell.toml from {:?}", paths);
}

/// Load settings from `path`, or from the default locations.
///
/// With no explicit path a missing file is not an error: the built-in
/// defaults are used instead.
pub fn load_engine_settings(path: Option<&Path>) -> anyhow::Result<EngineSettings> {
    let text = match path {
        Some(path) => fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {e}", path.display()))?,
        None => match read_config_toml_text() {
            Ok(text) => text,
            Err(e) => {
                log::debug!("{e}; using built-in settings");
                return Ok(EngineSettings::default());
            }
        },
    };
    parse_engine_settings(&text)
}

pub fn parse_engine_settings(text: &str) -> anyhow::Result<EngineSettings> {
    let root: RootConfigToml = toml::from_str(text)
        .map_err(|e| anyhow::anyhow!("Failed to parse wavespell.toml: {e}"))?;
    let RootConfigToml {
        dreamspell,
        sidereal,
    } = root;
    let defaults = EngineSettings::default();

    let epoch = match dreamspell.epoch {
        Some(raw) => parse_date(&raw)
            .map_err(|e| anyhow::anyhow!("dreamspell.epoch: {e}"))?,
        None => defaults.epoch,
    };
    let anchor_kin = match dreamspell.anchor_kin {
        Some(raw) => Kin::new(raw).map_err(|e| anyhow::anyhow!("dreamspell.anchor_kin: {e}"))?,
        None => defaults.anchor_kin,
    };
    if (epoch, anchor_kin.get()) != (defaults.epoch, EPOCH_KIN) {
        log::warn!(
            "non-standard correlation: {} is kin {} (standard {:?} is kin {})",
            epoch,
            anchor_kin.get(),
            DREAMSPELL_EPOCH,
            EPOCH_KIN
        );
    }

    let ayanamsa = LinearAyanamsa {
        base: sidereal.ayanamsa_base.unwrap_or(defaults.ayanamsa.base),
        rate: sidereal.ayanamsa_rate.unwrap_or(defaults.ayanamsa.rate),
        base_year: sidereal
            .ayanamsa_base_year
            .unwrap_or(defaults.ayanamsa.base_year),
    };
    if !ayanamsa.base.is_finite() || !ayanamsa.rate.is_finite() {
        anyhow::bail!("sidereal.ayanamsa_base and ayanamsa_rate must be finite");
    }

    let orbs = sidereal.orbs.unwrap_or(defaults.orbs);
    for (name, orb) in [
        ("conjunction", orbs.conjunction),
        ("opposition", orbs.opposition),
        ("trine", orbs.trine),
        ("square", orbs.square),
        ("sextile", orbs.sextile),
    ] {
        if !orb.is_finite() || orb < 0.0 {
            anyhow::bail!("sidereal.orbs.{name} must be a non-negative number, got {orb}");
        }
    }
    let exact_orb = sidereal.exact_orb.unwrap_or(defaults.exact_orb);
    if !exact_orb.is_finite() || exact_orb < 0.0 {
        anyhow::bail!("sidereal.exact_orb must be a non-negative number, got {exact_orb}");
    }

    let retrograde = sidereal.retrograde.unwrap_or(defaults.retrograde);

    Ok(EngineSettings {
        epoch,
        anchor_kin,
        ayanamsa,
        orbs,
        exact_orb,
        retrograde,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let settings = parse_engine_settings("").unwrap();
        assert_eq!(settings, EngineSettings::default());
        assert_eq!(settings.anchor_kin.get(), 8);
        assert_eq!(settings.epoch, NaiveDate::from_ymd_opt(1987, 7, 26).unwrap());
    }

    #[test]
    fn full_file_parses() {
        let text = r#"
            [dreamspell]
            epoch = "2013-07-26"
            anchor_kin = 164

            [sidereal]
            ayanamsa_base = 23.85
            ayanamsa_rate = 0.014
            ayanamsa_base_year = 2000
            exact_orb = 0.5

            [sidereal.orbs]
            conjunction = 10.0
            opposition = 9.0
            trine = 7.0
            square = 6.0
            sextile = 3.0

            [sidereal.retrograde]
            mode = "seeded"
            seed = 1987
        "#;
        let settings = parse_engine_settings(text).unwrap();
        assert_eq!(settings.anchor_kin.get(), 164);
        assert_eq!(settings.ayanamsa.base_year, 2000);
        assert_eq!(settings.orbs.conjunction, 10.0);
        assert_eq!(settings.exact_orb, 0.5);
        assert_eq!(settings.retrograde, RetrogradeMode::Seeded { seed: 1987 });

        let calendar = settings.calendar();
        assert_eq!(calendar.date_to_kin(settings.epoch).get(), 164);
    }

    #[test]
    fn rejects_bad_anchor_kin() {
        let err = parse_engine_settings("[dreamspell]\nanchor_kin = 0\n").unwrap_err();
        assert!(err.to_string().contains("anchor_kin"));
        assert!(parse_engine_settings("[dreamspell]\nanchor_kin = 261\n").is_err());
    }

    #[test]
    fn rejects_negative_orb() {
        let text = "[sidereal.orbs]\nconjunction = 8.0\nopposition = 8.0\ntrine = 6.0\nsquare = -1.0\nsextile = 4.0\n";
        let err = parse_engine_settings(text).unwrap_err();
        assert!(err.to_string().contains("square"));
    }

    #[test]
    fn rejects_bad_retrograde_mode() {
        assert!(parse_engine_settings("[sidereal.retrograde]\nmode = \"random\"\n").is_err());
        assert!(parse_engine_settings("[sidereal.retrograde]\nmode = \"seeded\"\n").is_err());
        let direct = parse_engine_settings("[sidereal.retrograde]\nmode = \"direct\"\n").unwrap();
        assert_eq!(direct.retrograde, RetrogradeMode::Direct);
    }

    #[test]
    fn rejects_bad_epoch_and_unknown_keys() {
        assert!(parse_engine_settings("[dreamspell]\nepoch = \"1987-13-40\"\n").is_err());
        assert!(parse_engine_settings("[dreamspell]\nepoc = \"1987-07-26\"\n").is_err());
    }

    #[test]
    fn partial_orbs_fall_back_to_defaults() {
        let settings = parse_engine_settings("[sidereal.orbs]\ntrine = 7.5\n").unwrap();
        assert_eq!(settings.orbs.trine, 7.5);
        assert_eq!(settings.orbs.sextile, 4.0);
    }

    #[test]
    fn explicit_missing_path_is_an_error() {
        let missing = Path::new("definitely/not/here/wavespell.toml");
        assert!(load_engine_settings(Some(missing)).is_err());
    }
}
