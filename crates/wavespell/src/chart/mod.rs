pub mod birth;
pub mod generator;
pub mod houses;
pub mod moon_phase;

pub use birth::{parse_time, BirthData, GeoLocation};
pub use generator::{NakshatraInfo, SiderealCalculator, SiderealChart, PLACEHOLDER_ASCENDANT};
pub use houses::{house_of, houses_for, House};
pub use moon_phase::{moon_phase_for, moon_phase_for_jd, MoonPhase, PhaseName};
