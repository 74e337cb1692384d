use crate::dreamspell::parse_date;
use crate::error::{Result, WavespellError};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Geographic location coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawLocation")]
pub struct GeoLocation {
    pub lat: f64,
    pub lon: f64,
}

impl GeoLocation {
    pub fn new(lat: f64, lon: f64) -> Result<Self> {
        if !(-90.0..=90.0).contains(&lat) {
            return Err(WavespellError::InvalidLocation {
                message: format!("latitude {} outside [-90, 90]", lat),
            });
        }
        if !(-180.0..=180.0).contains(&lon) {
            return Err(WavespellError::InvalidLocation {
                message: format!("longitude {} outside [-180, 180]", lon),
            });
        }
        Ok(Self { lat, lon })
    }
}

#[derive(Deserialize)]
struct RawLocation {
    lat: f64,
    lon: f64,
}

impl TryFrom<RawLocation> for GeoLocation {
    type Error = WavespellError;

    fn try_from(raw: RawLocation) -> Result<Self> {
        GeoLocation::new(raw.lat, raw.lon)
    }
}

/// Birth moment and place. Only the date drives the current chart model;
/// time and location are carried for ascendant models that need them.
///
/// Serialized as a flat record with `HH:MM` time and `latitude`/`longitude`
/// fields; deserializing runs the same checks as [`BirthData::parse`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BirthRecord", into = "BirthRecord")]
pub struct BirthData {
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub location: GeoLocation,
    pub timezone: String,
    pub city: Option<String>,
    pub country: Option<String>,
}

#[derive(Serialize, Deserialize)]
struct BirthRecord {
    date: String,
    time: String,
    latitude: f64,
    longitude: f64,
    timezone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    country: Option<String>,
}

impl TryFrom<BirthRecord> for BirthData {
    type Error = WavespellError;

    fn try_from(record: BirthRecord) -> Result<Self> {
        Ok(BirthData::parse(
            &record.date,
            &record.time,
            record.latitude,
            record.longitude,
            &record.timezone,
        )?
        .with_place(record.city, record.country))
    }
}

impl From<BirthData> for BirthRecord {
    fn from(birth: BirthData) -> Self {
        BirthRecord {
            date: birth.date.format("%Y-%m-%d").to_string(),
            time: birth.time.format("%H:%M").to_string(),
            latitude: birth.location.lat,
            longitude: birth.location.lon,
            timezone: birth.timezone,
            city: birth.city,
            country: birth.country,
        }
    }
}

impl BirthData {
    pub fn new(
        date: NaiveDate,
        time: NaiveTime,
        location: GeoLocation,
        timezone: impl Into<String>,
    ) -> Result<Self> {
        let timezone = timezone.into();
        if timezone.trim().is_empty() {
            return Err(WavespellError::InvalidLocation {
                message: "timezone must not be empty".to_string(),
            });
        }
        Ok(Self {
            date,
            time,
            location,
            timezone,
            city: None,
            country: None,
        })
    }

    /// Build from the raw form fields: `YYYY-MM-DD`, `HH:MM`, degrees, zone name.
    pub fn parse(
        date: &str,
        time: &str,
        latitude: f64,
        longitude: f64,
        timezone: &str,
    ) -> Result<Self> {
        let date = parse_date(date)?;
        let time = parse_time(time)?;
        let location = GeoLocation::new(latitude, longitude)?;
        Self::new(date, time, location, timezone)
    }

    pub fn with_place(mut self, city: Option<String>, country: Option<String>) -> Self {
        self.city = city;
        self.country = country;
        self
    }
}

/// Parse a 24-hour `HH:MM` time.
pub fn parse_time(input: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(input.trim(), "%H:%M").map_err(|_| WavespellError::InvalidTime {
        input: input.to_string(),
    })
}
