//! Nakshatra utilities for Vedic astrology.
//!
//! Nakshatras are 27 lunar mansions, each spanning 13°20' (360/27 degrees).
//! Each nakshatra is divided into 4 padas (quarters).

use crate::angles::normalize_degrees;
use serde::{Deserialize, Serialize};

pub const NAKSHATRA_SEGMENT_SIZE: f64 = 360.0 / 27.0;
pub const PADA_SIZE: f64 = NAKSHATRA_SEGMENT_SIZE / 4.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gana {
    Deva,
    Manushya,
    Rakshasa,
}

// (display_name, planetary lord, symbol, deity, gana, nature)
const NAKSHATRA_ORDER: &[(&str, &str, &str, &str, Gana, &str)] = &[
    ("Ashwini", "Ketu", "Horse Head", "Ashwini Kumaras", Gana::Deva, "Light"),
    ("Bharani", "Venus", "Yoni", "Yama", Gana::Manushya, "Fierce"),
    ("Krittika", "Sun", "Razor", "Agni", Gana::Rakshasa, "Mixed"),
    ("Rohini", "Moon", "Cart", "Brahma", Gana::Manushya, "Fixed"),
    ("Mrigashirsha", "Mars", "Deer Head", "Soma", Gana::Deva, "Soft"),
    ("Ardra", "Rahu", "Teardrop", "Rudra", Gana::Manushya, "Sharp"),
    ("Punarvasu", "Jupiter", "Bow", "Aditi", Gana::Deva, "Movable"),
    ("Pushya", "Saturn", "Flower", "Brihaspati", Gana::Deva, "Light"),
    ("Ashlesha", "Mercury", "Serpent", "Nagas", Gana::Rakshasa, "Sharp"),
    ("Magha", "Ketu", "Throne", "Pitrs", Gana::Rakshasa, "Fierce"),
    ("Purva Phalguni", "Venus", "Hammock", "Bhaga", Gana::Manushya, "Fierce"),
    ("Uttara Phalguni", "Sun", "Bed", "Aryaman", Gana::Manushya, "Fixed"),
    ("Hasta", "Moon", "Hand", "Savitar", Gana::Deva, "Light"),
    ("Chitra", "Mars", "Pearl", "Vishvakarma", Gana::Rakshasa, "Soft"),
    ("Swati", "Rahu", "Sword", "Vayu", Gana::Deva, "Movable"),
    ("Vishakha", "Jupiter", "Archway", "Indra-Agni", Gana::Rakshasa, "Mixed"),
    ("Anuradha", "Saturn", "Lotus", "Mitra", Gana::Deva, "Soft"),
    ("Jyeshtha", "Mercury", "Earring", "Indra", Gana::Rakshasa, "Sharp"),
    ("Mula", "Ketu", "Root", "Nirriti", Gana::Rakshasa, "Sharp"),
    ("Purva Ashadha", "Venus", "Fan", "Apas", Gana::Manushya, "Fierce"),
    ("Uttara Ashadha", "Sun", "Elephant Tusk", "Vishva Devas", Gana::Manushya, "Fixed"),
    ("Shravana", "Moon", "Ear", "Vishnu", Gana::Deva, "Movable"),
    ("Dhanishtha", "Mars", "Drum", "Vasus", Gana::Rakshasa, "Movable"),
    ("Shatabhisha", "Rahu", "Circle", "Varuna", Gana::Rakshasa, "Movable"),
    ("Purva Bhadrapada", "Jupiter", "Sword", "Aja Ekapada", Gana::Manushya, "Fierce"),
    ("Uttara Bhadrapada", "Saturn", "Serpent", "Ahir Budhnya", Gana::Manushya, "Fixed"),
    ("Revati", "Mercury", "Fish", "Pushan", Gana::Deva, "Soft"),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Nakshatra {
    pub index: usize,
    pub name: String,
    pub lord: String,
    pub symbol: String,
    pub deity: String,
    pub gana: Gana,
    pub nature: String,
    pub start: f64,
    pub end: f64,
}

/// A nakshatra with the pada for one longitude attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NakshatraPlacement {
    #[serde(flatten)]
    pub nakshatra: Nakshatra,
    /// 1..=4
    pub pada: u8,
    pub longitude: f64,
}

fn build_nakshatra_table() -> Vec<Nakshatra> {
    let mut table = Vec::new();
    for (idx, (name, lord, symbol, deity, gana, nature)) in NAKSHATRA_ORDER.iter().enumerate() {
        let start = idx as f64 * NAKSHATRA_SEGMENT_SIZE;
        table.push(Nakshatra {
            index: idx,
            name: name.to_string(),
            lord: lord.to_string(),
            symbol: symbol.to_string(),
            deity: deity.to_string(),
            gana: *gana,
            nature: nature.to_string(),
            start,
            end: start + NAKSHATRA_SEGMENT_SIZE,
        });
    }
    table
}

lazy_static::lazy_static! {
    pub static ref NAKSHATRAS: Vec<Nakshatra> = build_nakshatra_table();
}

/// Return the nakshatra and pada containing the given longitude.
pub fn nakshatra_for(longitude: f64) -> NakshatraPlacement {
    let lon = normalize_degrees(longitude);
    let mut index = ((lon / NAKSHATRA_SEGMENT_SIZE) as usize).min(NAKSHATRAS.len() - 1);
    if index > 0 && lon < NAKSHATRAS[index].start {
        index -= 1;
    }
    let offset = lon % NAKSHATRA_SEGMENT_SIZE;
    let pada = ((offset / PADA_SIZE) as u8 + 1).min(4);

    NakshatraPlacement {
        nakshatra: NAKSHATRAS[index].clone(),
        pada,
        longitude: lon,
    }
}
