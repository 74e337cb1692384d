//! The twelve 30° zodiac signs.

use crate::angles::normalize_degrees;
use serde::{Deserialize, Serialize};

pub const SIGN_SPAN: f64 = 30.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quality {
    Cardinal,
    Fixed,
    Mutable,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZodiacSign {
    pub index: u8,
    pub name: String,
    pub symbol: String,
    pub element: Element,
    pub quality: Quality,
    pub ruler: String,
}

/// A sign with the in-sign degree attached for one longitude.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignPlacement {
    #[serde(flatten)]
    pub sign: ZodiacSign,
    /// 0 <= degrees < 30
    pub degrees: f64,
}

// (name, symbol, element, quality, traditional ruler)
const SIGN_ROWS: &[(&str, &str, Element, Quality, &str)] = &[
    ("Aries", "♈", Element::Fire, Quality::Cardinal, "Mars"),
    ("Taurus", "♉", Element::Earth, Quality::Fixed, "Venus"),
    ("Gemini", "♊", Element::Air, Quality::Mutable, "Mercury"),
    ("Cancer", "♋", Element::Water, Quality::Cardinal, "Moon"),
    ("Leo", "♌", Element::Fire, Quality::Fixed, "Sun"),
    ("Virgo", "♍", Element::Earth, Quality::Mutable, "Mercury"),
    ("Libra", "♎", Element::Air, Quality::Cardinal, "Venus"),
    ("Scorpio", "♏", Element::Water, Quality::Fixed, "Mars"),
    ("Sagittarius", "♐", Element::Fire, Quality::Mutable, "Jupiter"),
    ("Capricorn", "♑", Element::Earth, Quality::Cardinal, "Saturn"),
    ("Aquarius", "♒", Element::Air, Quality::Fixed, "Saturn"),
    ("Pisces", "♓", Element::Water, Quality::Mutable, "Jupiter"),
];

lazy_static::lazy_static! {
    pub static ref ZODIAC_SIGNS: Vec<ZodiacSign> = SIGN_ROWS
        .iter()
        .enumerate()
        .map(|(idx, (name, symbol, element, quality, ruler))| ZodiacSign {
            index: idx as u8,
            name: name.to_string(),
            symbol: symbol.to_string(),
            element: *element,
            quality: *quality,
            ruler: ruler.to_string(),
        })
        .collect();
}

/// Get sign index (0-11) from longitude
pub fn sign_index(longitude: f64) -> usize {
    let lon = normalize_degrees(longitude);
    let mut index = ((lon / SIGN_SPAN) as usize).min(11);
    // the division can round up just below a cusp
    if index > 0 && lon < index as f64 * SIGN_SPAN {
        index -= 1;
    }
    index
}

/// Sign containing `longitude`, with the remainder as the in-sign degree.
pub fn sign_for(longitude: f64) -> SignPlacement {
    let lon = normalize_degrees(longitude);
    let index = sign_index(lon);
    SignPlacement {
        sign: ZODIAC_SIGNS[index].clone(),
        degrees: lon % SIGN_SPAN,
    }
}

impl SignPlacement {
    /// Absolute longitude of this placement.
    pub fn longitude(&self) -> f64 {
        self.sign.index as f64 * SIGN_SPAN + self.degrees
    }
}
