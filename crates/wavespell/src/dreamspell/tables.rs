//! Reference tables for the 20 solar seals and 13 galactic tones.
//!
//! Rows are never handed out by mutable reference; callers clone what they
//! attach to a signature.

use crate::dreamspell::types::{GalacticTone, SealColor, SolarSeal};

// (name, color, essence, power, action)
const SEAL_ROWS: &[(&str, SealColor, &str, &str, &str)] = &[
    ("Red Dragon", SealColor::Red, "Being", "Birth", "Nurtures"),
    ("White Wind", SealColor::White, "Spirit", "Breath", "Communicates"),
    ("Blue Night", SealColor::Blue, "Abundance", "Intuition", "Dreams"),
    ("Yellow Seed", SealColor::Yellow, "Flowering", "Flowering", "Targets"),
    ("Red Serpent", SealColor::Red, "Life Force", "Life Force", "Survives"),
    ("White World-Bridger", SealColor::White, "Death", "Equalizes", "Equalizes"),
    ("Blue Hand", SealColor::Blue, "Accomplishment", "Accomplishment", "Knows"),
    ("Yellow Star", SealColor::Yellow, "Elegance", "Beautifies", "Beautifies"),
    ("Red Moon", SealColor::Red, "Universal Water", "Purifies", "Purifies"),
    ("White Dog", SealColor::White, "Heart", "Love", "Loves"),
    ("Blue Monkey", SealColor::Blue, "Magic", "Magic", "Plays"),
    ("Yellow Human", SealColor::Yellow, "Free Will", "Wisdom", "Influences"),
    ("Red Skywalker", SealColor::Red, "Space", "Prophecy", "Explores"),
    ("White Wizard", SealColor::White, "Timelessness", "Enchantment", "Enchants"),
    ("Blue Eagle", SealColor::Blue, "Vision", "Vision", "Creates"),
    ("Yellow Warrior", SealColor::Yellow, "Intelligence", "Fearlessness", "Questions"),
    ("Red Earth", SealColor::Red, "Navigation", "Synchronicity", "Evolves"),
    ("White Mirror", SealColor::White, "Endlessness", "Reflection", "Reflects"),
    ("Blue Storm", SealColor::Blue, "Self-Generation", "Self-Generation", "Catalyzes"),
    ("Yellow Sun", SealColor::Yellow, "Universal Fire", "Life", "Enlightens"),
];

// (name, essence, action)
const TONE_ROWS: &[(&str, &str, &str)] = &[
    ("Magnetic", "Purpose", "Unify"),
    ("Lunar", "Challenge", "Polarize"),
    ("Electric", "Service", "Activate"),
    ("Self-Existing", "Form", "Define"),
    ("Overtone", "Radiance", "Empower"),
    ("Rhythmic", "Equality", "Organize"),
    ("Resonant", "Attunement", "Channel"),
    ("Galactic", "Integrity", "Harmonize"),
    ("Solar", "Intention", "Pulse"),
    ("Planetary", "Manifestation", "Perfect"),
    ("Spectral", "Liberation", "Dissolve"),
    ("Crystal", "Cooperation", "Dedicate"),
    ("Cosmic", "Presence", "Endure"),
];

fn build_seal_table() -> Vec<SolarSeal> {
    SEAL_ROWS
        .iter()
        .enumerate()
        .map(|(idx, (name, color, essence, power, action))| SolarSeal {
            id: idx as u8 + 1,
            name: name.to_string(),
            color: *color,
            essence: essence.to_string(),
            power: power.to_string(),
            action: action.to_string(),
        })
        .collect()
}

fn build_tone_table() -> Vec<GalacticTone> {
    TONE_ROWS
        .iter()
        .enumerate()
        .map(|(idx, (name, essence, action))| GalacticTone {
            id: idx as u8 + 1,
            name: name.to_string(),
            essence: essence.to_string(),
            action: action.to_string(),
        })
        .collect()
}

lazy_static::lazy_static! {
    pub static ref SOLAR_SEALS: Vec<SolarSeal> = build_seal_table();
    pub static ref GALACTIC_TONES: Vec<GalacticTone> = build_tone_table();
}

/// Look up a seal by its 1-based id. Ids outside 1..=20 wrap.
pub fn solar_seal(id: u8) -> &'static SolarSeal {
    &SOLAR_SEALS[(id as usize + SOLAR_SEALS.len() - 1) % SOLAR_SEALS.len()]
}

/// Look up a tone by its 1-based id. Ids outside 1..=13 wrap.
pub fn galactic_tone(id: u8) -> &'static GalacticTone {
    &GALACTIC_TONES[(id as usize + GALACTIC_TONES.len() - 1) % GALACTIC_TONES.len()]
}

/// Seal ids of one color family, in table order.
pub fn seals_of_color(color: SealColor) -> Vec<u8> {
    SOLAR_SEALS
        .iter()
        .filter(|seal| seal.color == color)
        .map(|seal| seal.id)
        .collect()
}
