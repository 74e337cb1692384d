pub mod signs;

pub use signs::{sign_for, sign_index, Element, Quality, SignPlacement, ZodiacSign, ZODIAC_SIGNS};
