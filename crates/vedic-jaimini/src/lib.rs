//! Jaimini Engine (spec §4.11): Atmakaraka, Karakamsa, Arudha Pada,
//! Upapada, and Rashi Drishti (the last re-exported from `vedic-chart`,
//! where the sign-to-sign aspect rule already lives).

pub mod arudha;
pub mod karaka;

pub use arudha::{arudha_pada, upapada};
pub use karaka::{atmakaraka, karakamsa, KarakaScheme};
pub use vedic_chart::{rashi_aspects, rashi_drishti};
