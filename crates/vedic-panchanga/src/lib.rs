//! Panchanga engine (spec §4.7): the five limbs of Vedic time — Tithi,
//! Nakshatra, Yoga, Karana, Vara — plus the tithi junction search.

pub mod junction;
pub mod names;
pub mod panchanga;

pub use junction::{default_accuracy, default_search_window, next_amavasya, next_purnima, next_tithi_junction};
pub use panchanga::{luminary_longitudes, panchanga, tithi_value, yoga_value, Paksha, Panchanga};
