//! Krishnamurti Paddhati (spec §4.6): star lord / sub-lord / sub-sub-lord
//! division and ABCD significator analysis, built on the same
//! Vimshottari-proportional subdivision the Divisional Chart Mapper uses
//! for D249.

pub mod significators;
pub mod sublord;

pub use significators::{significators_all, significators_of_planet, Significance};
pub use sublord::{kp_lords, KpLords};
