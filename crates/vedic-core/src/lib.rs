//! Vedic Core — angular primitives, static rule tables, the `Chart` data
//! model and shared error kinds for the Vedic astrology computation core.
//!
//! Every other `vedic-*` crate is a pure function of a [`chart::Chart`] plus
//! the tables defined here; none of them touch the ephemeris directly.

pub mod angles;
pub mod chart;
pub mod error;
pub mod planet;
pub mod tables;

pub use chart::{
    combustion_orb, dignity_of, Chart, Dignity, HouseSystem, Location, PlanetPosition,
    SiderealMode,
};
pub use error::{ResultContextExt, VedicError, VedicResult};
pub use planet::{NodeType, Planet, STRENGTH_PLANETS, VIMSHOTTARI_ORDER};
