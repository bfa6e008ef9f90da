//! The Ephemeris Provider trait (spec §6): the external interface the core
//! consumes. Implementations wrap Swiss Ephemeris or an equivalent; this
//! crate ships only the trait, the locking coordinator, and an analytic
//! reference implementation used in tests.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use vedic_core::{NodeType, Planet, SiderealMode};

/// The moment-in-time type every provider method takes. An alias over
/// `chrono::DateTime<Utc>` rather than `std::time::Instant`, since callers
/// need calendar semantics (Julian Day, sunrise/sunset), not monotonic time.
pub type UtInstant = DateTime<Utc>;

/// Bodies the ephemeris itself knows about. Notably this has `MeanNode` and
/// `TrueNode` rather than `Rahu`/`Ketu` — the core's `Planet::Rahu` /
/// `Planet::Ketu` variants are a Vedic-facing concept; `node_body` below
/// adapts between the two (design note §9).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EphemerisBody {
    Sun,
    Moon,
    Mars,
    Mercury,
    Jupiter,
    Venus,
    Saturn,
    MeanNode,
    TrueNode,
    Uranus,
    Neptune,
    Pluto,
    Chiron,
    Ceres,
    Pallas,
    Juno,
    Vesta,
}

/// Maps a core `Planet` to the `EphemerisBody` the provider should be asked
/// for. Returns `None` for `Planet::Ketu`, which is never queried directly
/// (spec §3: "Ketu is derived, never queried") — callers derive it as
/// `Rahu + 180`.
pub fn node_body(planet: Planet, node_type: NodeType) -> Option<EphemerisBody> {
    Some(match planet {
        Planet::Sun => EphemerisBody::Sun,
        Planet::Moon => EphemerisBody::Moon,
        Planet::Mars => EphemerisBody::Mars,
        Planet::Mercury => EphemerisBody::Mercury,
        Planet::Jupiter => EphemerisBody::Jupiter,
        Planet::Venus => EphemerisBody::Venus,
        Planet::Saturn => EphemerisBody::Saturn,
        Planet::Rahu => match node_type {
            NodeType::Mean => EphemerisBody::MeanNode,
            NodeType::True => EphemerisBody::TrueNode,
        },
        Planet::Ketu => return None,
        Planet::Uranus => EphemerisBody::Uranus,
        Planet::Neptune => EphemerisBody::Neptune,
        Planet::Pluto => EphemerisBody::Pluto,
        Planet::Chiron => EphemerisBody::Chiron,
        Planet::Ceres => EphemerisBody::Ceres,
        Planet::Pallas => EphemerisBody::Pallas,
        Planet::Juno => EphemerisBody::Juno,
        Planet::Vesta => EphemerisBody::Vesta,
    })
}

/// Raw position returned by the provider: ecliptic longitude/latitude in
/// degrees, distance in AU, longitude speed in degrees/day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawPosition {
    pub longitude: f64,
    pub latitude: f64,
    pub distance: f64,
    pub longitude_speed: f64,
}

/// Flags controlling a single `position` call.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PositionFlags {
    pub topocentric: bool,
    pub sidereal: bool,
}

/// House cusps plus ascendant/midheaven for a moment and place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HouseCusps {
    pub cusps: [f64; 12],
    pub ascendant: f64,
    pub midheaven: f64,
}

/// Which of the four classical rise/set/transit events to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiseSetKind {
    Rise,
    Set,
    UpperTransit,
    LowerTransit,
}

/// Atmospheric refraction parameters for rise/set computations.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Atmosphere {
    pub pressure_hpa: f64,
    pub temperature_c: f64,
}

impl Default for Atmosphere {
    fn default() -> Self {
        Self { pressure_hpa: 1013.25, temperature_c: 15.0 }
    }
}

/// The external collaborator the core depends on for all raw astronomical
/// facts (spec §1, §6). Implementations wrap Swiss Ephemeris or an
/// equivalent; the core never computes planetary positions itself.
pub trait EphemerisProvider: Send + Sync {
    fn ayanamsa(&self, ut: UtInstant, mode: SiderealMode) -> Result<f64, String>;

    fn position(
        &self,
        body: EphemerisBody,
        ut: UtInstant,
        topo_location: Option<vedic_core::Location>,
        flags: PositionFlags,
    ) -> Result<RawPosition, String>;

    fn houses(
        &self,
        ut: UtInstant,
        location: vedic_core::Location,
        house_system: vedic_core::HouseSystem,
    ) -> Result<HouseCusps, String>;

    fn rise_set(
        &self,
        body: EphemerisBody,
        date: NaiveDate,
        location: vedic_core::Location,
        kind: RiseSetKind,
        atmosphere: Option<Atmosphere>,
    ) -> Result<Option<UtInstant>, String>;

    fn sunrise_sunset(
        &self,
        date: NaiveDate,
        location: vedic_core::Location,
    ) -> Result<(Option<UtInstant>, Option<UtInstant>), String>;

    fn julian_day(&self, date: NaiveDate, time_of_day_hours: f64) -> f64;
}
