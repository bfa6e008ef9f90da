//! The Chart Builder (spec §4.1): turns one ephemeris call sequence into an
//! immutable [`Chart`].

use serde::{Deserialize, Serialize};
use vedic_core::{
    angles, combustion_orb, dignity_of, Chart, HouseSystem, Location, NodeType, Planet,
    PlanetPosition, SiderealMode, VedicResult,
};
use vedic_ephemeris::{node_body, EphemerisHandle, PositionFlags, UtInstant};

/// The default set of bodies placed on a chart: the seven classical
/// strength planets plus the nodes. Extra bodies (Uranus..Vesta) are placed
/// only when [`ChartFlags::extended_bodies`] asks for them; they carry no
/// Vimshottari period and no dignity (never a [`vedic_core::STRENGTH_PLANETS`]
/// member) but are still useful for aspect/Arudha work some traditions do
/// with them.
const CLASSICAL_BODIES: [Planet; 8] = [
    Planet::Sun,
    Planet::Moon,
    Planet::Mars,
    Planet::Mercury,
    Planet::Jupiter,
    Planet::Venus,
    Planet::Saturn,
    Planet::Rahu,
];

const EXTENDED_BODIES: [Planet; 8] = [
    Planet::Uranus,
    Planet::Neptune,
    Planet::Pluto,
    Planet::Chiron,
    Planet::Ceres,
    Planet::Pallas,
    Planet::Juno,
    Planet::Vesta,
];

/// Per-call configuration for the chart builder and every derivation service
/// downstream of it. Mirrors the ephemeris flags but scoped to the core's
/// own concerns (ayanamsa, node definition, house system) rather than the
/// provider's internal ones.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CalculationFlags {
    pub ayanamsa_mode: SiderealMode,
    pub house_system: HouseSystem,
    pub node_type: NodeType,
    pub topocentric: bool,
    pub extended_bodies: bool,
}

impl Default for CalculationFlags {
    fn default() -> Self {
        Self {
            ayanamsa_mode: SiderealMode::default(),
            house_system: HouseSystem::default(),
            node_type: NodeType::Mean,
            topocentric: false,
            extended_bodies: false,
        }
    }
}

/// Builds a [`Chart`] for `ut`/`location` under `flags` (spec §4.1 steps 1-7).
///
/// 1. ayanamsa lookup, 2. per-planet position queries (nodes adapted via
/// [`node_body`]), 3. Ketu derived as `Rahu + 180`, 4. ascendant/cusps from
/// `EphemerisHandle::houses`, 5. sign/nakshatra/pada/dignity populated by
/// [`PlanetPosition::from_raw`], 6. combustion computed once the Sun's
/// longitude is known, 7. invariants checked before returning.
pub fn build_chart(
    handle: &EphemerisHandle,
    ut: UtInstant,
    location: Location,
    flags: CalculationFlags,
) -> VedicResult<Chart> {
    location.validate()?;
    let ayanamsa = handle.ayanamsa(ut, flags.ayanamsa_mode)?;

    let position_flags =
        PositionFlags { topocentric: flags.topocentric, sidereal: true };
    let topo_location = flags.topocentric.then_some(location);

    let mut bodies: Vec<Planet> = CLASSICAL_BODIES.to_vec();
    if flags.extended_bodies {
        bodies.extend_from_slice(&EXTENDED_BODIES);
    }

    let mut positions = std::collections::BTreeMap::new();
    let mut rahu_longitude = None;
    for planet in bodies {
        let body = node_body(planet, flags.node_type)
            .expect("CLASSICAL_BODIES/EXTENDED_BODIES never contain Ketu");
        let raw = handle.position(body, ut, flags.ayanamsa_mode, topo_location, position_flags)?;
        if planet == Planet::Rahu {
            rahu_longitude = Some(raw.longitude);
        }
        let pos = PlanetPosition::from_raw(
            planet,
            raw.longitude,
            raw.latitude,
            raw.distance,
            raw.longitude_speed,
        );
        positions.insert(planet, pos);
    }

    // Ketu is derived, never queried (spec §3): opposite the Rahu longitude,
    // same distance, mirrored latitude, same speed magnitude.
    if let (Some(rahu_long), Some(rahu)) = (rahu_longitude, positions.get(&Planet::Rahu).cloned())
    {
        let ketu_longitude = angles::normalize_degrees(rahu_long + 180.0);
        let ketu = PlanetPosition::from_raw(
            Planet::Ketu,
            ketu_longitude,
            -rahu.latitude,
            rahu.distance,
            rahu.longitude_speed,
        );
        positions.insert(Planet::Ketu, ketu);
    }

    let sun_longitude = positions.get(&Planet::Sun).map(|p| p.longitude);
    if let Some(sun_longitude) = sun_longitude {
        for (planet, pos) in positions.iter_mut() {
            if *planet == Planet::Sun {
                continue;
            }
            if let Some(orb) = combustion_orb(*planet, pos.retrograde) {
                pos.combust = angles::shortest_arc(sun_longitude, pos.longitude).abs() <= orb;
            }
        }
    }

    let cusps = handle.houses(ut, flags.ayanamsa_mode, location, flags.house_system)?;
    let ascendant = angles::normalize_degrees(cusps.ascendant);

    // Recompute sign/dignity dependent on the ascendant through a fresh
    // PlanetPosition pass isn't needed: dignity and nakshatra are
    // ascendant-independent. Whole-Sign cusps are derived purely from the
    // ascendant sign regardless of what the provider returned, per spec §3.
    let house_cusps = match flags.house_system {
        HouseSystem::WholeSign => {
            let asc_sign = angles::sign_index(ascendant);
            let mut whole = [0.0; 12];
            for (i, c) in whole.iter_mut().enumerate() {
                *c = ((asc_sign as usize + i) % 12) as f64 * 30.0;
            }
            whole
        }
        _ => cusps.cusps,
    };

    let chart = Chart {
        timestamp: ut,
        location,
        ayanamsa,
        ayanamsa_mode: flags.ayanamsa_mode,
        house_system: flags.house_system,
        ascendant,
        cusps: house_cusps,
        positions,
    };
    chart.check_invariants()?;
    Ok(chart)
}
