//! Current transit positions (spec §4.9): one ephemeris evaluation per
//! planet at a target instant, reporting house-from-natal-ascendant and
//! house-from-natal-Moon.

use serde::{Deserialize, Serialize};
use vedic_core::{angles, Chart, NodeType, Planet, SiderealMode, VedicResult};
use vedic_ephemeris::{node_body, EphemerisHandle, PositionFlags, UtInstant};

const TRANSIT_BODIES: [Planet; 7] = [
    Planet::Sun,
    Planet::Moon,
    Planet::Mars,
    Planet::Mercury,
    Planet::Jupiter,
    Planet::Venus,
    Planet::Saturn,
];

/// One planet's position at the transit instant, located against the natal
/// houses from both the ascendant and the Moon.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TransitPosition {
    pub planet: Planet,
    pub longitude: f64,
    pub sign: u8,
    pub house_from_ascendant: u8,
    pub house_from_moon: Option<u8>,
    pub retrograde: bool,
}

/// House distance counted the classical way: same sign is house 1, the
/// next sign house 2, and so on, wrapping after 12.
pub fn house_distance(from_sign: u8, to_sign: u8) -> u8 {
    (((to_sign as i16 - from_sign as i16).rem_euclid(12)) as u8) + 1
}

fn node_longitude(
    handle: &EphemerisHandle,
    at: UtInstant,
    mode: SiderealMode,
    node_type: NodeType,
) -> VedicResult<f64> {
    let body = node_body(Planet::Rahu, node_type).expect("Rahu always maps to a node body");
    let flags = PositionFlags { topocentric: false, sidereal: true };
    let raw = handle.position(body, at, mode, None, flags)?;
    Ok(raw.longitude)
}

/// Evaluates every classical planet's transit position at `at`, located
/// against `natal`'s ascendant sign and Moon sign (when the natal chart
/// places a Moon).
pub fn current_positions(
    handle: &EphemerisHandle,
    natal: &Chart,
    at: UtInstant,
    node_type: NodeType,
) -> VedicResult<Vec<TransitPosition>> {
    let mode = natal.ayanamsa_mode;
    let asc_sign = natal.ascendant_sign();
    let moon_sign = natal.positions.get(&Planet::Moon).map(|p| p.sign);
    let flags = PositionFlags { topocentric: false, sidereal: true };

    let mut out = Vec::with_capacity(TRANSIT_BODIES.len() + 2);
    for &planet in &TRANSIT_BODIES {
        let body = node_body(planet, node_type).expect("classical bodies always map to a node body");
        let raw = handle.position(body, at, mode, None, flags)?;
        let sign = angles::sign_index(raw.longitude);
        out.push(TransitPosition {
            planet,
            longitude: raw.longitude,
            sign,
            house_from_ascendant: house_distance(asc_sign, sign),
            house_from_moon: moon_sign.map(|ms| house_distance(ms, sign)),
            retrograde: raw.longitude_speed < 0.0,
        });
    }

    let rahu_longitude = node_longitude(handle, at, mode, node_type)?;
    let rahu_sign = angles::sign_index(rahu_longitude);
    out.push(TransitPosition {
        planet: Planet::Rahu,
        longitude: rahu_longitude,
        sign: rahu_sign,
        house_from_ascendant: house_distance(asc_sign, rahu_sign),
        house_from_moon: moon_sign.map(|ms| house_distance(ms, rahu_sign)),
        retrograde: true,
    });
    let ketu_longitude = angles::normalize_degrees(rahu_longitude + 180.0);
    let ketu_sign = angles::sign_index(ketu_longitude);
    out.push(TransitPosition {
        planet: Planet::Ketu,
        longitude: ketu_longitude,
        sign: ketu_sign,
        house_from_ascendant: house_distance(asc_sign, ketu_sign),
        house_from_moon: moon_sign.map(|ms| house_distance(ms, ketu_sign)),
        retrograde: true,
    });

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use vedic_chart::{build_chart, CalculationFlags};
    use vedic_core::Location;
    use vedic_ephemeris::AnalyticProvider;

    fn handle() -> EphemerisHandle {
        EphemerisHandle::new(Box::new(AnalyticProvider))
    }

    fn natal() -> Chart {
        let h = handle();
        let ut = chrono::Utc.with_ymd_and_hms(1990, 5, 15, 9, 0, 0).unwrap();
        let loc = Location::new(28.6139, 77.2090, 0.0);
        build_chart(&h, ut, loc, CalculationFlags::default()).unwrap()
    }

    #[test]
    fn current_positions_cover_all_nine_bodies() {
        let h = handle();
        let chart = natal();
        let at = chrono::Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let positions = current_positions(&h, &chart, at, NodeType::Mean).unwrap();
        assert_eq!(positions.len(), 9);
        assert!(positions.iter().any(|p| p.planet == Planet::Ketu));
    }

    #[test]
    fn house_distance_wraps_after_twelve() {
        assert_eq!(house_distance(0, 0), 1);
        assert_eq!(house_distance(0, 11), 12);
        assert_eq!(house_distance(11, 0), 2);
    }
}
