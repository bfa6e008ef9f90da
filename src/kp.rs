//! Facade wiring for the KP Engine (spec §4.6): sub-lord breakdown and ABCD
//! significators for every placed planet, optionally recomputed under a
//! different ayanamsa than the chart's own.

use std::collections::BTreeMap;
use vedic_core::{angles, Chart, Planet, PlanetPosition, SiderealMode, VedicResult};
use vedic_ephemeris::EphemerisHandle;
use vedic_kp::{kp_lords, significators_all, KpLords, Significance};

/// KP sub-lord breakdown and ABCD significators for every placed planet,
/// stamped with whichever ayanamsa they were computed under.
pub struct KpCalculations {
    pub ayanamsa_mode: SiderealMode,
    pub lords: BTreeMap<Planet, KpLords>,
    pub significators: BTreeMap<Planet, Significance>,
}

/// Computes KP lords and significators for `chart` under `new_ayanamsa`.
///
/// Sidereal longitudes under two ayanamsa systems differ by a single
/// constant offset at a given instant (the two ayanamsa values themselves),
/// so switching systems only needs one extra `ayanamsa` call rather than
/// rebuilding the chart from raw ephemeris positions.
pub fn kp(handle: &EphemerisHandle, chart: &Chart, new_ayanamsa: SiderealMode) -> VedicResult<KpCalculations> {
    let delta = if new_ayanamsa == chart.ayanamsa_mode {
        0.0
    } else {
        handle.ayanamsa(chart.timestamp, new_ayanamsa)? - chart.ayanamsa
    };

    let mut shifted = chart.clone();
    shifted.ayanamsa_mode = new_ayanamsa;
    shifted.ayanamsa += delta;
    shifted.ascendant = angles::normalize_degrees(shifted.ascendant + delta);
    for cusp in shifted.cusps.iter_mut() {
        *cusp = angles::normalize_degrees(*cusp + delta);
    }

    let mut lords = BTreeMap::new();
    for position in shifted.positions.values_mut() {
        let longitude = angles::normalize_degrees(position.longitude + delta);
        lords.insert(position.planet, kp_lords(longitude));
        *position =
            PlanetPosition::from_raw(position.planet, longitude, position.latitude, position.distance, position.longitude_speed);
    }

    let significators = significators_all(&shifted).into_iter().collect();
    Ok(KpCalculations { ayanamsa_mode: new_ayanamsa, lords, significators })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use vedic_chart::{build_chart, CalculationFlags};
    use vedic_core::Location;
    use vedic_ephemeris::AnalyticProvider;

    fn sample() -> (EphemerisHandle, Chart) {
        let handle = EphemerisHandle::new(Box::new(AnalyticProvider));
        let ut = Utc.with_ymd_and_hms(1990, 5, 15, 9, 0, 0).unwrap();
        let loc = Location::new(28.6139, 77.2090, 0.0);
        let chart = build_chart(&handle, ut, loc, CalculationFlags::default()).unwrap();
        (handle, chart)
    }

    #[test]
    fn same_ayanamsa_reproduces_direct_kp_lords() {
        let (handle, chart) = sample();
        let result = kp(&handle, &chart, chart.ayanamsa_mode).unwrap();
        for (&planet, position) in &chart.positions {
            let direct = kp_lords(position.longitude);
            let via_facade = &result.lords[&planet];
            assert_eq!(direct.sub_lord, via_facade.sub_lord);
            assert_eq!(direct.star_lord, via_facade.star_lord);
        }
    }

    #[test]
    fn significators_cover_every_placed_planet() {
        let (handle, chart) = sample();
        let result = kp(&handle, &chart, SiderealMode::Raman).unwrap();
        assert_eq!(result.significators.len(), chart.positions.len());
    }
}
