//! Facade wiring for the Transit Engine and its special-transit windows
//! (spec §4.9): one instant's classical-planet positions plus the
//! instantaneous Sade Sati/Dhaiya/Panchak classification derived from them.

use vedic_core::{Chart, NodeType, Planet, VedicResult};
use vedic_ephemeris::{EphemerisBody, EphemerisHandle, PositionFlags, UtInstant};
use vedic_transits::{
    current_positions, dhaiya_status, panchak_status, sade_sati_status, DhaiyaKind, Panchak, SadeSati,
    TransitPosition,
};

/// Every classical-planet transit position at one instant, plus whichever
/// special-transit classifications the natal Moon/Saturn placement makes
/// applicable.
pub struct SpecialTransits {
    pub positions: Vec<TransitPosition>,
    pub sade_sati: Option<SadeSati>,
    pub dhaiya: Option<DhaiyaKind>,
    pub panchak: Option<Panchak>,
}

/// Computes `chart`'s transit snapshot at `at`: current positions against
/// the natal houses, and the Sade Sati/Dhaiya/Panchak status they imply.
pub fn special_transits(
    handle: &EphemerisHandle,
    chart: &Chart,
    at: UtInstant,
    node_type: NodeType,
) -> VedicResult<SpecialTransits> {
    let positions = current_positions(handle, chart, at, node_type)?;

    let natal_moon_sign = chart.positions.get(&Planet::Moon).map(|p| p.sign);
    let transit_saturn_sign = positions.iter().find(|p| p.planet == Planet::Saturn).map(|p| p.sign);
    let (sade_sati, dhaiya) = match (natal_moon_sign, transit_saturn_sign) {
        (Some(moon_sign), Some(saturn_sign)) => {
            (Some(sade_sati_status(moon_sign, saturn_sign)), dhaiya_status(moon_sign, saturn_sign))
        }
        _ => (None, None),
    };

    let panchak = match positions.iter().find(|p| p.planet == Planet::Moon) {
        Some(_) => {
            let raw = handle.position(
                EphemerisBody::Moon,
                at,
                chart.ayanamsa_mode,
                None,
                PositionFlags { topocentric: false, sidereal: true },
            )?;
            Some(panchak_status(raw.longitude, raw.longitude_speed)?)
        }
        None => None,
    };

    Ok(SpecialTransits { positions, sade_sati, dhaiya, panchak })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use vedic_chart::{build_chart, CalculationFlags};
    use vedic_core::Location;
    use vedic_ephemeris::AnalyticProvider;

    #[test]
    fn special_transits_reports_seven_classical_positions() {
        let handle = EphemerisHandle::new(Box::new(AnalyticProvider));
        let birth = Utc.with_ymd_and_hms(1990, 5, 15, 9, 0, 0).unwrap();
        let loc = Location::new(28.6139, 77.2090, 0.0);
        let chart = build_chart(&handle, birth, loc, CalculationFlags::default()).unwrap();
        let at = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let result = special_transits(&handle, &chart, at, NodeType::Mean).unwrap();
        assert_eq!(result.positions.len(), 7);
        assert!(result.panchak.is_some());
    }
}
