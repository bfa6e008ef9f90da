//! Atmakaraka and Karakamsa (spec §4.11): the karaka is whichever candidate
//! planet sits at the highest degree within its own sign; Karakamsa is the
//! sign that planet occupies in the Navamsa.

use vedic_core::{angles, Chart, Planet, VedicError, VedicResult, STRENGTH_PLANETS};
use vedic_chart::{divisional_chart, DivisionalChartType};

/// Which candidate set Atmakaraka is chosen from. The source material
/// toggles between both without a documented default; this core defaults
/// to the 7-karaka scheme and exposes the 8-karaka (Rahu-included) scheme
/// as an explicit option (spec §9 open question).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KarakaScheme {
    SevenKaraka,
    EightKaraka,
}

fn candidates(scheme: KarakaScheme) -> Vec<Planet> {
    let mut list = STRENGTH_PLANETS.to_vec();
    if scheme == KarakaScheme::EightKaraka {
        list.push(Planet::Rahu);
    }
    list
}

/// The planet with the highest degree within its sign (0..30°) among the
/// scheme's candidates.
pub fn atmakaraka(chart: &Chart, scheme: KarakaScheme) -> VedicResult<Planet> {
    candidates(scheme)
        .into_iter()
        .filter_map(|p| chart.positions.get(&p).map(|pos| (p, angles::position_in_sign(pos.longitude))))
        .max_by(|a, b| a.1.partial_cmp(&b.1).expect("longitudes are always finite"))
        .map(|(p, _)| p)
        .ok_or_else(|| VedicError::InvalidInput("no karaka candidate is placed on this chart".into()))
}

/// The sign the Atmakaraka occupies in the Navamsa (D9) chart.
pub fn karakamsa(chart: &Chart, scheme: KarakaScheme) -> VedicResult<u8> {
    let ak = atmakaraka(chart, scheme)?;
    let navamsa = divisional_chart(chart, DivisionalChartType::D9)?;
    navamsa
        .positions
        .get(&ak)
        .map(|p| p.sign)
        .ok_or_else(|| VedicError::InvalidInput(format!("{ak} missing from its own Navamsa chart")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use vedic_chart::{build_chart, CalculationFlags};
    use vedic_core::Location;
    use vedic_ephemeris::{AnalyticProvider, EphemerisHandle};

    fn sample_chart() -> Chart {
        let handle = EphemerisHandle::new(Box::new(AnalyticProvider));
        let ut = chrono::Utc.with_ymd_and_hms(1990, 5, 15, 9, 0, 0).unwrap();
        let loc = Location::new(28.6139, 77.2090, 0.0);
        build_chart(&handle, ut, loc, CalculationFlags::default()).unwrap()
    }

    #[test]
    fn atmakaraka_is_the_candidate_with_the_highest_degree_in_sign() {
        let chart = sample_chart();
        let ak = atmakaraka(&chart, KarakaScheme::SevenKaraka).unwrap();
        let ak_degree = angles::position_in_sign(chart.positions[&ak].longitude);
        for &p in STRENGTH_PLANETS.iter() {
            let degree = angles::position_in_sign(chart.positions[&p].longitude);
            assert!(degree <= ak_degree + 1e-9);
        }
    }

    #[test]
    fn eight_karaka_scheme_may_include_rahu() {
        let chart = sample_chart();
        let seven = atmakaraka(&chart, KarakaScheme::SevenKaraka).unwrap();
        let eight = atmakaraka(&chart, KarakaScheme::EightKaraka).unwrap();
        // Either the same planet wins, or Rahu's own degree beat it.
        assert!(eight == seven || eight == Planet::Rahu);
    }

    #[test]
    fn karakamsa_resolves_to_a_valid_sign() {
        let chart = sample_chart();
        let sign = karakamsa(&chart, KarakaScheme::SevenKaraka).unwrap();
        assert!(sign < 12);
    }
}
