//! Shadbala (spec §4.5): the sixfold planetary strength system — Sthana,
//! Dig, Kala, Chesta, Naisargika and Drik Bala — summed in virupas and
//! compared against the classical per-planet rupa thresholds.

pub mod chesta;
pub mod dig;
pub mod drik;
pub mod kala;
pub mod naisargika;
pub mod sthana;

pub use chesta::chesta_bala;
pub use dig::dig_bala;
pub use drik::drik_bala;
pub use kala::{kala_bala, DayWindow};
pub use naisargika::naisargika_bala;
pub use sthana::sthana_bala;

use serde::{Deserialize, Serialize};
use vedic_core::{Chart, Planet};

/// One virupa is 1/60th of a rupa, the classical strength unit.
pub const VIRUPAS_PER_RUPA: f64 = 60.0;

/// The minimum total Shadbala (in rupas) classically required for a planet
/// to be considered capable of delivering its full results.
pub fn required_rupas(planet: Planet) -> Option<f64> {
    match planet {
        Planet::Sun => Some(6.5),
        Planet::Moon => Some(6.0),
        Planet::Mars => Some(5.0),
        Planet::Mercury => Some(7.0),
        Planet::Jupiter => Some(6.5),
        Planet::Venus => Some(5.5),
        Planet::Saturn => Some(5.0),
        _ => None,
    }
}

/// Parashari strength category, bucketed off `required_rupas` as the
/// Moderate midpoint: Very Strong/Strong sit above it, Weak/Very Weak below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShadbalaCategory {
    VeryStrong,
    Strong,
    Moderate,
    Weak,
    VeryWeak,
}

/// Categorizes `total_rupas` against `planet`'s required threshold: the
/// five Parashari bands are spaced at -50%/-25%/+25%/+50% around the
/// classical minimum so a planet exactly at threshold lands Moderate.
fn categorize(planet: Planet, total_rupas: f64) -> ShadbalaCategory {
    let Some(required) = required_rupas(planet) else { return ShadbalaCategory::Moderate };
    let ratio = total_rupas / required;
    if ratio >= 1.5 {
        ShadbalaCategory::VeryStrong
    } else if ratio >= 1.25 {
        ShadbalaCategory::Strong
    } else if ratio >= 0.75 {
        ShadbalaCategory::Moderate
    } else if ratio >= 0.5 {
        ShadbalaCategory::Weak
    } else {
        ShadbalaCategory::VeryWeak
    }
}

/// The full Shadbala breakdown for one planet, in virupas, plus the total
/// in rupas, its Parashari category, and whether it clears the classical
/// threshold.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shadbala {
    pub planet: Planet,
    pub sthana: f64,
    pub dig: f64,
    pub kala: f64,
    pub chesta: f64,
    pub naisargika: f64,
    pub drik: f64,
    pub total_virupas: f64,
    pub total_rupas: f64,
    pub category: ShadbalaCategory,
    pub meets_threshold: bool,
    /// Whether Kala Bala's Natonnata component fell back to the Sun-house
    /// proxy because sunrise/sunset couldn't be resolved (polar regions).
    pub natonnata_polar_fallback: bool,
}

/// Computes the full Shadbala breakdown for `planet` in `chart`. `day` is
/// the sunrise/sunset/next-sunrise window Kala Bala's Natonnata, Tribhaga
/// and Hora components need; pass `None` only when it genuinely cannot be
/// resolved (polar day/night).
pub fn shadbala(chart: &Chart, planet: Planet, day: Option<&DayWindow>) -> Shadbala {
    let sthana = sthana_bala(chart, planet);
    let dig = dig_bala(chart, planet);
    let (kala, natonnata_polar_fallback) = kala_bala(chart, planet, day);
    let chesta = chesta_bala(chart, planet);
    let naisargika = naisargika_bala(planet);
    let drik = drik_bala(chart, planet);
    let total_virupas = sthana + dig + kala + chesta + naisargika + drik;
    let total_rupas = total_virupas / VIRUPAS_PER_RUPA;
    let meets_threshold = required_rupas(planet).map(|r| total_rupas >= r).unwrap_or(true);
    let category = categorize(planet, total_rupas);
    Shadbala {
        planet,
        sthana,
        dig,
        kala,
        chesta,
        naisargika,
        drik,
        total_virupas,
        total_rupas,
        category,
        meets_threshold,
        natonnata_polar_fallback,
    }
}

/// Shadbala for every classical strength planet in `chart`.
pub fn shadbala_all(chart: &Chart, day: Option<&DayWindow>) -> Vec<Shadbala> {
    vedic_core::STRENGTH_PLANETS.iter().map(|&p| shadbala(chart, p, day)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use std::collections::BTreeMap;
    use vedic_core::{HouseSystem, Location, PlanetPosition, SiderealMode};

    fn sample_chart() -> Chart {
        let mut positions = BTreeMap::new();
        for (planet, longitude, speed) in [
            (Planet::Sun, 32.0, 1.0),
            (Planet::Moon, 95.0, 13.0),
            (Planet::Mars, 210.0, 0.5),
            (Planet::Mercury, 15.0, 1.3),
            (Planet::Jupiter, 280.0, 0.08),
            (Planet::Venus, 340.0, 1.2),
            (Planet::Saturn, 125.0, 0.03),
        ] {
            positions.insert(planet, PlanetPosition::from_raw(planet, longitude, 0.0, 1.0, speed));
        }
        Chart {
            timestamp: Utc.with_ymd_and_hms(1990, 5, 15, 9, 0, 0).unwrap(),
            location: Location::new(28.6139, 77.2090, 0.0),
            ayanamsa: 24.1,
            ayanamsa_mode: SiderealMode::Lahiri,
            house_system: HouseSystem::WholeSign,
            ascendant: 10.0,
            cusps: [0.0; 12],
            positions,
        }
    }

    fn sample_day() -> DayWindow {
        DayWindow {
            sunrise: Utc.with_ymd_and_hms(1990, 5, 15, 6, 0, 0).unwrap(),
            sunset: Utc.with_ymd_and_hms(1990, 5, 15, 18, 0, 0).unwrap(),
            next_sunrise: Utc.with_ymd_and_hms(1990, 5, 16, 6, 0, 0).unwrap(),
        }
    }

    #[test]
    fn shadbala_total_is_sum_of_its_parts() {
        let chart = sample_chart();
        let day = sample_day();
        let result = shadbala(&chart, Planet::Jupiter, Some(&day));
        let expected = result.sthana + result.dig + result.kala + result.chesta + result.naisargika + result.drik;
        assert!((result.total_virupas - expected).abs() < 1e-9);
        assert!((result.total_rupas - result.total_virupas / 60.0).abs() < 1e-9);
        assert!(!result.natonnata_polar_fallback);
    }

    #[test]
    fn shadbala_all_covers_seven_strength_planets() {
        let chart = sample_chart();
        let day = sample_day();
        let all = shadbala_all(&chart, Some(&day));
        assert_eq!(all.len(), 7);
    }

    #[test]
    fn shadbala_without_a_day_window_flags_the_polar_fallback() {
        let chart = sample_chart();
        let result = shadbala(&chart, Planet::Sun, None);
        assert!(result.natonnata_polar_fallback);
    }

    #[test]
    fn category_is_moderate_right_at_the_threshold() {
        let required = required_rupas(Planet::Mars).unwrap();
        assert_eq!(categorize(Planet::Mars, required), ShadbalaCategory::Moderate);
        assert_eq!(categorize(Planet::Mars, required * 2.0), ShadbalaCategory::VeryStrong);
        assert_eq!(categorize(Planet::Mars, required * 0.1), ShadbalaCategory::VeryWeak);
    }
}
