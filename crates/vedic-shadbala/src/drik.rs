//! Drik Bala (spec §4.5): aspectual strength — benefic aspects add virupas,
//! malefic aspects subtract, using the same full-aspect rules as the
//! Graha Drishti engine.

use vedic_chart::sign_aspects;
use vedic_core::{Chart, Planet};

/// Net Drik Bala in virupas for `planet`, as the sum over every other
/// placed planet of ±15 virupas when it casts a full aspect on `planet`'s
/// sign (benefic aspecting planet adds, malefic subtracts).
pub fn drik_bala(chart: &Chart, planet: Planet) -> f64 {
    let Some(target_sign) = chart.positions.get(&planet).map(|p| p.sign) else { return 0.0 };
    let mut total = 0.0;
    for (&other, pos) in &chart.positions {
        if other == planet {
            continue;
        }
        if sign_aspects(other, pos.sign, target_sign) {
            total += if other.is_benefic() { 15.0 } else { -15.0 };
        }
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use std::collections::BTreeMap;
    use vedic_core::{HouseSystem, Location, PlanetPosition, SiderealMode};

    #[test]
    fn jupiter_aspect_adds_positive_drik_bala() {
        let mut positions = BTreeMap::new();
        positions.insert(Planet::Jupiter, PlanetPosition::from_raw(Planet::Jupiter, 0.0, 0.0, 1.0, 1.0));
        positions.insert(Planet::Moon, PlanetPosition::from_raw(Planet::Moon, 120.0, 0.0, 1.0, 1.0)); // 5th from Jupiter
        let chart = Chart {
            timestamp: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            location: Location::new(0.0, 0.0, 0.0),
            ayanamsa: 24.0,
            ayanamsa_mode: SiderealMode::Lahiri,
            house_system: HouseSystem::WholeSign,
            ascendant: 0.0,
            cusps: [0.0; 12],
            positions,
        };
        assert!(drik_bala(&chart, Planet::Moon) > 0.0);
    }
}
