//! Dig Bala (spec §4.5): directional strength, maximal when a planet sits
//! at its own directional-strength house cusp and falling to zero at the
//! opposite cusp.

use vedic_core::{angles, Chart, Planet};

/// The house (1..12, Whole-Sign) in which `planet` has full directional
/// strength: Jupiter/Mercury in the 1st (east), Moon/Venus in the 4th
/// (north), Saturn in the 7th (west), Sun/Mars in the 10th (south).
fn strong_house(planet: Planet) -> Option<u8> {
    match planet {
        Planet::Jupiter | Planet::Mercury => Some(1),
        Planet::Moon | Planet::Venus => Some(4),
        Planet::Saturn => Some(7),
        Planet::Sun | Planet::Mars => Some(10),
        _ => None,
    }
}

/// Dig Bala in virupas (0..60) for `planet` in `chart`.
pub fn dig_bala(chart: &Chart, planet: Planet) -> f64 {
    let Some(house) = strong_house(planet) else { return 0.0 };
    let Some(pos) = chart.positions.get(&planet) else { return 0.0 };
    let asc_sign = chart.ascendant_sign();
    let strong_sign = (asc_sign + house - 1) % 12;
    let strong_point = strong_sign as f64 * 30.0 + chart.ascendant % 30.0;
    let distance = angles::shortest_arc(strong_point, pos.longitude).abs();
    ((180.0 - distance) / 3.0).clamp(0.0, 60.0)
}
