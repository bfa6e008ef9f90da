//! Naisargika Bala (spec §4.5): fixed natural strength, independent of the
//! chart. `(8 - rank) * 60 / 7` virupas for the seven strength planets in
//! their classical rank order (Sun strongest .. Saturn weakest); the seven
//! values sum to exactly 240 virupas.

use vedic_core::Planet;

fn rank(planet: Planet) -> Option<u32> {
    match planet {
        Planet::Sun => Some(1),
        Planet::Moon => Some(2),
        Planet::Mars => Some(3),
        Planet::Mercury => Some(4),
        Planet::Jupiter => Some(5),
        Planet::Venus => Some(6),
        Planet::Saturn => Some(7),
        _ => None,
    }
}

/// Naisargika Bala in virupas, or `0.0` for bodies outside the classical
/// seven (nodes, outer planets).
pub fn naisargika_bala(planet: Planet) -> f64 {
    match rank(planet) {
        Some(r) => (8 - r) as f64 * 60.0 / 7.0,
        None => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seven_planets_sum_to_240() {
        let total: f64 = vedic_core::STRENGTH_PLANETS.iter().map(|&p| naisargika_bala(p)).sum();
        assert!((total - 240.0).abs() < 1e-9);
    }

    #[test]
    fn sun_is_strongest_saturn_weakest() {
        assert!(naisargika_bala(Planet::Sun) > naisargika_bala(Planet::Moon));
        assert!(naisargika_bala(Planet::Moon) > naisargika_bala(Planet::Saturn));
    }
}
