//! Chesta Bala (spec §4.5): motional strength. Retrograde motion is at
//! maximal strength; direct motion scales down with speed; the Sun and
//! Moon (which never retrograde) use Ayana/Paksha Bala as their Chesta
//! Bala by classical convention.

use vedic_core::Planet;
use crate::kala::{ayana_bala, paksha_bala};
use vedic_core::Chart;

/// Typical mean daily motion in degrees, used to normalize a planet's
/// current speed into a 0..60 virupa scale.
fn mean_daily_motion(planet: Planet) -> f64 {
    match planet {
        Planet::Mars => 0.5240,
        Planet::Mercury => 1.383,
        Planet::Jupiter => 0.0831,
        Planet::Venus => 1.2,
        Planet::Saturn => 0.0334,
        _ => 1.0,
    }
}

/// Chesta Bala in virupas for `planet` in `chart`.
pub fn chesta_bala(chart: &Chart, planet: Planet) -> f64 {
    match planet {
        Planet::Sun => ayana_bala(chart, planet),
        Planet::Moon => paksha_bala(chart, planet),
        Planet::Rahu | Planet::Ketu => 60.0, // nodes are always "retrograde"
        _ => {
            let Some(pos) = chart.positions.get(&planet) else { return 0.0 };
            if pos.retrograde {
                return 60.0;
            }
            let mean = mean_daily_motion(planet);
            let ratio = (pos.longitude_speed.abs() / mean).clamp(0.0, 2.0);
            // Faster-than-mean direct motion is weaker (closer to
            // stationary-before-retrograde); slower-than-mean is stronger.
            ((2.0 - ratio) / 2.0 * 60.0).clamp(0.0, 60.0)
        }
    }
}
