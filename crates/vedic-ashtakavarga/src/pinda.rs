//! Pinda (spec §4.4): the classical weighted-total strength derived from a
//! Bhinnashtakavarga. The Rasi-Pinda and Graha-Pinda multiplier tables below
//! are transcribed from secondary Parashari references with lower
//! confidence than the bindu table itself; treat as approximate pending
//! cross-check against a primary text (see DESIGN.md).

use crate::bav::BinduTable;
use vedic_core::Planet;

/// Rasi-Pinda multiplier per sign (0..12), applied to the bindu count a
/// planet holds in that sign.
const RASI_PINDA_MULTIPLIER: [u32; 12] = [7, 10, 8, 4, 10, 6, 7, 8, 9, 5, 9, 9];

/// Graha-Pinda multiplier applied to the bindu count a planet holds in its
/// *own* placed sign.
fn graha_pinda_multiplier(planet: Planet) -> u32 {
    match planet {
        Planet::Sun => 5,
        Planet::Moon => 7,
        Planet::Mars => 8,
        Planet::Mercury => 5,
        Planet::Jupiter => 10,
        Planet::Venus => 7,
        Planet::Saturn => 5,
        _ => 0,
    }
}

/// Total Pinda for `planet`, given its Bhinnashtakavarga and the sign it
/// currently occupies: Rasi Pinda (bindus in every sign weighted by that
/// sign's multiplier) plus Graha Pinda (bindus in the planet's own sign
/// weighted by the planet's own multiplier).
pub fn pinda(planet: Planet, bav: &BinduTable, own_sign: u8) -> u32 {
    let rasi_pinda: u32 =
        bav.iter().zip(RASI_PINDA_MULTIPLIER).map(|(&bindus, mult)| bindus * mult).sum();
    let graha_pinda = bav[own_sign as usize % 12] * graha_pinda_multiplier(planet);
    rasi_pinda + graha_pinda
}
