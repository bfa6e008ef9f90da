//! Bhinnashtakavarga (per-planet bindu chart) and Sarvashtakavarga
//! (aggregate) computation (spec §4.4).

use crate::tables::{bindu_houses, Contributor, CONTRIBUTORS, TARGETS};
use vedic_core::{Chart, Planet};

/// One target planet's Bhinnashtakavarga: bindu count per sign (0..12).
pub type BinduTable = [u32; 12];

fn contributor_sign(chart: &Chart, contributor: Contributor) -> Option<u8> {
    match contributor {
        Contributor::Planet(p) => chart.positions.get(&p).map(|pos| pos.sign),
        Contributor::Ascendant => Some(chart.ascendant_sign()),
    }
}

/// Computes the Bhinnashtakavarga for `target` given the placements in
/// `chart`. Each of the 8 contributors gives a bindu to the signs reached by
/// counting its [`bindu_houses`] offsets forward from its own placed sign.
pub fn bhinnashtakavarga(chart: &Chart, target: Planet) -> BinduTable {
    let mut bindus = [0u32; 12];
    for &contributor in &CONTRIBUTORS {
        let Some(sign) = contributor_sign(chart, contributor) else { continue };
        for &house in bindu_houses(target, contributor) {
            let dest = (sign as u32 + house as u32 - 1) % 12;
            bindus[dest as usize] += 1;
        }
    }
    bindus
}

/// Sarvashtakavarga: the sum of all seven Bhinnashtakavarga tables, sign by
/// sign.
pub fn sarvashtakavarga(chart: &Chart) -> BinduTable {
    let mut total = [0u32; 12];
    for &target in &TARGETS {
        let bav = bhinnashtakavarga(chart, target);
        for i in 0..12 {
            total[i] += bav[i];
        }
    }
    total
}
