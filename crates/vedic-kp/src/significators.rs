//! ABCD significator analysis (spec §4.6): for a given planet, the houses
//! it signifies at four descending levels of strength.

use crate::sublord::kp_lords;
use vedic_core::{tables, Chart, Planet};

/// Which houses (1..12) `planet` signifies, split into the four classical
/// levels. A house may appear in more than one level at once.
#[derive(Debug, Clone, Default)]
pub struct Significance {
    /// Houses occupied by the planet's sign lord (dispositor).
    pub level_a: Vec<u8>,
    /// Houses occupied by the planet's star lord (nakshatra lord).
    pub level_b: Vec<u8>,
    /// Houses owned by the planet itself.
    pub level_c: Vec<u8>,
    /// Houses owned by the planet's sign lord.
    pub level_d: Vec<u8>,
}

impl Significance {
    /// The full set of houses the planet signifies at any level, ranked
    /// strongest-first with duplicates removed.
    pub fn ranked_houses(&self) -> Vec<u8> {
        let mut seen = [false; 13];
        let mut houses = Vec::new();
        for level in [&self.level_a, &self.level_b, &self.level_c, &self.level_d] {
            for &house in level {
                if !seen[house as usize] {
                    seen[house as usize] = true;
                    houses.push(house);
                }
            }
        }
        houses
    }
}

/// Houses (1..12) whose cusp sign is owned by `lord`.
fn houses_owned_by(chart: &Chart, lord: Planet) -> Vec<u8> {
    (0..12u8)
        .filter(|&sign| tables::sign_lord(sign) == lord)
        .map(|sign| chart.house_of_sign(sign))
        .collect()
}

/// Computes the ABCD significators of `planet` in `chart` (spec §4.6): A =
/// houses occupied by the planet's sign lord, B = houses occupied by its
/// star lord, C = houses owned by the planet, D = houses owned by its sign
/// lord.
pub fn significators_of_planet(chart: &Chart, planet: Planet) -> Option<Significance> {
    let position = chart.positions.get(&planet)?;
    let sign_lord = tables::sign_lord(position.sign);
    let star_lord = kp_lords(position.longitude).star_lord;

    Some(Significance {
        level_a: chart.house_of(sign_lord).into_iter().collect(),
        level_b: chart.house_of(star_lord).into_iter().collect(),
        level_c: houses_owned_by(chart, planet),
        level_d: houses_owned_by(chart, sign_lord),
    })
}

/// Significators of every placed planet in `chart`.
pub fn significators_all(chart: &Chart) -> Vec<(Planet, Significance)> {
    chart
        .positions
        .keys()
        .filter_map(|&planet| significators_of_planet(chart, planet).map(|sig| (planet, sig)))
        .collect()
}
