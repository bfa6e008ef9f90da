//! Sthana Bala (spec §4.5): positional strength, the sum of five classical
//! sub-balas — Uchcha (exaltation distance), Saptavargaja (dignity across
//! seven divisional charts), Ojhayugmarashyamsa (odd/even sign and navamsa
//! placement), Kendradi (quadrant/succedent/cadent) and Drekkana (decanate,
//! by gender).

use vedic_core::tables::SignParity;
use vedic_core::{tables, Chart, Dignity, Planet};
use vedic_chart::{divisional_chart, DivisionalChartType};

/// Uchcha Bala: 60 virupas at exact exaltation, 0 at exact debilitation,
/// linear in between by angular distance from the debilitation point.
pub fn uchcha_bala(planet: Planet, sign: u8, position_in_sign: f64) -> f64 {
    let Some((deb_sign, deb_deg)) = tables::debilitation_point(planet) else { return 0.0 };
    let longitude = sign as f64 * 30.0 + position_in_sign;
    let deb_longitude = deb_sign as f64 * 30.0 + deb_deg;
    let distance = vedic_core::angles::shortest_arc(deb_longitude, longitude).abs();
    distance / 3.0
}

/// Dignity-based virupas for one divisional chart, the classical weights
/// used across the Saptavargaja sum (exalted highest, debilitated zero).
fn dignity_bala(dignity: Dignity) -> f64 {
    match dignity {
        Dignity::Exalted => 45.0,
        Dignity::OwnSign => 30.0,
        Dignity::GreatFriend | Dignity::Friend => 22.5,
        Dignity::Neutral => 15.0,
        Dignity::Enemy | Dignity::GreatEnemy => 7.5,
        Dignity::Debilitated => 0.0,
    }
}

/// Saptavargaja Bala: dignity summed across the seven classical vargas —
/// D1, D2, D3, D7, D9, D12, D30.
pub fn saptavargaja_bala(chart: &Chart, planet: Planet) -> f64 {
    const VARGAS: [DivisionalChartType; 7] = [
        DivisionalChartType::D1,
        DivisionalChartType::D2,
        DivisionalChartType::D3,
        DivisionalChartType::D7,
        DivisionalChartType::D9,
        DivisionalChartType::D12,
        DivisionalChartType::D30,
    ];
    let mut total = 0.0;
    for varga in VARGAS {
        let Ok(projected) = divisional_chart(chart, varga) else { continue };
        if let Some(pos) = projected.positions.get(&planet) {
            total += dignity_bala(pos.dignity);
        }
    }
    total
}

/// Ojhayugmarashyamsa Bala: 15 virupas if the planet's Rashi parity matches
/// its natural preference (odd for male planets, even for female), another
/// 15 if its Navamsa parity also matches — 0, 15 or 30 total.
pub fn ojhayugma_bala(chart: &Chart, planet: Planet, sign: u8) -> f64 {
    let prefers_odd = matches!(
        planet,
        Planet::Sun | Planet::Mars | Planet::Jupiter
    );

    let mut total = 0.0;
    if (matches!(tables::sign_parity(sign), SignParity::Odd)) == prefers_odd {
        total += 15.0;
    }
    if let Ok(navamsa) = divisional_chart(chart, DivisionalChartType::D9) {
        if let Some(pos) = navamsa.positions.get(&planet) {
            if (matches!(tables::sign_parity(pos.sign), SignParity::Odd)) == prefers_odd {
                total += 15.0;
            }
        }
    }
    total
}

/// Kendradi Bala: 60 virupas in a quadrant (Kendra) house, 30 in a
/// succedent (Panapara), 15 in a cadent (Apoklima) house.
pub fn kendradi_bala(house: u8) -> f64 {
    match house {
        1 | 4 | 7 | 10 => 60.0,
        2 | 5 | 8 | 11 => 30.0,
        _ => 15.0,
    }
}

/// Drekkana Bala: 15 virupas awarded by gender-matched decanate (male
/// planets in the first decanate, female in the second, neuter/Mercury-like
/// in the third); simplified to the Sun/Mars/Jupiter-vs-Moon/Venus split
/// used elsewhere in this crate, with Mercury/Saturn treated as neuter.
pub fn drekkana_bala(planet: Planet, position_in_sign: f64) -> f64 {
    let third = (position_in_sign / 10.0).floor() as u8;
    let male = matches!(planet, Planet::Sun | Planet::Mars | Planet::Jupiter);
    let female = matches!(planet, Planet::Moon | Planet::Venus);
    let matches_third = match third {
        0 => male,
        1 => female,
        _ => !male && !female,
    };
    if matches_third {
        15.0
    } else {
        0.0
    }
}

/// Total Sthana Bala in virupas for `planet` in `chart`.
pub fn sthana_bala(chart: &Chart, planet: Planet) -> f64 {
    let Some(pos) = chart.positions.get(&planet) else { return 0.0 };
    let house = chart.house_of(planet).unwrap_or(1);
    uchcha_bala(planet, pos.sign, pos.position_in_sign)
        + saptavargaja_bala(chart, planet)
        + ojhayugma_bala(chart, planet, pos.sign)
        + kendradi_bala(house)
        + drekkana_bala(planet, pos.position_in_sign)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use std::collections::BTreeMap;
    use vedic_core::{HouseSystem, Location, PlanetPosition, SiderealMode};

    #[test]
    fn uchcha_bala_is_maximal_at_exaltation() {
        // Sun exalted at 10 deg Aries (sign 0).
        let bala = uchcha_bala(Planet::Sun, 0, 10.0);
        assert!((bala - 60.0).abs() < 1e-6);
    }

    #[test]
    fn uchcha_bala_is_zero_at_debilitation() {
        let bala = uchcha_bala(Planet::Sun, 6, 10.0); // Libra, debilitation
        assert!(bala < 1e-6);
    }

    #[test]
    fn kendradi_bala_ranks_quadrant_above_succedent_above_cadent() {
        assert!(kendradi_bala(1) > kendradi_bala(2));
        assert!(kendradi_bala(2) > kendradi_bala(3));
    }

    fn chart_with(planet: Planet, longitude: f64) -> Chart {
        let mut positions = BTreeMap::new();
        positions.insert(planet, PlanetPosition::from_raw(planet, longitude, 0.0, 1.0, 1.0));
        Chart {
            timestamp: Utc.with_ymd_and_hms(2024, 1, 7, 12, 0, 0).unwrap(),
            location: Location::new(0.0, 0.0, 0.0),
            ayanamsa: 0.0,
            ayanamsa_mode: SiderealMode::Lahiri,
            house_system: HouseSystem::WholeSign,
            ascendant: 0.0,
            cusps: [0.0; 12],
            positions,
        }
    }

    #[test]
    fn ojhayugma_bala_can_reach_the_full_thirty() {
        // Sun (odd-preferring) at 1 deg Aries: Rashi and Navamsa both land
        // in Aries, an odd sign.
        let chart = chart_with(Planet::Sun, 1.0);
        let pos = &chart.positions[&Planet::Sun];
        let bala = ojhayugma_bala(&chart, Planet::Sun, pos.sign);
        assert_eq!(bala, 30.0);
    }

    #[test]
    fn ojhayugma_bala_credits_rashi_and_navamsa_independently() {
        // Sun (odd-preferring) at 5 deg Taurus: Rashi is even (no credit)
        // but the Navamsa lands in Aquarius, an odd sign (credit).
        let chart = chart_with(Planet::Sun, 35.0);
        let pos = &chart.positions[&Planet::Sun];
        let bala = ojhayugma_bala(&chart, Planet::Sun, pos.sign);
        assert_eq!(bala, 15.0);
    }
}
