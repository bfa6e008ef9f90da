//! Chara Dasha (spec §4.8): the Jaimini sign-based dasha, keyed to the 12
//! rashi rather than the 9 planets. Direction (forward/backward through the
//! zodiac) is set once by the Lagna's parity; each sign's duration is the
//! house-distance, counted in that direction, from the sign to wherever its
//! lord currently sits in the natal chart.

use chrono::{DateTime, Utc};
use vedic_core::tables::{self, SignParity};
use vedic_core::{Chart, Planet};

use crate::model::{years_to_duration, DashaPeriod};

const YEAR_LENGTH_DAYS: f64 = 365.2425;
/// Sum of the twelve possible chara distances, 1..12, used to weight nested
/// sub-periods the same way the distance itself weights the mahadasha.
const TOTAL_CHARA_UNITS: f64 = 78.0;

/// Builds the Chara Dasha timeline from the natal chart's Lagna and planet
/// placements. `max_level` bounds the nesting depth, same convention as
/// Vimshottari/Yogini.
pub fn chara_periods(chart: &Chart, max_level: u8) -> Vec<DashaPeriod> {
    let lagna_sign = chart.ascendant_sign();
    let forward = tables::sign_parity(lagna_sign) == SignParity::Odd;

    let mut periods = Vec::with_capacity(12);
    let mut cursor = chart.timestamp;
    let mut sign = lagna_sign;
    for _ in 0..12 {
        let years = sign_chara_years(chart, sign, forward);
        let period = build_period(chart, sign, cursor, years, 0, max_level, forward);
        cursor = period.end;
        periods.push(period);
        sign = step(sign, forward);
    }
    periods
}

fn step(sign: u8, forward: bool) -> u8 {
    if forward {
        (sign + 1) % 12
    } else {
        (sign + 11) % 12
    }
}

/// Chooses the ruling planet of `sign`. Scorpio and Aquarius have two
/// classical candidates (Mars/Ketu and Saturn/Rahu); the candidate whose own
/// placement gives a non-zero house-distance from `sign` is used, since a
/// zero-distance candidate (the lord sitting in its own sign) would collapse
/// the Jaimini counting rule for that rashi.
fn chara_lord_of(chart: &Chart, sign: u8, forward: bool) -> Planet {
    let candidates: Vec<Planet> = match sign {
        7 => vec![Planet::Mars, Planet::Ketu],
        10 => vec![Planet::Saturn, Planet::Rahu],
        _ => vec![tables::sign_lord(sign)],
    };
    if candidates.len() == 1 {
        return candidates[0];
    }
    for &candidate in &candidates {
        if let Some(pos) = chart.positions.get(&candidate) {
            if raw_distance(sign, pos.sign, forward) != 0 {
                return candidate;
            }
        }
    }
    candidates[0]
}

fn raw_distance(from_sign: u8, to_sign: u8, forward: bool) -> u8 {
    if forward {
        ((to_sign as i16 - from_sign as i16).rem_euclid(12)) as u8
    } else {
        ((from_sign as i16 - to_sign as i16).rem_euclid(12)) as u8
    }
}

/// The Jaimini duration number for `sign`: the house-distance to its lord's
/// placement, with a full 12-year period when the lord sits in its own sign.
fn sign_chara_years(chart: &Chart, sign: u8, forward: bool) -> f64 {
    let lord = chara_lord_of(chart, sign, forward);
    let lord_sign = chart.positions.get(&lord).map(|p| p.sign).unwrap_or(sign);
    let distance = raw_distance(sign, lord_sign, forward);
    if distance == 0 {
        12.0
    } else {
        distance as f64
    }
}

fn build_period(
    chart: &Chart,
    sign: u8,
    start: DateTime<Utc>,
    years: f64,
    level: u8,
    max_level: u8,
    forward: bool,
) -> DashaPeriod {
    let lord = chara_lord_of(chart, sign, forward);
    let end = start + years_to_duration(years, YEAR_LENGTH_DAYS);
    let sub_periods = if level < max_level {
        build_sub_periods(chart, sign, start, years, level + 1, max_level, forward)
    } else {
        Vec::new()
    };
    DashaPeriod { lord, sign: Some(sign), start, end, level, sub_periods }
}

/// Sub-periods cycle through all 12 rashi starting at the parent sign, each
/// weighted by its own chara-years share of the 78-unit total.
fn build_sub_periods(
    chart: &Chart,
    start_sign: u8,
    parent_start: DateTime<Utc>,
    parent_years: f64,
    level: u8,
    max_level: u8,
    forward: bool,
) -> Vec<DashaPeriod> {
    let mut cursor = parent_start;
    let mut sign = start_sign;
    let mut periods = Vec::with_capacity(12);
    for _ in 0..12 {
        let weight = sign_chara_years(chart, sign, forward);
        let years = parent_years * weight / TOTAL_CHARA_UNITS;
        let period = build_period(chart, sign, cursor, years, level, max_level, forward);
        cursor = period.end;
        periods.push(period);
        sign = step(sign, forward);
    }
    periods
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
    fn chara_periods_cover_all_twelve_signs_exactly_once() {
        let chart = sample_chart();
        let periods = chara_periods(&chart, 0);
        assert_eq!(periods.len(), 12);
        let mut signs: Vec<u8> = periods.iter().filter_map(|p| p.sign).collect();
        signs.sort_unstable();
        signs.dedup();
        assert_eq!(signs.len(), 12);
    }

    #[test]
    fn scorpio_and_aquarius_resolve_to_a_single_lord() {
        let chart = sample_chart();
        let forward = tables::sign_parity(chart.ascendant_sign()) == SignParity::Odd;
        let scorpio_lord = chara_lord_of(&chart, 7, forward);
        assert!(matches!(scorpio_lord, Planet::Mars | Planet::Ketu));
        let aquarius_lord = chara_lord_of(&chart, 10, forward);
        assert!(matches!(aquarius_lord, Planet::Saturn | Planet::Rahu));
    }

    #[test]
    fn sub_periods_sum_close_to_the_parent_duration() {
        let chart = sample_chart();
        let periods = chara_periods(&chart, 1);
        let parent = &periods[0];
        assert_eq!(parent.sub_periods.len(), 12);
        let sub_days: i64 = parent.sub_periods.iter().map(|p| (p.end - p.start).num_days()).sum();
        let parent_days = (parent.end - parent.start).num_days();
        assert!((sub_days - parent_days).abs() <= 12);
    }
}
