//! Yogini Dasha (spec §4.8): the 36-year cycle of 8 yoginis, entered at a
//! nakshatra-indexed starting point and nested proportionally.

use chrono::{DateTime, Utc};
use vedic_core::{angles, Planet};

use crate::model::{years_to_duration, DashaPeriod};

/// The 8 yoginis in cycle order, each paired with its ruling planet.
pub const YOGINI_ORDER: [(&str, Planet); 8] = [
    ("Mangala", Planet::Moon),
    ("Pingala", Planet::Sun),
    ("Dhanya", Planet::Jupiter),
    ("Bhramari", Planet::Mars),
    ("Bhadrika", Planet::Mercury),
    ("Ulka", Planet::Saturn),
    ("Siddha", Planet::Venus),
    ("Sankata", Planet::Rahu),
];

/// Years ruled by each yogini in order, summing to the full 36-year cycle.
pub const YOGINI_YEARS: [f64; 8] = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];

const YEAR_LENGTH_DAYS: f64 = 360.0;
const CYCLE_YEARS: f64 = 36.0;

/// Builds the Yogini timeline from the Moon's sidereal longitude at birth.
/// The starting yogini is `(nakshatra_index % 8)`, a common convention
/// reconciling the 27-nakshatra and 8-yogini cycles; the first period is
/// truncated by the elapsed fraction of the birth nakshatra, mirroring how
/// Vimshottari truncates its first mahadasha.
pub fn yogini_periods(moon_longitude: f64, birth: DateTime<Utc>, max_level: u8) -> Vec<DashaPeriod> {
    let nak = angles::nakshatra_index(moon_longitude);
    let nak_start = angles::nakshatra_start(nak);
    let elapsed_fraction = (moon_longitude - nak_start) / angles::NAKSHATRA_SPAN;
    let remaining_fraction = (1.0 - elapsed_fraction).clamp(0.0, 1.0);

    let start_index = (nak % 8) as usize;
    let mut cursor = birth;
    let mut periods = Vec::with_capacity(8);
    for i in 0..8 {
        let idx = (start_index + i) % 8;
        let (_, lord) = YOGINI_ORDER[idx];
        let full_years = YOGINI_YEARS[idx];
        let years = if i == 0 { full_years * remaining_fraction } else { full_years };
        let period = build_period(idx, lord, cursor, years, 0, max_level);
        cursor = period.end;
        periods.push(period);
    }
    periods
}

fn build_period(
    yogini_index: usize,
    lord: Planet,
    start: DateTime<Utc>,
    years: f64,
    level: u8,
    max_level: u8,
) -> DashaPeriod {
    let end = start + years_to_duration(years, YEAR_LENGTH_DAYS);
    let sub_periods = if level < max_level {
        build_sub_periods(yogini_index, start, years, level + 1, max_level)
    } else {
        Vec::new()
    };
    DashaPeriod { lord, sign: None, start, end, level, sub_periods }
}

/// Sub-periods cycle through all 8 yoginis starting at the parent's own
/// yogini, each proportional to its share of the 36-year cycle.
fn build_sub_periods(
    start_index: usize,
    parent_start: DateTime<Utc>,
    parent_years: f64,
    level: u8,
    max_level: u8,
) -> Vec<DashaPeriod> {
    let mut cursor = parent_start;
    let mut periods = Vec::with_capacity(8);
    for i in 0..8 {
        let idx = (start_index + i) % 8;
        let (_, lord) = YOGINI_ORDER[idx];
        let years = parent_years * YOGINI_YEARS[idx] / CYCLE_YEARS;
        let period = build_period(idx, lord, cursor, years, level, max_level);
        cursor = period.end;
        periods.push(period);
    }
    periods
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn yogini_periods_cover_eight_yoginis() {
        let birth = Utc.with_ymd_and_hms(1990, 5, 15, 9, 0, 0).unwrap();
        let periods = yogini_periods(6.0 + 40.0 / 60.0, birth, 0);
        assert_eq!(periods.len(), 8);
    }

    #[test]
    fn full_cycle_sums_to_thirty_six_years_when_unelapsed() {
        let birth = Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap();
        let periods = yogini_periods(0.0, birth, 0);
        let total_days: i64 = periods.iter().map(|p| (p.end - p.start).num_days()).sum();
        let years = total_days as f64 / YEAR_LENGTH_DAYS;
        assert!((years - CYCLE_YEARS).abs() < 0.1);
    }

    #[test]
    fn sub_periods_start_at_the_parent_yogini() {
        let birth = Utc.with_ymd_and_hms(1990, 5, 15, 9, 0, 0).unwrap();
        let periods = yogini_periods(100.0, birth, 1);
        let parent = &periods[0];
        assert_eq!(parent.sub_periods.len(), 8);
        assert_eq!(parent.sub_periods[0].lord, parent.lord);
    }
}
