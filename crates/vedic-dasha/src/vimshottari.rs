//! Vimshottari Dasha (spec §4.8): the 120-year, 9-planet cycle keyed to the
//! Moon's nakshatra at birth, nested five levels deep.

use chrono::{DateTime, Utc};
use vedic_core::{angles, tables, Planet, VIMSHOTTARI_ORDER};

use crate::model::{years_to_duration, DashaPeriod};

/// Day-length convention for converting dasha years into calendar time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YearLength {
    /// Mean solar year (365.2425 days), the common modern convention.
    Solar,
    /// Savana (civil) year of 360 days, used by some Jyotisha schools.
    Savana,
}

impl YearLength {
    pub fn days(self) -> f64 {
        match self {
            YearLength::Solar => 365.2425,
            YearLength::Savana => 360.0,
        }
    }
}

/// Builds the full Vimshottari timeline from the Moon's sidereal longitude
/// at birth: the first Mahadasha is truncated by the elapsed fraction of its
/// ruling nakshatra, followed by the remaining 8 full mahadashas in order.
pub fn vimshottari_periods(
    moon_longitude: f64,
    birth: DateTime<Utc>,
    year_length: YearLength,
    max_level: u8,
) -> Vec<DashaPeriod> {
    let nak = angles::nakshatra_index(moon_longitude);
    let first_lord = tables::nakshatra_lord(nak);
    let nak_start = angles::nakshatra_start(nak);
    let elapsed_fraction = (moon_longitude - nak_start) / angles::NAKSHATRA_SPAN;
    let remaining_fraction = (1.0 - elapsed_fraction).clamp(0.0, 1.0);

    let mut periods = Vec::with_capacity(9);
    let mut lord = first_lord;
    let mut cursor = birth;
    let mut years = first_lord.vimshottari_years() * remaining_fraction;

    for i in 0..9 {
        let period = build_period(lord, cursor, years, 0, max_level, year_length);
        cursor = period.end;
        periods.push(period);
        lord = lord.vimshottari_next();
        years = lord.vimshottari_years();
        let _ = i;
    }
    periods
}

fn build_period(
    lord: Planet,
    start: DateTime<Utc>,
    years: f64,
    level: u8,
    max_level: u8,
    year_length: YearLength,
) -> DashaPeriod {
    let end = start + years_to_duration(years, year_length.days());
    let sub_periods = if level < max_level {
        build_sub_periods(lord, start, years, level + 1, max_level, year_length)
    } else {
        Vec::new()
    };
    DashaPeriod { lord, sign: None, start, end, level, sub_periods }
}

/// The 9 sub-periods of a parent period always follow the fixed Vimshottari
/// order starting at the parent's own lord, each proportional to
/// `lord.vimshottari_years() / 120`.
fn build_sub_periods(
    parent_lord: Planet,
    parent_start: DateTime<Utc>,
    parent_years: f64,
    level: u8,
    max_level: u8,
    year_length: YearLength,
) -> Vec<DashaPeriod> {
    let start_index = VIMSHOTTARI_ORDER.iter().position(|p| *p == parent_lord).unwrap();
    let mut cursor = parent_start;
    let mut periods = Vec::with_capacity(9);
    for i in 0..9 {
        let lord = VIMSHOTTARI_ORDER[(start_index + i) % 9];
        let years = parent_years * lord.vimshottari_years() / 120.0;
        let period = build_period(lord, cursor, years, level, max_level, year_length);
        cursor = period.end;
        periods.push(period);
    }
    periods
}
