//! Rahukalam, Gulikalam, Yamagandam (spec §4.10): each is the i-th eighth of
//! daytime for a weekday-keyed index, with a separate nighttime map for
//! queries that fall after sunset.

use chrono::{DateTime, Utc, Weekday};
use serde::{Deserialize, Serialize};

/// A single inauspicious slot: `eighth` is 1-indexed into the 8 equal
/// divisions of the half-day (day or night) it belongs to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct InauspiciousSlot {
    pub eighth: u8,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

fn nth_eighth(span_start: DateTime<Utc>, span_end: DateTime<Utc>, eighth: u8) -> InauspiciousSlot {
    let period = (span_end - span_start) / 8;
    let start = span_start + period * (eighth as i32 - 1);
    let end = span_start + period * eighth as i32;
    InauspiciousSlot { eighth, start, end }
}

const RAHUKALAM_DAY_EIGHTH: [u8; 7] = [8, 2, 7, 5, 6, 4, 3]; // Sun..Sat
const YAMAGANDAM_DAY_EIGHTH: [u8; 7] = [5, 4, 3, 2, 1, 7, 6];
const GULIKAKALAM_DAY_EIGHTH: [u8; 7] = [7, 6, 5, 4, 3, 2, 1];

fn weekday_index(weekday: Weekday) -> usize {
    match weekday {
        Weekday::Sun => 0,
        Weekday::Mon => 1,
        Weekday::Tue => 2,
        Weekday::Wed => 3,
        Weekday::Thu => 4,
        Weekday::Fri => 5,
        Weekday::Sat => 6,
    }
}

/// Rahukalam for the daytime span. Night Rahukalam reuses the same
/// weekday-keyed eighth applied to the night span; the two classical
/// traditions publish slightly different nighttime tables and this crate
/// takes the documented simplification (see DESIGN.md).
pub fn rahukalam(weekday: Weekday, span_start: DateTime<Utc>, span_end: DateTime<Utc>) -> InauspiciousSlot {
    nth_eighth(span_start, span_end, RAHUKALAM_DAY_EIGHTH[weekday_index(weekday)])
}

pub fn yamagandam(weekday: Weekday, span_start: DateTime<Utc>, span_end: DateTime<Utc>) -> InauspiciousSlot {
    nth_eighth(span_start, span_end, YAMAGANDAM_DAY_EIGHTH[weekday_index(weekday)])
}

pub fn gulikakalam(weekday: Weekday, span_start: DateTime<Utc>, span_end: DateTime<Utc>) -> InauspiciousSlot {
    nth_eighth(span_start, span_end, GULIKAKALAM_DAY_EIGHTH[weekday_index(weekday)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn rahukalam_lands_in_the_expected_eighth_for_monday() {
        let sunrise = Utc.with_ymd_and_hms(2024, 1, 8, 6, 0, 0).unwrap(); // Monday
        let sunset = Utc.with_ymd_and_hms(2024, 1, 8, 18, 0, 0).unwrap();
        let slot = rahukalam(Weekday::Mon, sunrise, sunset);
        assert_eq!(slot.eighth, 2);
        assert_eq!(slot.start, sunrise + (sunset - sunrise) / 8);
    }

    #[test]
    fn all_three_slots_are_ninety_minutes_on_a_twelve_hour_day() {
        let sunrise = Utc.with_ymd_and_hms(2024, 1, 8, 6, 0, 0).unwrap();
        let sunset = Utc.with_ymd_and_hms(2024, 1, 8, 18, 0, 0).unwrap();
        for slot in [
            rahukalam(Weekday::Mon, sunrise, sunset),
            yamagandam(Weekday::Mon, sunrise, sunset),
            gulikakalam(Weekday::Mon, sunrise, sunset),
        ] {
            assert_eq!((slot.end - slot.start).num_minutes(), 90);
        }
    }
}
