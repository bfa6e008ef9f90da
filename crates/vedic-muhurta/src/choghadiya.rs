//! Choghadiya (spec §4.10): 8 equal daytime + 8 equal nighttime periods per
//! weekday, cycling through the 7 classical types. Amrit/Shubh/Labh/Char
//! are auspicious; Udveg/Kaal/Rog are not.

use chrono::{DateTime, Utc, Weekday};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChoghadiyaType {
    Amrit,
    Shubh,
    Labh,
    Char,
    Udveg,
    Kaal,
    Rog,
}

impl ChoghadiyaType {
    pub fn is_auspicious(self) -> bool {
        matches!(self, ChoghadiyaType::Amrit | ChoghadiyaType::Shubh | ChoghadiyaType::Labh | ChoghadiyaType::Char)
    }
}

/// The fixed cyclic order every Choghadiya sequence advances through.
const CYCLE: [ChoghadiyaType; 7] = [
    ChoghadiyaType::Udveg,
    ChoghadiyaType::Char,
    ChoghadiyaType::Labh,
    ChoghadiyaType::Amrit,
    ChoghadiyaType::Kaal,
    ChoghadiyaType::Shubh,
    ChoghadiyaType::Rog,
];

fn cycle_index(t: ChoghadiyaType) -> usize {
    CYCLE.iter().position(|c| *c == t).unwrap()
}

fn day_start(weekday: Weekday) -> ChoghadiyaType {
    use ChoghadiyaType::*;
    match weekday {
        Weekday::Sun => Udveg,
        Weekday::Mon => Amrit,
        Weekday::Tue => Rog,
        Weekday::Wed => Labh,
        Weekday::Thu => Shubh,
        Weekday::Fri => Char,
        Weekday::Sat => Kaal,
    }
}

fn night_start(weekday: Weekday) -> ChoghadiyaType {
    use ChoghadiyaType::*;
    match weekday {
        Weekday::Sun => Shubh,
        Weekday::Mon => Char,
        Weekday::Tue => Kaal,
        Weekday::Wed => Udveg,
        Weekday::Thu => Amrit,
        Weekday::Fri => Rog,
        Weekday::Sat => Labh,
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ChoghadiyaPeriod {
    pub index: u8,
    pub kind: ChoghadiyaType,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

fn build_sequence(start_type: ChoghadiyaType, span_start: DateTime<Utc>, span_end: DateTime<Utc>) -> Vec<ChoghadiyaPeriod> {
    let period = (span_end - span_start) / 8;
    let start_index = cycle_index(start_type);
    let mut cursor = span_start;
    (0..8u8)
        .map(|i| {
            let kind = CYCLE[(start_index + i as usize) % 7];
            let start = cursor;
            let end = if i == 7 { span_end } else { cursor + period };
            cursor = end;
            ChoghadiyaPeriod { index: i + 1, kind, start, end }
        })
        .collect()
}

/// The 8 daytime periods (sunrise to sunset) for the given weekday.
pub fn day_choghadiya(weekday: Weekday, sunrise: DateTime<Utc>, sunset: DateTime<Utc>) -> Vec<ChoghadiyaPeriod> {
    build_sequence(day_start(weekday), sunrise, sunset)
}

/// The 8 nighttime periods (sunset to next sunrise) for the given weekday.
pub fn night_choghadiya(weekday: Weekday, sunset: DateTime<Utc>, next_sunrise: DateTime<Utc>) -> Vec<ChoghadiyaPeriod> {
    build_sequence(night_start(weekday), sunset, next_sunrise)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn day_sequence_starts_at_the_weekday_type_and_has_eight_periods() {
        let sunrise = Utc.with_ymd_and_hms(2024, 1, 7, 6, 0, 0).unwrap(); // Sunday
        let sunset = Utc.with_ymd_and_hms(2024, 1, 7, 18, 0, 0).unwrap();
        let periods = day_choghadiya(Weekday::Sun, sunrise, sunset);
        assert_eq!(periods.len(), 8);
        assert_eq!(periods[0].kind, ChoghadiyaType::Udveg);
        assert_eq!(periods[0].start, sunrise);
        assert_eq!(periods[7].end, sunset);
    }

    #[test]
    fn auspicious_split_matches_classical_grouping() {
        assert!(ChoghadiyaType::Amrit.is_auspicious());
        assert!(ChoghadiyaType::Char.is_auspicious());
        assert!(!ChoghadiyaType::Rog.is_auspicious());
        assert!(!ChoghadiyaType::Kaal.is_auspicious());
    }
}
