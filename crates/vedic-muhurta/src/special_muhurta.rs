//! Abhijit and Brahma Muhurta (spec §4.10): daytime and nighttime each
//! divided into 15 equal muhurtas; Abhijit is the 8th of the day (centered
//! on local noon by construction), Brahma the 14th of the night.
//!
//! The source material disagrees on Abhijit's duration (1/15th of daylight
//! vs. a fixed 48 minutes); this crate implements the 1/15th rule (spec
//! §4.10, §9 design note) as a conscious choice, not an oversight.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const MUHURTAS_PER_HALF_DAY: i32 = 15;

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MuhurtaWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

fn nth_muhurta(span_start: DateTime<Utc>, span_end: DateTime<Utc>, n: i32) -> MuhurtaWindow {
    let muhurta = (span_end - span_start) / MUHURTAS_PER_HALF_DAY;
    MuhurtaWindow { start: span_start + muhurta * (n - 1), end: span_start + muhurta * n }
}

/// The 8th muhurta of daytime, 1/15th of daylight wide and centered near
/// local noon.
pub fn abhijit_muhurta(sunrise: DateTime<Utc>, sunset: DateTime<Utc>) -> MuhurtaWindow {
    nth_muhurta(sunrise, sunset, 8)
}

/// The 14th muhurta of the night.
pub fn brahma_muhurta(sunset: DateTime<Utc>, next_sunrise: DateTime<Utc>) -> MuhurtaWindow {
    nth_muhurta(sunset, next_sunrise, 14)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn abhijit_is_one_fifteenth_of_daylight() {
        let sunrise = Utc.with_ymd_and_hms(2024, 1, 8, 6, 0, 0).unwrap();
        let sunset = Utc.with_ymd_and_hms(2024, 1, 8, 18, 0, 0).unwrap();
        let abhijit = abhijit_muhurta(sunrise, sunset);
        assert_eq!((abhijit.end - abhijit.start).num_minutes(), 48);
    }

    #[test]
    fn brahma_muhurta_falls_near_the_end_of_the_night() {
        let sunset = Utc.with_ymd_and_hms(2024, 1, 8, 18, 0, 0).unwrap();
        let next_sunrise = Utc.with_ymd_and_hms(2024, 1, 9, 6, 0, 0).unwrap();
        let brahma = brahma_muhurta(sunset, next_sunrise);
        assert!(brahma.start > sunset + (next_sunrise - sunset) / 2);
        assert!(brahma.end <= next_sunrise);
    }
}
