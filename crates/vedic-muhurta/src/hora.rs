//! Hora (spec §4.10): 24 equal periods from one sunrise to the next, the
//! first ruled by the weekday lord and the rest cycling through the
//! Chaldean planetary order.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use vedic_core::Planet;

/// The Chaldean order Hora lords cycle through, starting over every time it
/// wraps past Moon.
pub const CHALDEAN_ORDER: [Planet; 7] = [
    Planet::Saturn,
    Planet::Jupiter,
    Planet::Mars,
    Planet::Sun,
    Planet::Venus,
    Planet::Mercury,
    Planet::Moon,
];

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Hora {
    pub index: u8,
    pub lord: Planet,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

fn weekday_lord(weekday: chrono::Weekday) -> Planet {
    match weekday {
        chrono::Weekday::Sun => Planet::Sun,
        chrono::Weekday::Mon => Planet::Moon,
        chrono::Weekday::Tue => Planet::Mars,
        chrono::Weekday::Wed => Planet::Mercury,
        chrono::Weekday::Thu => Planet::Jupiter,
        chrono::Weekday::Fri => Planet::Venus,
        chrono::Weekday::Sat => Planet::Saturn,
    }
}

/// Builds the 24 Horas spanning `sunrise` to `next_sunrise`. The weekday
/// used to pick the first Hora's lord is `sunrise`'s own weekday, since the
/// Vara itself is sunrise-boundaried (spec §4.7).
pub fn horas(sunrise: DateTime<Utc>, next_sunrise: DateTime<Utc>) -> Vec<Hora> {
    let span = next_sunrise - sunrise;
    let period = span / 24;
    let first_lord = weekday_lord(sunrise.weekday());
    let start_index = CHALDEAN_ORDER.iter().position(|p| *p == first_lord).unwrap();

    let mut cursor = sunrise;
    (0..24u8)
        .map(|i| {
            let lord = CHALDEAN_ORDER[(start_index + i as usize) % 7];
            let start = cursor;
            let end = if i == 23 { next_sunrise } else { cursor + period };
            cursor = end;
            Hora { index: i + 1, lord, start, end }
        })
        .collect()
}

/// The Hora active at `at`, if `at` falls within the span.
pub fn hora_at(sunrise: DateTime<Utc>, next_sunrise: DateTime<Utc>, at: DateTime<Utc>) -> Option<Hora> {
    horas(sunrise, next_sunrise).into_iter().find(|h| h.start <= at && at < h.end)
}
