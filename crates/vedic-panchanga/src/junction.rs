//! Tithi junction search (spec §4.7): the exact instant the continuous
//! Tithi value crosses a target boundary, via the shared bracket-and-bisect
//! search. The same mechanism serves Moon-phase junctions (target = 15 or
//! 30, i.e. Purnima/Amavasya) and, in `vedic-transits`, sign-entry search.

use chrono::Duration;
use vedic_core::{SiderealMode, VedicResult};
use vedic_ephemeris::{find_crossing, CancelToken, EphemerisHandle, UtInstant};

use crate::panchanga::tithi_value;

/// Search window wide enough to cover even the longest tithi (spec §4.7).
pub fn default_search_window() -> Duration {
    Duration::hours(48)
}

/// Default convergence threshold.
pub fn default_accuracy() -> Duration {
    Duration::seconds(1)
}

/// Finds the next instant at or after `start` where the continuous Tithi
/// value crosses `target_tithi` (1..30, the *start* of that tithi number).
pub fn next_tithi_junction(
    handle: &EphemerisHandle,
    start: UtInstant,
    target_tithi: u8,
    mode: SiderealMode,
    accuracy: Duration,
    cancel: &CancelToken,
) -> VedicResult<UtInstant> {
    let target_boundary = (target_tithi.clamp(1, 30) - 1) as f64;
    find_crossing(start, default_search_window(), accuracy, 30.0, target_boundary, cancel, |t| {
        let (sun, moon) = crate::panchanga::luminary_longitudes(handle, t, mode)?;
        Ok(tithi_value(sun, moon))
    })
}

/// Finds the next Purnima (target tithi 15) at or after `start`.
pub fn next_purnima(
    handle: &EphemerisHandle,
    start: UtInstant,
    mode: SiderealMode,
    cancel: &CancelToken,
) -> VedicResult<UtInstant> {
    next_tithi_junction(handle, start, 15, mode, default_accuracy(), cancel)
}

/// Finds the next Amavasya (target tithi 30) at or after `start`.
pub fn next_amavasya(
    handle: &EphemerisHandle,
    start: UtInstant,
    mode: SiderealMode,
    cancel: &CancelToken,
) -> VedicResult<UtInstant> {
    next_tithi_junction(handle, start, 30, mode, default_accuracy(), cancel)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use vedic_ephemeris::AnalyticProvider;

    fn handle() -> EphemerisHandle {
        EphemerisHandle::new(Box::new(AnalyticProvider))
    }

    #[test]
    fn next_tithi_junction_converges_within_accuracy() {
        let h = handle();
        let cancel = CancelToken::new();
        let start = chrono::Utc.with_ymd_and_hms(2024, 3, 25, 6, 0, 0).unwrap();
        let next = next_purnima(&h, start, SiderealMode::Lahiri, &cancel).unwrap();
        assert!(next >= start);

        let (sun, moon) = crate::panchanga::luminary_longitudes(&h, next, SiderealMode::Lahiri).unwrap();
        let v = tithi_value(sun, moon);
        let mut diff = (v - 14.0) % 30.0;
        if diff > 15.0 {
            diff -= 30.0;
        } else if diff < -15.0 {
            diff += 30.0;
        }
        assert!(diff.abs() < 0.01, "tithi value at junction = {v}");
    }
}
