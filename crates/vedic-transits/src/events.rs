//! Transit event search (spec §4.9): sign-entry dates via an outer coarse
//! scan that brackets each crossing, then the shared bisection search. This
//! is the only admissible way to locate ingress/egress — a planet is never
//! approximated by a constant degrees/day, so retrograde loops (which can
//! cross a sign boundary three times) are handled transparently by the
//! coarse scan finding every bracket, not just the first.

use chrono::Duration;
use vedic_core::{angles, NodeType, Planet, SiderealMode, VedicResult};
use vedic_ephemeris::{find_crossing, node_body, CancelToken, EphemerisHandle, PositionFlags, UtInstant};

/// Coarse sampling step for the outer scan. Small enough that no classical
/// planet (even retrograde Mercury) can skip over an entire sign between
/// samples.
pub fn default_scan_step() -> Duration {
    Duration::days(1)
}

pub fn default_accuracy() -> Duration {
    Duration::hours(1)
}

fn longitude_at(
    handle: &EphemerisHandle,
    planet: Planet,
    at: UtInstant,
    mode: SiderealMode,
    node_type: NodeType,
) -> VedicResult<f64> {
    if planet == Planet::Ketu {
        let body = node_body(Planet::Rahu, node_type).unwrap();
        let flags = PositionFlags { topocentric: false, sidereal: true };
        let raw = handle.position(body, at, mode, None, flags)?;
        return Ok(angles::normalize_degrees(raw.longitude + 180.0));
    }
    let body = node_body(planet, node_type).expect("non-Ketu planets always map to a node body");
    let flags = PositionFlags { topocentric: false, sidereal: true };
    let raw = handle.position(body, at, mode, None, flags)?;
    Ok(raw.longitude)
}

/// The next instant at or after `start` where `planet`'s sidereal longitude
/// crosses into `target_sign` (0..12), via coarse scan + bisection.
#[tracing::instrument(skip(handle, cancel), fields(?planet, target_sign))]
pub fn next_sign_entry(
    handle: &EphemerisHandle,
    planet: Planet,
    start: UtInstant,
    target_sign: u8,
    mode: SiderealMode,
    node_type: NodeType,
    cancel: &CancelToken,
) -> VedicResult<UtInstant> {
    let target_degree = (target_sign % 12) as f64 * 30.0;
    let step = default_scan_step();
    let accuracy = default_accuracy();

    let mut lo = start;
    let mut lo_value = longitude_at(handle, planet, lo, mode, node_type)?;
    // Scan up to 3 Saturn orbits' worth of time; any classical planet
    // re-enters every sign well within that span even through retrogression.
    let max_samples = 365 * 30;
    for _ in 0..max_samples {
        cancel.check()?;
        let hi = lo + step;
        let hi_value = longitude_at(handle, planet, hi, mode, node_type)?;
        if angles::sign_index(lo_value) != target_sign && angles::sign_index(hi_value) == target_sign {
            return find_crossing(lo, step, accuracy, 360.0, target_degree, cancel, |t| {
                longitude_at(handle, planet, t, mode, node_type)
            });
        }
        lo = hi;
        lo_value = hi_value;
    }
    Err(vedic_core::VedicError::NumericFailure {
        iterations: max_samples as u32,
        window_deg: 360.0,
    })
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
    fn moon_enters_every_sign_within_a_lunar_month() {
        let h = handle();
        let cancel = CancelToken::new();
        let start = chrono::Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let longitude = longitude_at(&h, Planet::Moon, start, SiderealMode::Lahiri, NodeType::Mean).unwrap();
        let next_sign = (angles::sign_index(longitude) + 1) % 12;
        let entry = next_sign_entry(&h, Planet::Moon, start, next_sign, SiderealMode::Lahiri, NodeType::Mean, &cancel).unwrap();
        assert!(entry > start);
        assert!(entry - start < Duration::days(5));
    }
}
