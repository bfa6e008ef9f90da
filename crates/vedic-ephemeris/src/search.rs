//! Shared bracket-and-bisect numeric search (spec §4.7, §4.9, §5): finds
//! the instant a monotonically-increasing cyclic quantity (Tithi, Yoga,
//! a planet's longitude) crosses a target value. Used for tithi/phase
//! junctions, sign-entry transits, and Sade Sati window boundaries — the
//! one state machine this core runs.

use chrono::Duration;
use vedic_core::{VedicError, VedicResult};

use crate::handle::CancelToken;
use crate::provider::UtInstant;

/// Hard cap on bisection steps (spec §8 invariant): a search that hasn't
/// converged by then reports `NumericFailure` rather than loop forever.
pub const MAX_SEARCH_ITERATIONS: u32 = 50;

/// How many times the bracket window may be doubled looking for a sign
/// change before giving up.
const MAX_BRACKET_EXTENSIONS: u32 = 4;

/// Signed distance from `value` to `target` on a circle of circumference
/// `modulus`, in `(-modulus/2, modulus/2]`.
fn signed_gap(value: f64, target: f64, modulus: f64) -> f64 {
    let raw = (value - target) % modulus;
    if raw <= -modulus / 2.0 {
        raw + modulus
    } else if raw > modulus / 2.0 {
        raw - modulus
    } else {
        raw
    }
}

/// Finds the instant in `[start, start + window)` where `f` (assumed
/// monotonically increasing modulo `modulus`) crosses `target`, narrowing
/// the bracket by bisection until it is at most `accuracy` wide.
///
/// `window` is doubled (up to [`MAX_BRACKET_EXTENSIONS`] times) if the
/// initial bracket doesn't contain a crossing — this is how a short
/// window request still finds a long tithi. Cooperative cancellation is
/// checked between ephemeris calls via `cancel`.
pub fn find_crossing(
    start: UtInstant,
    window: Duration,
    accuracy: Duration,
    modulus: f64,
    target: f64,
    cancel: &CancelToken,
    mut f: impl FnMut(UtInstant) -> VedicResult<f64>,
) -> VedicResult<UtInstant> {
    let mut window = window;
    let mut lo = start;
    let mut hi = start + window;
    let mut g_lo = signed_gap(f(lo)?, target, modulus);
    let mut g_hi = signed_gap(f(hi)?, target, modulus);

    let mut extensions = 0;
    while g_lo.signum() == g_hi.signum() && extensions < MAX_BRACKET_EXTENSIONS {
        cancel.check()?;
        window = window * 2;
        hi = start + window;
        g_hi = signed_gap(f(hi)?, target, modulus);
        extensions += 1;
    }
    if g_lo == 0.0 {
        return Ok(lo);
    }
    if g_lo.signum() == g_hi.signum() {
        return Err(VedicError::NumericFailure {
            iterations: 0,
            window_deg: window.num_seconds() as f64 / 3600.0,
        });
    }

    let mut iterations = 0;
    while hi - lo > accuracy && iterations < MAX_SEARCH_ITERATIONS {
        cancel.check()?;
        let mid = lo + (hi - lo) / 2;
        let g_mid = signed_gap(f(mid)?, target, modulus);
        if g_mid == 0.0 {
            return Ok(mid);
        }
        if g_mid.signum() == g_lo.signum() {
            lo = mid;
            g_lo = g_mid;
        } else {
            hi = mid;
        }
        iterations += 1;
    }

    if hi - lo > accuracy {
        return Err(VedicError::NumericFailure {
            iterations,
            window_deg: (hi - lo).num_seconds() as f64 / 3600.0,
        });
    }
    Ok(lo + (hi - lo) / 2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn finds_a_linear_crossing_within_accuracy() {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let cancel = CancelToken::new();
        // f increases 1.0 per hour, crosses 12.0 at start + 12h.
        let result = find_crossing(
            start,
            Duration::hours(48),
            Duration::seconds(1),
            360.0,
            12.0,
            &cancel,
            |t| Ok((t - start).num_seconds() as f64 / 3600.0),
        )
        .unwrap();
        let expected = start + Duration::hours(12);
        assert!((result - expected).num_seconds().abs() <= 1);
    }

    #[test]
    fn converges_within_the_iteration_cap() {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let cancel = CancelToken::new();
        let mut calls = 0u32;
        let _ = find_crossing(
            start,
            Duration::hours(48),
            Duration::milliseconds(1),
            360.0,
            30.0,
            &cancel,
            |t| {
                calls += 1;
                Ok((t - start).num_seconds() as f64 / 3600.0)
            },
        )
        .unwrap();
        assert!(calls <= MAX_SEARCH_ITERATIONS + 10);
    }

    #[test]
    fn reports_numeric_failure_when_no_crossing_in_range() {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let cancel = CancelToken::new();
        // Target sits at 140 degrees away (no wraparound ambiguity); a
        // 1-hour window covering only 0..1 degrees of travel never brackets it.
        let result = find_crossing(
            start,
            Duration::hours(1),
            Duration::seconds(1),
            360.0,
            500.0,
            &cancel,
            |t| Ok((t - start).num_seconds() as f64 / 3600.0),
        );
        assert!(result.is_err());
    }

    #[test]
    fn cancellation_is_observed() {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let cancel = CancelToken::new();
        cancel.cancel();
        let result = find_crossing(
            start,
            Duration::hours(48),
            Duration::seconds(1),
            360.0,
            12.0,
            &cancel,
            |t| Ok((t - start).num_seconds() as f64 / 3600.0),
        );
        assert!(result.is_err());
    }
}
