//! `EphemerisHandle`: the single owned coordinator around a process-wide,
//! stateful ephemeris engine (spec §5, design note §9).
//!
//! Swiss-Ephemeris-like libraries keep mutable global state (sidereal mode,
//! topocentric observer position, open data files); concurrent calls with
//! different flags would interleave that state. Every call the core makes
//! goes through this handle, which serializes access under a single mutex
//! and restores the prior flags on every exit path, including panics.

use crate::provider::{
    Atmosphere, EphemerisBody, EphemerisProvider, HouseCusps, PositionFlags, RawPosition,
    RiseSetKind, UtInstant,
};
use chrono::NaiveDate;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use vedic_core::{HouseSystem, Location, SiderealMode, VedicError, VedicResult};

/// Cooperative cancellation token for long scans (transit events, tithi
/// junctions, Sade Sati windows). Checked between ephemeris calls; never
/// preempts mid-call.
#[derive(Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    /// Returns `Err(VedicError::Cancelled)` if cancellation was requested.
    pub fn check(&self) -> VedicResult<()> {
        if self.is_cancelled() {
            Err(VedicError::Cancelled)
        } else {
            Ok(())
        }
    }
}

/// Flags snapshotted around an ephemeris call so the "global" mode can be
/// restored afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
struct EngineFlags {
    sidereal_mode: SiderealMode,
    position_flags: PositionFlags,
}

/// The single owned handle to the ephemeris engine. All derivation services
/// borrow this; it is never cloned into concurrent owners — only
/// `EphemerisHandle::ayanamsa`/`position`/... may be called, each of which
/// takes the lock for the duration of one ephemeris call.
pub struct EphemerisHandle {
    provider: Mutex<Box<dyn EphemerisProvider>>,
    flags: Mutex<EngineFlags>,
}

impl EphemerisHandle {
    pub fn new(provider: Box<dyn EphemerisProvider>) -> Self {
        Self {
            provider: Mutex::new(provider),
            flags: Mutex::new(EngineFlags {
                sidereal_mode: SiderealMode::default(),
                position_flags: PositionFlags::default(),
            }),
        }
    }

    /// Acquire the engine with `mode`/`position_flags` as the active global
    /// state for the duration of `f`, restoring the previous flags
    /// afterwards regardless of how `f` returns.
    fn with_flags<T>(
        &self,
        mode: SiderealMode,
        position_flags: PositionFlags,
        f: impl FnOnce(&Box<dyn EphemerisProvider>) -> Result<T, String>,
    ) -> VedicResult<T> {
        let provider = self
            .provider
            .lock()
            .map_err(|_| VedicError::EphemerisUnavailable("ephemeris lock poisoned".into()))?;

        let previous = {
            let mut guard = self.flags.lock().unwrap();
            let previous = *guard;
            *guard = EngineFlags { sidereal_mode: mode, position_flags };
            previous
        };
        let restore = scopeguard(&self.flags, previous);

        let result = f(&provider).map_err(VedicError::EphemerisUnavailable);
        drop(restore);
        result
    }

    pub fn ayanamsa(&self, ut: UtInstant, mode: SiderealMode) -> VedicResult<f64> {
        self.with_flags(mode, PositionFlags::default(), |p| p.ayanamsa(ut, mode))
    }

    pub fn position(
        &self,
        body: EphemerisBody,
        ut: UtInstant,
        mode: SiderealMode,
        topo_location: Option<Location>,
        flags: PositionFlags,
    ) -> VedicResult<RawPosition> {
        self.with_flags(mode, flags, |p| p.position(body, ut, topo_location, flags))
    }

    pub fn houses(
        &self,
        ut: UtInstant,
        mode: SiderealMode,
        location: Location,
        house_system: HouseSystem,
    ) -> VedicResult<HouseCusps> {
        self.with_flags(mode, PositionFlags::default(), |p| {
            p.houses(ut, location, house_system)
        })
    }

    pub fn rise_set(
        &self,
        body: EphemerisBody,
        mode: SiderealMode,
        date: NaiveDate,
        location: Location,
        kind: RiseSetKind,
        atmosphere: Option<Atmosphere>,
    ) -> VedicResult<Option<UtInstant>> {
        self.with_flags(mode, PositionFlags::default(), |p| {
            p.rise_set(body, date, location, kind, atmosphere)
        })
    }

    pub fn sunrise_sunset(
        &self,
        mode: SiderealMode,
        date: NaiveDate,
        location: Location,
    ) -> VedicResult<(Option<UtInstant>, Option<UtInstant>)> {
        self.with_flags(mode, PositionFlags::default(), |p| p.sunrise_sunset(date, location))
    }

    pub fn julian_day(&self, date: NaiveDate, time_of_day_hours: f64) -> VedicResult<f64> {
        let provider = self
            .provider
            .lock()
            .map_err(|_| VedicError::EphemerisUnavailable("ephemeris lock poisoned".into()))?;
        Ok(provider.julian_day(date, time_of_day_hours))
    }
}

/// Restores `previous` into `*cell` when dropped, even on panic unwind.
fn scopeguard(cell: &Mutex<EngineFlags>, previous: EngineFlags) -> impl Drop + '_ {
    struct Guard<'a> {
        cell: &'a Mutex<EngineFlags>,
        previous: EngineFlags,
    }
    impl<'a> Drop for Guard<'a> {
        fn drop(&mut self) {
            if let Ok(mut guard) = self.cell.lock() {
                *guard = self.previous;
            }
        }
    }
    Guard { cell, previous }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancel_token_reports_state() {
        let token = CancelToken::new();
        assert!(token.check().is_ok());
        token.cancel();
        assert!(token.check().is_err());
        assert!(token.is_cancelled());
    }

    #[test]
    fn cancel_token_clones_share_state() {
        let token = CancelToken::new();
        let clone = token.clone();
        clone.cancel();
        assert!(token.is_cancelled());
    }
}
