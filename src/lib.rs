//! Vedic Astro: the computation core's public facade (spec §6). Every
//! operation here is pure given the engine's immutable ephemeris handle and
//! its inputs — there is no persisted state, no CLI surface, and no
//! timezone handling beyond UTC.
//!
//! [`VedicEngine`] owns the single [`EphemerisHandle`] every derivation
//! service is built on top of; the sub-crates (`vedic-chart`,
//! `vedic-panchanga`, `vedic-shadbala`, `vedic-ashtakavarga`, `vedic-kp`,
//! `vedic-dasha`, `vedic-transits`, `vedic-muhurta`, `vedic-jaimini`) do the
//! actual derivation work and stay importable on their own.

pub mod ashtakavarga;
pub mod dasha;
pub mod kp;
pub mod transits;

pub use ashtakavarga::{ashtakavarga, Ashtakavarga};
pub use dasha::{vimshottari, DashaResult};
pub use kp::{kp, KpCalculations};
pub use transits::{special_transits, SpecialTransits};

pub use vedic_ashtakavarga::BinduTable;
pub use vedic_chart::{CalculationFlags, DivisionalChartType};
pub use vedic_core::{
    Chart, Dignity, HouseSystem, Location, NodeType, Planet, PlanetPosition, SiderealMode, VedicError,
    VedicResult,
};
pub use vedic_dasha::{DashaPeriod, YearLength};
pub use vedic_ephemeris::{AnalyticProvider, CancelToken, EphemerisHandle, EphemerisProvider, UtInstant};
pub use vedic_jaimini::KarakaScheme;
pub use vedic_muhurta::Muhurta;
pub use vedic_panchanga::Panchanga;
pub use vedic_shadbala::{DayWindow, Shadbala, ShadbalaCategory};

use chrono::{Duration, NaiveDate};
use rayon::prelude::*;
use std::collections::BTreeMap;

/// The computation core's entry point: one owned [`EphemerisHandle`] plus a
/// method per facade operation in spec §6.
pub struct VedicEngine {
    handle: EphemerisHandle,
}

impl VedicEngine {
    pub fn new(provider: Box<dyn EphemerisProvider>) -> Self {
        Self { handle: EphemerisHandle::new(provider) }
    }

    /// Escape hatch for callers that need to drive the ephemeris directly
    /// (e.g. a caller that wants rise/set times this facade doesn't wrap).
    pub fn handle(&self) -> &EphemerisHandle {
        &self.handle
    }

    /// Chart Builder (spec §4.1): ephemeris positions for one moment and
    /// place, turned into a [`Chart`].
    pub fn build_chart(&self, ut: UtInstant, location: Location, flags: CalculationFlags) -> VedicResult<Chart> {
        vedic_chart::build_chart(&self.handle, ut, location, flags)
    }

    /// Divisional Chart Mapper (spec §4.2): projects `chart` through a
    /// single varga.
    pub fn divisional(&self, chart: &Chart, division: DivisionalChartType) -> VedicResult<Chart> {
        vedic_chart::divisional_chart(chart, division)
    }

    /// Panchanga Engine (spec §4.7): the five limbs of Vedic time at `ut`.
    pub fn panchanga(&self, ut: UtInstant, location: Location, mode: SiderealMode) -> VedicResult<Panchanga> {
        vedic_panchanga::panchanga(&self.handle, ut, location, mode)
    }

    /// The instant the Tithi active at `ut` ends, via the shared
    /// bracket-and-bisect search.
    pub fn tithi_end(
        &self,
        ut: UtInstant,
        location: Location,
        mode: SiderealMode,
        accuracy: Duration,
        cancel: &CancelToken,
    ) -> VedicResult<UtInstant> {
        let current = self.panchanga(ut, location, mode)?;
        let target_tithi = if current.tithi >= 30 { 1 } else { current.tithi + 1 };
        vedic_panchanga::next_tithi_junction(&self.handle, ut, target_tithi, mode, accuracy, cancel)
    }

    /// Shadbala Engine (spec §4.5): sixfold strength for every classical
    /// strength planet, keyed by planet. Kala Bala's Natonnata, Tribhaga and
    /// Hora components need the day's actual sunrise/sunset/next-sunrise, so
    /// this method resolves that window itself before handing it to the
    /// seven independent per-planet computations, which run across the
    /// Rayon pool (spec §5 — every derivation service above the ephemeris
    /// boundary is a pure function of `Chart` plus its other inputs).
    pub fn shadbala(&self, chart: &Chart) -> VedicResult<BTreeMap<Planet, Shadbala>> {
        let date = chart.timestamp.date_naive();
        let next_date = date
            .succ_opt()
            .ok_or_else(|| VedicError::InvalidInput("date has no successor day".into()))?;
        let (sunrise, sunset) = self.handle.sunrise_sunset(chart.ayanamsa_mode, date, chart.location)?;
        let (next_sunrise, _) = self.handle.sunrise_sunset(chart.ayanamsa_mode, next_date, chart.location)?;
        let day = match (sunrise, sunset, next_sunrise) {
            (Some(sunrise), Some(sunset), Some(next_sunrise)) => {
                Some(vedic_shadbala::DayWindow { sunrise, sunset, next_sunrise })
            }
            _ => None,
        };
        Ok(vedic_core::STRENGTH_PLANETS
            .as_slice()
            .par_iter()
            .map(|&planet| (planet, vedic_shadbala::shadbala(chart, planet, day.as_ref())))
            .collect())
    }

    /// Ashtakavarga Engine (spec §4.4): unreduced Bhinna/Sarvashtakavarga.
    /// Call `.apply_trikona()`/`.apply_ekadhipati()`/`.apply_shodhana()` on
    /// the result for the classical reductions.
    pub fn ashtakavarga(&self, chart: &Chart) -> Ashtakavarga {
        ashtakavarga::ashtakavarga(chart)
    }

    /// KP Engine (spec §4.6): sub-lord breakdown and ABCD significators,
    /// optionally recomputed under a different ayanamsa.
    pub fn kp(&self, chart: &Chart, new_ayanamsa: SiderealMode) -> VedicResult<KpCalculations> {
        kp::kp(&self.handle, chart, new_ayanamsa)
    }

    /// Dasha Engine (spec §4.8), Vimshottari variant: the Moon-longitude-
    /// driven period timeline, `levels` deep.
    pub fn vimshottari(&self, chart: &Chart, levels: u8, year_length: YearLength) -> VedicResult<DashaResult> {
        dasha::vimshottari(chart, levels, year_length)
    }

    /// Transit Engine & Special Transits (spec §4.9): current positions
    /// against the natal houses, plus Sade Sati/Dhaiya/Panchak status.
    pub fn special_transits(&self, chart: &Chart, at: UtInstant, node_type: NodeType) -> VedicResult<SpecialTransits> {
        transits::special_transits(&self.handle, chart, at, node_type)
    }

    /// Muhurta Engine (spec §4.10): Hora, Choghadiya, the inauspicious
    /// slots, and Abhijit/Brahma for the day starting at `sunrise`. Fetches
    /// the following day's sunrise itself, since the engine needs it to
    /// bound the night half.
    pub fn muhurta(
        &self,
        date: NaiveDate,
        sunrise: UtInstant,
        sunset: UtInstant,
        location: Location,
        mode: SiderealMode,
    ) -> VedicResult<Muhurta> {
        let next_day = date
            .succ_opt()
            .ok_or_else(|| VedicError::InvalidInput("date has no successor day".into()))?;
        let (next_sunrise, _) = self.handle.sunrise_sunset(mode, next_day, location)?;
        let next_sunrise = next_sunrise.ok_or_else(|| {
            VedicError::EphemerisUnavailable("no sunrise for the following day at this location".into())
        })?;
        Ok(vedic_muhurta::muhurta(location, sunrise, sunset, next_sunrise))
    }

    /// Jaimini Engine (spec §4.11): the Atmakaraka under the default
    /// 7-karaka scheme.
    pub fn atmakaraka(&self, chart: &Chart) -> VedicResult<Planet> {
        vedic_jaimini::atmakaraka(chart, KarakaScheme::SevenKaraka)
    }
}
