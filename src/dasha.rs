//! Facade wiring for the Dasha Engine (spec §4.8): Vimshottari from a
//! natal chart's Moon longitude and birth instant.

use vedic_core::{Chart, Planet, VedicError, VedicResult};
use vedic_dasha::{vimshottari_periods, DashaPeriod, YearLength};

/// A Dasha timeline: the top-level periods, each carrying its own nested
/// `sub_periods` down to the requested level.
pub struct DashaResult {
    pub periods: Vec<DashaPeriod>,
}

/// Computes the Vimshottari Dasha timeline for `chart`, nested `levels`
/// deep (1 = Mahadasha only, 2 = + Antardasha, ...).
pub fn vimshottari(chart: &Chart, levels: u8, year_length: YearLength) -> VedicResult<DashaResult> {
    let moon = chart.positions.get(&Planet::Moon).ok_or_else(|| {
        VedicError::InvalidInput("chart has no Moon placement for Vimshottari Dasha".into())
    })?;
    Ok(DashaResult { periods: vimshottari_periods(moon.longitude, chart.timestamp, year_length, levels) })
}
