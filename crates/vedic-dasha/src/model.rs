//! The recursive dasha period shared by Vimshottari, Yogini, and Chara
//! (spec §3 glossary: `DashaPeriod`).

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use vedic_core::Planet;

/// One nested period in a dasha timeline. `level` 0 is the Mahadasha (or
/// Chara Dasha's sign-period); each level below nests proportionally
/// within its parent, up to five levels deep.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashaPeriod {
    pub lord: Planet,
    /// Set only for Chara Dasha, whose periods are named by rashi rather
    /// than by planet; `None` for Vimshottari/Yogini.
    pub sign: Option<u8>,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub level: u8,
    pub sub_periods: Vec<DashaPeriod>,
}

impl DashaPeriod {
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        self.start <= at && at < self.end
    }

    /// The chain of periods active at `at`, from this level down to the
    /// deepest nested sub-period that contains it. Empty if `at` falls
    /// outside this period.
    pub fn active_chain(&self, at: DateTime<Utc>) -> Vec<&DashaPeriod> {
        if !self.contains(at) {
            return Vec::new();
        }
        let mut chain = vec![self];
        if let Some(sub) = self.sub_periods.iter().find(|p| p.contains(at)) {
            chain.extend(sub.active_chain(at));
        }
        chain
    }
}

/// Finds the active chain across a top-level sequence of periods (e.g. the
/// 9 Vimshottari mahadashas, the 8 Yogini periods, or the 12 Chara
/// sign-periods), returning the full nested chain at `at`.
pub fn active_chain<'a>(periods: &'a [DashaPeriod], at: DateTime<Utc>) -> Vec<&'a DashaPeriod> {
    periods
        .iter()
        .find(|p| p.contains(at))
        .map(|p| p.active_chain(at))
        .unwrap_or_default()
}

/// Converts a fractional year count into a `chrono::Duration` under the
/// given day-length convention (solar ~365.2425 or Savana 360).
pub fn years_to_duration(years: f64, days_per_year: f64) -> Duration {
    let total_seconds = years * days_per_year * 86_400.0;
    Duration::milliseconds((total_seconds * 1000.0).round() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn leaf(lord: Planet, start: DateTime<Utc>, end: DateTime<Utc>) -> DashaPeriod {
        DashaPeriod { lord, sign: None, start, end, level: 1, sub_periods: vec![] }
    }

    #[test]
    fn active_chain_descends_into_containing_sub_period() {
        let start = Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap();
        let mid = Utc.with_ymd_and_hms(2005, 1, 1, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2010, 1, 1, 0, 0, 0).unwrap();
        let sub_a = leaf(Planet::Venus, start, mid);
        let sub_b = leaf(Planet::Sun, mid, end);
        let root = DashaPeriod {
            lord: Planet::Moon,
            sign: None,
            start,
            end,
            level: 0,
            sub_periods: vec![sub_a, sub_b],
        };
        let chain = root.active_chain(Utc.with_ymd_and_hms(2006, 6, 1, 0, 0, 0).unwrap());
        assert_eq!(chain.len(), 2);
        assert_eq!(chain[0].lord, Planet::Moon);
        assert_eq!(chain[1].lord, Planet::Sun);
    }

    #[test]
    fn years_to_duration_matches_day_count() {
        let d = years_to_duration(1.0, 360.0);
        assert_eq!(d.num_days(), 360);
    }
}
