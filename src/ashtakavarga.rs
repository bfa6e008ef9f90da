//! Facade aggregate for the Ashtakavarga engine (spec §4.4): every target
//! planet's Bhinnashtakavarga plus the Sarvashtakavarga, with the two
//! classical reductions available as methods on the aggregate itself.

use std::collections::BTreeMap;
use vedic_ashtakavarga::{
    apply_shodhana, bhinnashtakavarga, ekadhipati_shodhana, sarvashtakavarga, trikona_shodhana,
    BinduTable, TARGETS,
};
use vedic_core::{Chart, Planet};

/// Every target planet's Bhinnashtakavarga plus the Sarvashtakavarga for one
/// chart. Unreduced by default; call `apply_trikona`/`apply_ekadhipati` (or
/// both, via `apply_shodhana`) for the classically reduced tables.
#[derive(Debug, Clone)]
pub struct Ashtakavarga {
    pub bhinna: BTreeMap<Planet, BinduTable>,
    pub sarva: BinduTable,
}

impl Ashtakavarga {
    pub fn apply_trikona(&self) -> Self {
        Self {
            bhinna: self.bhinna.iter().map(|(&p, t)| (p, trikona_shodhana(t))).collect(),
            sarva: trikona_shodhana(&self.sarva),
        }
    }

    pub fn apply_ekadhipati(&self) -> Self {
        Self {
            bhinna: self.bhinna.iter().map(|(&p, t)| (p, ekadhipati_shodhana(t))).collect(),
            sarva: ekadhipati_shodhana(&self.sarva),
        }
    }

    /// Trikona then Ekadhipati Shodhana, the standard reduction order.
    pub fn apply_shodhana(&self) -> Self {
        Self {
            bhinna: self.bhinna.iter().map(|(&p, t)| (p, apply_shodhana(t))).collect(),
            sarva: apply_shodhana(&self.sarva),
        }
    }
}

/// Computes the unreduced Ashtakavarga aggregate for `chart`.
pub fn ashtakavarga(chart: &Chart) -> Ashtakavarga {
    let bhinna = TARGETS.iter().map(|&p| (p, bhinnashtakavarga(chart, p))).collect();
    Ashtakavarga { bhinna, sarva: sarvashtakavarga(chart) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use vedic_chart::{build_chart, CalculationFlags};
    use vedic_core::Location;
    use vedic_ephemeris::{AnalyticProvider, EphemerisHandle};

    fn sample_chart() -> Chart {
        let handle = EphemerisHandle::new(Box::new(AnalyticProvider));
        let ut = Utc.with_ymd_and_hms(1990, 5, 15, 9, 0, 0).unwrap();
        let loc = Location::new(28.6139, 77.2090, 0.0);
        build_chart(&handle, ut, loc, CalculationFlags::default()).unwrap()
    }

    #[test]
    fn sarva_equals_sum_of_bhinna_tables() {
        let chart = sample_chart();
        let av = ashtakavarga(&chart);
        for sign in 0..12 {
            let expected: u32 = av.bhinna.values().map(|t| t[sign]).sum();
            assert_eq!(av.sarva[sign], expected);
        }
    }

    #[test]
    fn reductions_never_increase_any_bindu_count() {
        let chart = sample_chart();
        let av = ashtakavarga(&chart);
        let reduced = av.apply_shodhana();
        for (planet, table) in &av.bhinna {
            let reduced_table = &reduced.bhinna[planet];
            for sign in 0..12 {
                assert!(reduced_table[sign] <= table[sign]);
            }
        }
    }
}
