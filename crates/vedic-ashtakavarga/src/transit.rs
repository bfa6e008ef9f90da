//! Transit benefic-point analysis (spec §4.4): how many bindus a planet's
//! natal Bhinnashtakavarga assigns to the sign it is currently transiting,
//! weighed against the Sarvashtakavarga for that sign.

use crate::bav::{bhinnashtakavarga, sarvashtakavarga, BinduTable};
use vedic_core::{Chart, Planet};

/// Per-sign Bhinnashtakavarga bindus never exceed one per contributor.
const BAV_MAX: f64 = 8.0;
/// Per-sign Sarvashtakavarga bindus never exceed one per contributor per
/// target planet.
const SAV_MAX: f64 = 64.0;
/// Classical Sarvashtakavarga cutoff: 337 bindus spread over 12 signs
/// averages to just above 28, so a sign clearing 28 is above-average.
const SAV_FAVORABLE_THRESHOLD: u32 = 28;

/// The bindu strength `planet` receives while transiting `transit_sign`,
/// read off its natal Bhinnashtakavarga, plus the Sarvashtakavarga at that
/// sign and the favorability call the two together make.
#[derive(Debug, Clone, Copy)]
pub struct TransitAnalysis {
    pub planet: Planet,
    pub transit_sign: u8,
    pub bindus: u32,
    pub sarva_bindus: u32,
    /// 0–100, blending the transit sign's BAV and SAV bindu counts.
    pub score: f64,
    /// `bindus` above half its per-sign maximum and `sarva_bindus` above
    /// the classical Sarvashtakavarga cutoff, simultaneously.
    pub favorable: bool,
}

/// Evaluates every sign's transit strength for `planet`'s natal
/// Bhinnashtakavarga, so a caller can scan a transit across all 12 signs.
pub fn transit_strength_table(natal_chart: &Chart, planet: Planet) -> BinduTable {
    bhinnashtakavarga(natal_chart, planet)
}

/// The transit strength of `planet` at `transit_sign`, given its natal
/// Bhinnashtakavarga and Sarvashtakavarga. Saturn and Jupiter linger in a
/// sign for a year or more, so their score also folds in the trine bindus
/// (5th/9th from the transit sign) rather than the transit sign alone.
pub fn transit_analysis(natal_chart: &Chart, planet: Planet, transit_sign: u8) -> TransitAnalysis {
    let table = bhinnashtakavarga(natal_chart, planet);
    let sarva = sarvashtakavarga(natal_chart);
    let sign = transit_sign as usize % 12;
    let bindus = table[sign];
    let sarva_bindus = sarva[sign];

    let mut score = (bindus as f64 / BAV_MAX * 100.0 + sarva_bindus as f64 / SAV_MAX * 100.0) / 2.0;
    if matches!(planet, Planet::Saturn | Planet::Jupiter) {
        let trine_bindus = (table[(sign + 4) % 12] + table[(sign + 8) % 12]) as f64 / 2.0;
        let trine_pct = trine_bindus / BAV_MAX * 100.0;
        score = (score * 2.0 + trine_pct) / 3.0;
    }

    let favorable = bindus as f64 > BAV_MAX / 2.0 && sarva_bindus > SAV_FAVORABLE_THRESHOLD;

    TransitAnalysis {
        planet,
        transit_sign: sign as u8,
        bindus,
        sarva_bindus,
        score: score.clamp(0.0, 100.0),
        favorable,
    }
}
