//! The `Planet` tagged variant (spec §3, design note §9: "replaces the
//! source's open-world enum-plus-string kludges").

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which node definition feeds Rahu/Ketu longitudes at the ephemeris
/// boundary. Rahu/Ketu remain distinct `Planet` variants regardless of this
/// selector; a thin adapter in `vedic-ephemeris` maps `(Planet::Rahu, mode)`
/// to the underlying node body the ephemeris provider actually knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeType {
    Mean,
    True,
}

/// All bodies the core can place on a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Planet {
    Sun,
    Moon,
    Mars,
    Mercury,
    Jupiter,
    Venus,
    Saturn,
    Rahu,
    Ketu,
    Uranus,
    Neptune,
    Pluto,
    Chiron,
    Ceres,
    Pallas,
    Juno,
    Vesta,
}

/// The seven traditional strength-bearing planets, in the classical order
/// used by Ashtakavarga and Shadbala.
pub const STRENGTH_PLANETS: [Planet; 7] = [
    Planet::Sun,
    Planet::Moon,
    Planet::Mars,
    Planet::Mercury,
    Planet::Jupiter,
    Planet::Venus,
    Planet::Saturn,
];

/// The nine-planet Vimshottari cycle order, starting from Ketu.
pub const VIMSHOTTARI_ORDER: [Planet; 9] = [
    Planet::Ketu,
    Planet::Venus,
    Planet::Sun,
    Planet::Moon,
    Planet::Mars,
    Planet::Rahu,
    Planet::Jupiter,
    Planet::Saturn,
    Planet::Mercury,
];

impl Planet {
    /// Mahadasha length in years for the Vimshottari 120-year cycle.
    pub fn vimshottari_years(self) -> f64 {
        match self {
            Planet::Ketu => 7.0,
            Planet::Venus => 20.0,
            Planet::Sun => 6.0,
            Planet::Moon => 10.0,
            Planet::Mars => 7.0,
            Planet::Rahu => 18.0,
            Planet::Jupiter => 16.0,
            Planet::Saturn => 19.0,
            Planet::Mercury => 17.0,
            other => panic!("{other:?} has no Vimshottari period"),
        }
    }

    /// Next planet in the fixed 9-planet Vimshottari order.
    pub fn vimshottari_next(self) -> Planet {
        let pos = VIMSHOTTARI_ORDER
            .iter()
            .position(|p| *p == self)
            .unwrap_or_else(|| panic!("{self:?} is not a Vimshottari planet"));
        VIMSHOTTARI_ORDER[(pos + 1) % 9]
    }

    /// True for the seven classical strength-bearing planets.
    pub fn is_strength_planet(self) -> bool {
        STRENGTH_PLANETS.contains(&self)
    }

    /// True for the naturally malefic planets (used by Kala Bala paksha and
    /// Drik Bala aspect-sign rules).
    pub fn is_malefic(self) -> bool {
        matches!(
            self,
            Planet::Sun | Planet::Mars | Planet::Saturn | Planet::Rahu | Planet::Ketu
        )
    }

    pub fn is_benefic(self) -> bool {
        !self.is_malefic()
    }

    pub fn name(self) -> &'static str {
        match self {
            Planet::Sun => "Sun",
            Planet::Moon => "Moon",
            Planet::Mars => "Mars",
            Planet::Mercury => "Mercury",
            Planet::Jupiter => "Jupiter",
            Planet::Venus => "Venus",
            Planet::Saturn => "Saturn",
            Planet::Rahu => "Rahu",
            Planet::Ketu => "Ketu",
            Planet::Uranus => "Uranus",
            Planet::Neptune => "Neptune",
            Planet::Pluto => "Pluto",
            Planet::Chiron => "Chiron",
            Planet::Ceres => "Ceres",
            Planet::Pallas => "Pallas",
            Planet::Juno => "Juno",
            Planet::Vesta => "Vesta",
        }
    }
}

impl fmt::Display for Planet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vimshottari_years_sum_to_120() {
        let total: f64 = VIMSHOTTARI_ORDER.iter().map(|p| p.vimshottari_years()).sum();
        assert!((total - 120.0).abs() < 1e-9);
    }

    #[test]
    fn vimshottari_next_wraps_around() {
        assert_eq!(Planet::Ketu.vimshottari_next(), Planet::Venus);
        assert_eq!(Planet::Mercury.vimshottari_next(), Planet::Ketu);
    }

    #[test]
    fn strength_planets_excludes_nodes() {
        assert!(!Planet::Rahu.is_strength_planet());
        assert!(Planet::Saturn.is_strength_planet());
    }
}
