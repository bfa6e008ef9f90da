//! The `Chart` data model (spec §3): an immutable snapshot of a moment and
//! place, plus the per-planet position record it is built from.

use crate::angles;
use crate::planet::Planet;
use crate::tables;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Geographic location: latitude/longitude in degrees, altitude in meters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: f64,
}

impl Location {
    pub fn new(latitude: f64, longitude: f64, altitude: f64) -> Self {
        Self { latitude, longitude, altitude }
    }

    /// Validate against spec §4.1's bounds.
    pub fn validate(&self) -> Result<(), crate::error::VedicError> {
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(crate::error::VedicError::InvalidInput(format!(
                "latitude {} out of range [-90, 90]",
                self.latitude
            )));
        }
        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(crate::error::VedicError::InvalidInput(format!(
                "longitude {} out of range [-180, 180]",
                self.longitude
            )));
        }
        Ok(())
    }
}

/// Ayanamsa system used to convert tropical to sidereal longitudes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SiderealMode {
    Lahiri,
    Krishnamurti,
    KrishnamurtiLegacy,
    Raman,
    Fagan,
}

impl Default for SiderealMode {
    fn default() -> Self {
        SiderealMode::Lahiri
    }
}

/// House-division system used to place the ascendant and cusps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HouseSystem {
    WholeSign,
    Placidus,
    Equal,
}

impl Default for HouseSystem {
    fn default() -> Self {
        HouseSystem::WholeSign
    }
}

/// A planet's classical dignity in a sign, from the exaltation/debilitation
/// table plus own-sign/friend/enemy ownership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Dignity {
    Exalted,
    OwnSign,
    GreatFriend,
    Friend,
    Neutral,
    Enemy,
    GreatEnemy,
    Debilitated,
}

/// One planet's placement and derived attributes (spec §3).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanetPosition {
    pub planet: Planet,
    pub longitude: f64,
    pub latitude: f64,
    pub distance: f64,
    pub longitude_speed: f64,
    pub sign: u8,
    pub position_in_sign: f64,
    pub nakshatra: u8,
    pub pada: u8,
    pub retrograde: bool,
    pub combust: bool,
    pub dignity: Dignity,
}

impl PlanetPosition {
    /// Build the derived fields (sign/nakshatra/pada/retrograde/dignity)
    /// from a raw longitude and speed. `combust` must be filled in
    /// separately once the Sun's longitude is known (spec §4.1 step 6).
    pub fn from_raw(
        planet: Planet,
        longitude: f64,
        latitude: f64,
        distance: f64,
        longitude_speed: f64,
    ) -> Self {
        let longitude = angles::normalize_degrees(longitude);
        let sign = angles::sign_index(longitude);
        Self {
            planet,
            longitude,
            latitude,
            distance,
            longitude_speed,
            sign,
            position_in_sign: angles::position_in_sign(longitude),
            nakshatra: angles::nakshatra_index(longitude),
            pada: angles::pada(longitude),
            retrograde: longitude_speed < 0.0,
            combust: false,
            dignity: dignity_of(planet, sign, angles::position_in_sign(longitude)),
        }
    }
}

/// Combustion orb in degrees for a planet, direct vs retrograde (spec §4.1
/// step 6). Returns `None` for bodies that are never combust (Sun itself,
/// the nodes).
pub fn combustion_orb(planet: Planet, retrograde: bool) -> Option<f64> {
    match planet {
        Planet::Moon => Some(12.0),
        Planet::Mars => Some(17.0),
        Planet::Mercury => Some(if retrograde { 12.0 } else { 14.0 }),
        Planet::Jupiter => Some(11.0),
        Planet::Venus => Some(if retrograde { 8.0 } else { 10.0 }),
        Planet::Saturn => Some(15.0),
        _ => None,
    }
}

/// Classical dignity of `planet` in `sign` at `position_in_sign` degrees.
pub fn dignity_of(planet: Planet, sign: u8, position_in_sign: f64) -> Dignity {
    if !planet.is_strength_planet() {
        return Dignity::Neutral;
    }
    if let Some((exalt_sign, _)) = tables::exaltation_sign_degree(planet) {
        if sign == exalt_sign {
            return Dignity::Exalted;
        }
    }
    if let Some((deb_sign, _)) = tables::debilitation_point(planet) {
        if sign == deb_sign {
            return Dignity::Debilitated;
        }
    }
    let lord = tables::sign_lord(sign);
    if lord == planet {
        return Dignity::OwnSign;
    }
    // Own/friend/neutral/enemy without the temporal (tatkalika) layer
    // collapses great-friend/great-enemy into friend/enemy; callers needing
    // the five-fold Panchadha Maitri should combine this with temporal
    // friendship computed from house distance, which Shadbala does.
    let _ = position_in_sign;
    match tables::natural_friendship(planet, lord) {
        tables::Friendship::Friend => Dignity::Friend,
        tables::Friendship::Neutral => Dignity::Neutral,
        tables::Friendship::Enemy => Dignity::Enemy,
    }
}

/// An immutable snapshot of a moment and place (spec §3). Built once from
/// ephemeris output and shared read-only by all derivation services.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chart {
    pub timestamp: DateTime<Utc>,
    pub location: Location,
    pub ayanamsa: f64,
    pub ayanamsa_mode: SiderealMode,
    pub house_system: HouseSystem,
    pub ascendant: f64,
    pub cusps: [f64; 12],
    pub positions: BTreeMap<Planet, PlanetPosition>,
}

impl Chart {
    /// The sign (0..12) the ascendant falls in.
    pub fn ascendant_sign(&self) -> u8 {
        angles::sign_index(self.ascendant)
    }

    /// House (1..12) a given sign occupies under Whole-Sign numbering from
    /// the ascendant (spec §3 invariant).
    pub fn house_of_sign(&self, sign: u8) -> u8 {
        let asc_sign = self.ascendant_sign() as i16;
        (((sign as i16 - asc_sign).rem_euclid(12)) + 1) as u8
    }

    /// House (1..12) the given planet currently occupies.
    pub fn house_of(&self, planet: Planet) -> Option<u8> {
        self.positions.get(&planet).map(|p| self.house_of_sign(p.sign))
    }

    /// All planets occupying a given house (1..12).
    pub fn occupants_of_house(&self, house: u8) -> Vec<Planet> {
        self.positions
            .values()
            .filter(|p| self.house_of_sign(p.sign) == house)
            .map(|p| p.planet)
            .collect()
    }

    /// House-occupancy table, 1..12 -> planets in that house.
    pub fn house_occupancy(&self) -> BTreeMap<u8, Vec<Planet>> {
        let mut map: BTreeMap<u8, Vec<Planet>> = (1..=12).map(|h| (h, Vec::new())).collect();
        for p in self.positions.values() {
            map.entry(self.house_of_sign(p.sign)).or_default().push(p.planet);
        }
        map
    }

    /// Validates the invariants spec §3/§8 require of every chart.
    pub fn check_invariants(&self) -> Result<(), crate::error::VedicError> {
        if let (Some(rahu), Some(ketu)) =
            (self.positions.get(&Planet::Rahu), self.positions.get(&Planet::Ketu))
        {
            let diff = angles::normalize_degrees(rahu.longitude + 180.0 - ketu.longitude);
            if diff.min(360.0 - diff) > 1e-6 {
                return Err(crate::error::VedicError::InvalidInput(format!(
                    "Rahu/Ketu are not 180 degrees apart: {diff}"
                )));
            }
        }
        for p in self.positions.values() {
            if angles::sign_index(p.longitude) != p.sign {
                return Err(crate::error::VedicError::InvalidInput(format!(
                    "{} sign mismatch with longitude",
                    p.planet
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_position(planet: Planet, longitude: f64) -> PlanetPosition {
        PlanetPosition::from_raw(planet, longitude, 0.0, 1.0, 1.0)
    }

    fn chart_with(positions: Vec<PlanetPosition>, ascendant: f64) -> Chart {
        let asc_sign = angles::sign_index(ascendant);
        let mut cusps = [0.0; 12];
        for (i, c) in cusps.iter_mut().enumerate() {
            *c = ((asc_sign as usize + i) % 12) as f64 * 30.0;
        }
        Chart {
            timestamp: Utc::now(),
            location: Location::new(28.6139, 77.2090, 0.0),
            ayanamsa: 24.1,
            ayanamsa_mode: SiderealMode::Lahiri,
            house_system: HouseSystem::WholeSign,
            ascendant,
            cusps,
            positions: positions.into_iter().map(|p| (p.planet, p)).collect(),
        }
    }

    #[test]
    fn house_of_sign_matches_whole_sign_rule() {
        let chart = chart_with(vec![], 95.0); // ascendant in Cancer (sign 3)
        assert_eq!(chart.ascendant_sign(), 3);
        assert_eq!(chart.house_of_sign(3), 1);
        assert_eq!(chart.house_of_sign(4), 2);
        assert_eq!(chart.house_of_sign(2), 12);
    }

    #[test]
    fn rahu_ketu_invariant_holds() {
        let rahu = base_position(Planet::Rahu, 40.0);
        let ketu = base_position(Planet::Ketu, 220.0);
        let chart = chart_with(vec![rahu, ketu], 10.0);
        chart.check_invariants().expect("invariant should hold");
    }

    #[test]
    fn rahu_ketu_invariant_fails_when_not_opposite() {
        let rahu = base_position(Planet::Rahu, 40.0);
        let ketu = base_position(Planet::Ketu, 200.0);
        let chart = chart_with(vec![rahu, ketu], 10.0);
        assert!(chart.check_invariants().is_err());
    }

    #[test]
    fn dignity_detects_exaltation_and_debilitation() {
        assert_eq!(dignity_of(Planet::Sun, 0, 10.0), Dignity::Exalted);
        assert_eq!(dignity_of(Planet::Sun, 6, 10.0), Dignity::Debilitated);
        assert_eq!(dignity_of(Planet::Sun, 4, 5.0), Dignity::OwnSign);
    }

    #[test]
    fn combustion_orb_differs_direct_vs_retrograde() {
        assert_eq!(combustion_orb(Planet::Mercury, false), Some(14.0));
        assert_eq!(combustion_orb(Planet::Mercury, true), Some(12.0));
        assert_eq!(combustion_orb(Planet::Sun, false), None);
    }

    #[test]
    fn location_validate_rejects_out_of_range() {
        assert!(Location::new(95.0, 0.0, 0.0).validate().is_err());
        assert!(Location::new(0.0, 200.0, 0.0).validate().is_err());
        assert!(Location::new(28.6, 77.2, 0.0).validate().is_ok());
    }
}
