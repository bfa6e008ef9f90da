//! Static rule tables (spec §2.2): sign lords, exaltation/debilitation,
//! natural friendships, nakshatra lord cycle, and Sanskrit name tables.
//! All tables are compile-time constants with bound-checked accessors
//! (design note §9: "Tables as compile-time constants").

use crate::planet::Planet;
use serde::{Deserialize, Serialize};

/// A sign's seasonal quality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SignQuality {
    Movable,
    Fixed,
    Dual,
}

/// A sign's parity (odd signs are traditionally "male", even "female").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SignParity {
    Odd,
    Even,
}

/// Relationship between two planets in the natural-friendship table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Friendship {
    Friend,
    Neutral,
    Enemy,
}

pub const SIGN_NAMES: [&str; 12] = [
    "Aries", "Taurus", "Gemini", "Cancer", "Leo", "Virgo", "Libra", "Scorpio", "Sagittarius",
    "Capricorn", "Aquarius", "Pisces",
];

const SIGN_LORDS: [Planet; 12] = [
    Planet::Mars,    // Aries
    Planet::Venus,   // Taurus
    Planet::Mercury, // Gemini
    Planet::Moon,    // Cancer
    Planet::Sun,     // Leo
    Planet::Mercury, // Virgo
    Planet::Venus,   // Libra
    Planet::Mars,    // Scorpio
    Planet::Jupiter, // Sagittarius
    Planet::Saturn,  // Capricorn
    Planet::Saturn,  // Aquarius
    Planet::Jupiter, // Pisces
];

const SIGN_QUALITY: [SignQuality; 12] = [
    SignQuality::Movable,
    SignQuality::Fixed,
    SignQuality::Dual,
    SignQuality::Movable,
    SignQuality::Fixed,
    SignQuality::Dual,
    SignQuality::Movable,
    SignQuality::Fixed,
    SignQuality::Dual,
    SignQuality::Movable,
    SignQuality::Fixed,
    SignQuality::Dual,
];

/// (exaltation_sign, exaltation_degree) per strength planet; debilitation is
/// the 7th sign from exaltation at the same degree.
fn exaltation_point(planet: Planet) -> Option<(u8, f64)> {
    match planet {
        Planet::Sun => Some((0, 10.0)),     // 10° Aries
        Planet::Moon => Some((1, 3.0)),     // 3° Taurus
        Planet::Mars => Some((9, 28.0)),    // 28° Capricorn
        Planet::Mercury => Some((5, 15.0)), // 15° Virgo
        Planet::Jupiter => Some((3, 5.0)),  // 5° Cancer
        Planet::Venus => Some((11, 27.0)),  // 27° Pisces
        Planet::Saturn => Some((6, 20.0)),  // 20° Libra
        _ => None,
    }
}

/// Sign + degree of the planet's debilitation point.
pub fn debilitation_point(planet: Planet) -> Option<(u8, f64)> {
    exaltation_point(planet).map(|(sign, deg)| (((sign + 6) % 12), deg))
}

pub fn exaltation_sign_degree(planet: Planet) -> Option<(u8, f64)> {
    exaltation_point(planet)
}

/// The lord of a zero-based sign index (0..12).
pub fn sign_lord(sign: u8) -> Planet {
    SIGN_LORDS[(sign % 12) as usize]
}

pub fn sign_quality(sign: u8) -> SignQuality {
    SIGN_QUALITY[(sign % 12) as usize]
}

pub fn sign_parity(sign: u8) -> SignParity {
    if sign % 2 == 0 {
        SignParity::Odd
    } else {
        SignParity::Even
    }
}

pub fn sign_name(sign: u8) -> &'static str {
    SIGN_NAMES[(sign % 12) as usize]
}

/// Natural friendship (Naisargika) between two strength planets, per the
/// classical Parashari table.
pub fn natural_friendship(from: Planet, to: Planet) -> Friendship {
    use Friendship::*;
    use Planet::*;
    if from == to {
        return Friend;
    }
    match (from, to) {
        (Sun, Moon) | (Sun, Mars) | (Sun, Jupiter) => Friend,
        (Sun, Mercury) => Neutral,
        (Sun, Venus) | (Sun, Saturn) => Enemy,

        (Moon, Sun) | (Moon, Mercury) => Friend,
        (Moon, Mars) | (Moon, Jupiter) | (Moon, Venus) | (Moon, Saturn) => Neutral,

        (Mars, Sun) | (Mars, Moon) | (Mars, Jupiter) => Friend,
        (Mars, Venus) | (Mars, Saturn) => Neutral,
        (Mars, Mercury) => Enemy,

        (Mercury, Sun) | (Mercury, Venus) => Friend,
        (Mercury, Mars) | (Mercury, Jupiter) | (Mercury, Saturn) => Neutral,
        (Mercury, Moon) => Enemy,

        (Jupiter, Sun) | (Jupiter, Moon) | (Jupiter, Mars) => Friend,
        (Jupiter, Saturn) => Neutral,
        (Jupiter, Mercury) | (Jupiter, Venus) => Enemy,

        (Venus, Mercury) | (Venus, Saturn) => Friend,
        (Venus, Mars) | (Venus, Jupiter) => Neutral,
        (Venus, Sun) | (Venus, Moon) => Enemy,

        (Saturn, Mercury) | (Saturn, Venus) => Friend,
        (Saturn, Jupiter) => Neutral,
        (Saturn, Sun) | (Saturn, Moon) | (Saturn, Mars) => Enemy,

        _ => Neutral,
    }
}

pub const NAKSHATRA_NAMES: [&str; 27] = [
    "Ashwini", "Bharani", "Krittika", "Rohini", "Mrigashira", "Ardra", "Punarvasu", "Pushya",
    "Ashlesha", "Magha", "Purva Phalguni", "Uttara Phalguni", "Hasta", "Chitra", "Swati",
    "Vishakha", "Anuradha", "Jyeshtha", "Mula", "Purva Ashadha", "Uttara Ashadha", "Shravana",
    "Dhanishta", "Shatabhisha", "Purva Bhadrapada", "Uttara Bhadrapada", "Revati",
];

/// The 27 nakshatra lords, three repetitions of the nine-planet
/// Vimshottari cycle starting at Ketu.
pub fn nakshatra_lord(index: u8) -> Planet {
    crate::planet::VIMSHOTTARI_ORDER[(index % 27 % 9) as usize]
}

pub fn nakshatra_name(index: u8) -> &'static str {
    NAKSHATRA_NAMES[(index % 27) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planet::Planet;

    #[test]
    fn sign_lords_cover_all_twelve() {
        for s in 0..12u8 {
            let _ = sign_lord(s);
        }
    }

    #[test]
    fn debilitation_is_seventh_from_exaltation() {
        let (exalt_sign, deg) = exaltation_sign_degree(Planet::Sun).unwrap();
        let (deb_sign, deb_deg) = debilitation_point(Planet::Sun).unwrap();
        assert_eq!((exalt_sign + 6) % 12, deb_sign);
        assert_eq!(deg, deb_deg);
    }

    #[test]
    fn friendship_is_not_always_symmetric_classically() {
        // Sun->Mercury neutral, but Mercury->Sun is a friend: classical
        // Parashari friendships are directional.
        assert_eq!(natural_friendship(Planet::Sun, Planet::Mercury), Friendship::Neutral);
        assert_eq!(natural_friendship(Planet::Mercury, Planet::Sun), Friendship::Friend);
    }

    #[test]
    fn nakshatra_lord_cycle_repeats_three_times() {
        assert_eq!(nakshatra_lord(0), Planet::Ketu);
        assert_eq!(nakshatra_lord(9), Planet::Ketu);
        assert_eq!(nakshatra_lord(18), Planet::Ketu);
        assert_eq!(nakshatra_lord(1), Planet::Venus);
    }
}
