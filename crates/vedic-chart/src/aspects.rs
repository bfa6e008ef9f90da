//! The Aspect Engine (spec §4.3): classical Graha Drishti (planetary
//! aspects) and Jaimini Rashi Drishti (sign aspects).

use vedic_core::{tables, Chart, Planet};

/// Which houses (counted from the planet's own house as 1st) a planet casts
/// a full aspect on. Every planet aspects the 7th; Mars/Jupiter/Saturn add
/// their special aspects. Rahu/Ketu follow Jupiter's pattern here (5/7/9),
/// the commonly used convention where Parashari texts are silent — recorded
/// as a decision in the grounding ledger rather than picked silently.
fn aspected_house_offsets(planet: Planet) -> &'static [u8] {
    match planet {
        Planet::Mars => &[3, 6, 7],
        Planet::Jupiter => &[4, 6, 8],
        Planet::Saturn => &[2, 6, 9],
        Planet::Rahu | Planet::Ketu => &[4, 6, 8],
        _ => &[6],
    }
}

/// One planet's full aspect: the aspecting planet and the set of signs
/// (0..12) it aspects.
#[derive(Debug, Clone)]
pub struct GrahaDrishti {
    pub planet: Planet,
    pub aspected_signs: Vec<u8>,
}

/// Computes Graha Drishti for every placed planet in `chart`.
pub fn graha_drishti(chart: &Chart) -> Vec<GrahaDrishti> {
    chart
        .positions
        .values()
        .map(|pos| {
            let offsets = aspected_house_offsets(pos.planet);
            let aspected_signs =
                offsets.iter().map(|&offset| (pos.sign + offset) % 12).collect();
            GrahaDrishti { planet: pos.planet, aspected_signs }
        })
        .collect()
}

/// Whether `aspecting_sign` casts a Graha-style full aspect onto
/// `target_sign` for a planet with the given offsets — used by Shadbala's
/// Drik Bala, which needs aspect strength between arbitrary signs rather
/// than a planet's placed position.
pub fn sign_aspects(planet: Planet, aspecting_sign: u8, target_sign: u8) -> bool {
    aspected_house_offsets(planet).iter().any(|&offset| (aspecting_sign + offset) % 12 == target_sign)
}

/// Jaimini Rashi Drishti: movable signs aspect all fixed signs except the
/// one immediately following; fixed signs aspect all movable signs except
/// the one immediately preceding; dual signs aspect the other three dual
/// signs mutually.
pub fn rashi_drishti(sign: u8) -> Vec<u8> {
    let sign = sign % 12;
    match tables::sign_quality(sign) {
        tables::SignQuality::Movable => {
            let excluded = (sign + 1) % 12;
            (0..12u8).filter(|&s| matches!(tables::sign_quality(s), tables::SignQuality::Fixed) && s != excluded).collect()
        }
        tables::SignQuality::Fixed => {
            let excluded = (sign + 11) % 12;
            (0..12u8).filter(|&s| matches!(tables::sign_quality(s), tables::SignQuality::Movable) && s != excluded).collect()
        }
        tables::SignQuality::Dual => {
            (0..12u8).filter(|&s| matches!(tables::sign_quality(s), tables::SignQuality::Dual) && s != sign).collect()
        }
    }
}

/// Whether `from_sign` casts a Rashi Drishti onto `to_sign`.
pub fn rashi_aspects(from_sign: u8, to_sign: u8) -> bool {
    rashi_drishti(from_sign).contains(&(to_sign % 12))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_planet_aspects_its_seventh_house() {
        assert!(sign_aspects(Planet::Moon, 0, 6));
        assert!(sign_aspects(Planet::Venus, 3, 9));
    }

    #[test]
    fn mars_has_special_fourth_and_eighth_aspects() {
        assert!(sign_aspects(Planet::Mars, 0, 3)); // 4th
        assert!(sign_aspects(Planet::Mars, 0, 7)); // 8th
        assert!(!sign_aspects(Planet::Mars, 0, 1)); // not 2nd
    }

    #[test]
    fn rashi_drishti_movable_excludes_adjacent_fixed() {
        let aspects = rashi_drishti(0); // Aries
        assert!(aspects.contains(&4)); // Leo
        assert!(aspects.contains(&7)); // Scorpio
        assert!(aspects.contains(&10)); // Aquarius
        assert!(!aspects.contains(&1)); // Taurus excluded (adjacent)
    }

    #[test]
    fn rashi_drishti_dual_signs_aspect_each_other_mutually() {
        let aspects = rashi_drishti(2); // Gemini
        assert_eq!(aspects.len(), 3);
        assert!(aspects.contains(&5) && aspects.contains(&8) && aspects.contains(&11));
        assert!(!aspects.contains(&2));
    }

    #[test]
    fn rashi_drishti_is_reciprocal_between_movable_and_fixed_when_not_adjacent() {
        // Aries (movable) <-> Scorpio (fixed): neither is the other's
        // excluded adjacent sign, so the aspect holds both ways.
        assert!(rashi_aspects(0, 7));
        assert!(rashi_aspects(7, 0));
    }
}
