//! Sub-lord and sub-sub-lord division (spec §4.6): the same Vimshottari-
//! proportional subdivision the Divisional Chart Mapper uses for D249,
//! applied to a single 13°20' nakshatra span and then recursively to the
//! sub-lord's own span.

use vedic_core::{angles, tables, Planet, VIMSHOTTARI_ORDER};
use vedic_chart::vimshottari_bucket;

/// Sign, star, and lord breakdown for one longitude (spec §4.6).
#[derive(Debug, Clone, Copy)]
pub struct KpLords {
    /// Rashi (0..12) the longitude falls in.
    pub sign: u8,
    /// Lord of that rashi.
    pub sign_lord: Planet,
    /// Nakshatra (0..27) the longitude falls in.
    pub star: u8,
    pub star_lord: Planet,
    pub sub_lord: Planet,
    pub sub_sub_lord: Planet,
    /// Absolute longitude bounds of the sub-lord's span.
    pub sub_start: f64,
    pub sub_end: f64,
}

/// The Vimshottari order rotated to start at `start`, used when a
/// subdivision cycles from a planet other than Ketu.
fn rotated_order(start: Planet) -> [Planet; 9] {
    let pos = VIMSHOTTARI_ORDER.iter().position(|p| *p == start).expect("start is a Vimshottari planet");
    let mut rotated = [Planet::Ketu; 9];
    for i in 0..9 {
        rotated[i] = VIMSHOTTARI_ORDER[(pos + i) % 9];
    }
    rotated
}

/// Locates the proportional bucket `within_span` degrees into `total_span`
/// using a specific (possibly rotated) ruler order.
fn bucket_in_order(order: [Planet; 9], within_span: f64, total_span: f64) -> (Planet, f64, f64) {
    let mut cursor = 0.0;
    for planet in order {
        let span = total_span * planet.vimshottari_years() / 120.0;
        if within_span < cursor + span || planet == order[8] {
            return (planet, cursor, span);
        }
        cursor += span;
    }
    unreachable!("order always terminates at its last member")
}

/// Computes the star lord, sub-lord, and sub-sub-lord of `longitude`.
///
/// `star_lord` is the nakshatra lord; `sub_lord` subdivides the nakshatra's
/// 13°20' proportionally to Vimshottari years (starting the Ketu-first
/// order, like D249); `sub_sub_lord` subdivides the sub-lord's own span the
/// same way, but starting its own Vimshottari order at the sub-lord itself
/// — the classical convention (each level's cycle restarts at the level
/// above's own ruler, not always at Ketu).
pub fn kp_lords(longitude: f64) -> KpLords {
    let longitude = angles::normalize_degrees(longitude);
    let sign = angles::sign_index(longitude);
    let sign_lord = tables::sign_lord(sign);

    let nakshatra = angles::nakshatra_index(longitude);
    let nakshatra_start = angles::nakshatra_start(nakshatra);
    let within_nakshatra = longitude - nakshatra_start;
    let star_lord = tables::nakshatra_lord(nakshatra);

    let (sub_lord, sub_start, sub_span) = vimshottari_bucket(within_nakshatra, angles::NAKSHATRA_SPAN);

    let within_sub = within_nakshatra - sub_start;
    let (sub_sub_lord, _, _) = bucket_in_order(rotated_order(sub_lord), within_sub, sub_span);

    KpLords {
        sign,
        sign_lord,
        star: nakshatra,
        star_lord,
        sub_lord,
        sub_sub_lord,
        sub_start: nakshatra_start + sub_start,
        sub_end: nakshatra_start + sub_start + sub_span,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kp_lords_stay_within_vimshottari_planets() {
        for hundredth in 0..36000u32 {
            let l = hundredth as f64 * 0.01;
            let lords = kp_lords(l);
            assert!(VIMSHOTTARI_ORDER.contains(&lords.star_lord));
            assert!(VIMSHOTTARI_ORDER.contains(&lords.sub_lord));
            assert!(VIMSHOTTARI_ORDER.contains(&lords.sub_sub_lord));
        }
    }

    #[test]
    fn star_lord_at_nakshatra_start_is_the_nakshatra_lord() {
        let lords = kp_lords(angles::nakshatra_start(3));
        assert_eq!(lords.star_lord, vedic_core::tables::nakshatra_lord(3));
    }

    #[test]
    fn sub_lord_changes_across_the_nakshatra_span() {
        let start = kp_lords(0.01);
        let near_end = kp_lords(angles::NAKSHATRA_SPAN - 0.01);
        assert_ne!(start.sub_lord, near_end.sub_lord);
    }
}
