//! The Divisional Chart Mapper (spec §4.2): projects a [`Chart`] through one
//! of the sixteen-plus classical vargas (D1..D60, D150, D249).
//!
//! Every mapper other than D249 produces a destination sign only; the
//! projected longitude is `destination_sign * 30 + 15` (the sign's
//! mid-point), per spec §4.2's generic rule. D249 is the one division that
//! supplies its own sub-position, because its buckets are proportional to
//! Vimshottari years rather than equal divisions of a sign.

use vedic_core::{angles, tables, Chart, Planet, VedicError, VedicResult};

/// The supported divisional chart types. `D1` is the identity (handled by
/// callers simply returning the existing chart); every other variant is a
/// distinct mapping rule below.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DivisionalChartType {
    D1,
    D2,
    D3,
    D4,
    D5,
    D6,
    D7,
    D8,
    D9,
    D10,
    D11,
    D12,
    D16,
    D20,
    D24,
    D27,
    D30,
    D40,
    D45,
    D60,
    D150,
    D249,
}

impl DivisionalChartType {
    pub fn name(self) -> &'static str {
        match self {
            DivisionalChartType::D1 => "D1",
            DivisionalChartType::D2 => "D2",
            DivisionalChartType::D3 => "D3",
            DivisionalChartType::D4 => "D4",
            DivisionalChartType::D5 => "D5",
            DivisionalChartType::D6 => "D6",
            DivisionalChartType::D7 => "D7",
            DivisionalChartType::D8 => "D8",
            DivisionalChartType::D9 => "D9",
            DivisionalChartType::D10 => "D10",
            DivisionalChartType::D11 => "D11",
            DivisionalChartType::D12 => "D12",
            DivisionalChartType::D16 => "D16",
            DivisionalChartType::D20 => "D20",
            DivisionalChartType::D24 => "D24",
            DivisionalChartType::D27 => "D27",
            DivisionalChartType::D30 => "D30",
            DivisionalChartType::D40 => "D40",
            DivisionalChartType::D45 => "D45",
            DivisionalChartType::D60 => "D60",
            DivisionalChartType::D150 => "D150",
            DivisionalChartType::D249 => "D249",
        }
    }
}

/// An absolute sign a division's counting can start from, independent of the
/// sign being divided.
#[derive(Debug, Clone, Copy)]
enum AbsoluteStart {
    OddEven { odd: u8, even: u8 },
    Quality { movable: u8, fixed: u8, dual: u8 },
    Element { fire: u8, earth: u8, air: u8, water: u8 },
}

/// A start sign expressed relative to the sign being divided (the classical
/// "Nth from the sign itself" phrasing).
#[derive(Debug, Clone, Copy)]
enum RelativeStart {
    Same,
    OddEven { odd_offset: u8, even_offset: u8 },
    Quality { movable_offset: u8, fixed_offset: u8, dual_offset: u8 },
}

#[derive(Debug, Clone, Copy)]
enum StartRule {
    Absolute(AbsoluteStart),
    Relative(RelativeStart),
}

#[derive(Debug, Clone, Copy)]
enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

fn element_of(sign: u8) -> Element {
    match sign % 4 {
        0 => Element::Fire,
        1 => Element::Earth,
        2 => Element::Air,
        _ => Element::Water,
    }
}

/// Division count and start rule for every varga handled by the generic
/// equal-division engine below. D1/D2/D3/D30/D249 have bespoke mappers
/// instead because their rules aren't "equal parts, offset start".
fn engine_rule(t: DivisionalChartType) -> Option<(u32, StartRule)> {
    use RelativeStart::*;
    use StartRule::*;
    Some(match t {
        DivisionalChartType::D4 => (4, Relative(Quality { movable_offset: 0, fixed_offset: 3, dual_offset: 6 })),
        DivisionalChartType::D5 => {
            (5, Absolute(AbsoluteStart::OddEven { odd: 0, even: 6 }))
        }
        DivisionalChartType::D6 => {
            (6, Absolute(AbsoluteStart::OddEven { odd: 0, even: 6 }))
        }
        DivisionalChartType::D7 => {
            (7, Relative(OddEven { odd_offset: 0, even_offset: 6 }))
        }
        DivisionalChartType::D8 => {
            (8, Absolute(AbsoluteStart::Quality { movable: 0, fixed: 8, dual: 4 }))
        }
        DivisionalChartType::D9 => {
            // spec §4.2: movable starts same sign, fixed starts 9th-from,
            // dual starts 5th-from, each counting forward. Verified against
            // the continuous whole-zodiac Navamsa numbering (108 amsas of
            // 3°20' tiling 0..360 consecutively): movable_offset 0,
            // fixed_offset 8, dual_offset 4 exactly reproduces it.
            (9, Relative(Quality { movable_offset: 0, fixed_offset: 8, dual_offset: 4 }))
        }
        DivisionalChartType::D10 => {
            (10, Relative(OddEven { odd_offset: 0, even_offset: 8 }))
        }
        DivisionalChartType::D11 => (11, Relative(Quality { movable_offset: 11, fixed_offset: 11, dual_offset: 11 })),
        DivisionalChartType::D12 => (12, Relative(Same)),
        DivisionalChartType::D16 => {
            (16, Absolute(AbsoluteStart::Quality { movable: 0, fixed: 4, dual: 8 }))
        }
        DivisionalChartType::D20 => {
            (20, Absolute(AbsoluteStart::Quality { movable: 0, fixed: 8, dual: 4 }))
        }
        DivisionalChartType::D24 => {
            (24, Absolute(AbsoluteStart::OddEven { odd: 4, even: 3 }))
        }
        DivisionalChartType::D27 => (
            27,
            Absolute(AbsoluteStart::Element { fire: 0, earth: 3, air: 6, water: 9 }),
        ),
        DivisionalChartType::D40 => {
            (40, Absolute(AbsoluteStart::OddEven { odd: 0, even: 6 }))
        }
        DivisionalChartType::D45 => {
            (45, Absolute(AbsoluteStart::Quality { movable: 0, fixed: 4, dual: 8 }))
        }
        DivisionalChartType::D60 => {
            (60, Relative(OddEven { odd_offset: 0, even_offset: 6 }))
        }
        DivisionalChartType::D150 => {
            (150, Relative(OddEven { odd_offset: 0, even_offset: 6 }))
        }
        _ => return None,
    })
}

fn start_sign(rule: StartRule, sign: u8) -> u8 {
    match rule {
        StartRule::Absolute(a) => match a {
            AbsoluteStart::OddEven { odd, even } => {
                if matches!(tables::sign_parity(sign), tables::SignParity::Odd) {
                    odd
                } else {
                    even
                }
            }
            AbsoluteStart::Quality { movable, fixed, dual } => match tables::sign_quality(sign) {
                tables::SignQuality::Movable => movable,
                tables::SignQuality::Fixed => fixed,
                tables::SignQuality::Dual => dual,
            },
            AbsoluteStart::Element { fire, earth, air, water } => match element_of(sign) {
                Element::Fire => fire,
                Element::Earth => earth,
                Element::Air => air,
                Element::Water => water,
            },
        },
        StartRule::Relative(r) => {
            let offset = match r {
                RelativeStart::Same => 0,
                RelativeStart::OddEven { odd_offset, even_offset } => {
                    if matches!(tables::sign_parity(sign), tables::SignParity::Odd) {
                        odd_offset
                    } else {
                        even_offset
                    }
                }
                RelativeStart::Quality { movable_offset, fixed_offset, dual_offset } => {
                    match tables::sign_quality(sign) {
                        tables::SignQuality::Movable => movable_offset,
                        tables::SignQuality::Fixed => fixed_offset,
                        tables::SignQuality::Dual => dual_offset,
                    }
                }
            };
            (sign as u16 + offset as u16) as u8 % 12
        }
    }
}

/// Maps one longitude into its destination sign under `t`. `D1`/`D249` are
/// rejected here (callers route those separately); `D2`/`D3`/`D30` have
/// exact, non-generic classical rules; everything else goes through the
/// equal-division engine above.
fn map_sign(t: DivisionalChartType, longitude: f64) -> VedicResult<u8> {
    let sign = angles::sign_index(longitude);
    let pos = angles::position_in_sign(longitude);
    match t {
        DivisionalChartType::D1 => Ok(sign),
        DivisionalChartType::D2 => {
            let odd = matches!(tables::sign_parity(sign), tables::SignParity::Odd);
            let first_half = pos < 15.0;
            Ok(match (odd, first_half) {
                (true, true) => 4,   // Leo
                (true, false) => 3,  // Cancer
                (false, true) => 3,  // Cancer
                (false, false) => 4, // Leo
            })
        }
        DivisionalChartType::D3 => {
            let third = (pos / 10.0).floor() as u8; // 0, 1, 2
            let offset = match third {
                0 => 0,
                1 => 4, // 5th from
                _ => 8, // 9th from
            };
            Ok((sign + offset) % 12)
        }
        DivisionalChartType::D30 => Ok(trimsamsa_sign(sign, pos)),
        DivisionalChartType::D249 => Err(VedicError::UnsupportedDivision(
            "D249 has its own sub-position mapper; use varga_d249".into(),
        )),
        other => {
            let (parts, rule) = engine_rule(other)
                .ok_or_else(|| VedicError::UnsupportedDivision(other.name().into()))?;
            let span = 30.0 / parts as f64;
            let amsa_index = ((pos / span).floor() as u32).min(parts - 1);
            let start = start_sign(rule, sign);
            Ok(((start as u32 + amsa_index) % 12) as u8)
        }
    }
}

/// Classical Trimsamsa (D30): five unequal spans per sign, reversed between
/// odd and even signs, each ruled by and destined to a fixed sign.
fn trimsamsa_sign(sign: u8, pos: f64) -> u8 {
    // (upper bound degrees, destination sign), odd-sign order.
    const ODD: [(f64, u8); 5] = [
        (5.0, 0),   // Aries   (Mars)
        (10.0, 10), // Aquarius (Saturn)
        (18.0, 8),  // Sagittarius (Jupiter)
        (25.0, 2),  // Gemini  (Mercury)
        (30.0, 6),  // Libra   (Venus)
    ];
    const EVEN: [(f64, u8); 5] = [
        (5.0, 1),   // Taurus  (Venus)
        (12.0, 5),  // Virgo   (Mercury)
        (20.0, 11), // Pisces  (Jupiter)
        (25.0, 9),  // Capricorn (Saturn)
        (30.0, 7),  // Scorpio (Mars)
    ];
    let table = if matches!(tables::sign_parity(sign), tables::SignParity::Odd) { ODD } else { EVEN };
    table.iter().find(|(upper, _)| pos < *upper).map(|(_, dest)| *dest).unwrap_or(table[4].1)
}

/// D249's own result: a destination sign *and* a position within it, since
/// its buckets are proportional to Vimshottari years rather than equal arcs.
#[derive(Debug, Clone, Copy)]
pub struct D249Placement {
    pub sign: u8,
    pub position_in_sign: f64,
    pub ruler: Planet,
    pub in_abhijit_overlay: bool,
    pub abhijit_ruler: Option<Planet>,
}

/// The nine-ruler order and its Vimshottari year weights, repeated three
/// times per sign (27 nakshatras worth of sub-lord structure) to build the
/// 243 ruler-proportional buckets D249 is named for, plus the 6-ruler
/// Abhijit overlay (spec §4.2: "the cycle repeats 27 full times and a
/// partial 28th cycle of 6 ruler-buckets covers the remainder" — 27*9 + 6 =
/// 249). The overlay occupies the same physical degree range as the
/// Abhijit band inside Uttara Ashadha/Shravana rather than extending past
/// 360°; see DESIGN.md for why this is modeled as a parallel field instead
/// of replacing the primary bucket.
fn varga_d249(longitude: f64) -> D249Placement {
    let nakshatra = angles::nakshatra_index(longitude);
    let within_nakshatra = longitude - angles::nakshatra_start(nakshatra);
    let (ruler, ruler_start, ruler_span) = vimshottari_bucket(within_nakshatra, angles::NAKSHATRA_SPAN);

    // The 243 main buckets: ruler-proportional position re-expressed across
    // a full sign (30 degrees) so a destination sign/position pair can be
    // produced the way every other varga mapper does.
    let bucket_index = nakshatra as u32 * 9
        + vedic_core::VIMSHOTTARI_ORDER.iter().position(|p| *p == ruler).unwrap() as u32;
    let sign = (bucket_index % 12) as u8;
    let fraction_in_bucket = if ruler_span > 0.0 { (within_nakshatra - ruler_start) / ruler_span } else { 0.0 };
    let position_in_sign = fraction_in_bucket.clamp(0.0, 1.0) * 30.0;

    let in_abhijit_overlay = angles::in_abhijit(longitude);
    let abhijit_ruler = in_abhijit_overlay.then(|| {
        let within_abhijit = longitude - angles::ABHIJIT_START;
        let abhijit_span = angles::ABHIJIT_END - angles::ABHIJIT_START;
        abhijit_ruler_for(within_abhijit, abhijit_span)
    });

    D249Placement { sign, position_in_sign, ruler, in_abhijit_overlay, abhijit_ruler }
}

/// Locates which of the 9 Vimshottari-proportional sub-buckets
/// `within_span` degrees into a span of `total_span` degrees falls into,
/// returning (ruler, bucket_start_degrees, bucket_span_degrees). Shared by
/// D249's main buckets and KP sub-lord division.
pub fn vimshottari_bucket(within_span: f64, total_span: f64) -> (Planet, f64, f64) {
    let mut cursor = 0.0;
    for planet in vedic_core::VIMSHOTTARI_ORDER {
        let span = total_span * planet.vimshottari_years() / 120.0;
        if within_span < cursor + span || planet == Planet::Mercury {
            return (planet, cursor, span);
        }
        cursor += span;
    }
    unreachable!("Vimshottari order always ends at Mercury")
}

/// The first six rulers of the Vimshottari order (Ketu..Rahu), proportional
/// only to their own year weights, covering the Abhijit overlay span.
fn abhijit_ruler_for(within_span: f64, total_span: f64) -> Planet {
    const OVERLAY: [Planet; 6] =
        [Planet::Ketu, Planet::Venus, Planet::Sun, Planet::Moon, Planet::Mars, Planet::Rahu];
    let weight_sum: f64 = OVERLAY.iter().map(|p| p.vimshottari_years()).sum();
    let mut cursor = 0.0;
    for planet in OVERLAY {
        let span = total_span * planet.vimshottari_years() / weight_sum;
        if within_span < cursor + span || planet == Planet::Rahu {
            return planet;
        }
        cursor += span;
    }
    Planet::Rahu
}

/// Projects every position (and the ascendant/cusps) in `chart` through
/// divisional type `t`, returning a new [`Chart`] (spec §4.2 output: "a new
/// Chart whose asc, cusps, and planet longitudes are the projected
/// values"). `D1` returns a clone of `chart` unchanged.
pub fn divisional_chart(chart: &Chart, t: DivisionalChartType) -> VedicResult<Chart> {
    if t == DivisionalChartType::D1 {
        return Ok(chart.clone());
    }

    let project = |longitude: f64| -> VedicResult<f64> {
        if t == DivisionalChartType::D249 {
            let placement = varga_d249(longitude);
            Ok(placement.sign as f64 * 30.0 + placement.position_in_sign)
        } else {
            let sign = map_sign(t, longitude)?;
            Ok(sign as f64 * 30.0 + 15.0)
        }
    };

    let mut positions = std::collections::BTreeMap::new();
    for (planet, pos) in &chart.positions {
        let projected = project(pos.longitude)?;
        let mut new_pos = vedic_core::PlanetPosition::from_raw(
            *planet,
            projected,
            pos.latitude,
            pos.distance,
            pos.longitude_speed,
        );
        new_pos.retrograde = pos.retrograde;
        new_pos.combust = pos.combust;
        positions.insert(*planet, new_pos);
    }

    let ascendant = project(chart.ascendant)?;
    let asc_sign = angles::sign_index(ascendant);
    let mut cusps = [0.0; 12];
    for (i, c) in cusps.iter_mut().enumerate() {
        *c = ((asc_sign as usize + i) % 12) as f64 * 30.0;
    }

    Ok(Chart {
        timestamp: chart.timestamp,
        location: chart.location,
        ayanamsa: chart.ayanamsa,
        ayanamsa_mode: chart.ayanamsa_mode,
        house_system: chart.house_system,
        ascendant,
        cusps,
        positions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn d1_is_identity() {
        assert_eq!(map_sign(DivisionalChartType::D1, 15.0).unwrap(), 0);
    }

    #[test]
    fn d9_movable_sign_matches_spec_example() {
        // spec §8 scenario 3: 15° Aries (movable) -> Leo.
        assert_eq!(map_sign(DivisionalChartType::D9, 15.0).unwrap(), 4);
    }

    #[test]
    fn d9_is_total_on_a_full_sign_sweep() {
        for tenth in 0..300u32 {
            let l = tenth as f64 * 0.1;
            let sign = map_sign(DivisionalChartType::D9, l).unwrap();
            assert!(sign < 12);
        }
    }

    #[test]
    fn d2_hora_odd_sign_splits_leo_cancer() {
        assert_eq!(map_sign(DivisionalChartType::D2, 5.0).unwrap(), 4); // Aries 0-15 -> Leo
        assert_eq!(map_sign(DivisionalChartType::D2, 20.0).unwrap(), 3); // Aries 15-30 -> Cancer
        assert_eq!(map_sign(DivisionalChartType::D2, 35.0).unwrap(), 3); // Taurus(even) 0-15 -> Cancer
    }

    #[test]
    fn d3_drekkana_thirds() {
        assert_eq!(map_sign(DivisionalChartType::D3, 2.0).unwrap(), 0); // same sign
        assert_eq!(map_sign(DivisionalChartType::D3, 12.0).unwrap(), 4); // 5th from Aries
        assert_eq!(map_sign(DivisionalChartType::D3, 25.0).unwrap(), 8); // 9th from Aries
    }

    #[test]
    fn d10_odd_even_start() {
        // Aries (odd, offset 0): first dasamsa is Aries itself.
        assert_eq!(map_sign(DivisionalChartType::D10, 1.0).unwrap(), 0);
        // Taurus (even, offset 8 -> Capricorn start).
        assert_eq!(map_sign(DivisionalChartType::D10, 31.0).unwrap(), 9);
    }

    #[test]
    fn d30_trimsamsa_matches_classical_table() {
        assert_eq!(trimsamsa_sign(0, 2.0), 0); // Aries odd, Mars span -> Aries
        assert_eq!(trimsamsa_sign(0, 27.0), 6); // Aries odd, Venus span -> Libra
        assert_eq!(trimsamsa_sign(1, 2.0), 1); // Taurus even, Venus span -> Taurus
        assert_eq!(trimsamsa_sign(1, 27.0), 7); // Taurus even, Mars span -> Scorpio
    }

    #[test]
    fn d249_produces_in_range_sign_and_position() {
        for hundredth in 0..36000u32 {
            let l = hundredth as f64 * 0.01;
            let placement = varga_d249(l);
            assert!(placement.sign < 12);
            assert!((0.0..30.0).contains(&placement.position_in_sign));
        }
    }

    #[test]
    fn d249_flags_abhijit_overlay_only_inside_the_band() {
        let inside = varga_d249(280.0);
        assert!(inside.in_abhijit_overlay);
        assert!(inside.abhijit_ruler.is_some());
        let outside = varga_d249(10.0);
        assert!(!outside.in_abhijit_overlay);
        assert!(outside.abhijit_ruler.is_none());
    }

    #[test]
    fn divisional_chart_never_panics_and_stays_in_range() {
        use chrono::{TimeZone, Utc};
        use vedic_core::{HouseSystem, Location, SiderealMode};
        let mut positions = std::collections::BTreeMap::new();
        positions.insert(Planet::Sun, vedic_core::PlanetPosition::from_raw(Planet::Sun, 187.3, 0.0, 1.0, 1.0));
        let chart = Chart {
            timestamp: Utc.with_ymd_and_hms(2024, 3, 25, 0, 0, 0).unwrap(),
            location: Location::new(28.6, 77.2, 0.0),
            ayanamsa: 24.1,
            ayanamsa_mode: SiderealMode::Lahiri,
            house_system: HouseSystem::WholeSign,
            ascendant: 10.0,
            cusps: [0.0; 12],
            positions,
        };
        for t in [
            DivisionalChartType::D2,
            DivisionalChartType::D3,
            DivisionalChartType::D9,
            DivisionalChartType::D10,
            DivisionalChartType::D30,
            DivisionalChartType::D60,
            DivisionalChartType::D249,
        ] {
            let d = divisional_chart(&chart, t).unwrap();
            assert!(d.ascendant >= 0.0 && d.ascendant < 360.0);
            for pos in d.positions.values() {
                assert!(pos.longitude >= 0.0 && pos.longitude < 360.0);
            }
        }
    }
}
