//! Kala Bala (spec §4.5): temporal strength. Natonnata, Tribhaga and Hora
//! Bala need the day's actual sunrise/sunset/next-sunrise — this crate has
//! no ephemeris access, so the caller (the facade) resolves those once via
//! `vedic-ephemeris` and passes them in as a [`DayWindow`]. When the window
//! can't be resolved (polar day/night) every component that needs it falls
//! back to a Sun-house day/night proxy and the caller is told so via the
//! returned flag — the one fallback spec §7 admits.

use chrono::{DateTime, Datelike, Utc};
use vedic_core::{angles, tables, Chart, Planet};

/// The day/night boundary [`kala_bala`]'s sunrise-driven components need,
/// resolved once by the caller from the ephemeris.
#[derive(Debug, Clone, Copy)]
pub struct DayWindow {
    pub sunrise: DateTime<Utc>,
    pub sunset: DateTime<Utc>,
    pub next_sunrise: DateTime<Utc>,
}

const CHALDEAN_ORDER: [Planet; 7] =
    [Planet::Saturn, Planet::Jupiter, Planet::Mars, Planet::Sun, Planet::Venus, Planet::Mercury, Planet::Moon];

fn weekday_lord(weekday: chrono::Weekday) -> Planet {
    match weekday {
        chrono::Weekday::Sun => Planet::Sun,
        chrono::Weekday::Mon => Planet::Moon,
        chrono::Weekday::Tue => Planet::Mars,
        chrono::Weekday::Wed => Planet::Mercury,
        chrono::Weekday::Thu => Planet::Jupiter,
        chrono::Weekday::Fri => Planet::Venus,
        chrono::Weekday::Sat => Planet::Saturn,
    }
}

/// Fraction of the way through `[start, end)` that `t` has elapsed, clamped
/// to `[0, 1)`. `end` is assumed strictly after `start`.
fn fraction_through(start: DateTime<Utc>, end: DateTime<Utc>, t: DateTime<Utc>) -> f64 {
    let span = (end - start).num_seconds().max(1) as f64;
    let elapsed = (t - start).num_seconds() as f64;
    (elapsed / span).clamp(0.0, 0.999_999_9)
}

/// Naive day/night proxy from the Sun's house, used only when sunrise and
/// sunset cannot be resolved (polar regions).
fn nathonnata_polar_fallback(chart: &Chart, planet: Planet) -> f64 {
    let Some(sun_house) = chart.house_of(Planet::Sun) else { return 0.0 };
    let is_day = (7..=12).contains(&sun_house);
    match planet {
        Planet::Sun | Planet::Jupiter | Planet::Venus => if is_day { 60.0 } else { 0.0 },
        Planet::Moon | Planet::Mars | Planet::Saturn => if is_day { 0.0 } else { 60.0 },
        Planet::Mercury => 60.0,
        _ => 0.0,
    }
}

/// Natonnata Bala: diurnal planets (Sun, Jupiter, Venus) peak at solar noon
/// and fall off toward either horizon; nocturnal planets (Moon, Mars,
/// Saturn) peak at midnight; Mercury always gets full strength. Driven by
/// the actual sunrise/sunset/next-sunrise in `day` — never by the Sun's
/// house. Returns `(virupas, used_polar_fallback)`.
pub fn nathonnata_bala(chart: &Chart, planet: Planet, day: Option<&DayWindow>) -> (f64, bool) {
    if planet == Planet::Mercury {
        return (60.0, false);
    }
    let Some(day) = day else { return (nathonnata_polar_fallback(chart, planet), true) };
    let t = chart.timestamp;

    let (is_day, closeness) = if t >= day.sunrise && t < day.sunset {
        let to_noon = fraction_through(day.sunrise, day.sunset, t);
        (true, 1.0 - (to_noon - 0.5).abs() * 2.0)
    } else {
        let to_midnight = fraction_through(day.sunset, day.next_sunrise, t);
        (false, 1.0 - (to_midnight - 0.5).abs() * 2.0)
    };
    let closeness = closeness.clamp(0.0, 1.0);

    let diurnal = matches!(planet, Planet::Sun | Planet::Jupiter | Planet::Venus);
    let bala = match (diurnal, is_day) {
        (true, true) | (false, false) => closeness * 60.0,
        _ => (1.0 - closeness) * 60.0,
    };
    (bala, false)
}

/// Paksha Bala: benefics gain strength waxing toward full moon, malefics
/// waxing toward new moon; strength is proportional to Sun-Moon elongation.
pub fn paksha_bala(chart: &Chart, planet: Planet) -> f64 {
    let (Some(sun), Some(moon)) =
        (chart.positions.get(&Planet::Sun), chart.positions.get(&Planet::Moon))
    else {
        return 0.0;
    };
    let elongation = angles::normalize_degrees(moon.longitude - sun.longitude);
    let waxing_strength = if elongation <= 180.0 { elongation / 180.0 * 60.0 } else { (360.0 - elongation) / 180.0 * 60.0 };
    if planet.is_benefic() {
        waxing_strength
    } else {
        60.0 - waxing_strength
    }
}

/// Tribhaga Bala: the day is split into three equal parts ruled in order by
/// Mercury, Sun, Saturn; the night into three ruled by Moon, Venus, Mars.
/// Jupiter always receives the full 60 regardless of which third is active.
pub fn tribhaga_bala(chart: &Chart, planet: Planet, day: Option<&DayWindow>) -> f64 {
    if planet == Planet::Jupiter {
        return 60.0;
    }
    let Some(day) = day else { return 0.0 };
    let t = chart.timestamp;
    let lord = if t >= day.sunrise && t < day.sunset {
        let third = (fraction_through(day.sunrise, day.sunset, t) * 3.0).floor() as usize;
        [Planet::Mercury, Planet::Sun, Planet::Saturn][third.min(2)]
    } else if t >= day.sunset && t < day.next_sunrise {
        let third = (fraction_through(day.sunset, day.next_sunrise, t) * 3.0).floor() as usize;
        [Planet::Moon, Planet::Venus, Planet::Mars][third.min(2)]
    } else {
        return 0.0;
    };
    if lord == planet { 60.0 } else { 0.0 }
}

/// Vara Bala: 45 virupas for the weekday's own lord, 0 for every other
/// planet.
pub fn vara_bala(chart: &Chart, planet: Planet) -> f64 {
    if weekday_lord(chart.timestamp.weekday()) == planet {
        45.0
    } else {
        0.0
    }
}

/// Hora Bala: 60 virupas to the lord of the planetary hour active at
/// `chart.timestamp`, found by dividing sunrise..next_sunrise into 24 equal
/// Horas and cycling the Chaldean order starting from the weekday lord.
pub fn hora_bala(chart: &Chart, planet: Planet, day: Option<&DayWindow>) -> f64 {
    let Some(day) = day else { return 0.0 };
    let t = chart.timestamp;
    if t < day.sunrise || t >= day.next_sunrise {
        return 0.0;
    }
    let index = (fraction_through(day.sunrise, day.next_sunrise, t) * 24.0).floor() as usize;
    let start = weekday_lord(day.sunrise.weekday());
    let start_index = CHALDEAN_ORDER.iter().position(|&p| p == start).unwrap();
    let lord = CHALDEAN_ORDER[(start_index + index.min(23)) % 7];
    if lord == planet { 60.0 } else { 0.0 }
}

/// Masa Bala: 30 virupas to the lord of the sign the Sun occupies (the
/// Hindu lunar month's rashi-driven lord, not the Gregorian month).
pub fn masa_bala(chart: &Chart, planet: Planet) -> f64 {
    let Some(sun) = chart.positions.get(&Planet::Sun) else { return 0.0 };
    if tables::sign_lord(sun.sign) == planet {
        30.0
    } else {
        0.0
    }
}

/// Varsha (Abda) Bala: 15 virupas to the year-lord picked by Jupiter's
/// position in the 60-year Samvatsara cycle, reduced across all seven
/// traditional planets rather than a 5-planet shortcut. Jupiter's sign
/// fixes which block of 5 Samvatsaras the year falls in (it transits one
/// sign roughly every 5 of the 60 years); the elapsed-year parity within
/// that block picks the specific Samvatsara before reducing mod 7.
pub fn abda_bala(chart: &Chart, planet: Planet) -> f64 {
    let Some(jupiter) = chart.positions.get(&Planet::Jupiter) else { return 0.0 };
    let year_in_block = chart.timestamp.year().rem_euclid(5) as u32;
    let samvatsara_index = jupiter.sign as u32 * 5 + year_in_block;
    let lord = vedic_core::STRENGTH_PLANETS[(samvatsara_index % 7) as usize];
    if lord == planet {
        15.0
    } else {
        0.0
    }
}

/// Ayana Bala: simplified via the planet's declination proxy (sign-based):
/// planets in the northern six signs (Capricorn..Gemini, the ones with
/// increasing declination toward the summer solstice point) get a bonus.
pub fn ayana_bala(chart: &Chart, planet: Planet) -> f64 {
    let Some(pos) = chart.positions.get(&planet) else { return 0.0 };
    let northern = matches!(pos.sign, 9 | 10 | 11 | 0 | 1 | 2); // Capricorn..Gemini
    if northern {
        30.0
    } else {
        15.0
    }
}

/// Total Kala Bala in virupas for `planet` in `chart`, plus whether the
/// Natonnata component fell back to its polar approximation. `day` should
/// be `None` only when sunrise/sunset genuinely couldn't be resolved.
pub fn kala_bala(chart: &Chart, planet: Planet, day: Option<&DayWindow>) -> (f64, bool) {
    if !planet.is_strength_planet() {
        return (0.0, false);
    }
    let (nathonnata, polar_fallback) = nathonnata_bala(chart, planet, day);
    let total = nathonnata
        + paksha_bala(chart, planet)
        + tribhaga_bala(chart, planet, day)
        + vara_bala(chart, planet)
        + hora_bala(chart, planet, day)
        + masa_bala(chart, planet)
        + abda_bala(chart, planet)
        + ayana_bala(chart, planet);
    (total, polar_fallback)
}
