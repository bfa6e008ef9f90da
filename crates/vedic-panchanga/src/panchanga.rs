//! The Panchanga computation itself (spec §4.7): Tithi, Nakshatra, Yoga,
//! Karana and Vara from the Sun and Moon's sidereal longitudes, plus the
//! sunrise-boundaried weekday.

use chrono::{Datelike, Weekday};
use serde::{Deserialize, Serialize};
use vedic_core::{angles, tables, Location, Planet, SiderealMode, VedicResult};
use vedic_ephemeris::{EphemerisBody, EphemerisHandle, PositionFlags, UtInstant};

use crate::names::{karana_name, VARA_NAMES, YOGA_NAMES};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Paksha {
    Shukla,
    Krishna,
}

/// The five limbs of Vedic time for one moment and place (spec §3 glossary).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Panchanga {
    /// 1..30, continuous across both pakshas.
    pub tithi: u8,
    pub paksha: Paksha,
    pub tithi_name: String,
    /// Continuous tithi value before flooring, for junction search callers.
    pub tithi_value: f64,

    pub nakshatra: u8,
    pub nakshatra_name: &'static str,
    pub pada: u8,

    /// 1..27.
    pub yoga: u8,
    pub yoga_name: &'static str,

    /// 1..60.
    pub karana: u8,
    pub karana_name: &'static str,

    pub vara: Planet,
    pub vara_name: &'static str,

    pub sunrise: Option<UtInstant>,
    pub sunset: Option<UtInstant>,
}

fn sidereal_longitude(
    handle: &EphemerisHandle,
    body: EphemerisBody,
    ut: UtInstant,
    mode: SiderealMode,
) -> VedicResult<f64> {
    let raw = handle.position(body, ut, mode, None, PositionFlags { topocentric: false, sidereal: true })?;
    Ok(angles::normalize_degrees(raw.longitude))
}

/// Sun and Moon's sidereal longitudes at `ut`, the two inputs every limb of
/// the Panchanga is derived from.
pub fn luminary_longitudes(
    handle: &EphemerisHandle,
    ut: UtInstant,
    mode: SiderealMode,
) -> VedicResult<(f64, f64)> {
    let sun = sidereal_longitude(handle, EphemerisBody::Sun, ut, mode)?;
    let moon = sidereal_longitude(handle, EphemerisBody::Moon, ut, mode)?;
    Ok((sun, moon))
}

/// Continuous Tithi value (spec §4.7): `(moon - sun) mod 360 / 12`, in
/// `[0, 30)`.
pub fn tithi_value(sun_longitude: f64, moon_longitude: f64) -> f64 {
    angles::normalize_degrees(moon_longitude - sun_longitude) / 12.0
}

/// Continuous Yoga value (spec §4.7): `(sun + moon) mod 360 / 13°20'`.
pub fn yoga_value(sun_longitude: f64, moon_longitude: f64) -> f64 {
    angles::normalize_degrees(sun_longitude + moon_longitude) / angles::NAKSHATRA_SPAN
}

fn weekday_lord(weekday: Weekday) -> Planet {
    match weekday {
        Weekday::Sun => Planet::Sun,
        Weekday::Mon => Planet::Moon,
        Weekday::Tue => Planet::Mars,
        Weekday::Wed => Planet::Mercury,
        Weekday::Thu => Planet::Jupiter,
        Weekday::Fri => Planet::Venus,
        Weekday::Sat => Planet::Saturn,
    }
}

/// Computes the full Panchanga for `ut`/`location` (spec §4.7). Vara is
/// resolved at *sunrise*: a birth between midnight and sunrise belongs to
/// the previous day's weekday lord.
#[tracing::instrument(skip(handle), fields(location = ?location))]
pub fn panchanga(
    handle: &EphemerisHandle,
    ut: UtInstant,
    location: Location,
    ayanamsa_mode: SiderealMode,
) -> VedicResult<Panchanga> {
    location.validate()?;
    let (sun_longitude, moon_longitude) = luminary_longitudes(handle, ut, ayanamsa_mode)?;

    let tithi_val = tithi_value(sun_longitude, moon_longitude);
    let tithi = (tithi_val.floor() as u8).min(29) + 1;
    let paksha = if tithi <= 15 { Paksha::Shukla } else { Paksha::Krishna };
    let tithi_within_paksha = ((tithi - 1) % 15) as usize;
    let tithi_name = if tithi == 15 {
        "Purnima".to_string()
    } else if tithi == 30 {
        "Amavasya".to_string()
    } else {
        crate::names::TITHI_NAMES[tithi_within_paksha].to_string()
    };

    let nakshatra = angles::nakshatra_index(moon_longitude);
    let pada = angles::pada(moon_longitude);

    let yoga_val = yoga_value(sun_longitude, moon_longitude);
    let yoga = (yoga_val.floor() as u8).min(26) + 1;

    let karana = ((tithi_val * 2.0).floor() as u8).min(59) + 1;

    let date = ut.date_naive();
    let (sunrise, sunset) = handle.sunrise_sunset(ayanamsa_mode, date, location)?;
    let weekday_anchor = match sunrise {
        Some(sunrise_instant) if ut < sunrise_instant => ut.date_naive().pred_opt().unwrap_or(date),
        _ => date,
    };
    let vara = weekday_lord(weekday_anchor.weekday());

    Ok(Panchanga {
        tithi,
        paksha,
        tithi_name,
        tithi_value: tithi_val,
        nakshatra,
        nakshatra_name: tables::nakshatra_name(nakshatra),
        pada,
        yoga,
        yoga_name: YOGA_NAMES[(yoga - 1) as usize],
        karana,
        karana_name: karana_name(karana),
        vara,
        vara_name: VARA_NAMES[weekday_anchor.weekday().num_days_from_sunday() as usize],
        sunrise,
        sunset,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use vedic_ephemeris::AnalyticProvider;

    fn handle() -> EphemerisHandle {
        EphemerisHandle::new(Box::new(AnalyticProvider))
    }

    #[test]
    fn tithi_value_stays_in_range() {
        assert!((0.0..30.0).contains(&tithi_value(10.0, 40.0)));
        assert!((0.0..30.0).contains(&tithi_value(350.0, 2.0)));
    }

    #[test]
    fn full_moon_tithi_is_purnima() {
        let v = tithi_value(0.0, 178.0);
        let tithi = (v.floor() as u8).min(29) + 1;
        assert_eq!(tithi, 15);
    }

    #[test]
    fn panchanga_computes_without_ephemeris_errors() {
        let h = handle();
        let ut = chrono::Utc.with_ymd_and_hms(2024, 3, 25, 6, 0, 0).unwrap();
        let loc = Location::new(28.6139, 77.2090, 0.0);
        let result = panchanga(&h, ut, loc, SiderealMode::Lahiri).unwrap();
        assert!((1..=30).contains(&result.tithi));
        assert!((1..=27).contains(&result.yoga));
        assert!((1..=60).contains(&result.karana));
    }

    #[test]
    fn karana_is_twice_the_tithi_cycle() {
        let h = handle();
        let ut = chrono::Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let loc = Location::new(0.0, 0.0, 0.0);
        let result = panchanga(&h, ut, loc, SiderealMode::Lahiri).unwrap();
        let expected_karana = ((result.tithi_value * 2.0).floor() as u8).min(59) + 1;
        assert_eq!(result.karana, expected_karana);
    }
}
