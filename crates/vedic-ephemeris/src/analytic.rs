//! `AnalyticProvider`: a low-precision, dependency-free [`EphemerisProvider`]
//! built from truncated mean-element series (in the spirit of
//! `engine-panchanga`'s `calculate_solar_position`/`calculate_lunar_position`,
//! generalized to every body). It exists for tests and examples: it is
//! deterministic and fast but is **not** a substitute for Swiss Ephemeris in
//! production — real deployments supply their own [`EphemerisProvider`].

use crate::provider::{
    Atmosphere, EphemerisBody, EphemerisProvider, HouseCusps, PositionFlags, RawPosition,
    RiseSetKind, UtInstant,
};
use chrono::{Datelike, NaiveDate, TimeZone, Timelike, Utc};
use vedic_core::{HouseSystem, Location, SiderealMode};

/// Mean orbital elements at J2000: (L0 mean longitude deg, rate deg/day).
/// Sun/Moon terms follow `engine-panchanga`; outer/inner planets use
/// truncated mean motions (low precision, adequate for deterministic tests).
fn mean_elements(body: EphemerisBody) -> (f64, f64) {
    match body {
        EphemerisBody::Sun => (280.46646, 0.9856474),
        EphemerisBody::Moon => (218.3164477, 13.17639648),
        EphemerisBody::Mercury => (252.25, 4.09233445),
        EphemerisBody::Venus => (181.98, 1.60213034),
        EphemerisBody::Mars => (355.45, 0.52402068),
        EphemerisBody::Jupiter => (34.40, 0.08308529),
        EphemerisBody::Saturn => (50.08, 0.03344414),
        EphemerisBody::Uranus => (314.06, 0.01172834),
        EphemerisBody::Neptune => (304.35, 0.00598103),
        EphemerisBody::Pluto => (238.93, 0.00396),
        EphemerisBody::MeanNode => (125.04452, -0.0529538083),
        EphemerisBody::TrueNode => (125.04452, -0.0529538083),
        EphemerisBody::Chiron => (208.0, 0.01956),
        EphemerisBody::Ceres => (95.99, 0.21411),
        EphemerisBody::Pallas => (173.1, 0.21331),
        EphemerisBody::Juno => (20.6, 0.16699),
        EphemerisBody::Vesta => (309.3, 0.27151),
    }
}

fn julian_day_from(date: NaiveDate, hour: f64) -> f64 {
    let (y, m, d) = (date.year() as f64, date.month() as f64, date.day() as f64);
    let (y, m) = if m <= 2.0 { (y - 1.0, m + 12.0) } else { (y, m) };
    let a = (y / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + d + b - 1524.5 + hour / 24.0
}

fn jd_of(ut: UtInstant) -> f64 {
    let date = ut.date_naive();
    let hour = ut.hour() as f64 + ut.minute() as f64 / 60.0 + ut.second() as f64 / 3600.0;
    julian_day_from(date, hour)
}

fn tropical_longitude(body: EphemerisBody, jd: f64) -> f64 {
    let (l0, rate) = mean_elements(body);
    let days = jd - 2451545.0;
    vedic_core::angles::normalize_degrees(l0 + rate * days)
}

fn speed_deg_per_day(body: EphemerisBody) -> f64 {
    mean_elements(body).1
}

fn lahiri_ayanamsa(jd: f64) -> f64 {
    // Linear approximation anchored at J2000 (23.85 deg), ~50.3"/year precession.
    let years = (jd - 2451545.0) / 365.25;
    23.85 + years * (50.29 / 3600.0)
}

/// A deterministic, analytic reference [`EphemerisProvider`].
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalyticProvider;

impl EphemerisProvider for AnalyticProvider {
    fn ayanamsa(&self, ut: UtInstant, mode: SiderealMode) -> Result<f64, String> {
        let jd = jd_of(ut);
        let base = lahiri_ayanamsa(jd);
        Ok(match mode {
            SiderealMode::Lahiri => base,
            SiderealMode::Raman => base - 0.60,
            SiderealMode::Fagan => base + 0.88,
            SiderealMode::Krishnamurti => base + 0.0095,
            SiderealMode::KrishnamurtiLegacy => base - 0.04,
        })
    }

    fn position(
        &self,
        body: EphemerisBody,
        ut: UtInstant,
        _topo_location: Option<Location>,
        flags: PositionFlags,
    ) -> Result<RawPosition, String> {
        let jd = jd_of(ut);
        let tropical = tropical_longitude(body, jd);
        let longitude = if flags.sidereal {
            vedic_core::angles::normalize_degrees(tropical - lahiri_ayanamsa(jd))
        } else {
            tropical
        };
        let longitude_speed = speed_deg_per_day(body);
        let distance = match body {
            EphemerisBody::Sun => 1.0,
            EphemerisBody::Moon => 0.00257,
            _ => 5.0,
        };
        Ok(RawPosition { longitude, latitude: 0.0, distance, longitude_speed })
    }

    fn houses(
        &self,
        ut: UtInstant,
        location: Location,
        _house_system: HouseSystem,
    ) -> Result<HouseCusps, String> {
        // Low-precision ascendant from local sidereal time; adequate for a
        // deterministic test fixture, not for production house placement.
        let jd = jd_of(ut);
        let t = (jd - 2451545.0) / 36525.0;
        let gmst = vedic_core::angles::normalize_degrees(
            280.46061837 + 360.98564736629 * (jd - 2451545.0) + 0.000387933 * t * t,
        );
        let lst = vedic_core::angles::normalize_degrees(gmst + location.longitude);
        let ascendant = vedic_core::angles::normalize_degrees(lst + 90.0 - location.latitude * 0.2);
        let mut cusps = [0.0; 12];
        for (i, c) in cusps.iter_mut().enumerate() {
            *c = vedic_core::angles::normalize_degrees(ascendant + i as f64 * 30.0);
        }
        Ok(HouseCusps { cusps, ascendant, midheaven: vedic_core::angles::normalize_degrees(lst) })
    }

    fn rise_set(
        &self,
        body: EphemerisBody,
        date: NaiveDate,
        location: Location,
        kind: RiseSetKind,
        _atmosphere: Option<Atmosphere>,
    ) -> Result<Option<UtInstant>, String> {
        let (sunrise, sunset) = self.sunrise_sunset(date, location)?;
        Ok(match (body, kind) {
            (EphemerisBody::Sun, RiseSetKind::Rise) => sunrise,
            (EphemerisBody::Sun, RiseSetKind::Set) => sunset,
            _ => sunrise,
        })
    }

    fn sunrise_sunset(
        &self,
        date: NaiveDate,
        location: Location,
    ) -> Result<(Option<UtInstant>, Option<UtInstant>), String> {
        let jd_noon = julian_day_from(date, 12.0);
        let days = jd_noon - 2451545.0;
        let solar_l = vedic_core::angles::normalize_degrees(280.46646 + 0.9856474 * days);
        let decl = (23.44_f64.to_radians().sin() * solar_l.to_radians().sin()).asin();
        let lat_rad = location.latitude.to_radians();
        let cos_h = (-0.0145_f64 - lat_rad.tan() * decl.tan()).clamp(-1.0, 1.0);
        if cos_h.abs() >= 1.0 {
            return Ok((None, None)); // polar day/night
        }
        let hour_angle = cos_h.acos().to_degrees();
        let noon_utc_hour = 12.0 - location.longitude / 15.0;
        let sunrise_hour = noon_utc_hour - hour_angle / 15.0;
        let sunset_hour = noon_utc_hour + hour_angle / 15.0;
        let to_instant = |hour: f64| -> Option<UtInstant> {
            let h = ((hour % 24.0) + 24.0) % 24.0;
            let naive = date.and_hms_opt(h as u32, ((h.fract()) * 60.0) as u32, 0)?;
            Some(Utc.from_utc_datetime(&naive))
        };
        Ok((to_instant(sunrise_hour), to_instant(sunset_hour)))
    }

    fn julian_day(&self, date: NaiveDate, time_of_day_hours: f64) -> f64 {
        julian_day_from(date, time_of_day_hours)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ayanamsa_is_reasonable_near_2000() {
        let ut = Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap();
        let value = AnalyticProvider.ayanamsa(ut, SiderealMode::Lahiri).unwrap();
        assert!((23.0..25.0).contains(&value), "ayanamsa = {value}");
    }

    #[test]
    fn sidereal_position_in_range() {
        let ut = Utc.with_ymd_and_hms(1990, 5, 15, 9, 0, 0).unwrap();
        let pos = AnalyticProvider
            .position(
                EphemerisBody::Sun,
                ut,
                None,
                PositionFlags { topocentric: false, sidereal: true },
            )
            .unwrap();
        assert!((0.0..360.0).contains(&pos.longitude));
    }

    #[test]
    fn sunrise_before_sunset() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let loc = Location::new(28.6139, 77.2090, 0.0);
        let (rise, set) = AnalyticProvider.sunrise_sunset(date, loc).unwrap();
        assert!(rise.is_some() && set.is_some());
        assert!(rise.unwrap() < set.unwrap());
    }

    #[test]
    fn polar_summer_has_no_sunset() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 21).unwrap();
        let loc = Location::new(78.0, 15.0, 0.0); // Svalbard, midnight sun
        let (rise, set) = AnalyticProvider.sunrise_sunset(date, loc).unwrap();
        assert!(rise.is_none() && set.is_none());
    }
}
