//! Muhurta Engine (spec §4.10): Hora, Choghadiya, the three inauspicious
//! slots, and Abhijit/Brahma muhurta, assembled for one calendar day given
//! its sunrise/sunset/next-sunrise instants.

pub mod choghadiya;
pub mod hora;
pub mod inauspicious;
pub mod special_muhurta;

pub use choghadiya::{day_choghadiya, night_choghadiya, ChoghadiyaPeriod, ChoghadiyaType};
pub use hora::{hora_at, horas, Hora, CHALDEAN_ORDER};
pub use inauspicious::{gulikakalam, rahukalam, yamagandam, InauspiciousSlot};
pub use special_muhurta::{abhijit_muhurta, brahma_muhurta, MuhurtaWindow};

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use vedic_core::Location;

/// The full set of muhurta-engine results for one civil day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Muhurta {
    pub location: Location,
    pub sunrise: DateTime<Utc>,
    pub sunset: DateTime<Utc>,
    pub next_sunrise: DateTime<Utc>,
    pub horas: Vec<Hora>,
    pub day_choghadiya: Vec<ChoghadiyaPeriod>,
    pub night_choghadiya: Vec<ChoghadiyaPeriod>,
    pub rahukalam: InauspiciousSlot,
    pub yamagandam: InauspiciousSlot,
    pub gulikakalam: InauspiciousSlot,
    pub abhijit_muhurta: MuhurtaWindow,
    pub brahma_muhurta: MuhurtaWindow,
}

/// Assembles every muhurta-engine result for the day starting at `sunrise`
/// and ending at `next_sunrise`, with `sunset` marking the day/night split.
pub fn muhurta(
    location: Location,
    sunrise: DateTime<Utc>,
    sunset: DateTime<Utc>,
    next_sunrise: DateTime<Utc>,
) -> Muhurta {
    let weekday = sunrise.weekday();
    Muhurta {
        location,
        sunrise,
        sunset,
        next_sunrise,
        horas: horas(sunrise, next_sunrise),
        day_choghadiya: day_choghadiya(weekday, sunrise, sunset),
        night_choghadiya: night_choghadiya(weekday, sunset, next_sunrise),
        rahukalam: rahukalam(weekday, sunrise, sunset),
        yamagandam: yamagandam(weekday, sunrise, sunset),
        gulikakalam: gulikakalam(weekday, sunrise, sunset),
        abhijit_muhurta: abhijit_muhurta(sunrise, sunset),
        brahma_muhurta: brahma_muhurta(sunset, next_sunrise),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn muhurta_assembles_every_component_for_a_full_day() {
        let sunrise = Utc.with_ymd_and_hms(2024, 1, 8, 6, 0, 0).unwrap();
        let sunset = Utc.with_ymd_and_hms(2024, 1, 8, 18, 0, 0).unwrap();
        let next_sunrise = Utc.with_ymd_and_hms(2024, 1, 9, 6, 0, 0).unwrap();
        let loc = Location::new(28.6139, 77.2090, 0.0);
        let m = muhurta(loc, sunrise, sunset, next_sunrise);
        assert_eq!(m.horas.len(), 24);
        assert_eq!(m.day_choghadiya.len(), 8);
        assert_eq!(m.night_choghadiya.len(), 8);
    }
}
