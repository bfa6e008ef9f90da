//! Arudha Pada and Upapada (spec §4.11): the sign that mirrors how far a
//! house's lord has risen from that house, with the classical exception
//! that an Arudha never coincides with its own house or the 7th from it.

use vedic_core::{tables, Chart, VedicError, VedicResult};

/// House distance counted the classical way: the same sign is 1, the next
/// sign 2, wrapping after 12.
fn house_distance(from_sign: u8, to_sign: u8) -> u8 {
    (((to_sign as i16 - from_sign as i16).rem_euclid(12)) as u8) + 1
}

/// The Arudha Pada of `house` (1..12, Whole-Sign house numbering from the
/// natal ascendant).
pub fn arudha_pada(chart: &Chart, house: u8) -> VedicResult<u8> {
    let house = house.clamp(1, 12);
    let asc_sign = chart.ascendant_sign();
    let house_sign = (asc_sign + house - 1) % 12;
    let lord = tables::sign_lord(house_sign);
    let lord_sign = chart
        .positions
        .get(&lord)
        .map(|p| p.sign)
        .ok_or_else(|| VedicError::InvalidInput(format!("{lord} missing from chart for Arudha of house {house}")))?;

    let d = house_distance(house_sign, lord_sign);
    let mut arudha_sign = (lord_sign + d - 1) % 12;

    if arudha_sign == house_sign {
        arudha_sign = (arudha_sign + 10) % 12;
    } else if arudha_sign == (house_sign + 6) % 12 {
        arudha_sign = (arudha_sign + 4) % 12;
    }
    Ok(arudha_sign)
}

/// Upapada (UL): the Arudha Pada of the 12th house.
pub fn upapada(chart: &Chart) -> VedicResult<u8> {
    arudha_pada(chart, 12)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use vedic_chart::{build_chart, CalculationFlags};
    use vedic_core::Location;
    use vedic_ephemeris::{AnalyticProvider, EphemerisHandle};

    fn sample_chart() -> Chart {
        let handle = EphemerisHandle::new(Box::new(AnalyticProvider));
        let ut = chrono::Utc.with_ymd_and_hms(1990, 5, 15, 9, 0, 0).unwrap();
        let loc = Location::new(28.6139, 77.2090, 0.0);
        build_chart(&handle, ut, loc, CalculationFlags::default()).unwrap()
    }

    #[test]
    fn arudha_never_coincides_with_its_own_house_or_the_seventh() {
        let chart = sample_chart();
        let asc_sign = chart.ascendant_sign();
        for house in 1..=12u8 {
            let arudha = arudha_pada(&chart, house).unwrap();
            let house_sign = (asc_sign + house - 1) % 12;
            assert_ne!(arudha, house_sign, "Arudha of house {house} coincided with its own sign");
            assert_ne!(arudha, (house_sign + 6) % 12, "Arudha of house {house} fell 7th from its own sign");
        }
    }

    #[test]
    fn upapada_is_the_arudha_of_the_twelfth_house() {
        let chart = sample_chart();
        assert_eq!(upapada(&chart).unwrap(), arudha_pada(&chart, 12).unwrap());
    }
}
