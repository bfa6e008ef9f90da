//! Special transit windows (spec §4.9): Sade Sati, Dhaiya, Panchak. The
//! instantaneous phase/classification reads straight off a `TransitPosition`;
//! the start/end *dates* of a Sade Sati window require bracketed sign-entry
//! searches anchored at the rising and setting boundaries.

use serde::{Deserialize, Serialize};
use vedic_core::{angles, NodeType, Planet, SiderealMode, VedicError, VedicResult};
use vedic_ephemeris::{CancelToken, EphemerisHandle, UtInstant};

use crate::events::next_sign_entry;
use crate::positions::house_distance;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SadeSatiPhase {
    /// Saturn in the 12th from Moon.
    Rising,
    /// Saturn in the 1st from Moon (Moon's own sign).
    Peak,
    /// Saturn in the 2nd from Moon.
    Setting,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SadeSati {
    pub is_active: bool,
    pub phase: Option<SadeSatiPhase>,
    pub transited_house: Option<u8>,
}

/// Classifies a single transit-Saturn sign against the natal Moon's sign.
/// Counted the classical way: the Moon's own sign is house 1, so the
/// "12th from Moon" is the sign immediately before it and "2nd from Moon"
/// the sign immediately after.
pub fn sade_sati_status(natal_moon_sign: u8, transit_saturn_sign: u8) -> SadeSati {
    let house = house_distance(natal_moon_sign, transit_saturn_sign);
    let phase = match house {
        12 => Some(SadeSatiPhase::Rising),
        1 => Some(SadeSatiPhase::Peak),
        2 => Some(SadeSatiPhase::Setting),
        _ => None,
    };
    SadeSati { is_active: phase.is_some(), phase, transited_house: phase.map(|_| house) }
}

/// Finds the bracketing dates of the Sade Sati window containing (or next
/// after) `near`: the first ingress into the 12th-from-Moon sign and the
/// egress from the 2nd-from-Moon sign (i.e. the entry into the 3rd).
#[tracing::instrument(skip(handle, cancel))]
pub fn sade_sati_window(
    handle: &EphemerisHandle,
    natal_moon_sign: u8,
    near: UtInstant,
    mode: SiderealMode,
    node_type: NodeType,
    cancel: &CancelToken,
) -> VedicResult<(UtInstant, UtInstant)> {
    let rising_sign = (natal_moon_sign + 11) % 12;
    let setting_exit_sign = (natal_moon_sign + 2) % 12;
    let start = next_sign_entry(handle, Planet::Saturn, near, rising_sign, mode, node_type, cancel)?;
    let end = next_sign_entry(handle, Planet::Saturn, start, setting_exit_sign, mode, node_type, cancel)?;
    Ok((start, end))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DhaiyaKind {
    Fourth,
    /// Saturn 8th from Moon — the especially harsh Ashtama Shani variant.
    AshtamaShani,
}

pub fn dhaiya_status(natal_moon_sign: u8, transit_saturn_sign: u8) -> Option<DhaiyaKind> {
    match house_distance(natal_moon_sign, transit_saturn_sign) {
        4 => Some(DhaiyaKind::Fourth),
        8 => Some(DhaiyaKind::AshtamaShani),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Panchak {
    pub is_active: bool,
    pub days_remaining: Option<f64>,
}

/// Panchak is active while the Moon occupies the last 60° of the zodiac
/// (Dhanishta's 3rd quarter through Revati). `moon_speed_deg_per_day` comes
/// straight off the ephemeris call's `longitude_speed`.
pub fn panchak_status(moon_longitude: f64, moon_speed_deg_per_day: f64) -> VedicResult<Panchak> {
    let l = angles::normalize_degrees(moon_longitude);
    if !(300.0..360.0).contains(&l) {
        return Ok(Panchak { is_active: false, days_remaining: None });
    }
    if moon_speed_deg_per_day <= 0.0 {
        return Err(VedicError::InvalidInput("Moon's longitude speed must be positive to project Panchak exit".into()));
    }
    let degrees_remaining = 360.0 - l;
    Ok(Panchak { is_active: true, days_remaining: Some(degrees_remaining / moon_speed_deg_per_day) })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sade_sati_peak_is_saturn_in_moons_own_sign() {
        let status = sade_sati_status(8, 8);
        assert!(status.is_active);
        assert_eq!(status.phase, Some(SadeSatiPhase::Peak));
        assert_eq!(status.transited_house, Some(1));
    }

    #[test]
    fn sade_sati_inactive_outside_the_three_houses() {
        let status = sade_sati_status(8, 3);
        assert!(!status.is_active);
        assert_eq!(status.phase, None);
    }

    #[test]
    fn dhaiya_flags_ashtama_shani_at_the_eighth_house() {
        assert_eq!(dhaiya_status(0, 7), Some(DhaiyaKind::AshtamaShani));
        assert_eq!(dhaiya_status(0, 3), Some(DhaiyaKind::Fourth));
        assert_eq!(dhaiya_status(0, 5), None);
    }

    #[test]
    fn panchak_projects_days_remaining_from_moon_speed() {
        let panchak = panchak_status(350.0, 13.0).unwrap();
        assert!(panchak.is_active);
        assert!((panchak.days_remaining.unwrap() - 10.0 / 13.0).abs() < 1e-9);
    }

    #[test]
    fn panchak_inactive_outside_the_last_sixty_degrees() {
        let panchak = panchak_status(100.0, 13.0).unwrap();
        assert!(!panchak.is_active);
        assert!(panchak.days_remaining.is_none());
    }
}
