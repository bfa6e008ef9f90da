//! Sanskrit name tables for the five limbs (spec §4.7).

/// Tithi names, 0-indexed within a paksha (0 = Pratipada .. 14 = Purnima
/// or Amavasya depending on paksha).
pub const TITHI_NAMES: [&str; 15] = [
    "Pratipada",
    "Dwitiya",
    "Tritiya",
    "Chaturthi",
    "Panchami",
    "Shashthi",
    "Saptami",
    "Ashtami",
    "Navami",
    "Dashami",
    "Ekadashi",
    "Dwadashi",
    "Trayodashi",
    "Chaturdashi",
    "Purnima-or-Amavasya",
];

pub const YOGA_NAMES: [&str; 27] = [
    "Vishkambha",
    "Priti",
    "Ayushman",
    "Saubhagya",
    "Shobhana",
    "Atiganda",
    "Sukarma",
    "Dhriti",
    "Shula",
    "Ganda",
    "Vriddhi",
    "Dhruva",
    "Vyaghata",
    "Harshana",
    "Vajra",
    "Siddhi",
    "Vyatipata",
    "Variyan",
    "Parigha",
    "Shiva",
    "Siddha",
    "Sadhya",
    "Shubha",
    "Shukla",
    "Brahma",
    "Indra",
    "Vaidhriti",
];

/// The seven movable (chara) karanas, repeated eight times across a month.
pub const MOVABLE_KARANA_NAMES: [&str; 7] =
    ["Bava", "Balava", "Kaulava", "Taitila", "Garaja", "Vanija", "Vishti"];

/// Resolves a karana number (1..60, spec §4.7) to its name: Kimstughna
/// opens the month, Shakuni/Chatushpada/Naga close it, and the seven
/// movable karanas cycle through the 56 half-tithis in between.
pub fn karana_name(karana_number: u8) -> &'static str {
    match karana_number {
        1 => "Kimstughna",
        58 => "Shakuni",
        59 => "Chatushpada",
        60 => "Naga",
        n if (2..=57).contains(&n) => MOVABLE_KARANA_NAMES[(n as usize - 2) % 7],
        _ => "Kimstughna",
    }
}

pub const VARA_NAMES: [&str; 7] =
    ["Ravivara", "Somavara", "Mangalavara", "Budhavara", "Guruvara", "Shukravara", "Shanivara"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn karana_boundaries_are_the_fixed_karanas() {
        assert_eq!(karana_name(1), "Kimstughna");
        assert_eq!(karana_name(58), "Shakuni");
        assert_eq!(karana_name(59), "Chatushpada");
        assert_eq!(karana_name(60), "Naga");
    }

    #[test]
    fn movable_karanas_cycle_every_seven() {
        assert_eq!(karana_name(2), "Bava");
        assert_eq!(karana_name(9), "Bava");
        assert_eq!(karana_name(57), "Vishti");
    }
}
