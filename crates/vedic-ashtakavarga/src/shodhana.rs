//! Trikona and Ekadhipati Shodhana (spec §4.4): the two classical
//! reductions applied to a Bhinnashtakavarga before it is used for
//! predictive strength comparisons.

use crate::bav::BinduTable;

/// The four trine (Trikona) groups: signs 1st/5th/9th from each other.
const TRIKONA_GROUPS: [[usize; 3]; 4] =
    [[0, 4, 8], [1, 5, 9], [2, 6, 10], [3, 7, 11]];

/// Sign pairs ruled by a single lord (Mars/Mercury/Jupiter/Venus/Saturn own
/// two signs each; Sun and Moon own one each and are never paired).
const EKADHIPATI_PAIRS: [(usize, usize); 5] =
    [(0, 7), (2, 5), (8, 11), (1, 6), (9, 10)];

/// Trikona Shodhana: within each trine group, subtract the group's minimum
/// bindu count from every sign in the group, leaving only each sign's
/// surplus over the trine's weakest member.
pub fn trikona_shodhana(bav: &BinduTable) -> BinduTable {
    let mut reduced = *bav;
    for group in TRIKONA_GROUPS {
        let min = group.iter().map(|&i| reduced[i]).min().unwrap();
        for i in group {
            reduced[i] -= min;
        }
    }
    reduced
}

/// Ekadhipati Shodhana: for each single-lordship sign pair, subtract the
/// pair's minimum from both signs (the weaker of the two drops to zero).
/// Applied after [`trikona_shodhana`].
pub fn ekadhipati_shodhana(bav: &BinduTable) -> BinduTable {
    let mut reduced = *bav;
    for (a, b) in EKADHIPATI_PAIRS {
        let min = reduced[a].min(reduced[b]);
        reduced[a] -= min;
        reduced[b] -= min;
    }
    reduced
}

/// Applies Trikona Shodhana followed by Ekadhipati Shodhana, the standard
/// reduction order.
pub fn apply_shodhana(bav: &BinduTable) -> BinduTable {
    ekadhipati_shodhana(&trikona_shodhana(bav))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trikona_shodhana_zeroes_the_weakest_sign_in_each_trine() {
        let mut bav = [0u32; 12];
        bav[0] = 5;
        bav[4] = 3;
        bav[8] = 7;
        let reduced = trikona_shodhana(&bav);
        assert_eq!(reduced[4], 0); // was the minimum of the trine
        assert_eq!(reduced[0], 2);
        assert_eq!(reduced[8], 4);
    }

    #[test]
    fn ekadhipati_shodhana_zeroes_the_weaker_of_a_lordship_pair() {
        let mut bav = [0u32; 12];
        bav[0] = 4; // Aries
        bav[7] = 6; // Scorpio, both ruled by Mars
        let reduced = ekadhipati_shodhana(&bav);
        assert_eq!(reduced[0], 0);
        assert_eq!(reduced[7], 2);
    }

    #[test]
    fn shodhana_never_increases_a_signs_bindu_count() {
        let mut bav = [0u32; 12];
        for (i, b) in bav.iter_mut().enumerate() {
            *b = (i as u32 * 2) % 7;
        }
        let reduced = apply_shodhana(&bav);
        for i in 0..12 {
            assert!(reduced[i] <= bav[i]);
        }
    }
}
