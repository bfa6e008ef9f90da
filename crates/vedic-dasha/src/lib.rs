//! Dasha period timelines (spec §4.8): Vimshottari, Yogini, and Chara, all
//! sharing one recursive [`DashaPeriod`] and one query-by-date entry point.

pub mod chara;
pub mod model;
pub mod vimshottari;
pub mod yogini;

pub use chara::chara_periods;
pub use model::{active_chain, years_to_duration, DashaPeriod};
pub use vimshottari::{vimshottari_periods, YearLength};
pub use yogini::{yogini_periods, YOGINI_ORDER, YOGINI_YEARS};
