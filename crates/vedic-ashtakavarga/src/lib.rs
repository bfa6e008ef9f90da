//! Ashtakavarga (spec §4.4): Bhinnashtakavarga/Sarvashtakavarga, the
//! Trikona/Ekadhipati Shodhana reductions, Pinda, and transit benefic-point
//! analysis.

pub mod bav;
pub mod pinda;
pub mod shodhana;
pub mod tables;
pub mod transit;

pub use bav::{bhinnashtakavarga, sarvashtakavarga, BinduTable};
pub use pinda::pinda;
pub use shodhana::{apply_shodhana, ekadhipati_shodhana, trikona_shodhana};
pub use tables::{Contributor, TARGETS};
pub use transit::{transit_analysis, transit_strength_table, TransitAnalysis};
