//! Chart Builder, Divisional Chart Mapper and Aspect Engine (spec §4.1-4.3):
//! turns ephemeris output into a [`vedic_core::Chart`], projects it through
//! the classical vargas, and computes Graha/Rashi Drishti.

pub mod aspects;
pub mod builder;
pub mod vargas;

pub use aspects::{graha_drishti, rashi_aspects, rashi_drishti, sign_aspects, GrahaDrishti};
pub use builder::{build_chart, CalculationFlags};
pub use vargas::{divisional_chart, vimshottari_bucket, D249Placement, DivisionalChartType};
