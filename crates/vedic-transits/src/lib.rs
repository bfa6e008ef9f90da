//! Transit Engine (spec §4.9): current positions against the natal houses,
//! bracketed sign-entry search, and the special transit windows (Sade
//! Sati, Dhaiya, Panchak).

pub mod events;
pub mod positions;
pub mod special;

pub use events::{default_accuracy, default_scan_step, next_sign_entry};
pub use positions::{current_positions, house_distance, TransitPosition};
pub use special::{dhaiya_status, panchak_status, sade_sati_status, sade_sati_window, DhaiyaKind, Panchak, SadeSati, SadeSatiPhase};
