//! The Ephemeris Provider boundary (spec §6): the trait every derivation
//! service calls through, the single locking handle that serializes access
//! to a process-wide-stateful engine (spec §5), and an analytic reference
//! implementation for tests.

pub mod analytic;
pub mod handle;
pub mod provider;
pub mod search;

pub use analytic::AnalyticProvider;
pub use handle::{CancelToken, EphemerisHandle};
pub use provider::{
    node_body, Atmosphere, EphemerisBody, EphemerisProvider, HouseCusps, PositionFlags,
    RawPosition, RiseSetKind, UtInstant,
};
pub use search::{find_crossing, MAX_SEARCH_ITERATIONS};
