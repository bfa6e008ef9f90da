//! Unified error kinds for the Vedic computation core (spec §7).

use thiserror::Error;

/// Errors produced anywhere in the core. Derivation services propagate
/// upstream errors verbatim, wrapping with operation context via
/// [`VedicError::context`].
#[derive(Debug, Error)]
pub enum VedicError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("ephemeris unavailable: {0}")]
    EphemerisUnavailable(String),

    #[error("numeric search failed to converge after {iterations} iterations (window {window_deg} deg)")]
    NumericFailure { iterations: u32, window_deg: f64 },

    #[error("unsupported house system: {0}")]
    UnsupportedHouseSystem(String),

    #[error("unsupported division: {0}")]
    UnsupportedDivision(String),

    #[error("operation cancelled")]
    Cancelled,

    #[error("during {context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<VedicError>,
    },
}

pub type VedicResult<T> = Result<T, VedicError>;

impl VedicError {
    /// Wrap this error with operation context, e.g. "Shadbala.Kala for Mars".
    pub fn context(self, context: impl Into<String>) -> VedicError {
        VedicError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// True if the root cause is [`VedicError::Cancelled`].
    pub fn is_cancelled(&self) -> bool {
        match self {
            VedicError::Cancelled => true,
            VedicError::WithContext { source, .. } => source.is_cancelled(),
            _ => false,
        }
    }
}

/// Extension trait to attach operation context to any `Result<_, VedicError>`.
pub trait ResultContextExt<T> {
    fn with_context(self, context: impl Into<String>) -> VedicResult<T>;
}

impl<T> ResultContextExt<T> for VedicResult<T> {
    fn with_context(self, context: impl Into<String>) -> VedicResult<T> {
        self.map_err(|e| e.context(context))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_wraps_and_displays() {
        let err = VedicError::InvalidInput("bad latitude".into()).context("Chart.build");
        assert_eq!(
            err.to_string(),
            "during Chart.build: invalid input: bad latitude"
        );
    }

    #[test]
    fn is_cancelled_sees_through_context() {
        let err = VedicError::Cancelled.context("Transits.scan");
        assert!(err.is_cancelled());
        assert!(!VedicError::InvalidInput("x".into()).is_cancelled());
    }
}
