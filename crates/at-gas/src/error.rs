//! Gas parameter errors.

use at_core::{AtError, ErrorKind};
use thiserror::Error;

/// Result type for gas parameter operations.
pub type GasResult<T> = Result<T, GasError>;

/// Errors raised while building or evaluating gas parameters.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GasError {
    /// Invalid input while constructing parameters or compositions.
    #[error("Initialization error: {what}")]
    Init { what: String },

    /// Numerical failure while evaluating a state.
    #[error("Calculation error: {what}")]
    Calculation { what: String },

    /// State outside the envelope a correlation is defined on.
    #[error("Value out of range for {what}: {value}")]
    OutOfRange { what: &'static str, value: f64 },

    #[error("Convergence failed for {what} after {iterations} iterations")]
    ConvergenceFailed {
        what: &'static str,
        iterations: usize,
    },

    /// Failure of a mixture-level operation, with the underlying cause.
    #[error("Gas mixture error ({context}): {source}")]
    GasMix {
        context: &'static str,
        #[source]
        source: Box<GasError>,
    },

    #[error(transparent)]
    Core(#[from] AtError),
}

impl GasError {
    pub fn init(what: impl Into<String>) -> Self {
        GasError::Init { what: what.into() }
    }

    pub fn calculation(what: impl Into<String>) -> Self {
        GasError::Calculation { what: what.into() }
    }

    pub fn mix(context: &'static str, source: GasError) -> Self {
        GasError::GasMix {
            context,
            source: Box::new(source),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            GasError::Init { .. } => ErrorKind::Initialization,
            GasError::Calculation { .. }
            | GasError::OutOfRange { .. }
            | GasError::ConvergenceFailed { .. } => ErrorKind::Calculation,
            GasError::GasMix { .. } => ErrorKind::GasMix,
            GasError::Core(err) => err.kind(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = GasError::init("critical pressure must be positive");
        assert!(err.to_string().contains("critical pressure"));

        let err = GasError::ConvergenceFailed {
            what: "reduced density",
            iterations: 3000,
        };
        assert!(err.to_string().contains("3000"));
    }

    #[test]
    fn mix_error_keeps_source() {
        use std::error::Error;

        let err = GasError::mix("mixture averaging", GasError::init("empty mixture"));
        assert_eq!(err.kind(), ErrorKind::GasMix);
        assert!(err.to_string().contains("empty mixture"));
        assert!(err.source().is_some());
    }

    #[test]
    fn core_error_kind_passes_through() {
        let err: GasError = AtError::NonFinite {
            what: "volume",
            value: f64::NAN,
        }
        .into();
        assert_eq!(err.kind(), ErrorKind::Calculation);
    }
}
