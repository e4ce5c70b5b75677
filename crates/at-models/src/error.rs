//! Model errors.

use at_core::{AtError, ErrorKind};
use at_gas::GasError;
use thiserror::Error;

/// Result type for model operations.
pub type ModelResult<T> = Result<T, ModelError>;

/// Errors raised by the EOS models, the phase diagram and the session.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    /// Model construction rejected its input.
    #[error("Initialization error: {what}")]
    Init { what: String },

    /// A state could not be computed.
    #[error("Calculation error: {what}")]
    Calculation { what: String },

    /// Binodal curve could not be produced for the requested key.
    #[error("Phase diagram error: {what}")]
    PhaseDiagram {
        what: String,
        #[source]
        source: Option<Box<GasError>>,
    },

    #[error("Configuration error: {what}")]
    Config { what: String },

    #[error(transparent)]
    Gas(#[from] GasError),

    #[error(transparent)]
    Core(#[from] AtError),
}

impl ModelError {
    pub fn init(what: impl Into<String>) -> Self {
        ModelError::Init { what: what.into() }
    }

    pub fn calculation(what: impl Into<String>) -> Self {
        ModelError::Calculation { what: what.into() }
    }

    pub fn config(what: impl Into<String>) -> Self {
        ModelError::Config { what: what.into() }
    }

    pub fn phase_diagram(what: impl Into<String>) -> Self {
        ModelError::PhaseDiagram {
            what: what.into(),
            source: None,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ModelError::Init { .. } => ErrorKind::Initialization,
            ModelError::Calculation { .. } => ErrorKind::Calculation,
            ModelError::PhaseDiagram { source, .. } => match source {
                Some(_) => ErrorKind::GasMix,
                None => ErrorKind::Initialization,
            },
            ModelError::Config { .. } => ErrorKind::Configuration,
            ModelError::Gas(err) => err.kind(),
            ModelError::Core(err) => err.kind(),
        }
    }
}

impl From<serde_yaml::Error> for ModelError {
    fn from(err: serde_yaml::Error) -> Self {
        ModelError::config(err.to_string())
    }
}
