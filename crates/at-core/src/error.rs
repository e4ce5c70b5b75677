use thiserror::Error;

pub type AtResult<T> = Result<T, AtError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AtError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    /// Input degenerates to a lower-order problem (e.g. zero leading coefficient).
    #[error("Degenerate input: {what}")]
    Degenerate { what: &'static str },

    #[error("Invariant violated: {what}")]
    Invariant { what: &'static str },
}

/// Coarse error category shared by every crate in the workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Initialization,
    Calculation,
    GasMix,
    Configuration,
}

impl AtError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AtError::InvalidArg { .. } => ErrorKind::Initialization,
            AtError::NonFinite { .. } | AtError::Degenerate { .. } | AtError::Invariant { .. } => {
                ErrorKind::Calculation
            }
        }
    }
}
