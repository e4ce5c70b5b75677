//! Phase tags.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Aggregate state of a gas at a (v, p, T) point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Phase {
    Gas,
    Liquid,
    /// Two-phase region under the binodal curve.
    LiqSteam,
    /// Supercritical fluid.
    Scf,
    #[default]
    NotSet,
}

impl Phase {
    pub fn label(self) -> &'static str {
        match self {
            Phase::Gas => "GAS",
            Phase::Liquid => "LIQUID",
            Phase::LiqSteam => "LIQ_STEAM",
            Phase::Scf => "SCF",
            Phase::NotSet => "NOT_SET",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels() {
        assert_eq!(Phase::LiqSteam.to_string(), "LIQ_STEAM");
        assert_eq!(Phase::default(), Phase::NotSet);
        assert_eq!(Phase::Scf.label(), "SCF");
    }
}
