//! Calculation configuration.
//!
//! Loaded from YAML text; the crate never reads files itself.
//!
//! ```yaml
//! debug_mode: false
//! preferred_model: peng_robinson
//! averaging: linear
//! enable_iso_20765: true
//! binodal:
//!   max_iterations: 3000
//!   area_tolerance: 0.005
//! ```

use crate::eos::EosKind;
use crate::error::{ModelError, ModelResult};
use crate::model::ModelKind;
use at_gas::AveragingRule;
use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_ITERATIONS: usize = 3000;
pub const DEFAULT_AREA_TOLERANCE: f64 = 0.005;
const MAX_ITERATIONS_LIMIT: usize = 100_000;
const AREA_TOLERANCE_LIMIT: f64 = 0.1;

/// Maxwell search settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct BinodalConfig {
    /// Iteration bound per temperature point.
    pub max_iterations: usize,
    /// Relative equal-area mismatch accepted as converged.
    pub area_tolerance: f64,
}

impl Default for BinodalConfig {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            area_tolerance: DEFAULT_AREA_TOLERANCE,
        }
    }
}

impl BinodalConfig {
    pub fn validate(&self) -> ModelResult<()> {
        if !(1..=MAX_ITERATIONS_LIMIT).contains(&self.max_iterations) {
            return Err(ModelError::config(format!(
                "binodal.max_iterations = {} outside 1..={MAX_ITERATIONS_LIMIT}",
                self.max_iterations
            )));
        }
        if !(self.area_tolerance > 0.0 && self.area_tolerance < AREA_TOLERANCE_LIMIT) {
            return Err(ModelError::config(format!(
                "binodal.area_tolerance = {} outside (0, {AREA_TOLERANCE_LIMIT})",
                self.area_tolerance
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct CalculationConfig {
    /// Emit a debug event for every dynamic-parameter update.
    pub debug_mode: bool,
    pub preferred_model: ModelKind,
    pub averaging: AveragingRule,
    /// Extended GOST component coverage (octane to decane as their own group).
    pub enable_iso_20765: bool,
    pub binodal: BinodalConfig,
}

impl Default for CalculationConfig {
    fn default() -> Self {
        Self {
            debug_mode: false,
            preferred_model: ModelKind::PengRobinson,
            averaging: AveragingRule::Linear,
            enable_iso_20765: true,
            binodal: BinodalConfig::default(),
        }
    }
}

impl CalculationConfig {
    pub fn from_yaml(text: &str) -> ModelResult<Self> {
        let config: CalculationConfig = serde_yaml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_yaml(&self) -> ModelResult<String> {
        self.validate()?;
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn validate(&self) -> ModelResult<()> {
        self.binodal.validate()
    }

    /// Averaging rule for mixtures under `kind`.
    ///
    /// The two-parameter Redlich-Kwong model always uses its own rule.
    pub fn averaging_for(&self, kind: EosKind) -> AveragingRule {
        match kind {
            EosKind::RedlichKwong => AveragingRule::RedlichKwong,
            _ => self.averaging,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use at_core::ErrorKind;

    #[test]
    fn partial_yaml_keeps_defaults() {
        let config = CalculationConfig::from_yaml("debug_mode: true\n").unwrap();
        assert!(config.debug_mode);
        assert_eq!(config.preferred_model, ModelKind::PengRobinson);
        assert!(config.enable_iso_20765);
        assert_eq!(config.binodal, BinodalConfig::default());
    }

    #[test]
    fn full_yaml() {
        let text = "\
debug_mode: false
preferred_model: redlich_kwong_soave
averaging: redlich_kwong
enable_iso_20765: false
binodal:
  max_iterations: 500
  area_tolerance: 0.01
";
        let config = CalculationConfig::from_yaml(text).unwrap();
        assert_eq!(config.preferred_model, ModelKind::RedlichKwongSoave);
        assert_eq!(config.averaging, AveragingRule::RedlichKwong);
        assert!(!config.enable_iso_20765);
        assert_eq!(config.binodal.max_iterations, 500);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = CalculationConfig::from_yaml("debug_mode: true\nlog_file: out.log\n").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);
    }

    #[test]
    fn bounds_are_enforced() {
        let err = CalculationConfig::from_yaml("binodal:\n  max_iterations: 0\n").unwrap_err();
        assert!(matches!(err, ModelError::Config { .. }), "{err}");
        let err = CalculationConfig::from_yaml("binodal:\n  area_tolerance: 0.5\n").unwrap_err();
        assert!(matches!(err, ModelError::Config { .. }), "{err}");
    }

    #[test]
    fn yaml_roundtrip() {
        let config = CalculationConfig {
            debug_mode: true,
            ..CalculationConfig::default()
        };
        let text = config.to_yaml().unwrap();
        assert_eq!(CalculationConfig::from_yaml(&text).unwrap(), config);
    }

    #[test]
    fn redlich_kwong_forces_its_averaging_rule() {
        let config = CalculationConfig::default();
        assert_eq!(config.averaging_for(EosKind::RedlichKwong), AveragingRule::RedlichKwong);
        assert_eq!(config.averaging_for(EosKind::PengRobinson), AveragingRule::Linear);
    }
}
