//! Calculation session: configuration, the shared phase diagram and model
//! construction.

use crate::config::CalculationConfig;
use crate::cubic_model::CubicModel;
use crate::eos::EosKind;
use crate::error::{ModelError, ModelResult};
use crate::model::{GasModel, ModelKind, RealGasModel};
use crate::ng_gost_model::NgGostModel;
use crate::phase_diagram::PhaseDiagram;
use at_gas::{ComponentMix, ConstParameters, DynParameters, NgComponent};
use std::sync::Arc;
use tracing::{info, warn};

/// Cubic models tried after the preferred one, most general first.
const FALLBACK_ORDER: [EosKind; 3] = [
    EosKind::PengRobinson,
    EosKind::RedlichKwongSoave,
    EosKind::RedlichKwong,
];

/// Owns the configuration and the binodal cache every model of a
/// calculation draws from.
#[derive(Debug, Clone)]
pub struct CalculationSession {
    config: CalculationConfig,
    diagram: Arc<PhaseDiagram>,
}

impl CalculationSession {
    pub fn new(config: CalculationConfig) -> ModelResult<Self> {
        config.validate()?;
        let diagram = Arc::new(PhaseDiagram::new(config.binodal)?);
        Ok(Self { config, diagram })
    }

    pub fn from_yaml(text: &str) -> ModelResult<Self> {
        Self::new(CalculationConfig::from_yaml(text)?)
    }

    /// Session sharing an existing cache, e.g. across calculations of one
    /// worker.
    pub fn with_diagram(config: CalculationConfig, diagram: Arc<PhaseDiagram>) -> ModelResult<Self> {
        config.validate()?;
        Ok(Self { config, diagram })
    }

    pub fn config(&self) -> &CalculationConfig {
        &self.config
    }

    pub fn diagram(&self) -> &Arc<PhaseDiagram> {
        &self.diagram
    }

    /// Pure-gas model of `kind` starting at `dynamics.point`.
    ///
    /// NG-GOST needs a composition, see [`Self::create_ng_gost`].
    pub fn create(
        &self,
        kind: ModelKind,
        constants: ConstParameters,
        dynamics: DynParameters,
    ) -> ModelResult<GasModel> {
        let eos = kind.eos_kind().ok_or_else(|| {
            ModelError::init("NG-GOST model is built from a natural gas composition")
        })?;
        let model = CubicModel::new(eos, constants, dynamics, &self.diagram, &self.config)?;
        Ok(GasModel::Cubic(model))
    }

    pub fn create_preferred(
        &self,
        constants: ConstParameters,
        dynamics: DynParameters,
    ) -> ModelResult<GasModel> {
        self.create(self.config.preferred_model, constants, dynamics)
    }

    pub fn create_mixture(
        &self,
        kind: ModelKind,
        mix: ComponentMix,
        pressure: f64,
        temperature: f64,
    ) -> ModelResult<GasModel> {
        let eos = kind.eos_kind().ok_or_else(|| {
            ModelError::init("NG-GOST model does not take a generic component mixture")
        })?;
        let model =
            CubicModel::with_mixture(eos, mix, pressure, temperature, &self.diagram, &self.config)?;
        Ok(GasModel::Cubic(model))
    }

    pub fn create_ng_gost(
        &self,
        items: Vec<(NgComponent, f64)>,
        pressure: f64,
        temperature: f64,
    ) -> ModelResult<GasModel> {
        let model = NgGostModel::from_composition(items, pressure, temperature, &self.config)?;
        Ok(GasModel::NgGost(model))
    }

    /// Model moved to (p, T) that reports itself valid there.
    ///
    /// The preferred model goes first, then the cubic fallbacks. A model
    /// that fails to construct or move is skipped; the last failure is
    /// returned when nothing fits.
    pub fn select_valid(
        &self,
        constants: ConstParameters,
        dynamics: DynParameters,
        pressure: f64,
        temperature: f64,
    ) -> ModelResult<GasModel> {
        let mut candidates: Vec<ModelKind> = Vec::with_capacity(FALLBACK_ORDER.len() + 1);
        if self.config.preferred_model.eos_kind().is_some() {
            candidates.push(self.config.preferred_model);
        }
        for kind in FALLBACK_ORDER {
            let kind = ModelKind::from(kind);
            if !candidates.contains(&kind) {
                candidates.push(kind);
            }
        }

        let mut last_err = None;
        for kind in candidates {
            let attempt = self.create(kind, constants, dynamics).and_then(|mut model| {
                model.set_volume(pressure, temperature)?;
                Ok(model)
            });
            match attempt {
                Ok(model) if model.is_valid() => {
                    info!(model = kind.name(), pressure, temperature, "model selected");
                    return Ok(model);
                }
                Ok(_) => {
                    warn!(model = kind.name(), pressure, temperature, "model not valid at state");
                    last_err = Some(ModelError::calculation(format!(
                        "{} is not valid at p={pressure}, T={temperature}",
                        kind.name()
                    )));
                }
                Err(err) => {
                    warn!(model = kind.name(), error = %err, "model rejected");
                    last_err = Some(err);
                }
            }
        }
        Err(last_err.unwrap_or_else(|| ModelError::init("no candidate models")))
    }
}
