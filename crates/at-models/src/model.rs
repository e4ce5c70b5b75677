//! Model capability interface and the closed set of models.

use crate::cubic_model::CubicModel;
use crate::eos::EosKind;
use crate::error::ModelResult;
use crate::ng_gost_model::NgGostModel;
use crate::report::{self, StateLog};
use at_gas::{ConstParameters, DynParameters, GasState, StatePoint};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelKind {
    RedlichKwong,
    RedlichKwongSoave,
    PengRobinson,
    NgGost,
}

impl ModelKind {
    /// Cubic equation behind the model, if any.
    pub fn eos_kind(self) -> Option<EosKind> {
        match self {
            ModelKind::RedlichKwong => Some(EosKind::RedlichKwong),
            ModelKind::RedlichKwongSoave => Some(EosKind::RedlichKwongSoave),
            ModelKind::PengRobinson => Some(EosKind::PengRobinson),
            ModelKind::NgGost => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self.eos_kind() {
            Some(kind) => kind.name(),
            None => "NG-GOST",
        }
    }
}

impl From<EosKind> for ModelKind {
    fn from(kind: EosKind) -> Self {
        match kind {
            EosKind::RedlichKwong => ModelKind::RedlichKwong,
            EosKind::RedlichKwongSoave => ModelKind::RedlichKwongSoave,
            EosKind::PengRobinson => ModelKind::PengRobinson,
        }
    }
}

/// Operations every real-gas model provides.
///
/// A model holds exactly one live state; `set_*` move it and advance the
/// dynamic parameters from the previous point.
pub trait RealGasModel {
    fn kind(&self) -> ModelKind;

    fn constants(&self) -> &ConstParameters;

    fn state(&self) -> &GasState;

    fn previous_point(&self) -> Option<StatePoint>;

    fn dynamics(&self) -> &DynParameters;

    /// Volume of a gas with `constants` at (p, T).
    fn init_volume(&self, p: f64, t: f64, constants: &ConstParameters) -> ModelResult<f64>;

    fn volume(&self, p: f64, t: f64) -> ModelResult<f64>;

    fn pressure(&self, v: f64, t: f64) -> ModelResult<f64>;

    fn set_volume(&mut self, p: f64, t: f64) -> ModelResult<()>;

    fn set_pressure(&mut self, v: f64, t: f64) -> ModelResult<()>;

    /// `prev` advanced to `new_point`; the live state is left alone.
    fn update_dyn_params(
        &self,
        prev: &DynParameters,
        new_point: StatePoint,
        constants: &ConstParameters,
    ) -> ModelResult<DynParameters>;

    fn is_valid_at(&self, point: &StatePoint) -> bool;

    fn is_valid(&self) -> bool {
        self.is_valid_at(&self.state().point)
    }
}

impl RealGasModel for CubicModel {
    fn kind(&self) -> ModelKind {
        CubicModel::kind(self).into()
    }

    fn constants(&self) -> &ConstParameters {
        CubicModel::constants(self)
    }

    fn state(&self) -> &GasState {
        CubicModel::state(self)
    }

    fn previous_point(&self) -> Option<StatePoint> {
        CubicModel::previous_point(self)
    }

    fn dynamics(&self) -> &DynParameters {
        CubicModel::dynamics(self)
    }

    fn init_volume(&self, p: f64, t: f64, constants: &ConstParameters) -> ModelResult<f64> {
        CubicModel::init_volume(self, p, t, constants)
    }

    fn volume(&self, p: f64, t: f64) -> ModelResult<f64> {
        CubicModel::volume(self, p, t)
    }

    fn pressure(&self, v: f64, t: f64) -> ModelResult<f64> {
        CubicModel::pressure(self, v, t)
    }

    fn set_volume(&mut self, p: f64, t: f64) -> ModelResult<()> {
        CubicModel::set_volume(self, p, t)
    }

    fn set_pressure(&mut self, v: f64, t: f64) -> ModelResult<()> {
        CubicModel::set_pressure(self, v, t)
    }

    fn update_dyn_params(
        &self,
        prev: &DynParameters,
        new_point: StatePoint,
        constants: &ConstParameters,
    ) -> ModelResult<DynParameters> {
        CubicModel::update_dyn_params(self, prev, new_point, constants)
    }

    fn is_valid_at(&self, point: &StatePoint) -> bool {
        CubicModel::is_valid_at(self, point)
    }
}

impl RealGasModel for NgGostModel {
    fn kind(&self) -> ModelKind {
        ModelKind::NgGost
    }

    fn constants(&self) -> &ConstParameters {
        NgGostModel::constants(self)
    }

    fn state(&self) -> &GasState {
        NgGostModel::state(self)
    }

    fn previous_point(&self) -> Option<StatePoint> {
        NgGostModel::previous_point(self)
    }

    fn dynamics(&self) -> &DynParameters {
        NgGostModel::dynamics(self)
    }

    fn init_volume(&self, p: f64, t: f64, constants: &ConstParameters) -> ModelResult<f64> {
        NgGostModel::init_volume(self, p, t, constants)
    }

    fn volume(&self, p: f64, t: f64) -> ModelResult<f64> {
        NgGostModel::volume(self, p, t)
    }

    fn pressure(&self, v: f64, t: f64) -> ModelResult<f64> {
        NgGostModel::pressure(self, v, t)
    }

    fn set_volume(&mut self, p: f64, t: f64) -> ModelResult<()> {
        NgGostModel::set_volume(self, p, t)
    }

    fn set_pressure(&mut self, v: f64, t: f64) -> ModelResult<()> {
        NgGostModel::set_pressure(self, v, t)
    }

    fn update_dyn_params(
        &self,
        prev: &DynParameters,
        new_point: StatePoint,
        constants: &ConstParameters,
    ) -> ModelResult<DynParameters> {
        NgGostModel::update_dyn_params(self, prev, new_point, constants)
    }

    fn is_valid_at(&self, point: &StatePoint) -> bool {
        NgGostModel::is_valid_at(self, point)
    }
}

/// A constructed model of any kind.
#[derive(Debug, Clone)]
pub enum GasModel {
    Cubic(CubicModel),
    NgGost(NgGostModel),
}

impl GasModel {
    fn inner(&self) -> &dyn RealGasModel {
        match self {
            GasModel::Cubic(m) => m,
            GasModel::NgGost(m) => m,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn RealGasModel {
        match self {
            GasModel::Cubic(m) => m,
            GasModel::NgGost(m) => m,
        }
    }

    pub fn as_cubic(&self) -> Option<&CubicModel> {
        match self {
            GasModel::Cubic(m) => Some(m),
            GasModel::NgGost(_) => None,
        }
    }

    pub fn as_ng_gost(&self) -> Option<&NgGostModel> {
        match self {
            GasModel::Cubic(_) => None,
            GasModel::NgGost(m) => Some(m),
        }
    }

    /// Fixed-width row of the live state.
    pub fn parameters_string(&self) -> String {
        report::parameters_row(self.dynamics())
    }

    pub fn parameters_string_head() -> &'static str {
        report::PARAMETERS_HEAD
    }

    pub fn const_parameters_string(&self) -> String {
        report::const_parameters(self.constants())
    }

    pub fn state_log(&self) -> StateLog {
        StateLog::new(self.dynamics(), self.state().phase)
    }
}

impl RealGasModel for GasModel {
    fn kind(&self) -> ModelKind {
        self.inner().kind()
    }

    fn constants(&self) -> &ConstParameters {
        self.inner().constants()
    }

    fn state(&self) -> &GasState {
        self.inner().state()
    }

    fn previous_point(&self) -> Option<StatePoint> {
        self.inner().previous_point()
    }

    fn dynamics(&self) -> &DynParameters {
        self.inner().dynamics()
    }

    fn init_volume(&self, p: f64, t: f64, constants: &ConstParameters) -> ModelResult<f64> {
        self.inner().init_volume(p, t, constants)
    }

    fn volume(&self, p: f64, t: f64) -> ModelResult<f64> {
        self.inner().volume(p, t)
    }

    fn pressure(&self, v: f64, t: f64) -> ModelResult<f64> {
        self.inner().pressure(v, t)
    }

    fn set_volume(&mut self, p: f64, t: f64) -> ModelResult<()> {
        self.inner_mut().set_volume(p, t)
    }

    fn set_pressure(&mut self, v: f64, t: f64) -> ModelResult<()> {
        self.inner_mut().set_pressure(v, t)
    }

    fn update_dyn_params(
        &self,
        prev: &DynParameters,
        new_point: StatePoint,
        constants: &ConstParameters,
    ) -> ModelResult<DynParameters> {
        self.inner().update_dyn_params(prev, new_point, constants)
    }

    fn is_valid_at(&self, point: &StatePoint) -> bool {
        self.inner().is_valid_at(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_map_to_equations() {
        assert_eq!(ModelKind::PengRobinson.eos_kind(), Some(EosKind::PengRobinson));
        assert_eq!(ModelKind::NgGost.eos_kind(), None);
        assert_eq!(ModelKind::from(EosKind::RedlichKwongSoave), ModelKind::RedlichKwongSoave);
        assert_eq!(ModelKind::NgGost.name(), "NG-GOST");
    }
}
