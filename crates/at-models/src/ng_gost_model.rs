//! Live-state model over the GOST 30319.3 natural gas correlation.
//!
//! Heat capacities and β come straight from the correlation at every state;
//! the internal energy is advanced by its isothermal integral like the cubic
//! models, starting from zero at the initial state.

use crate::config::CalculationConfig;
use crate::error::{ModelError, ModelResult};
use at_gas::{
    ConstParameters, DynParameters, DynSetup, GasState, NgComponent, NgComposition, NgGost,
    NgGostState, Phase, StatePoint, is_within_limits,
};
use tracing::{debug, warn};

#[derive(Debug, Clone)]
pub struct NgGostModel {
    gas: NgGost,
    constants: ConstParameters,
    state: GasState,
    previous: Option<StatePoint>,
    dynamics: DynParameters,
    debug: bool,
}

impl NgGostModel {
    pub fn new(
        gas: NgGost,
        pressure: f64,
        temperature: f64,
        config: &CalculationConfig,
    ) -> ModelResult<Self> {
        let constants = gas.const_parameters()?;
        let solved = gas.state(pressure, temperature)?;
        let point = StatePoint::new(solved.volume, pressure, temperature)?;
        let dynamics = dynamics_at(&solved, 0.0, point);
        let phase = classify(&constants, &point);
        Ok(Self {
            gas,
            constants,
            state: GasState { point, phase },
            previous: None,
            dynamics,
            debug: config.debug_mode,
        })
    }

    /// Validate `items` against the component limits and build the model.
    pub fn from_composition(
        items: Vec<(NgComponent, f64)>,
        pressure: f64,
        temperature: f64,
        config: &CalculationConfig,
    ) -> ModelResult<Self> {
        let composition = NgComposition::new(items, config.enable_iso_20765)?;
        Self::new(NgGost::new(composition)?, pressure, temperature, config)
    }

    pub fn gas(&self) -> &NgGost {
        &self.gas
    }

    /// Pseudo-critical constants of the composition.
    pub fn constants(&self) -> &ConstParameters {
        &self.constants
    }

    pub fn state(&self) -> &GasState {
        &self.state
    }

    pub fn previous_point(&self) -> Option<StatePoint> {
        self.previous
    }

    pub fn dynamics(&self) -> &DynParameters {
        &self.dynamics
    }

    /// The correlation is fixed by the composition, so `_constants` only
    /// keeps the signature shared with the cubic models.
    pub fn init_volume(&self, p: f64, t: f64, _constants: &ConstParameters) -> ModelResult<f64> {
        self.volume(p, t)
    }

    pub fn volume(&self, p: f64, t: f64) -> ModelResult<f64> {
        Ok(self.gas.state(p, t)?.volume)
    }

    pub fn pressure(&self, v: f64, t: f64) -> ModelResult<f64> {
        Ok(self.gas.state_at_volume(v, t)?.pressure)
    }

    pub fn set_volume(&mut self, p: f64, t: f64) -> ModelResult<()> {
        let solved = self.gas.state(p, t)?;
        self.move_to(solved)
    }

    pub fn set_pressure(&mut self, v: f64, t: f64) -> ModelResult<()> {
        let solved = self.gas.state_at_volume(v, t)?;
        self.move_to(solved)
    }

    pub fn update_dyn_params(
        &self,
        prev: &DynParameters,
        new_point: StatePoint,
        _constants: &ConstParameters,
    ) -> ModelResult<DynParameters> {
        let solved = self
            .gas
            .state_at_volume(new_point.volume, new_point.temperature)?;
        let du = self.gas.internal_energy_delta(
            prev.point.volume,
            new_point.volume,
            new_point.temperature,
        );
        Ok(dynamics_at(&solved, prev.internal_energy + du, new_point))
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid_at(&self.state.point)
    }

    pub fn is_valid_at(&self, point: &StatePoint) -> bool {
        is_within_limits(point.pressure, point.temperature)
    }

    fn move_to(&mut self, solved: NgGostState) -> ModelResult<()> {
        let point = StatePoint::new(solved.volume, solved.pressure, solved.temperature)?;
        let du = self.gas.internal_energy_delta(
            self.state.point.volume,
            point.volume,
            point.temperature,
        );
        if !du.is_finite() {
            return Err(ModelError::calculation(format!(
                "NG-GOST: non-finite internal energy change at v={}, T={}",
                point.volume, point.temperature
            )));
        }
        let dynamics = dynamics_at(&solved, self.dynamics.internal_energy + du, point);
        if self.debug {
            debug!(
                model = "NG-GOST",
                du,
                z = solved.z,
                cv = dynamics.heat_cap_vol,
                cp = dynamics.heat_cap_pres,
                "dynamic parameters updated"
            );
        }
        if !self.is_valid_at(&point) {
            warn!(
                pressure = point.pressure,
                temperature = point.temperature,
                "state outside the GOST 30319.3 envelope"
            );
        }
        self.previous = Some(self.state.point);
        self.state = GasState {
            point,
            phase: classify(&self.constants, &point),
        };
        self.dynamics = dynamics;
        Ok(())
    }
}

fn dynamics_at(solved: &NgGostState, internal_energy: f64, point: StatePoint) -> DynParameters {
    DynParameters {
        heat_cap_vol: solved.heat_cap_vol,
        heat_cap_pres: solved.heat_cap_pres,
        internal_energy,
        beta_kr: solved.beta,
        point,
        setup: DynSetup::ALL,
    }
}

/// Natural gas inside the envelope is above its pseudo-critical temperature.
fn classify(constants: &ConstParameters, point: &StatePoint) -> Phase {
    if point.temperature >= constants.t_k() && point.pressure >= constants.p_k() {
        Phase::Scf
    } else {
        Phase::Gas
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use at_gas::GasError;

    fn model() -> NgGostModel {
        NgGostModel::from_composition(
            vec![
                (NgComponent::Methane, 0.95),
                (NgComponent::Ethane, 0.03),
                (NgComponent::Nitrogen, 0.01),
                (NgComponent::CarbonDioxide, 0.01),
            ],
            1.0e6,
            290.0,
            &CalculationConfig::default(),
        )
        .unwrap()
    }

    #[test]
    fn starts_as_gas_with_zero_energy() {
        let model = model();
        assert_eq!(model.state().phase, Phase::Gas);
        assert_eq!(model.dynamics().internal_energy, 0.0);
        assert!(model.dynamics().heat_cap_pres > model.dynamics().heat_cap_vol);
        assert!(model.is_valid());
    }

    #[test]
    fn high_pressure_is_supercritical() {
        let mut model = model();
        model.set_volume(8.0e6, 300.0).unwrap();
        assert_eq!(model.state().phase, Phase::Scf);
        assert!(model.previous_point().is_some());
    }

    #[test]
    fn set_pressure_inverts_set_volume() {
        let mut model = model();
        model.set_volume(5.0e6, 300.0).unwrap();
        let v = model.state().point.volume;
        model.set_pressure(v, 300.0).unwrap();
        assert!(((model.state().point.pressure - 5.0e6) / 5.0e6).abs() < 1e-5);
    }

    #[test]
    fn update_matches_live_move() {
        let mut model = model();
        let prev = *model.dynamics();
        let v = model.volume(3.0e6, 290.0).unwrap();
        let target = StatePoint::new(v, 3.0e6, 290.0).unwrap();
        let replay = model
            .update_dyn_params(&prev, target, &model.constants().clone())
            .unwrap();
        model.set_volume(3.0e6, 290.0).unwrap();
        let live = model.dynamics();
        assert!((replay.internal_energy - live.internal_energy).abs() < 1e-6 * live.internal_energy.abs().max(1.0));
        assert!((replay.heat_cap_vol - live.heat_cap_vol).abs() < 1e-6 * live.heat_cap_vol);
    }

    #[test]
    fn outside_envelope_is_rejected() {
        let mut model = model();
        let err = model.set_volume(1.0e6, 400.0).unwrap_err();
        assert!(matches!(err, ModelError::Gas(GasError::OutOfRange { .. })), "{err}");
        assert!(!model.is_valid_at(&StatePoint::new(0.1, 1.0e6, 400.0).unwrap()));
    }

    #[test]
    fn invalid_composition_is_an_init_error() {
        let err = NgGostModel::from_composition(
            vec![(NgComponent::Methane, 0.5), (NgComponent::Nitrogen, 0.5)],
            1.0e6,
            290.0,
            &CalculationConfig::default(),
        )
        .unwrap_err();
        assert_eq!(err.kind(), at_core::ErrorKind::Initialization);
    }
}
