//! Live-state model over one cubic equation of state.
//!
//! A model owns the constants of a pure gas or of an averaged mixture, the
//! rescaled binodal curve of its (equation, acentric factor) pair and exactly
//! one live state. Moving the state advances the dynamic parameters from
//! the previous point; for mixtures each component is advanced along the
//! equation of its own constants and the mixture values are re-weighted.

use crate::binodal::{BinodalCurve, BinodalPoint, BranchEnthalpy};
use crate::config::CalculationConfig;
use crate::eos::{CubicEos, EosKind};
use crate::error::{ModelError, ModelResult};
use crate::phase_diagram::PhaseDiagram;
use at_core::numeric::ensure_positive;
use at_gas::{ComponentMix, ConstParameters, DynParameters, GasState, StatePoint, average};
use std::sync::OnceLock;
use tracing::{debug, warn};

#[derive(Debug, Clone)]
enum Substance {
    Pure,
    Mixture(ComponentMix),
}

#[derive(Debug, Clone)]
pub struct CubicModel {
    kind: EosKind,
    constants: ConstParameters,
    eos: CubicEos,
    curve: BinodalCurve,
    substance: Substance,
    state: GasState,
    previous: Option<StatePoint>,
    dynamics: DynParameters,
    enthalpy: OnceLock<BranchEnthalpy>,
    debug: bool,
}

impl CubicModel {
    /// Pure gas whose live state starts at `dynamics.point`.
    pub fn new(
        kind: EosKind,
        constants: ConstParameters,
        dynamics: DynParameters,
        diagram: &PhaseDiagram,
        config: &CalculationConfig,
    ) -> ModelResult<Self> {
        let curve = diagram.curve(kind, &constants)?;
        let point = dynamics.point;
        let phase = curve.classify(point.volume, point.pressure, point.temperature);
        Ok(Self {
            kind,
            constants,
            eos: CubicEos::new(kind, &constants),
            curve,
            substance: Substance::Pure,
            state: GasState { point, phase },
            previous: None,
            dynamics,
            enthalpy: OnceLock::new(),
            debug: config.debug_mode,
        })
    }

    /// Mixture whose live state starts at (`pressure`, `temperature`).
    ///
    /// The starting volume is `Σ xᵢ·vᵢ(p, T)` with every `vᵢ` taken from the
    /// component's own constants.
    pub fn with_mixture(
        kind: EosKind,
        mut mix: ComponentMix,
        pressure: f64,
        temperature: f64,
        diagram: &PhaseDiagram,
        config: &CalculationConfig,
    ) -> ModelResult<Self> {
        let rule = config.averaging_for(kind);
        let curve = diagram.mixture_curve(kind, &mix, rule)?;
        let constants = average(&mix, rule)?;
        let pressure = ensure_positive(pressure, "pressure")?;
        let temperature = ensure_positive(temperature, "temperature")?;

        let mut volume = 0.0;
        for c in mix.iter() {
            let own = rescale_curve(&curve, &constants, &c.constants);
            let eos = CubicEos::new(kind, &c.constants);
            volume += c.fraction * select_volume(&eos, &own, pressure, temperature)?;
        }
        let point = StatePoint::new(volume, pressure, temperature)?;
        let dynamics = advance_mixture(kind, &mut mix, point)?;
        let phase = curve.classify(point.volume, point.pressure, point.temperature);

        Ok(Self {
            kind,
            constants,
            eos: CubicEos::new(kind, &constants),
            curve,
            substance: Substance::Mixture(mix),
            state: GasState { point, phase },
            previous: None,
            dynamics,
            enthalpy: OnceLock::new(),
            debug: config.debug_mode,
        })
    }

    pub fn kind(&self) -> EosKind {
        self.kind
    }

    pub fn constants(&self) -> &ConstParameters {
        &self.constants
    }

    pub fn eos(&self) -> &CubicEos {
        &self.eos
    }

    pub fn curve(&self) -> &BinodalCurve {
        &self.curve
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

    /// Mixture components with their current dynamic parameters.
    pub fn components(&self) -> Option<&ComponentMix> {
        match &self.substance {
            Substance::Pure => None,
            Substance::Mixture(mix) => Some(mix),
        }
    }

    /// Volume of a gas with `constants` at (p, T), roots chosen against this
    /// model's binodal curve rescaled to those constants.
    pub fn init_volume(&self, p: f64, t: f64, constants: &ConstParameters) -> ModelResult<f64> {
        let curve = rescale_curve(&self.curve, &self.constants, constants);
        select_volume(&CubicEos::new(self.kind, constants), &curve, p, t)
    }

    pub fn volume(&self, p: f64, t: f64) -> ModelResult<f64> {
        select_volume(&self.eos, &self.curve, p, t)
    }

    pub fn pressure(&self, v: f64, t: f64) -> ModelResult<f64> {
        let v = ensure_positive(v, "volume")?;
        let t = ensure_positive(t, "temperature")?;
        if v <= self.eos.b() {
            return Err(ModelError::calculation(format!(
                "{}: volume {v} not above the co-volume {}",
                self.kind.name(),
                self.eos.b()
            )));
        }
        let p = self.eos.pressure(v, t);
        if !p.is_finite() || p <= 0.0 {
            return Err(ModelError::calculation(format!(
                "{}: non-positive pressure {p} at v={v}, T={t}",
                self.kind.name()
            )));
        }
        Ok(p)
    }

    /// Move the live state to (p, T), solving for the volume.
    pub fn set_volume(&mut self, p: f64, t: f64) -> ModelResult<()> {
        let v = self.volume(p, t)?;
        self.move_to(StatePoint::new(v, p, t)?)
    }

    /// Move the live state to (v, T), evaluating the pressure.
    pub fn set_pressure(&mut self, v: f64, t: f64) -> ModelResult<()> {
        let p = self.pressure(v, t)?;
        self.move_to(StatePoint::new(v, p, t)?)
    }

    /// `prev` advanced to `new_point` along the equation of `constants`.
    pub fn update_dyn_params(
        &self,
        prev: &DynParameters,
        new_point: StatePoint,
        constants: &ConstParameters,
    ) -> ModelResult<DynParameters> {
        CubicEos::new(self.kind, constants).update_dyn(prev, new_point)
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid_at(&self.state.point)
    }

    pub fn is_valid_at(&self, point: &StatePoint) -> bool {
        self.eos.is_valid_at(point.pressure, point.temperature)
    }

    /// Enthalpy along both binodal branches.
    ///
    /// Computed on first request by walking each branch from the live
    /// dynamic parameters; later state moves do not refresh it.
    pub fn branch_enthalpy(&self) -> ModelResult<&BranchEnthalpy> {
        if let Some(enthalpy) = self.enthalpy.get() {
            return Ok(enthalpy);
        }
        let liquid = self.walk_branch(|p| p.liquid_volume)?;
        let vapour = self.walk_branch(|p| p.vapour_volume)?;
        Ok(self
            .enthalpy
            .get_or_init(|| BranchEnthalpy { liquid, vapour }))
    }

    fn walk_branch(&self, volume: impl Fn(&BinodalPoint) -> f64) -> ModelResult<Vec<f64>> {
        let mut dynamics = self.dynamics;
        self.curve
            .points()
            .iter()
            .map(|sample| {
                let point = StatePoint::new(volume(sample), sample.pressure, sample.temperature)?;
                dynamics = self.eos.update_dyn(&dynamics, point)?;
                Ok(dynamics.internal_energy + sample.pressure * point.volume)
            })
            .collect()
    }

    fn move_to(&mut self, point: StatePoint) -> ModelResult<()> {
        let (dynamics, components) = match &self.substance {
            Substance::Pure => (self.eos.update_dyn(&self.dynamics, point)?, None),
            Substance::Mixture(mix) => {
                let mut next = mix.clone();
                (advance_mixture(self.kind, &mut next, point)?, Some(next))
            }
        };
        if self.debug {
            debug!(
                model = self.kind.name(),
                du = dynamics.internal_energy - self.dynamics.internal_energy,
                dcv = dynamics.heat_cap_vol - self.dynamics.heat_cap_vol,
                cp = dynamics.heat_cap_pres,
                "dynamic parameters updated"
            );
        }
        if !self.is_valid_at(&point) {
            warn!(
                model = self.kind.name(),
                pressure = point.pressure,
                temperature = point.temperature,
                "state outside the applicability range of the model"
            );
        }
        let phase = self
            .curve
            .classify(point.volume, point.pressure, point.temperature);
        if let Some(mix) = components {
            self.substance = Substance::Mixture(mix);
        }
        self.previous = Some(self.state.point);
        self.state = GasState { point, phase };
        self.dynamics = dynamics;
        Ok(())
    }
}

/// Volume at (p, T): the only admissible root, or on the two-phase envelope
/// the liquid root at or above the saturation pressure and the vapour root
/// below it.
fn select_volume(eos: &CubicEos, curve: &BinodalCurve, p: f64, t: f64) -> ModelResult<f64> {
    let p = ensure_positive(p, "pressure")?;
    let t = ensure_positive(t, "temperature")?;
    let roots = eos.admissible_roots(p, t)?;
    let (smallest, largest) = (roots[0], roots[roots.len() - 1]);
    if roots.len() == 1 {
        return Ok(smallest);
    }
    Ok(match curve.saturation_pressure(t) {
        Some(p_sat) if p >= p_sat => smallest,
        _ => largest,
    })
}

fn rescale_curve(curve: &BinodalCurve, from: &ConstParameters, to: &ConstParameters) -> BinodalCurve {
    curve.rescaled(
        to.v_k() / from.v_k(),
        to.p_k() / from.p_k(),
        to.t_k() / from.t_k(),
    )
}

/// Advance every component of `mix` to `point` and return the weighted values.
fn advance_mixture(
    kind: EosKind,
    mix: &mut ComponentMix,
    point: StatePoint,
) -> ModelResult<DynParameters> {
    for (constants, dynamics) in mix.dynamics_mut() {
        *dynamics = CubicEos::new(kind, constants).update_dyn(dynamics, point)?;
    }
    Ok(DynParameters::weighted(
        mix.iter().map(|c| (c.fraction, &c.dynamics)),
        point,
    )?)
}
