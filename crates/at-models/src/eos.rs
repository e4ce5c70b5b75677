//! Generalised two-parameter cubic equation of state.
//!
//! `p = R·T/(v − b) − a·α(T) / ((v + δ1·b)(v + δ2·b))`
//!
//! with `a = Ωa·R²·T_K²/P_K` and `b = Ωb·R·T_K/P_K`. Every coefficient is a
//! pure function of the constant parameters; the reduced form uses
//! `R = 1/Zc` and `T_K = P_K = 1`, so the critical point sits at (1, 1, 1).

use crate::error::{ModelError, ModelResult};
use crate::{peng_robinson, redlich_kwong};
use at_core::{CubicRoots, solve_cubic};
use at_gas::{ConstParameters, DynParameters, DynSetup, StatePoint};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EosKind {
    RedlichKwong,
    RedlichKwongSoave,
    PengRobinson,
}

impl EosKind {
    pub fn name(self) -> &'static str {
        match self {
            EosKind::RedlichKwong => "Redlich-Kwong",
            EosKind::RedlichKwongSoave => "Redlich-Kwong-Soave",
            EosKind::PengRobinson => "Peng-Robinson",
        }
    }

    pub fn constants(self) -> EosConstants {
        match self {
            EosKind::RedlichKwong | EosKind::RedlichKwongSoave => redlich_kwong::CONSTANTS,
            EosKind::PengRobinson => peng_robinson::CONSTANTS,
        }
    }

    fn alpha(self, acentric: f64) -> Alpha {
        match self {
            EosKind::RedlichKwong => Alpha::InverseSqrt,
            EosKind::RedlichKwongSoave => Alpha::Soave {
                kappa: redlich_kwong::soave_kappa(acentric),
            },
            EosKind::PengRobinson => Alpha::Soave {
                kappa: peng_robinson::kappa(acentric),
            },
        }
    }
}

/// Model constants of the generalised cubic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EosConstants {
    pub omega_a: f64,
    pub omega_b: f64,
    pub delta1: f64,
    pub delta2: f64,
    /// Critical compressibility of the equation.
    pub z_c: f64,
}

/// Temperature dependence of the attraction term.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Alpha {
    /// `(T_K/T)^0.5`
    InverseSqrt,
    /// `(1 + κ(1 − √(T/T_K)))²`
    Soave { kappa: f64 },
}

impl Alpha {
    /// α, dα/dT and d²α/dT² at `t`.
    pub fn eval(self, t_k: f64, t: f64) -> (f64, f64, f64) {
        match self {
            Alpha::InverseSqrt => {
                let alpha = (t_k / t).sqrt();
                (alpha, -alpha / (2.0 * t), 3.0 * alpha / (4.0 * t * t))
            }
            Alpha::Soave { kappa } => {
                let root = (t * t_k).sqrt();
                let m = 1.0 + kappa * (1.0 - (t / t_k).sqrt());
                (
                    m * m,
                    -kappa * m / root,
                    kappa * kappa / (2.0 * t * t_k) + kappa * m / (2.0 * t * root),
                )
            }
        }
    }
}

/// Coefficients of one cubic EOS bound to one set of critical constants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicEos {
    kind: EosKind,
    r: f64,
    t_k: f64,
    p_k: f64,
    a: f64,
    b: f64,
    delta1: f64,
    delta2: f64,
    alpha: Alpha,
}

impl CubicEos {
    pub fn new(kind: EosKind, constants: &ConstParameters) -> Self {
        Self::from_parts(
            kind,
            constants.r(),
            constants.t_k(),
            constants.p_k(),
            constants.acentric(),
        )
    }

    /// Reduced equation: volumes, pressures and temperatures in units of the
    /// critical point.
    pub fn reduced(kind: EosKind, acentric: f64) -> Self {
        Self::from_parts(kind, 1.0 / kind.constants().z_c, 1.0, 1.0, acentric)
    }

    fn from_parts(kind: EosKind, r: f64, t_k: f64, p_k: f64, acentric: f64) -> Self {
        let c = kind.constants();
        Self {
            kind,
            r,
            t_k,
            p_k,
            a: c.omega_a * r * r * t_k * t_k / p_k,
            b: c.omega_b * r * t_k / p_k,
            delta1: c.delta1,
            delta2: c.delta2,
            alpha: kind.alpha(acentric),
        }
    }

    pub fn kind(&self) -> EosKind {
        self.kind
    }

    pub fn a(&self) -> f64 {
        self.a
    }

    /// Co-volume; admissible volumes are strictly greater.
    pub fn b(&self) -> f64 {
        self.b
    }

    /// `a·α(T)`.
    pub fn attraction(&self, t: f64) -> f64 {
        self.a * self.alpha.eval(self.t_k, t).0
    }

    fn denominator(&self, v: f64) -> f64 {
        (v + self.delta1 * self.b) * (v + self.delta2 * self.b)
    }

    pub fn pressure(&self, v: f64, t: f64) -> f64 {
        self.r * t / (v - self.b) - self.attraction(t) / self.denominator(v)
    }

    /// Coefficients of the cubic in v at (p, t), leading coefficient first.
    pub fn volume_coefficients(&self, p: f64, t: f64) -> [f64; 4] {
        let (b, rt) = (self.b, self.r * t);
        let u = self.delta1 + self.delta2;
        let w = self.delta1 * self.delta2;
        let aa = self.attraction(t);
        [
            1.0,
            (u - 1.0) * b - rt / p,
            (w - u) * b * b - rt * u * b / p + aa / p,
            -w * b * b * b - rt * w * b * b / p - aa * b / p,
        ]
    }

    /// Real volume roots above the co-volume, ascending.
    pub fn admissible_roots(&self, p: f64, t: f64) -> ModelResult<Vec<f64>> {
        let roots = solve_cubic(self.volume_coefficients(p, t))?;
        let admissible: Vec<f64> = match roots {
            CubicRoots::One(x) => vec![x],
            CubicRoots::Three(xs) => xs.to_vec(),
        }
        .into_iter()
        .filter(|v| *v > self.b)
        .collect();
        if admissible.is_empty() {
            return Err(ModelError::calculation(format!(
                "{}: no volume above the co-volume at p={p}, T={t}",
                self.kind.name()
            )));
        }
        Ok(admissible)
    }

    /// `∫ dv / ((v + δ1·b)(v + δ2·b))` as an antiderivative.
    fn attraction_integral(&self, v: f64) -> f64 {
        let b = self.b;
        ((v + self.delta2 * b) / (v + self.delta1 * b)).ln() / ((self.delta1 - self.delta2) * b)
    }

    /// `∫ p dv` along the isotherm `t` from `v1` to `v2`.
    pub fn pressure_integral(&self, v1: f64, v2: f64, t: f64) -> f64 {
        self.r * t * ((v2 - self.b) / (v1 - self.b)).ln()
            - self.attraction(t) * (self.attraction_integral(v2) - self.attraction_integral(v1))
    }

    /// `u(v_new) − u(v_old)` at constant `t`.
    pub fn internal_energy_delta(&self, v_old: f64, v_new: f64, t: f64) -> f64 {
        let (alpha, d_alpha, _) = self.alpha.eval(self.t_k, t);
        self.a
            * (alpha - t * d_alpha)
            * (self.attraction_integral(v_new) - self.attraction_integral(v_old))
    }

    /// `cv(v_new) − cv(v_old)` at constant `t`.
    pub fn heat_cap_vol_delta(&self, v_old: f64, v_new: f64, t: f64) -> f64 {
        let (_, _, d2_alpha) = self.alpha.eval(self.t_k, t);
        -t * self.a
            * d2_alpha
            * (self.attraction_integral(v_new) - self.attraction_integral(v_old))
    }

    /// (∂p/∂T) at constant volume.
    pub fn dp_dt(&self, v: f64, t: f64) -> f64 {
        let (_, d_alpha, _) = self.alpha.eval(self.t_k, t);
        self.r / (v - self.b) - self.a * d_alpha / self.denominator(v)
    }

    /// (∂p/∂v) at constant temperature.
    pub fn dp_dv(&self, v: f64, t: f64) -> f64 {
        let d = self.denominator(v);
        let u = self.delta1 + self.delta2;
        -self.r * t / (v - self.b).powi(2) + self.attraction(t) * (2.0 * v + u * self.b) / (d * d)
    }

    /// `cp − cv = −T·(∂p/∂T)²/(∂p/∂v)`.
    pub fn heat_cap_difference(&self, v: f64, t: f64) -> f64 {
        -t * self.dp_dt(v, t).powi(2) / self.dp_dv(v, t)
    }

    /// Isobaric expansion coefficient `(1/v)(∂v/∂T)_p`.
    pub fn beta(&self, v: f64, t: f64) -> f64 {
        -self.dp_dt(v, t) / (v * self.dp_dv(v, t))
    }

    pub fn is_valid_at(&self, p: f64, t: f64) -> bool {
        if !(p.is_finite() && t.is_finite() && p > 0.0 && t > 0.0) {
            return false;
        }
        match self.kind {
            EosKind::RedlichKwong => redlich_kwong::is_applicable(p / self.p_k, t / self.t_k),
            EosKind::RedlichKwongSoave | EosKind::PengRobinson => true,
        }
    }

    /// Advance `prev` to `new_point` along this equation.
    ///
    /// The isothermal deltas are taken at the new temperature between the
    /// previous and the new volume; `cp` and β are re-derived at the new point.
    pub fn update_dyn(
        &self,
        prev: &DynParameters,
        new_point: StatePoint,
    ) -> ModelResult<DynParameters> {
        let (v_old, v_new, t) = (prev.point.volume, new_point.volume, new_point.temperature);
        let du = self.internal_energy_delta(v_old, v_new, t);
        let dcv = self.heat_cap_vol_delta(v_old, v_new, t);
        let dif = self.heat_cap_difference(v_new, t);
        let beta = self.beta(v_new, t);
        for (what, value) in [("internal energy delta", du), ("cv delta", dcv), ("cp - cv", dif)] {
            if !value.is_finite() {
                return Err(ModelError::calculation(format!(
                    "{}: non-finite {what} at v={v_new}, T={t}",
                    self.kind.name()
                )));
            }
        }
        let heat_cap_vol = prev.heat_cap_vol + dcv;
        Ok(DynParameters {
            heat_cap_vol,
            heat_cap_pres: heat_cap_vol + dif,
            internal_energy: prev.internal_energy + du,
            beta_kr: beta,
            point: new_point,
            setup: DynSetup::ALL,
        })
    }
}
