//! Natural gas properties by GOST 30319.3-2015 (AGA8-92DC based).
//!
//! Provides:
//! - `NgComponent`: the components the correlation knows about
//! - `NgComposition`: composition validated against the GOST table 2 limits
//! - `NgGost`: composition coefficients, reduced-density solver and derived
//!   properties (compressibility, heat capacities, speed of sound)
//!
//! The correlation is defined for p ∈ [0.1, 30] MPa and T ∈ [250, 350] K.

use crate::error::{GasError, GasResult};
use crate::ng_gost_tables::{
    EOS_TERM_COUNT, EOS_TERMS, FIRST_EXP_TERM, VIRIAL_TERM_COUNT, binary, characteristics,
    critical, ideal_heat_capacity,
};
use crate::parameters::ConstParameters;
use at_core::numeric::ensure_positive;
use at_core::units::{k, mpa, pa};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Gas constant used by the standard [kJ/(kmol·K)].
pub const GOST_GAS_CONSTANT: f64 = 8.314_51;

/// Thermochemical calorie [J].
const CALORIE: f64 = 4.184;

/// Reference temperature of the reduced temperature τ = T/Lt [K].
const LT: f64 = 1.0;

pub const MAX_DENSITY_ITERATIONS: usize = 3000;
const DENSITY_TOLERANCE: f64 = 1e-6;

/// Slack on the component limits.
const LIMIT_EPS: f64 = 1e-5;

/// Allowed deviation of the mole-fraction sum from 1.
const FRACTION_SUM_EPS: f64 = 1e-3;

/// Simpson intervals for the internal energy integral.
const ENERGY_INTEGRAL_STEPS: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NgComponent {
    Methane,
    Ethane,
    Propane,
    IsoButane,
    NButane,
    IsoPentane,
    NPentane,
    Hexane,
    Heptane,
    Octane,
    Nonane,
    Decane,
    Nitrogen,
    CarbonDioxide,
    Helium,
    Hydrogen,
    Oxygen,
    CarbonMonoxide,
    Water,
    HydrogenSulfide,
    Argon,
}

impl NgComponent {
    pub const ALL: [NgComponent; 21] = [
        NgComponent::Methane,
        NgComponent::Ethane,
        NgComponent::Propane,
        NgComponent::IsoButane,
        NgComponent::NButane,
        NgComponent::IsoPentane,
        NgComponent::NPentane,
        NgComponent::Hexane,
        NgComponent::Heptane,
        NgComponent::Octane,
        NgComponent::Nonane,
        NgComponent::Decane,
        NgComponent::Nitrogen,
        NgComponent::CarbonDioxide,
        NgComponent::Helium,
        NgComponent::Hydrogen,
        NgComponent::Oxygen,
        NgComponent::CarbonMonoxide,
        NgComponent::Water,
        NgComponent::HydrogenSulfide,
        NgComponent::Argon,
    ];

    pub fn name(self) -> &'static str {
        match self {
            NgComponent::Methane => "methane",
            NgComponent::Ethane => "ethane",
            NgComponent::Propane => "propane",
            NgComponent::IsoButane => "iso-butane",
            NgComponent::NButane => "n-butane",
            NgComponent::IsoPentane => "iso-pentane",
            NgComponent::NPentane => "n-pentane",
            NgComponent::Hexane => "hexane",
            NgComponent::Heptane => "heptane",
            NgComponent::Octane => "octane",
            NgComponent::Nonane => "nonane",
            NgComponent::Decane => "decane",
            NgComponent::Nitrogen => "nitrogen",
            NgComponent::CarbonDioxide => "carbon dioxide",
            NgComponent::Helium => "helium",
            NgComponent::Hydrogen => "hydrogen",
            NgComponent::Oxygen => "oxygen",
            NgComponent::CarbonMonoxide => "carbon monoxide",
            NgComponent::Water => "water",
            NgComponent::HydrogenSulfide => "hydrogen sulfide",
            NgComponent::Argon => "argon",
        }
    }

    /// Molar mass [kg/kmol].
    pub fn molar_mass(self) -> f64 {
        characteristics(self).molar_mass
    }
}

/// Groups the GOST table 2 limits are stated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LimitGroup {
    Single(NgComponent),
    Butanes,
    Pentanes,
    /// Octane to decane, only under the ISO 20765 extension.
    OtherAlkanes,
    Others,
}

impl LimitGroup {
    fn of(c: NgComponent, iso_20765: bool) -> Self {
        use NgComponent::*;
        match c {
            Methane | Ethane | Propane | Hexane | Nitrogen | CarbonDioxide | Helium | Hydrogen => {
                LimitGroup::Single(c)
            }
            IsoButane | NButane => LimitGroup::Butanes,
            IsoPentane | NPentane => LimitGroup::Pentanes,
            Octane | Nonane | Decane if iso_20765 => LimitGroup::OtherAlkanes,
            _ => LimitGroup::Others,
        }
    }

    /// Allowed molar fraction range.
    fn bounds(self) -> (f64, f64) {
        use NgComponent::*;
        match self {
            LimitGroup::Single(Methane) => (0.7, 0.99999),
            LimitGroup::Single(Ethane) => (0.0, 0.1),
            LimitGroup::Single(Propane) => (0.0, 0.035),
            LimitGroup::Single(Hexane) => (0.0, 0.001),
            LimitGroup::Single(Nitrogen) => (0.0, 0.2),
            LimitGroup::Single(CarbonDioxide) => (0.0, 0.2),
            LimitGroup::Single(Helium) => (0.0, 0.005),
            LimitGroup::Single(Hydrogen) => (0.0, 0.1),
            LimitGroup::Single(_) => (0.0, 0.0),
            LimitGroup::Butanes => (0.0, 0.015),
            LimitGroup::Pentanes => (0.0, 0.005),
            LimitGroup::OtherAlkanes => (0.0, 0.0005),
            LimitGroup::Others => (0.0, 0.0015),
        }
    }

    fn label(self) -> String {
        match self {
            LimitGroup::Single(c) => c.name().to_string(),
            LimitGroup::Butanes => "all butanes".to_string(),
            LimitGroup::Pentanes => "all pentanes".to_string(),
            LimitGroup::OtherAlkanes => "other alkanes".to_string(),
            LimitGroup::Others => "other components".to_string(),
        }
    }
}

/// Natural gas composition checked against the GOST 30319.3 limits.
#[derive(Debug, Clone, PartialEq)]
pub struct NgComposition {
    items: Vec<(NgComponent, f64)>,
}

impl NgComposition {
    pub fn new(items: Vec<(NgComponent, f64)>, iso_20765: bool) -> GasResult<Self> {
        if items.is_empty() {
            return Err(GasError::init("empty natural gas composition"));
        }
        let mut sum = 0.0;
        for (i, (c, x)) in items.iter().enumerate() {
            if !x.is_finite() || *x <= 0.0 {
                return Err(GasError::init(format!(
                    "mole fraction of {} must be positive, got {x}",
                    c.name()
                )));
            }
            if items[..i].iter().any(|(other, _)| other == c) {
                return Err(GasError::init(format!("{} listed twice", c.name())));
            }
            sum += x;
        }
        if (sum - 1.0).abs() > FRACTION_SUM_EPS {
            return Err(GasError::init(format!(
                "natural gas mole fractions sum to {sum}, expected 1"
            )));
        }

        let composition = Self { items };
        composition.check_limits(iso_20765)?;
        Ok(composition)
    }

    fn check_limits(&self, iso_20765: bool) -> GasResult<()> {
        let mut groups: Vec<(LimitGroup, f64)> = NgComponent::ALL
            .iter()
            .filter_map(|c| match LimitGroup::of(*c, iso_20765) {
                single @ LimitGroup::Single(_) => Some((single, 0.0)),
                _ => None,
            })
            .collect();
        groups.extend([
            (LimitGroup::Butanes, 0.0),
            (LimitGroup::Pentanes, 0.0),
            (LimitGroup::OtherAlkanes, 0.0),
            (LimitGroup::Others, 0.0),
        ]);
        for (c, x) in &self.items {
            let group = LimitGroup::of(*c, iso_20765);
            if let Some(slot) = groups.iter_mut().find(|(g, _)| *g == group) {
                slot.1 += x;
            }
        }
        for (group, x) in groups {
            let (min, max) = group.bounds();
            if x + LIMIT_EPS < min || x > max + LIMIT_EPS {
                return Err(GasError::init(format!(
                    "{} fraction {x} outside GOST 30319.3 limits [{min}, {max}]",
                    group.label()
                )));
            }
        }
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = (NgComponent, f64)> + '_ {
        self.items.iter().copied()
    }

    pub fn mole_fraction(&self, component: NgComponent) -> f64 {
        self.items
            .iter()
            .find(|(c, _)| *c == component)
            .map(|(_, x)| *x)
            .unwrap_or(0.0)
    }
}

/// Whether (p [Pa], T [K]) lies inside the envelope of the correlation.
pub fn is_within_limits(p: f64, t: f64) -> bool {
    let (p, t) = (pa(p), k(t));
    p >= mpa(0.1) && p <= mpa(30.0) && t >= k(250.0) && t <= k(350.0)
}

/// Pseudo-critical parameters of the mixture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PseudoCritical {
    /// [m³/kmol]
    pub molar_volume: f64,
    /// [Pa]
    pub pressure: f64,
    /// [K]
    pub temperature: f64,
    pub acentric: f64,
}

/// Residual terms of the compressibility expansion at (σ, τ).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResidualTerms {
    /// Z − 1.
    pub a0: f64,
    /// ∂(σZ)/∂σ − 1.
    pub a1: f64,
    /// ∂(τZ)/∂τ − 1.
    pub a2: f64,
    /// Residual part of cv/R.
    pub a3: f64,
}

/// Properties at one solved state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NgGostState {
    /// [m³/kg]
    pub volume: f64,
    /// [Pa]
    pub pressure: f64,
    /// [K]
    pub temperature: f64,
    /// Reduced density σ = K³·ρ.
    pub sigma: f64,
    pub z: f64,
    pub terms: ResidualTerms,
    /// Ideal-gas cp / R.
    pub cp0r: f64,
    /// [J/(kg·K)]
    pub heat_cap_vol: f64,
    /// [J/(kg·K)]
    pub heat_cap_pres: f64,
    pub isentropic_exponent: f64,
    /// [m/s]
    pub sound_speed: f64,
    /// Isobaric expansion coefficient [1/K].
    pub beta: f64,
}

/// GOST 30319.3 model of one natural gas composition.
#[derive(Debug, Clone)]
pub struct NgGost {
    composition: NgComposition,
    /// [kg/kmol]
    molar_mass: f64,
    /// K_x³ [m³/kmol]
    kx3: f64,
    /// Reference pressure p0m [MPa].
    p0m: f64,
    d: [f64; EOS_TERM_COUNT],
    u: [f64; EOS_TERM_COUNT],
    pseudo_critical: PseudoCritical,
}

impl NgGost {
    pub fn new(composition: NgComposition) -> GasResult<Self> {
        let items: Vec<(NgComponent, f64)> = composition.iter().collect();
        let molar_mass: f64 = items.iter().map(|(c, x)| x * c.molar_mass()).sum();

        // size and conformal parameters (fifth powers)
        let mut k_lin = 0.0;
        let mut e_lin = 0.0;
        let mut g = 0.0;
        let mut q = 0.0;
        let mut f = 0.0;
        for (c, x) in &items {
            let ch = characteristics(*c);
            k_lin += x * ch.size.powf(2.5);
            e_lin += x * ch.energy.powf(2.5);
            g += x * ch.orientation;
            q += x * ch.quadrupole;
            f += x * x * ch.high_temp;
        }
        let mut k5 = k_lin * k_lin;
        let mut u5 = e_lin * e_lin;
        for (i, (ci, xi)) in items.iter().enumerate() {
            let chi = characteristics(*ci);
            for (cj, xj) in items.iter().skip(i + 1) {
                let chj = characteristics(*cj);
                let bij = binary(*ci, *cj);
                k5 += 2.0 * xi * xj * (bij.size.powi(5) - 1.0) * (chi.size * chj.size).powf(2.5);
                u5 += 2.0
                    * xi
                    * xj
                    * (bij.conformal.powi(5) - 1.0)
                    * (chi.energy * chj.energy).powf(2.5);
                g += xi * xj * (bij.orientation - 1.0) * (chi.orientation + chj.orientation);
            }
        }
        let kx = ensure_positive(k5, "mixture size parameter")?.powf(0.2);
        let v = ensure_positive(u5, "mixture conformal parameter")?.powf(0.2);
        let kx3 = kx.powi(3);

        let mut bn = [0.0; VIRIAL_TERM_COUNT];
        let mut cn = [0.0; EOS_TERM_COUNT];
        for (n, term) in EOS_TERMS.iter().enumerate() {
            cn[n] = (g + 1.0 - term.g).powf(term.g)
                * (q * q + 1.0 - term.q).powf(term.q)
                * (f + 1.0 - term.f).powf(term.f)
                * v.powf(term.u);
            if n >= VIRIAL_TERM_COUNT {
                continue;
            }
            for (ci, xi) in &items {
                let chi = characteristics(*ci);
                for (cj, xj) in &items {
                    let chj = characteristics(*cj);
                    let bij = binary(*ci, *cj);
                    let eij = bij.energy * (chi.energy * chj.energy).sqrt();
                    let gij = bij.orientation * (chi.orientation + chj.orientation) / 2.0;
                    bn[n] += xi
                        * xj
                        * eij.powf(term.u)
                        * (chi.size * chj.size).powf(1.5)
                        * (gij + 1.0 - term.g).powf(term.g)
                        * (chi.quadrupole * chj.quadrupole + 1.0 - term.q).powf(term.q)
                        * ((chi.high_temp * chj.high_temp).sqrt() + 1.0 - term.f).powf(term.f)
                        * (chi.dipole * chj.dipole + 1.0 - term.s).powf(term.s)
                        * (chi.association * chj.association + 1.0 - term.w).powf(term.w);
                }
            }
        }

        let mut d = [0.0; EOS_TERM_COUNT];
        let mut u = [0.0; EOS_TERM_COUNT];
        for n in 0..EOS_TERM_COUNT {
            if n < FIRST_EXP_TERM {
                d[n] = bn[n] / kx3;
            } else if n < VIRIAL_TERM_COUNT {
                d[n] = bn[n] / kx3 - cn[n];
                u[n] = cn[n];
            } else {
                u[n] = cn[n];
            }
        }

        let pseudo_critical = pseudo_critical(&items)?;
        let p0m = 0.001 * GOST_GAS_CONSTANT * LT / kx3;
        debug!(
            molar_mass,
            kx, v, p0m, "natural gas composition coefficients computed"
        );

        Ok(Self {
            composition,
            molar_mass,
            kx3,
            p0m,
            d,
            u,
            pseudo_critical,
        })
    }

    pub fn composition(&self) -> &NgComposition {
        &self.composition
    }

    /// Molar mass [kg/kmol].
    pub fn molar_mass(&self) -> f64 {
        self.molar_mass
    }

    /// Specific gas constant [J/(kg·K)].
    pub fn specific_gas_constant(&self) -> f64 {
        1000.0 * GOST_GAS_CONSTANT / self.molar_mass
    }

    pub fn pseudo_critical(&self) -> PseudoCritical {
        self.pseudo_critical
    }

    /// Pseudo-critical point as constant parameters of the effective gas.
    pub fn const_parameters(&self) -> GasResult<ConstParameters> {
        let pc = self.pseudo_critical;
        ConstParameters::new(
            pc.molar_volume / self.molar_mass,
            pc.pressure,
            pc.temperature,
            self.molar_mass / 1000.0,
            pc.acentric,
        )
    }

    /// Solve for the state at pressure `p` [Pa] and temperature `t` [K].
    pub fn state(&self, p: f64, t: f64) -> GasResult<NgGostState> {
        self.check_envelope(p, t)?;
        let tau = t / LT;
        let pi = 1e-6 * p / self.p0m;
        let mut sigma = 0.001 * p * self.kx3 / (GOST_GAS_CONSTANT * t);
        for iteration in 0..MAX_DENSITY_ITERATIONS {
            let terms = self.residual_terms(sigma, tau);
            let pi_calc = sigma * tau * (1.0 + terms.a0);
            if ((pi_calc - pi) / pi).abs() < DENSITY_TOLERANCE {
                debug!(iteration, sigma, "reduced density converged");
                return Ok(self.evaluate(sigma, t, terms));
            }
            sigma += (pi / tau - (1.0 + terms.a0) * sigma) / (1.0 + terms.a1);
            if !sigma.is_finite() || sigma <= 0.0 {
                return Err(GasError::calculation(format!(
                    "reduced density diverged at p={p}, T={t}"
                )));
            }
        }
        Err(GasError::ConvergenceFailed {
            what: "natural gas reduced density",
            iterations: MAX_DENSITY_ITERATIONS,
        })
    }

    /// Evaluate the state at specific volume `v` [m³/kg] and temperature `t` [K].
    pub fn state_at_volume(&self, v: f64, t: f64) -> GasResult<NgGostState> {
        let v = ensure_positive(v, "volume")?;
        let t = ensure_positive(t, "temperature")?;
        let sigma = self.sigma(v);
        let state = self.evaluate(sigma, t, self.residual_terms(sigma, t / LT));
        self.check_envelope(state.pressure, t)?;
        Ok(state)
    }

    /// Change of specific internal energy [J/kg] along the isotherm `t`
    /// from `v_from` to `v_to`: `∫ R·T·(A2 − A0) d(ln v)`.
    pub fn internal_energy_delta(&self, v_from: f64, v_to: f64, t: f64) -> f64 {
        let (s0, s1) = (v_from.ln(), v_to.ln());
        let h = (s1 - s0) / ENERGY_INTEGRAL_STEPS as f64;
        let tau = t / LT;
        let integrand = |s: f64| {
            let terms = self.residual_terms(self.sigma(s.exp()), tau);
            terms.a2 - terms.a0
        };
        let mut sum = integrand(s0) + integrand(s1);
        for i in 1..ENERGY_INTEGRAL_STEPS {
            let weight = if i % 2 == 1 { 4.0 } else { 2.0 };
            sum += weight * integrand(s0 + i as f64 * h);
        }
        self.specific_gas_constant() * t * sum * h / 3.0
    }

    fn check_envelope(&self, p: f64, t: f64) -> GasResult<()> {
        if !is_within_limits(p, t) {
            if !(250.0..=350.0).contains(&t) {
                return Err(GasError::OutOfRange {
                    what: "natural gas temperature",
                    value: t,
                });
            }
            return Err(GasError::OutOfRange {
                what: "natural gas pressure",
                value: p,
            });
        }
        Ok(())
    }

    fn sigma(&self, v: f64) -> f64 {
        self.kx3 / (self.molar_mass * v)
    }

    /// Residual expansion at reduced density σ and reduced temperature τ.
    pub fn residual_terms(&self, sigma: f64, tau: f64) -> ResidualTerms {
        let mut out = ResidualTerms {
            a0: 0.0,
            a1: 0.0,
            a2: 0.0,
            a3: 0.0,
        };
        for (n, t) in EOS_TERMS.iter().enumerate() {
            let sk = sigma.powf(t.k);
            let ex = (-t.c * sk).exp();
            let base = t.a * sigma.powf(t.b) * tau.powf(-t.u);
            let (d, u) = (self.d[n], self.u[n]);
            let bk = t.b - t.c * t.k * sk;
            out.a0 += base * (t.b * d + bk * u * ex);
            out.a1 += base
                * ((t.b + 1.0) * t.b * d + (bk * (bk + 1.0) - t.c * t.k * t.k * sk) * u * ex);
            out.a2 += base * (1.0 - t.u) * (t.b * d + bk * u * ex);
            out.a3 += base * t.u * (1.0 - t.u) * (d + u * ex);
        }
        out
    }

    /// Ideal-gas isobaric heat capacity over R at `t` [K].
    pub fn cp0r(&self, t: f64) -> f64 {
        let sinh_term = |c: f64, d: f64| {
            if c == 0.0 {
                return 0.0;
            }
            let x = d / t;
            c * (x / x.sinh()).powi(2)
        };
        let cosh_term = |c: f64, d: f64| {
            if c == 0.0 {
                return 0.0;
            }
            let x = d / t;
            c * (x / x.cosh()).powi(2)
        };
        self.composition
            .iter()
            .map(|(c, x)| {
                let a = ideal_heat_capacity(c);
                let cp0 = a.b
                    + sinh_term(a.c, a.d)
                    + cosh_term(a.e, a.f)
                    + sinh_term(a.g, a.h)
                    + cosh_term(a.i, a.j);
                x * cp0 * CALORIE / GOST_GAS_CONSTANT
            })
            .sum()
    }

    fn evaluate(&self, sigma: f64, t: f64, terms: ResidualTerms) -> NgGostState {
        let tau = t / LT;
        let z = 1.0 + terms.a0;
        let cp0r = self.cp0r(t);
        let cv_r = cp0r - 1.0 + terms.a3;
        let dp_dt_term = (1.0 + terms.a2).powi(2) / (1.0 + terms.a1);
        let sound_term = 1.0 + terms.a1 + (1.0 + terms.a2).powi(2) / cv_r;
        let r = self.specific_gas_constant();
        NgGostState {
            volume: self.kx3 / (self.molar_mass * sigma),
            pressure: 1e6 * sigma * tau * z * self.p0m,
            temperature: t,
            sigma,
            z,
            terms,
            cp0r,
            heat_cap_vol: cv_r * r,
            heat_cap_pres: (cv_r + dp_dt_term) * r,
            isentropic_exponent: sound_term / z,
            sound_speed: (sound_term * r * t).sqrt(),
            beta: (1.0 + terms.a2) / (t * (1.0 + terms.a1)),
        }
    }
}

/// Pseudo-critical point from the component critical data:
/// `V_ij = (V_i^(1/3) + V_j^(1/3))³ / 8`, `V = Σ xᵢxⱼ·V_ij`,
/// `T = Σ xᵢxⱼ·V_ij·√(TᵢTⱼ) / V`, `P = R·T·(0.291 − 0.08·ω) / V`.
fn pseudo_critical(items: &[(NgComponent, f64)]) -> GasResult<PseudoCritical> {
    let mut volume = 0.0;
    let mut weighted_t = 0.0;
    let mut acentric = 0.0;
    for (ci, xi) in items {
        let cri = critical(*ci);
        let vi = ci.molar_mass() / cri.density;
        for (cj, xj) in items {
            let crj = critical(*cj);
            let vj = cj.molar_mass() / crj.density;
            let vij = 0.125 * (vi.cbrt() + vj.cbrt()).powi(3);
            volume += xi * xj * vij;
            weighted_t += xi * xj * vij * (cri.temperature * crj.temperature).sqrt();
        }
        acentric += xi * cri.acentric;
    }
    let molar_volume = ensure_positive(volume, "pseudo-critical volume")?;
    let temperature = weighted_t / molar_volume;
    let pressure = 1000.0 * GOST_GAS_CONSTANT * temperature * (0.291 - 0.08 * acentric) / molar_volume;
    Ok(PseudoCritical {
        molar_volume,
        pressure: ensure_positive(pressure, "pseudo-critical pressure")?,
        temperature,
        acentric,
    })
}
