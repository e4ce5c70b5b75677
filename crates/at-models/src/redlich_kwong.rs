//! Redlich-Kwong family: the two-parameter equation and the Soave variant.
//!
//! Both share `Ωa = 0.42748`, `Ωb = 0.08664`, `δ1 = 1`, `δ2 = 0` and the
//! critical compressibility `Zc = 1/3`. The two-parameter form folds the
//! temperature dependence into `α = (T_K/T)^0.5`; the Soave form uses
//! `α = (1 + m(1 − √Tr))²`.

use crate::eos::EosConstants;

pub const CONSTANTS: EosConstants = EosConstants {
    omega_a: 0.42748,
    omega_b: 0.08664,
    delta1: 1.0,
    delta2: 0.0,
    z_c: 1.0 / 3.0,
};

/// Soave slope `m(ω)`.
pub fn soave_kappa(acentric: f64) -> f64 {
    0.480 + 1.574 * acentric - 0.176 * acentric * acentric
}

/// Applicability of the two-parameter equation: `p/P_K < 0.5·T/T_K`.
pub fn is_applicable(reduced_pressure: f64, reduced_temperature: f64) -> bool {
    reduced_pressure < 0.5 * reduced_temperature
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eos::{CubicEos, EosKind};
    use at_gas::ConstParameters;

    fn methane() -> ConstParameters {
        ConstParameters::new(0.00617, 4.641e6, 190.66, 0.016043, 0.011).unwrap()
    }

    #[test]
    fn soave_slope_for_methane() {
        let m = soave_kappa(0.011);
        assert!((m - 0.4973).abs() < 1e-3, "m = {m}");
    }

    #[test]
    fn applicability_threshold() {
        assert!(is_applicable(0.4, 1.0));
        assert!(!is_applicable(0.5, 1.0));
        assert!(!is_applicable(1.2, 2.0));
    }

    #[test]
    fn two_parameter_coefficients() {
        let c = methane();
        let eos = CubicEos::new(EosKind::RedlichKwong, &c);
        let r = c.r();
        let a_classic = 0.42748 * r * r * c.t_k().powf(2.5) / c.p_k();
        // a·α(T) equals the classic temperature-dependent coefficient
        let t = 250.0;
        assert!((eos.attraction(t) - a_classic / t.sqrt()).abs() < 1e-9 * a_classic);
        assert!((eos.b() - 0.08664 * r * c.t_k() / c.p_k()).abs() < 1e-15);
    }

    #[test]
    fn soave_matches_two_parameter_at_critical_temperature() {
        let c = methane();
        let rk = CubicEos::new(EosKind::RedlichKwong, &c);
        let rks = CubicEos::new(EosKind::RedlichKwongSoave, &c);
        let t = c.t_k();
        assert!((rk.attraction(t) - rks.attraction(t)).abs() < 1e-12 * rk.attraction(t));
    }
}
