//! Mixture averaging rules producing effective critical constants.
//!
//! The default rule mixes critical volume, pressure, temperature and molar
//! mass linearly in mole fraction and the acentric factor geometrically
//! (`Π ωᵢ^xᵢ`). The Redlich-Kwong rule keeps the `a`/`b` coefficients of the
//! two-parameter equation consistent:
//!
//! `S1 = Σ xᵢ·√(T_Kᵢ^2.5 / P_Kᵢ)`, `S2 = Σ xᵢ·T_Kᵢ / P_Kᵢ`,
//! `T_K = S1^(4/3) / S2^(2/3)`, `P_K = S1^(4/3) / S2^(5/3)`.

use crate::error::{GasError, GasResult};
use crate::mixture::ComponentMix;
use crate::parameters::ConstParameters;
use serde::{Deserialize, Serialize};

const CONTEXT: &str = "mixture averaging";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AveragingRule {
    #[default]
    Linear,
    RedlichKwong,
}

/// Effective constant parameters of `mix` under `rule`.
pub fn average(mix: &ComponentMix, rule: AveragingRule) -> GasResult<ConstParameters> {
    average_inner(mix, rule).map_err(|err| GasError::mix(CONTEXT, err))
}

fn average_inner(mix: &ComponentMix, rule: AveragingRule) -> GasResult<ConstParameters> {
    if mix.is_empty() {
        return Err(GasError::init("empty gas mixture"));
    }

    let mut v_k = 0.0;
    let mut p_k = 0.0;
    let mut t_k = 0.0;
    let mut molar_mass = 0.0;
    let mut ln_acentric = 0.0;
    for c in mix.iter() {
        let x = c.fraction;
        let cp = &c.constants;
        if x <= 0.0 || cp.acentric() <= 0.0 {
            return Err(GasError::init(format!(
                "non-positive fraction ({x}) or acentric factor ({})",
                cp.acentric()
            )));
        }
        v_k += x * cp.v_k();
        p_k += x * cp.p_k();
        t_k += x * cp.t_k();
        molar_mass += x * cp.molar_mass();
        ln_acentric += x * cp.acentric().ln();
    }
    let acentric = ln_acentric.exp();

    if rule == AveragingRule::RedlichKwong {
        let (s1, s2) = mix.iter().fold((0.0, 0.0), |(s1, s2), c| {
            let cp = &c.constants;
            (
                s1 + c.fraction * (cp.t_k().powf(2.5) / cp.p_k()).sqrt(),
                s2 + c.fraction * cp.t_k() / cp.p_k(),
            )
        });
        let s1_pow = s1.powf(4.0 / 3.0);
        t_k = s1_pow / s2.powf(2.0 / 3.0);
        p_k = s1_pow / s2.powf(5.0 / 3.0);
    }

    ConstParameters::new(v_k, p_k, t_k, molar_mass, acentric)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mixture::Component;
    use crate::parameters::{DynParameters, StatePoint};
    use at_core::numeric::{Tolerances, nearly_equal};

    const TOL: Tolerances = Tolerances::new(1e-12, 1e-9);

    fn component(fraction: f64, constants: ConstParameters) -> Component {
        let point = StatePoint::new(0.1, 1e6, 300.0).unwrap();
        let dynamics = DynParameters::new(1700.0, 2200.0, 0.0, point).unwrap();
        Component::new(fraction, constants, dynamics)
    }

    fn methane() -> ConstParameters {
        ConstParameters::new(0.00617, 4.641e6, 190.66, 0.016043, 0.011).unwrap()
    }

    fn ethane() -> ConstParameters {
        ConstParameters::new(0.004926, 4.871e6, 305.33, 0.03007, 0.089).unwrap()
    }

    #[test]
    fn single_component_is_identity() {
        let mix = ComponentMix::new(vec![component(1.0, methane())]).unwrap();
        for rule in [AveragingRule::Linear, AveragingRule::RedlichKwong] {
            let avg = average(&mix, rule).unwrap();
            let m = methane();
            assert!(nearly_equal(avg.v_k(), m.v_k(), TOL), "{rule:?}");
            assert!(nearly_equal(avg.p_k(), m.p_k(), TOL), "{rule:?}");
            assert!(nearly_equal(avg.t_k(), m.t_k(), TOL), "{rule:?}");
            assert!(nearly_equal(avg.molar_mass(), m.molar_mass(), TOL), "{rule:?}");
            assert!(nearly_equal(avg.acentric(), m.acentric(), TOL), "{rule:?}");
        }
    }

    #[test]
    fn linear_rule_binary() {
        let mix =
            ComponentMix::new(vec![component(0.5, methane()), component(0.5, ethane())]).unwrap();
        let avg = average(&mix, AveragingRule::Linear).unwrap();
        assert!(nearly_equal(avg.t_k(), 0.5 * (190.66 + 305.33), TOL));
        assert!(nearly_equal(avg.molar_mass(), 0.5 * (0.016043 + 0.03007), TOL));
        // geometric mean of the acentric factors
        assert!(nearly_equal(avg.acentric(), (0.011_f64 * 0.089).sqrt(), TOL));
    }

    #[test]
    fn redlich_kwong_rule_stays_between_components() {
        let mix =
            ComponentMix::new(vec![component(0.7, methane()), component(0.3, ethane())]).unwrap();
        let avg = average(&mix, AveragingRule::RedlichKwong).unwrap();
        assert!(avg.t_k() > 190.66 && avg.t_k() < 305.33, "T_K = {}", avg.t_k());
        assert!(avg.p_k() > 4.5e6 && avg.p_k() < 5.0e6, "P_K = {}", avg.p_k());
    }

    #[test]
    fn non_positive_acentric_is_gas_mix_error() {
        let hydrogen = ConstParameters::new(0.0322, 1.296e6, 33.19, 0.002016, -0.216).unwrap();
        let mix =
            ComponentMix::new(vec![component(0.9, methane()), component(0.1, hydrogen)]).unwrap();
        let err = average(&mix, AveragingRule::Linear).unwrap_err();
        assert!(matches!(err, GasError::GasMix { .. }), "{err}");
    }
}
